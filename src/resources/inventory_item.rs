//! The inventory items resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;

/// The inventory tracking record behind a product variant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Unit cost as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code_of_origin: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

/// Query options for listing inventory items.
#[derive(Clone, Debug, Default, Serialize)]
pub struct InventoryItemListOptions {
    /// Comma-separated inventory item ids. Required by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Deserialize)]
struct InventoryItemEnvelope {
    inventory_item: InventoryItem,
}

#[derive(Deserialize)]
struct InventoryItemsEnvelope {
    inventory_items: Vec<InventoryItem>,
}

#[derive(Serialize)]
struct InventoryItemRequest<'a> {
    inventory_item: &'a InventoryItem,
}

/// Operations on `inventory_items.json` endpoints.
pub struct InventoryItemService<'a> {
    pub(crate) client: &'a Client,
}

impl InventoryItemService<'_> {
    pub async fn list<Q>(&self, options: Option<&Q>) -> Result<Vec<InventoryItem>, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: InventoryItemsEnvelope =
            self.client.get("inventory_items.json", options).await?;
        Ok(envelope.inventory_items)
    }

    pub async fn get(&self, id: u64) -> Result<InventoryItem, Error> {
        let envelope: InventoryItemEnvelope = self
            .client
            .get(&format!("inventory_items/{id}.json"), None::<&()>)
            .await?;
        Ok(envelope.inventory_item)
    }

    pub async fn update(&self, inventory_item: &InventoryItem) -> Result<InventoryItem, Error> {
        let id = inventory_item.id.ok_or_else(|| {
            Error::Config("cannot update an inventory item without an id".to_string())
        })?;
        let envelope: InventoryItemEnvelope = self
            .client
            .put(
                &format!("inventory_items/{id}.json"),
                &InventoryItemRequest { inventory_item },
            )
            .await?;
        Ok(envelope.inventory_item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_item_envelope_decodes() {
        let body = r#"{"inventory_item":{"id":808950810,"sku":"IPOD2008PINK","tracked":true,"cost":"25.00"}}"#;
        let envelope: InventoryItemEnvelope = serde_json::from_str(body).unwrap();

        assert_eq!(envelope.inventory_item.sku.as_deref(), Some("IPOD2008PINK"));
        assert_eq!(envelope.inventory_item.cost.as_deref(), Some("25.00"));
    }
}
