//! The inventory levels resource.
//!
//! A level is the available quantity of one inventory item at one
//! location; the pair of ids identifies it, there is no level id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;

/// The available quantity of an inventory item at a location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryLevel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<i64>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

/// Query options for listing inventory levels. At least one of the id
/// filters is required by the API.
#[derive(Clone, Debug, Default, Serialize)]
pub struct InventoryLevelListOptions {
    /// Comma-separated inventory item ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_ids: Option<String>,
    /// Comma-separated location ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct AdjustRequest {
    inventory_item_id: u64,
    location_id: u64,
    available_adjustment: i64,
}

#[derive(Serialize)]
struct SetRequest {
    inventory_item_id: u64,
    location_id: u64,
    available: i64,
}

#[derive(Serialize)]
struct ConnectRequest {
    inventory_item_id: u64,
    location_id: u64,
}

#[derive(Serialize)]
struct DeleteOptions {
    inventory_item_id: u64,
    location_id: u64,
}

#[derive(Deserialize)]
struct InventoryLevelEnvelope {
    inventory_level: InventoryLevel,
}

#[derive(Deserialize)]
struct InventoryLevelsEnvelope {
    inventory_levels: Vec<InventoryLevel>,
}

/// Operations on `inventory_levels.json` endpoints.
pub struct InventoryLevelService<'a> {
    pub(crate) client: &'a Client,
}

impl InventoryLevelService<'_> {
    pub async fn list<Q>(&self, options: Option<&Q>) -> Result<Vec<InventoryLevel>, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: InventoryLevelsEnvelope =
            self.client.get("inventory_levels.json", options).await?;
        Ok(envelope.inventory_levels)
    }

    /// Adjusts the available quantity by a signed delta.
    pub async fn adjust(
        &self,
        inventory_item_id: u64,
        location_id: u64,
        available_adjustment: i64,
    ) -> Result<InventoryLevel, Error> {
        let envelope: InventoryLevelEnvelope = self
            .client
            .post(
                "inventory_levels/adjust.json",
                Some(&AdjustRequest {
                    inventory_item_id,
                    location_id,
                    available_adjustment,
                }),
            )
            .await?;
        Ok(envelope.inventory_level)
    }

    /// Sets the available quantity to an absolute value.
    pub async fn set(
        &self,
        inventory_item_id: u64,
        location_id: u64,
        available: i64,
    ) -> Result<InventoryLevel, Error> {
        let envelope: InventoryLevelEnvelope = self
            .client
            .post(
                "inventory_levels/set.json",
                Some(&SetRequest {
                    inventory_item_id,
                    location_id,
                    available,
                }),
            )
            .await?;
        Ok(envelope.inventory_level)
    }

    /// Connects an inventory item to a location, creating a level of zero.
    pub async fn connect(
        &self,
        inventory_item_id: u64,
        location_id: u64,
    ) -> Result<InventoryLevel, Error> {
        let envelope: InventoryLevelEnvelope = self
            .client
            .post(
                "inventory_levels/connect.json",
                Some(&ConnectRequest {
                    inventory_item_id,
                    location_id,
                }),
            )
            .await?;
        Ok(envelope.inventory_level)
    }

    /// Removes an inventory level, disconnecting the item from the location.
    pub async fn delete(&self, inventory_item_id: u64, location_id: u64) -> Result<(), Error> {
        self.client
            .delete(
                "inventory_levels.json",
                Some(&DeleteOptions {
                    inventory_item_id,
                    location_id,
                }),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_request_shape() {
        let encoded = serde_json::to_value(AdjustRequest {
            inventory_item_id: 808_950_810,
            location_id: 905_684_977,
            available_adjustment: -5,
        })
        .unwrap();

        assert_eq!(
            encoded,
            serde_json::json!({
                "inventory_item_id": 808_950_810,
                "location_id": 905_684_977,
                "available_adjustment": -5
            })
        );
    }

    #[test]
    fn test_levels_envelope_decodes() {
        let body = r#"{"inventory_levels":[{"inventory_item_id":1,"location_id":2,"available":27}]}"#;
        let envelope: InventoryLevelsEnvelope = serde_json::from_str(body).unwrap();

        assert_eq!(envelope.inventory_levels[0].available, Some(27));
    }
}
