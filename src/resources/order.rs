//! The orders resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::pagination::Pagination;

/// An order placed in the shop.
///
/// Monetary amounts are kept as the decimal strings the API returns; the
/// crate does not interpret them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
    #[serde(skip_serializing)]
    pub name: Option<String>,
    #[serde(skip_serializing)]
    pub order_number: Option<u64>,
    #[serde(skip_serializing)]
    pub total_price: Option<String>,
    #[serde(skip_serializing)]
    pub subtotal_price: Option<String>,
    #[serde(skip_serializing)]
    pub total_tax: Option<String>,
    #[serde(skip_serializing)]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub cancel_reason: Option<String>,
    #[serde(skip_serializing)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

/// One line of an order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

/// Query options for listing orders.
#[derive(Clone, Debug, Default, Serialize)]
pub struct OrderListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    /// Comma-separated order ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<String>,
    /// `open`, `closed`, `cancelled` or `any`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Body of an order cancellation request. All fields optional.
#[derive(Clone, Debug, Default, Serialize)]
pub struct OrderCancelOptions {
    /// `customer`, `inventory`, `fraud`, `declined` or `other`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Whether to send a cancellation email to the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,
}

#[derive(Deserialize)]
struct OrderEnvelope {
    order: Order,
}

#[derive(Deserialize)]
struct OrdersEnvelope {
    orders: Vec<Order>,
}

#[derive(Serialize)]
struct OrderRequest<'a> {
    order: &'a Order,
}

/// Operations on `orders.json` endpoints.
pub struct OrderService<'a> {
    pub(crate) client: &'a Client,
}

impl OrderService<'_> {
    pub async fn list<Q>(&self, options: Option<&Q>) -> Result<Vec<Order>, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: OrdersEnvelope = self.client.get("orders.json", options).await?;
        Ok(envelope.orders)
    }

    pub async fn list_with_pagination<Q>(
        &self,
        options: Option<&Q>,
    ) -> Result<(Vec<Order>, Pagination), Error>
    where
        Q: Serialize + ?Sized,
    {
        let (envelope, pagination): (OrdersEnvelope, _) = self
            .client
            .get_with_pagination("orders.json", options)
            .await?;
        Ok((envelope.orders, pagination))
    }

    pub async fn count<Q>(&self, options: Option<&Q>) -> Result<u64, Error>
    where
        Q: Serialize + ?Sized,
    {
        self.client.count("orders/count.json", options).await
    }

    pub async fn get<Q>(&self, id: u64, options: Option<&Q>) -> Result<Order, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: OrderEnvelope = self
            .client
            .get(&format!("orders/{id}.json"), options)
            .await?;
        Ok(envelope.order)
    }

    pub async fn create(&self, order: &Order) -> Result<Order, Error> {
        let envelope: OrderEnvelope = self
            .client
            .post("orders.json", Some(&OrderRequest { order }))
            .await?;
        Ok(envelope.order)
    }

    pub async fn update(&self, order: &Order) -> Result<Order, Error> {
        let id = order.id.ok_or_else(|| {
            Error::Config("cannot update an order without an id".to_string())
        })?;
        let envelope: OrderEnvelope = self
            .client
            .put(&format!("orders/{id}.json"), &OrderRequest { order })
            .await?;
        Ok(envelope.order)
    }

    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        self.client
            .delete(&format!("orders/{id}.json"), None::<&()>)
            .await
    }

    /// Cancels an order.
    pub async fn cancel(
        &self,
        id: u64,
        options: Option<&OrderCancelOptions>,
    ) -> Result<Order, Error> {
        let envelope: OrderEnvelope = self
            .client
            .post(&format!("orders/{id}/cancel.json"), options)
            .await?;
        Ok(envelope.order)
    }

    /// Closes (archives) an order.
    pub async fn close(&self, id: u64) -> Result<Order, Error> {
        let envelope: OrderEnvelope = self
            .client
            .post(&format!("orders/{id}/close.json"), None::<&()>)
            .await?;
        Ok(envelope.order)
    }

    /// Re-opens a closed order.
    pub async fn open(&self, id: u64) -> Result<Order, Error> {
        let envelope: OrderEnvelope = self
            .client
            .post(&format!("orders/{id}/open.json"), None::<&()>)
            .await?;
        Ok(envelope.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_envelope_decodes_line_items() {
        let body = r##"{
            "order": {
                "id": 450789469,
                "name": "#1001",
                "total_price": "409.94",
                "financial_status": "paid",
                "line_items": [
                    {"id": 466157049, "title": "IPod Nano - 8gb", "quantity": 1, "price": "199.00"}
                ]
            }
        }"##;
        let envelope: OrderEnvelope = serde_json::from_str(body).unwrap();

        let order = envelope.order;
        assert_eq!(order.id, Some(450_789_469));
        assert_eq!(order.name.as_deref(), Some("#1001"));
        assert_eq!(order.total_price.as_deref(), Some("409.94"));
        let items = order.line_items.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, Some(1));
    }

    #[test]
    fn test_cancel_options_serialize() {
        let options = OrderCancelOptions {
            reason: Some("customer".to_string()),
            email: Some(true),
        };
        let encoded = serde_json::to_value(&options).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({"reason": "customer", "email": true})
        );
    }

    #[test]
    fn test_list_options_serialize_status_filters() {
        let options = OrderListOptions {
            status: Some("any".to_string()),
            financial_status: Some("paid".to_string()),
            limit: Some(250),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&options).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({"status": "any", "financial_status": "paid", "limit": 250})
        );
    }
}
