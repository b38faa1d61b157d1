//! The assigned fulfillment orders resource. Read-only.
//!
//! Lists the fulfillment orders assigned to the calling app's fulfillment
//! service locations, shop-wide. The wire shape is the same fulfillment
//! order object, returned under the `fulfillment_orders` key.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::resources::fulfillment_order::FulfillmentOrder;

/// Query options for listing assigned fulfillment orders.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AssignedFulfillmentOrderListOptions {
    /// `cancellation_requested`, `fulfillment_requested` or
    /// `fulfillment_accepted`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_status: Option<String>,
    /// Comma-separated location ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<String>,
}

#[derive(Deserialize)]
struct AssignedFulfillmentOrdersEnvelope {
    fulfillment_orders: Vec<FulfillmentOrder>,
}

/// Operations on the `assigned_fulfillment_orders.json` endpoint.
pub struct AssignedFulfillmentOrderService<'a> {
    pub(crate) client: &'a Client,
}

impl AssignedFulfillmentOrderService<'_> {
    /// Lists the fulfillment orders assigned to the app across the shop.
    pub async fn list<Q>(&self, options: Option<&Q>) -> Result<Vec<FulfillmentOrder>, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: AssignedFulfillmentOrdersEnvelope = self
            .client
            .get("assigned_fulfillment_orders.json", options)
            .await?;
        Ok(envelope.fulfillment_orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_serialize_assignment_status() {
        let options = AssignedFulfillmentOrderListOptions {
            assignment_status: Some("fulfillment_requested".to_string()),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&options).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({"assignment_status": "fulfillment_requested"})
        );
    }

    #[test]
    fn test_envelope_uses_the_fulfillment_orders_key() {
        let body = r#"{"fulfillment_orders":[{"id":1046000780,"request_status":"unsubmitted"}]}"#;
        let envelope: AssignedFulfillmentOrdersEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(
            envelope.fulfillment_orders[0].request_status.as_deref(),
            Some("unsubmitted")
        );
    }
}
