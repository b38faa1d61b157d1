//! The fulfillment requests resource.
//!
//! Fulfillment requests route a fulfillment order to its fulfillment
//! service: the merchant sends the request, the service accepts or
//! rejects it.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::resources::fulfillment_order::{FulfillmentOrder, FulfillmentOrderLineItemQuantity};

/// Body of a send/accept/reject call. All fields optional; omitting
/// `fulfillment_order_line_items` on send requests the whole order.
#[derive(Clone, Debug, Default, Serialize)]
pub struct FulfillmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Rejection reason, e.g. `inventory_out_of_stock`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_order_line_items: Option<Vec<FulfillmentOrderLineItemQuantity>>,
}

#[derive(Serialize)]
struct FulfillmentRequestBody<'a> {
    fulfillment_request: &'a FulfillmentRequest,
}

// Sending returns the original order; accept/reject return the updated one
#[derive(Deserialize)]
struct SentEnvelope {
    original_fulfillment_order: FulfillmentOrder,
}

#[derive(Deserialize)]
struct DecisionEnvelope {
    fulfillment_order: FulfillmentOrder,
}

/// Operations on `fulfillment_orders/{id}/fulfillment_request` endpoints.
pub struct FulfillmentRequestService<'a> {
    pub(crate) client: &'a Client,
}

impl FulfillmentRequestService<'_> {
    /// Sends a fulfillment request to the fulfillment service of a
    /// fulfillment order.
    pub async fn send(
        &self,
        fulfillment_order_id: u64,
        request: &FulfillmentRequest,
    ) -> Result<FulfillmentOrder, Error> {
        let envelope: SentEnvelope = self
            .client
            .post(
                &format!("fulfillment_orders/{fulfillment_order_id}/fulfillment_request.json"),
                Some(&FulfillmentRequestBody {
                    fulfillment_request: request,
                }),
            )
            .await?;
        Ok(envelope.original_fulfillment_order)
    }

    /// Accepts a pending fulfillment request.
    pub async fn accept(
        &self,
        fulfillment_order_id: u64,
        request: &FulfillmentRequest,
    ) -> Result<FulfillmentOrder, Error> {
        let envelope: DecisionEnvelope = self
            .client
            .post(
                &format!(
                    "fulfillment_orders/{fulfillment_order_id}/fulfillment_request/accept.json"
                ),
                Some(&FulfillmentRequestBody {
                    fulfillment_request: request,
                }),
            )
            .await?;
        Ok(envelope.fulfillment_order)
    }

    /// Rejects a pending fulfillment request.
    pub async fn reject(
        &self,
        fulfillment_order_id: u64,
        request: &FulfillmentRequest,
    ) -> Result<FulfillmentOrder, Error> {
        let envelope: DecisionEnvelope = self
            .client
            .post(
                &format!(
                    "fulfillment_orders/{fulfillment_order_id}/fulfillment_request/reject.json"
                ),
                Some(&FulfillmentRequestBody {
                    fulfillment_request: request,
                }),
            )
            .await?;
        Ok(envelope.fulfillment_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_wraps_under_fulfillment_request() {
        let request = FulfillmentRequest {
            message: Some("Fulfill as soon as possible".to_string()),
            fulfillment_order_line_items: Some(vec![FulfillmentOrderLineItemQuantity {
                id: 1,
                quantity: 1,
            }]),
            ..Default::default()
        };
        let encoded = serde_json::to_value(FulfillmentRequestBody {
            fulfillment_request: &request,
        })
        .unwrap();

        assert_eq!(
            encoded,
            serde_json::json!({
                "fulfillment_request": {
                    "message": "Fulfill as soon as possible",
                    "fulfillment_order_line_items": [{"id": 1, "quantity": 1}]
                }
            })
        );
    }

    #[test]
    fn test_sent_envelope_decodes_the_original_order() {
        let body = r#"{"original_fulfillment_order":{"id":1046000790,"request_status":"submitted"}}"#;
        let envelope: SentEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(
            envelope.original_fulfillment_order.request_status.as_deref(),
            Some("submitted")
        );
    }
}
