//! The fulfillment orders resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;

/// A unit of fulfillment work assigned to one location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FulfillmentOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_location_id: Option<u64>,
    /// Request lifecycle: `unsubmitted`, `submitted`, `accepted`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_status: Option<String>,
    /// Fulfillment state: `open`, `in_progress`, `closed`, `on_hold`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfill_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<FulfillmentOrderLineItem>>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One line of a fulfillment order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FulfillmentOrderLineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_item_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillable_quantity: Option<u32>,
}

/// One line item and quantity, used when moving a fulfillment order or
/// submitting a fulfillment request for part of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentOrderLineItemQuantity {
    pub id: u64,
    pub quantity: u32,
}

/// Body of a move request. Omitting `line_items` moves every line.
#[derive(Clone, Debug, Serialize)]
pub struct FulfillmentOrderMoveRequest {
    pub new_location_id: u64,
    #[serde(
        rename = "fulfillment_order_line_items",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_items: Option<Vec<FulfillmentOrderLineItemQuantity>>,
}

/// Result of moving a fulfillment order to a new location.
#[derive(Clone, Debug, Deserialize)]
pub struct FulfillmentOrderMove {
    /// The original fulfillment order, now closed or partially moved.
    pub original_fulfillment_order: FulfillmentOrder,
    /// The replacement created at the new location.
    pub moved_fulfillment_order: FulfillmentOrder,
}

#[derive(Serialize)]
struct MoveRequest<'a> {
    fulfillment_order: &'a FulfillmentOrderMoveRequest,
}

#[derive(Serialize)]
struct SetDeadlineRequest<'a> {
    fulfillment_order_ids: &'a [u64],
    fulfillment_deadline: DateTime<Utc>,
}

#[derive(Serialize)]
struct CloseRequest<'a> {
    fulfillment_order: CloseMessage<'a>,
}

#[derive(Serialize)]
struct CloseMessage<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

#[derive(Serialize)]
struct HoldRequest<'a> {
    fulfillment_hold: HoldReason<'a>,
}

#[derive(Serialize)]
struct HoldReason<'a> {
    reason: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason_notes: Option<&'a str>,
}

#[derive(Deserialize)]
struct FulfillmentOrderEnvelope {
    fulfillment_order: FulfillmentOrder,
}

#[derive(Deserialize)]
struct FulfillmentOrdersEnvelope {
    fulfillment_orders: Vec<FulfillmentOrder>,
}

/// Operations on `fulfillment_orders` endpoints.
pub struct FulfillmentOrderService<'a> {
    pub(crate) client: &'a Client,
}

impl FulfillmentOrderService<'_> {
    /// Lists the fulfillment orders of one order.
    pub async fn list<Q>(
        &self,
        order_id: u64,
        options: Option<&Q>,
    ) -> Result<Vec<FulfillmentOrder>, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: FulfillmentOrdersEnvelope = self
            .client
            .get(&format!("orders/{order_id}/fulfillment_orders.json"), options)
            .await?;
        Ok(envelope.fulfillment_orders)
    }

    pub async fn get(&self, id: u64) -> Result<FulfillmentOrder, Error> {
        let envelope: FulfillmentOrderEnvelope = self
            .client
            .get(&format!("fulfillment_orders/{id}.json"), None::<&()>)
            .await?;
        Ok(envelope.fulfillment_order)
    }

    /// Cancels a fulfillment order.
    pub async fn cancel(&self, id: u64) -> Result<FulfillmentOrder, Error> {
        let envelope: FulfillmentOrderEnvelope = self
            .client
            .post(&format!("fulfillment_orders/{id}/cancel.json"), None::<&()>)
            .await?;
        Ok(envelope.fulfillment_order)
    }

    /// Marks an in-progress fulfillment order incomplete and closes it.
    pub async fn close(
        &self,
        id: u64,
        message: Option<&str>,
    ) -> Result<FulfillmentOrder, Error> {
        let envelope: FulfillmentOrderEnvelope = self
            .client
            .post(
                &format!("fulfillment_orders/{id}/close.json"),
                Some(&CloseRequest {
                    fulfillment_order: CloseMessage { message },
                }),
            )
            .await?;
        Ok(envelope.fulfillment_order)
    }

    /// Transitions a scheduled fulfillment order to open.
    pub async fn open(&self, id: u64) -> Result<FulfillmentOrder, Error> {
        let envelope: FulfillmentOrderEnvelope = self
            .client
            .post(&format!("fulfillment_orders/{id}/open.json"), None::<&()>)
            .await?;
        Ok(envelope.fulfillment_order)
    }

    /// Places a fulfillment order on hold.
    pub async fn hold(
        &self,
        id: u64,
        reason: &str,
        reason_notes: Option<&str>,
    ) -> Result<FulfillmentOrder, Error> {
        let envelope: FulfillmentOrderEnvelope = self
            .client
            .post(
                &format!("fulfillment_orders/{id}/hold.json"),
                Some(&HoldRequest {
                    fulfillment_hold: HoldReason {
                        reason,
                        reason_notes,
                    },
                }),
            )
            .await?;
        Ok(envelope.fulfillment_order)
    }

    /// Releases the hold on a fulfillment order.
    pub async fn release_hold(&self, id: u64) -> Result<FulfillmentOrder, Error> {
        let envelope: FulfillmentOrderEnvelope = self
            .client
            .post(
                &format!("fulfillment_orders/{id}/release_hold.json"),
                None::<&()>,
            )
            .await?;
        Ok(envelope.fulfillment_order)
    }

    /// Reschedules the `fulfill_at` time of a scheduled fulfillment order.
    pub async fn reschedule(&self, id: u64) -> Result<FulfillmentOrder, Error> {
        let envelope: FulfillmentOrderEnvelope = self
            .client
            .post(
                &format!("fulfillment_orders/{id}/reschedule.json"),
                None::<&()>,
            )
            .await?;
        Ok(envelope.fulfillment_order)
    }

    /// Sets the fulfillment deadline on a batch of fulfillment orders.
    pub async fn set_deadline(
        &self,
        ids: &[u64],
        deadline: DateTime<Utc>,
    ) -> Result<(), Error> {
        self.client
            .post_no_content(
                "fulfillment_orders/set_fulfillment_orders_deadline.json",
                Some(&SetDeadlineRequest {
                    fulfillment_order_ids: ids,
                    fulfillment_deadline: deadline,
                }),
            )
            .await
    }

    /// Moves a fulfillment order, or part of it, to a new location.
    pub async fn move_to(
        &self,
        id: u64,
        request: &FulfillmentOrderMoveRequest,
    ) -> Result<FulfillmentOrderMove, Error> {
        self.client
            .post(
                &format!("fulfillment_orders/{id}/move.json"),
                Some(&MoveRequest {
                    fulfillment_order: request,
                }),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_request_shape() {
        let encoded = serde_json::to_value(HoldRequest {
            fulfillment_hold: HoldReason {
                reason: "inventory_out_of_stock",
                reason_notes: Some("restock due next week"),
            },
        })
        .unwrap();

        assert_eq!(
            encoded,
            serde_json::json!({
                "fulfillment_hold": {
                    "reason": "inventory_out_of_stock",
                    "reason_notes": "restock due next week"
                }
            })
        );
    }

    #[test]
    fn test_close_request_omits_absent_message() {
        let encoded = serde_json::to_value(CloseRequest {
            fulfillment_order: CloseMessage { message: None },
        })
        .unwrap();

        assert_eq!(encoded, serde_json::json!({"fulfillment_order": {}}));
    }

    #[test]
    fn test_move_request_shape() {
        let encoded = serde_json::to_value(MoveRequest {
            fulfillment_order: &FulfillmentOrderMoveRequest {
                new_location_id: 905_684_977,
                line_items: Some(vec![FulfillmentOrderLineItemQuantity { id: 1, quantity: 2 }]),
            },
        })
        .unwrap();

        assert_eq!(
            encoded,
            serde_json::json!({
                "fulfillment_order": {
                    "new_location_id": 905_684_977,
                    "fulfillment_order_line_items": [{"id": 1, "quantity": 2}]
                }
            })
        );
    }

    #[test]
    fn test_set_deadline_request_shape() {
        let deadline: DateTime<Utc> = "2024-06-01T00:00:00Z".parse().unwrap();
        let encoded = serde_json::to_value(SetDeadlineRequest {
            fulfillment_order_ids: &[1, 2],
            fulfillment_deadline: deadline,
        })
        .unwrap();

        assert_eq!(
            encoded,
            serde_json::json!({
                "fulfillment_order_ids": [1, 2],
                "fulfillment_deadline": "2024-06-01T00:00:00Z"
            })
        );
    }

    #[test]
    fn test_fulfillment_orders_envelope_decodes() {
        let body = r#"{
            "fulfillment_orders": [
                {"id": 1046000777, "order_id": 450789469, "status": "open",
                 "line_items": [{"id": 1, "quantity": 2, "fulfillable_quantity": 2}]}
            ]
        }"#;
        let envelope: FulfillmentOrdersEnvelope = serde_json::from_str(body).unwrap();

        let fo = &envelope.fulfillment_orders[0];
        assert_eq!(fo.status.as_deref(), Some("open"));
        assert_eq!(fo.line_items.as_ref().unwrap()[0].quantity, Some(2));
    }
}
