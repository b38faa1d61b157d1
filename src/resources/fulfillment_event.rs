//! The fulfillment events resource, scoped to one fulfillment of one order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;

/// A tracking event on a fulfillment's timeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FulfillmentEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// `confirmed`, `in_transit`, `out_for_delivery`, `delivered`,
    /// `failure`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub happened_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing)]
    pub order_id: Option<u64>,
    #[serde(skip_serializing)]
    pub fulfillment_id: Option<u64>,
    #[serde(skip_serializing)]
    pub shop_id: Option<u64>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct FulfillmentEventEnvelope {
    fulfillment_event: FulfillmentEvent,
}

#[derive(Deserialize)]
struct FulfillmentEventsEnvelope {
    fulfillment_events: Vec<FulfillmentEvent>,
}

// Creation wraps the event under "event"; responses come back under
// "fulfillment_event"
#[derive(Serialize)]
struct FulfillmentEventRequest<'a> {
    event: &'a FulfillmentEvent,
}

/// Operations on `orders/{order_id}/fulfillments/{fulfillment_id}/events`
/// endpoints.
pub struct FulfillmentEventService<'a> {
    pub(crate) client: &'a Client,
    pub(crate) order_id: u64,
    pub(crate) fulfillment_id: u64,
}

impl FulfillmentEventService<'_> {
    fn path(&self, suffix: &str) -> String {
        format!(
            "orders/{}/fulfillments/{}/events{suffix}",
            self.order_id, self.fulfillment_id
        )
    }

    pub async fn list(&self) -> Result<Vec<FulfillmentEvent>, Error> {
        let envelope: FulfillmentEventsEnvelope =
            self.client.get(&self.path(".json"), None::<&()>).await?;
        Ok(envelope.fulfillment_events)
    }

    pub async fn get(&self, event_id: u64) -> Result<FulfillmentEvent, Error> {
        let envelope: FulfillmentEventEnvelope = self
            .client
            .get(&self.path(&format!("/{event_id}.json")), None::<&()>)
            .await?;
        Ok(envelope.fulfillment_event)
    }

    pub async fn create(&self, event: &FulfillmentEvent) -> Result<FulfillmentEvent, Error> {
        let envelope: FulfillmentEventEnvelope = self
            .client
            .post(&self.path(".json"), Some(&FulfillmentEventRequest { event }))
            .await?;
        Ok(envelope.fulfillment_event)
    }

    pub async fn delete(&self, event_id: u64) -> Result<(), Error> {
        self.client
            .delete(&self.path(&format!("/{event_id}.json")), None::<&()>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Client;

    #[test]
    fn test_paths_are_scoped_to_order_and_fulfillment() {
        let client = Client::builder("my-shop", "token").build().unwrap();
        let service = client.fulfillment_events(450_789_469, 255_858_046);

        assert_eq!(
            service.path(".json"),
            "orders/450789469/fulfillments/255858046/events.json"
        );
        assert_eq!(
            service.path("/944956392.json"),
            "orders/450789469/fulfillments/255858046/events/944956392.json"
        );
    }

    #[test]
    fn test_create_wraps_under_the_event_key() {
        let event = FulfillmentEvent {
            status: Some("in_transit".to_string()),
            ..Default::default()
        };
        let encoded = serde_json::to_value(FulfillmentEventRequest { event: &event }).unwrap();
        assert_eq!(encoded, serde_json::json!({"event": {"status": "in_transit"}}));
    }

    #[test]
    fn test_response_decodes_from_the_fulfillment_event_key() {
        let body = r#"{"fulfillment_event":{"id":944956392,"status":"delivered","order_id":450789469}}"#;
        let envelope: FulfillmentEventEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.fulfillment_event.status.as_deref(), Some("delivered"));
    }
}
