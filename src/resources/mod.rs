//! Typed per-resource services.
//!
//! Each service borrows the [`Client`] and wraps one family of endpoints
//! with typed request and response envelopes. Services are obtained from
//! accessor methods on the client, e.g. [`Client::pages`], and are free to
//! construct.
//!
//! List and get methods accept any `Serialize` options value. Pass a
//! [`ListOptions`], a resource-specific options struct, or the
//! [`PageCursor`](crate::pagination::PageCursor) from a previous page.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::Client;

pub mod assigned_fulfillment_order;
pub mod blog;
pub mod collection;
pub mod fulfillment_event;
pub mod fulfillment_order;
pub mod fulfillment_request;
pub mod inventory_item;
pub mod inventory_level;
pub mod location;
pub mod metafield;
pub mod order;
pub mod page;
pub mod script_tag;
pub mod shop;
pub mod transaction;
pub mod usage_charge;

/// Query options shared by most list endpoints.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    /// Comma-separated field names to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

/// Query options shared by count endpoints.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CountOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

impl Client {
    /// The orders service.
    #[must_use]
    pub const fn orders(&self) -> order::OrderService<'_> {
        order::OrderService { client: self }
    }

    /// The pages service.
    #[must_use]
    pub const fn pages(&self) -> page::PageService<'_> {
        page::PageService { client: self }
    }

    /// The blogs service.
    #[must_use]
    pub const fn blogs(&self) -> blog::BlogService<'_> {
        blog::BlogService { client: self }
    }

    /// The custom/smart collections service.
    #[must_use]
    pub const fn collections(&self) -> collection::CollectionService<'_> {
        collection::CollectionService { client: self }
    }

    /// The shop-level metafields service.
    #[must_use]
    pub fn metafields(&self) -> metafield::MetafieldService<'_> {
        metafield::MetafieldService::top_level(self)
    }

    /// A metafields service scoped to one owner resource, e.g.
    /// `metafields_for("products", 632910392)`.
    #[must_use]
    pub fn metafields_for(
        &self,
        owner_resource: &str,
        owner_id: u64,
    ) -> metafield::MetafieldService<'_> {
        metafield::MetafieldService::for_owner(self, owner_resource, owner_id)
    }

    /// The inventory items service.
    #[must_use]
    pub const fn inventory_items(&self) -> inventory_item::InventoryItemService<'_> {
        inventory_item::InventoryItemService { client: self }
    }

    /// The inventory levels service.
    #[must_use]
    pub const fn inventory_levels(&self) -> inventory_level::InventoryLevelService<'_> {
        inventory_level::InventoryLevelService { client: self }
    }

    /// The fulfillment orders service.
    #[must_use]
    pub const fn fulfillment_orders(&self) -> fulfillment_order::FulfillmentOrderService<'_> {
        fulfillment_order::FulfillmentOrderService { client: self }
    }

    /// The assigned fulfillment orders service.
    #[must_use]
    pub const fn assigned_fulfillment_orders(
        &self,
    ) -> assigned_fulfillment_order::AssignedFulfillmentOrderService<'_> {
        assigned_fulfillment_order::AssignedFulfillmentOrderService { client: self }
    }

    /// The fulfillment events service for one fulfillment of one order.
    #[must_use]
    pub const fn fulfillment_events(
        &self,
        order_id: u64,
        fulfillment_id: u64,
    ) -> fulfillment_event::FulfillmentEventService<'_> {
        fulfillment_event::FulfillmentEventService {
            client: self,
            order_id,
            fulfillment_id,
        }
    }

    /// The fulfillment requests service.
    #[must_use]
    pub const fn fulfillment_requests(&self) -> fulfillment_request::FulfillmentRequestService<'_> {
        fulfillment_request::FulfillmentRequestService { client: self }
    }

    /// The locations service.
    #[must_use]
    pub const fn locations(&self) -> location::LocationService<'_> {
        location::LocationService { client: self }
    }

    /// The script tags service.
    #[must_use]
    pub const fn script_tags(&self) -> script_tag::ScriptTagService<'_> {
        script_tag::ScriptTagService { client: self }
    }

    /// The shop service.
    #[must_use]
    pub const fn shop(&self) -> shop::ShopService<'_> {
        shop::ShopService { client: self }
    }

    /// The transactions service for one order.
    #[must_use]
    pub const fn transactions(&self, order_id: u64) -> transaction::TransactionService<'_> {
        transaction::TransactionService {
            client: self,
            order_id,
        }
    }

    /// The usage charges service for one recurring application charge.
    #[must_use]
    pub const fn usage_charges(
        &self,
        recurring_application_charge_id: u64,
    ) -> usage_charge::UsageChargeService<'_> {
        usage_charge::UsageChargeService {
            client: self,
            recurring_application_charge_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_options_skip_unset_fields() {
        let options = ListOptions {
            limit: Some(50),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&options).unwrap();
        assert_eq!(encoded, serde_json::json!({"limit": 50}));
    }

    #[test]
    fn test_count_options_serialize_bounds() {
        let options = CountOptions {
            created_at_min: Some("2024-01-01T00:00:00Z".parse().unwrap()),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&options).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({"created_at_min": "2024-01-01T00:00:00Z"})
        );
    }
}
