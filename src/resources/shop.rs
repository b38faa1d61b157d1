//! The shop resource. Read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;

/// The shop the client is authenticated against.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub domain: Option<String>,
    pub myshopify_domain: Option<String>,
    pub shop_owner: Option<String>,
    pub plan_name: Option<String>,
    pub currency: Option<String>,
    pub money_format: Option<String>,
    pub weight_unit: Option<String>,
    pub primary_locale: Option<String>,
    pub iana_timezone: Option<String>,
    pub address1: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub province: Option<String>,
    pub province_code: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub phone: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct ShopEnvelope {
    shop: Shop,
}

/// Operations on the `shop.json` endpoint.
pub struct ShopService<'a> {
    pub(crate) client: &'a Client,
}

impl ShopService<'_> {
    /// Fetches the shop's details.
    pub async fn get(&self) -> Result<Shop, Error> {
        let envelope: ShopEnvelope = self.client.get("shop.json", None::<&()>).await?;
        Ok(envelope.shop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_envelope_decodes() {
        let body = r#"{"shop":{"id":548380009,"name":"Apple Computers","myshopify_domain":"apple.myshopify.com","currency":"USD"}}"#;
        let envelope: ShopEnvelope = serde_json::from_str(body).unwrap();

        assert_eq!(envelope.shop.name.as_deref(), Some("Apple Computers"));
        assert_eq!(envelope.shop.currency.as_deref(), Some("USD"));
    }
}
