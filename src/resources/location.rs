//! The locations resource. Read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;

/// A physical or app-managed location that stocks inventory.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub province: Option<String>,
    pub province_code: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub phone: Option<String>,
    pub active: Option<bool>,
    /// True for locations owned by a fulfillment service app.
    pub legacy: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub admin_graphql_api_id: Option<String>,
}

#[derive(Deserialize)]
struct LocationEnvelope {
    location: Location,
}

#[derive(Deserialize)]
struct LocationsEnvelope {
    locations: Vec<Location>,
}

/// Operations on `locations.json` endpoints.
pub struct LocationService<'a> {
    pub(crate) client: &'a Client,
}

impl LocationService<'_> {
    pub async fn list<Q>(&self, options: Option<&Q>) -> Result<Vec<Location>, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: LocationsEnvelope = self.client.get("locations.json", options).await?;
        Ok(envelope.locations)
    }

    pub async fn get(&self, id: u64) -> Result<Location, Error> {
        let envelope: LocationEnvelope = self
            .client
            .get(&format!("locations/{id}.json"), None::<&()>)
            .await?;
        Ok(envelope.location)
    }

    pub async fn count(&self) -> Result<u64, Error> {
        self.client.count("locations/count.json", None::<&()>).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_envelope_decodes() {
        let body = r#"{"location":{"id":487838322,"name":"Fifth Avenue AppleStore","active":true,"country_code":"US"}}"#;
        let envelope: LocationEnvelope = serde_json::from_str(body).unwrap();

        assert_eq!(envelope.location.id, Some(487_838_322));
        assert_eq!(envelope.location.active, Some(true));
    }
}
