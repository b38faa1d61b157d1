//! The metafields resource.
//!
//! Metafields exist at the shop level and attached to owner resources.
//! The service is constructed either top-level ([`Client::metafields`])
//! or scoped to an owner ([`Client::metafields_for`]); the scoped form
//! prefixes every path with `<owner>/<id>/`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::pagination::Pagination;

/// A metafield attached to the shop or to an owner resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metafield {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The stored value. Its JSON shape depends on `type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// The metafield type, e.g. `single_line_text_field` or
    /// `number_integer`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing)]
    pub owner_id: Option<u64>,
    #[serde(skip_serializing)]
    pub owner_resource: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

/// Query options for listing metafields.
#[derive(Clone, Debug, Default, Serialize)]
pub struct MetafieldListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

#[derive(Deserialize)]
struct MetafieldEnvelope {
    metafield: Metafield,
}

#[derive(Deserialize)]
struct MetafieldsEnvelope {
    metafields: Vec<Metafield>,
}

#[derive(Serialize)]
struct MetafieldRequest<'a> {
    metafield: &'a Metafield,
}

/// Operations on `metafields.json` endpoints, top-level or owner-scoped.
pub struct MetafieldService<'a> {
    client: &'a Client,
    path_prefix: Option<String>,
}

impl<'a> MetafieldService<'a> {
    pub(crate) const fn top_level(client: &'a Client) -> Self {
        Self {
            client,
            path_prefix: None,
        }
    }

    pub(crate) fn for_owner(client: &'a Client, owner_resource: &str, owner_id: u64) -> Self {
        Self {
            client,
            path_prefix: Some(format!("{owner_resource}/{owner_id}")),
        }
    }

    fn path(&self, suffix: &str) -> String {
        match &self.path_prefix {
            Some(prefix) => format!("{prefix}/{suffix}"),
            None => suffix.to_string(),
        }
    }

    pub async fn list<Q>(&self, options: Option<&Q>) -> Result<Vec<Metafield>, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: MetafieldsEnvelope =
            self.client.get(&self.path("metafields.json"), options).await?;
        Ok(envelope.metafields)
    }

    pub async fn list_with_pagination<Q>(
        &self,
        options: Option<&Q>,
    ) -> Result<(Vec<Metafield>, Pagination), Error>
    where
        Q: Serialize + ?Sized,
    {
        let (envelope, pagination): (MetafieldsEnvelope, _) = self
            .client
            .get_with_pagination(&self.path("metafields.json"), options)
            .await?;
        Ok((envelope.metafields, pagination))
    }

    pub async fn count<Q>(&self, options: Option<&Q>) -> Result<u64, Error>
    where
        Q: Serialize + ?Sized,
    {
        self.client
            .count(&self.path("metafields/count.json"), options)
            .await
    }

    pub async fn get<Q>(&self, id: u64, options: Option<&Q>) -> Result<Metafield, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: MetafieldEnvelope = self
            .client
            .get(&self.path(&format!("metafields/{id}.json")), options)
            .await?;
        Ok(envelope.metafield)
    }

    pub async fn create(&self, metafield: &Metafield) -> Result<Metafield, Error> {
        let envelope: MetafieldEnvelope = self
            .client
            .post(
                &self.path("metafields.json"),
                Some(&MetafieldRequest { metafield }),
            )
            .await?;
        Ok(envelope.metafield)
    }

    pub async fn update(&self, metafield: &Metafield) -> Result<Metafield, Error> {
        let id = metafield.id.ok_or_else(|| {
            Error::Config("cannot update a metafield without an id".to_string())
        })?;
        let envelope: MetafieldEnvelope = self
            .client
            .put(
                &self.path(&format!("metafields/{id}.json")),
                &MetafieldRequest { metafield },
            )
            .await?;
        Ok(envelope.metafield)
    }

    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        self.client
            .delete(&self.path(&format!("metafields/{id}.json")), None::<&()>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Client;

    #[test]
    fn test_top_level_service_uses_bare_paths() {
        let client = Client::builder("my-shop", "token").build().unwrap();
        let service = client.metafields();
        assert_eq!(service.path("metafields.json"), "metafields.json");
    }

    #[test]
    fn test_owner_scoped_service_prefixes_paths() {
        let client = Client::builder("my-shop", "token").build().unwrap();
        let service = client.metafields_for("products", 632_910_392);
        assert_eq!(
            service.path("metafields/1.json"),
            "products/632910392/metafields/1.json"
        );
    }

    #[test]
    fn test_metafield_type_field_round_trips() {
        let body = r#"{"metafield":{"id":1,"namespace":"inventory","key":"warehouse","value":25,"type":"number_integer"}}"#;
        let envelope: MetafieldEnvelope = serde_json::from_str(body).unwrap();

        assert_eq!(
            envelope.metafield.value_type.as_deref(),
            Some("number_integer")
        );
        assert_eq!(envelope.metafield.value, Some(serde_json::json!(25)));

        let metafield = envelope.metafield;
        let encoded = serde_json::to_value(MetafieldRequest {
            metafield: &metafield,
        })
        .unwrap();
        assert_eq!(encoded["metafield"]["type"], "number_integer");
    }
}
