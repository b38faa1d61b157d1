//! The collections resource.
//!
//! Collections are read through the generic `collections/{id}.json`
//! endpoint, which serves both custom and smart collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::pagination::Pagination;

/// A custom or smart collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub published_scope: Option<String>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

/// A product as returned from a collection's product listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct CollectionEnvelope {
    collection: Collection,
}

#[derive(Deserialize)]
struct ProductsEnvelope {
    products: Vec<CollectionProduct>,
}

/// Operations on `collections/{id}` endpoints.
pub struct CollectionService<'a> {
    pub(crate) client: &'a Client,
}

impl CollectionService<'_> {
    /// Fetches one collection by id.
    pub async fn get<Q>(&self, id: u64, options: Option<&Q>) -> Result<Collection, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: CollectionEnvelope = self
            .client
            .get(&format!("collections/{id}.json"), options)
            .await?;
        Ok(envelope.collection)
    }

    /// Lists the products belonging to a collection.
    pub async fn list_products<Q>(
        &self,
        id: u64,
        options: Option<&Q>,
    ) -> Result<Vec<CollectionProduct>, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: ProductsEnvelope = self
            .client
            .get(&format!("collections/{id}/products.json"), options)
            .await?;
        Ok(envelope.products)
    }

    /// Lists the products belonging to a collection along with pagination
    /// cursors.
    pub async fn list_products_with_pagination<Q>(
        &self,
        id: u64,
        options: Option<&Q>,
    ) -> Result<(Vec<CollectionProduct>, Pagination), Error>
    where
        Q: Serialize + ?Sized,
    {
        let (envelope, pagination): (ProductsEnvelope, _) = self
            .client
            .get_with_pagination(&format!("collections/{id}/products.json"), options)
            .await?;
        Ok((envelope.products, pagination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_envelope_decodes() {
        let body = r#"{"products":[{"id":632910392,"title":"IPod Nano","vendor":"Apple"}]}"#;
        let envelope: ProductsEnvelope = serde_json::from_str(body).unwrap();

        assert_eq!(envelope.products.len(), 1);
        assert_eq!(envelope.products[0].vendor.as_deref(), Some("Apple"));
    }
}
