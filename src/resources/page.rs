//! The pages resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::pagination::Pagination;

/// An online store page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub shop_id: Option<u64>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

#[derive(Deserialize)]
struct PageEnvelope {
    page: Page,
}

#[derive(Deserialize)]
struct PagesEnvelope {
    pages: Vec<Page>,
}

#[derive(Serialize)]
struct PageRequest<'a> {
    page: &'a Page,
}

/// Operations on `pages.json` endpoints.
pub struct PageService<'a> {
    pub(crate) client: &'a Client,
}

impl PageService<'_> {
    /// Lists pages.
    pub async fn list<Q>(&self, options: Option<&Q>) -> Result<Vec<Page>, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: PagesEnvelope = self.client.get("pages.json", options).await?;
        Ok(envelope.pages)
    }

    /// Lists pages along with the cursors for adjacent pages of results.
    pub async fn list_with_pagination<Q>(
        &self,
        options: Option<&Q>,
    ) -> Result<(Vec<Page>, Pagination), Error>
    where
        Q: Serialize + ?Sized,
    {
        let (envelope, pagination): (PagesEnvelope, _) = self
            .client
            .get_with_pagination("pages.json", options)
            .await?;
        Ok((envelope.pages, pagination))
    }

    /// Counts pages.
    pub async fn count<Q>(&self, options: Option<&Q>) -> Result<u64, Error>
    where
        Q: Serialize + ?Sized,
    {
        self.client.count("pages/count.json", options).await
    }

    /// Fetches one page by id.
    pub async fn get<Q>(&self, id: u64, options: Option<&Q>) -> Result<Page, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: PageEnvelope = self.client.get(&format!("pages/{id}.json"), options).await?;
        Ok(envelope.page)
    }

    /// Creates a page.
    pub async fn create(&self, page: &Page) -> Result<Page, Error> {
        let envelope: PageEnvelope = self
            .client
            .post("pages.json", Some(&PageRequest { page }))
            .await?;
        Ok(envelope.page)
    }

    /// Updates a page. The id is taken from the value.
    pub async fn update(&self, page: &Page) -> Result<Page, Error> {
        let id = page.id.ok_or_else(|| {
            Error::Config("cannot update a page without an id".to_string())
        })?;
        let envelope: PageEnvelope = self
            .client
            .put(&format!("pages/{id}.json"), &PageRequest { page })
            .await?;
        Ok(envelope.page)
    }

    /// Deletes a page.
    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        self.client
            .delete(&format!("pages/{id}.json"), None::<&()>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_envelope_decodes() {
        let body = r#"{"page":{"id":1,"title":"About us","handle":"about-us","shop_id":2}}"#;
        let envelope: PageEnvelope = serde_json::from_str(body).unwrap();

        assert_eq!(envelope.page.id, Some(1));
        assert_eq!(envelope.page.title.as_deref(), Some("About us"));
        assert_eq!(envelope.page.shop_id, Some(2));
    }

    #[test]
    fn test_page_request_omits_read_only_fields() {
        let page = Page {
            id: Some(1),
            title: Some("About us".to_string()),
            shop_id: Some(2),
            admin_graphql_api_id: Some("gid://shopify/OnlineStorePage/1".to_string()),
            ..Default::default()
        };
        let encoded = serde_json::to_value(PageRequest { page: &page }).unwrap();

        assert_eq!(
            encoded,
            serde_json::json!({"page": {"id": 1, "title": "About us"}})
        );
    }
}
