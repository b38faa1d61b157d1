//! The blogs resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::pagination::Pagination;

/// An online store blog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Who may comment: `no`, `moderate` or `yes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedburner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedburner_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

#[derive(Deserialize)]
struct BlogEnvelope {
    blog: Blog,
}

#[derive(Deserialize)]
struct BlogsEnvelope {
    blogs: Vec<Blog>,
}

#[derive(Serialize)]
struct BlogRequest<'a> {
    blog: &'a Blog,
}

/// Operations on `blogs.json` endpoints.
pub struct BlogService<'a> {
    pub(crate) client: &'a Client,
}

impl BlogService<'_> {
    pub async fn list<Q>(&self, options: Option<&Q>) -> Result<Vec<Blog>, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: BlogsEnvelope = self.client.get("blogs.json", options).await?;
        Ok(envelope.blogs)
    }

    pub async fn list_with_pagination<Q>(
        &self,
        options: Option<&Q>,
    ) -> Result<(Vec<Blog>, Pagination), Error>
    where
        Q: Serialize + ?Sized,
    {
        let (envelope, pagination): (BlogsEnvelope, _) = self
            .client
            .get_with_pagination("blogs.json", options)
            .await?;
        Ok((envelope.blogs, pagination))
    }

    pub async fn count<Q>(&self, options: Option<&Q>) -> Result<u64, Error>
    where
        Q: Serialize + ?Sized,
    {
        self.client.count("blogs/count.json", options).await
    }

    pub async fn get<Q>(&self, id: u64, options: Option<&Q>) -> Result<Blog, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: BlogEnvelope = self.client.get(&format!("blogs/{id}.json"), options).await?;
        Ok(envelope.blog)
    }

    pub async fn create(&self, blog: &Blog) -> Result<Blog, Error> {
        let envelope: BlogEnvelope = self
            .client
            .post("blogs.json", Some(&BlogRequest { blog }))
            .await?;
        Ok(envelope.blog)
    }

    pub async fn update(&self, blog: &Blog) -> Result<Blog, Error> {
        let id = blog.id.ok_or_else(|| {
            Error::Config("cannot update a blog without an id".to_string())
        })?;
        let envelope: BlogEnvelope = self
            .client
            .put(&format!("blogs/{id}.json"), &BlogRequest { blog })
            .await?;
        Ok(envelope.blog)
    }

    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        self.client
            .delete(&format!("blogs/{id}.json"), None::<&()>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_envelope_decodes() {
        let body = r#"{"blog":{"id":241253187,"title":"Apple main blog","commentable":"no"}}"#;
        let envelope: BlogEnvelope = serde_json::from_str(body).unwrap();

        assert_eq!(envelope.blog.id, Some(241_253_187));
        assert_eq!(envelope.blog.commentable.as_deref(), Some("no"));
    }
}
