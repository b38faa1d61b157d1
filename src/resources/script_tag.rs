//! The script tags resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::pagination::Pagination;

/// A remote JavaScript file loaded into the storefront or order status page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// The DOM event the tag fires on. Only `onload` is supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Where the tag loads: `online_store`, `order_status` or `all`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<bool>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Query options for listing script tags.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ScriptTagListOptions {
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
    /// Only return tags with this `src` value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

#[derive(Deserialize)]
struct ScriptTagEnvelope {
    script_tag: ScriptTag,
}

#[derive(Deserialize)]
struct ScriptTagsEnvelope {
    script_tags: Vec<ScriptTag>,
}

#[derive(Serialize)]
struct ScriptTagRequest<'a> {
    script_tag: &'a ScriptTag,
}

/// Operations on `script_tags.json` endpoints.
pub struct ScriptTagService<'a> {
    pub(crate) client: &'a Client,
}

impl ScriptTagService<'_> {
    pub async fn list<Q>(&self, options: Option<&Q>) -> Result<Vec<ScriptTag>, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: ScriptTagsEnvelope = self.client.get("script_tags.json", options).await?;
        Ok(envelope.script_tags)
    }

    pub async fn list_with_pagination<Q>(
        &self,
        options: Option<&Q>,
    ) -> Result<(Vec<ScriptTag>, Pagination), Error>
    where
        Q: Serialize + ?Sized,
    {
        let (envelope, pagination): (ScriptTagsEnvelope, _) = self
            .client
            .get_with_pagination("script_tags.json", options)
            .await?;
        Ok((envelope.script_tags, pagination))
    }

    pub async fn count<Q>(&self, options: Option<&Q>) -> Result<u64, Error>
    where
        Q: Serialize + ?Sized,
    {
        self.client.count("script_tags/count.json", options).await
    }

    pub async fn get<Q>(&self, id: u64, options: Option<&Q>) -> Result<ScriptTag, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: ScriptTagEnvelope = self
            .client
            .get(&format!("script_tags/{id}.json"), options)
            .await?;
        Ok(envelope.script_tag)
    }

    pub async fn create(&self, script_tag: &ScriptTag) -> Result<ScriptTag, Error> {
        let envelope: ScriptTagEnvelope = self
            .client
            .post("script_tags.json", Some(&ScriptTagRequest { script_tag }))
            .await?;
        Ok(envelope.script_tag)
    }

    pub async fn update(&self, script_tag: &ScriptTag) -> Result<ScriptTag, Error> {
        let id = script_tag.id.ok_or_else(|| {
            Error::Config("cannot update a script tag without an id".to_string())
        })?;
        let envelope: ScriptTagEnvelope = self
            .client
            .put(
                &format!("script_tags/{id}.json"),
                &ScriptTagRequest { script_tag },
            )
            .await?;
        Ok(envelope.script_tag)
    }

    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        self.client
            .delete(&format!("script_tags/{id}.json"), None::<&()>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_tag_request_shape() {
        let script_tag = ScriptTag {
            src: Some("https://example.com/app.js".to_string()),
            event: Some("onload".to_string()),
            ..Default::default()
        };
        let encoded = serde_json::to_value(ScriptTagRequest {
            script_tag: &script_tag,
        })
        .unwrap();

        assert_eq!(
            encoded,
            serde_json::json!({
                "script_tag": {"src": "https://example.com/app.js", "event": "onload"}
            })
        );
    }

    #[test]
    fn test_list_options_include_src_filter() {
        let options = ScriptTagListOptions {
            src: Some("https://example.com/app.js".to_string()),
            limit: Some(10),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&options).unwrap();

        assert_eq!(
            encoded,
            serde_json::json!({"src": "https://example.com/app.js", "limit": 10})
        );
    }
}
