//! Cursor-based pagination parsed from the `Link` response header.
//!
//! List endpoints return a `Link` header with one or more comma-separated
//! entries of the form `<url>; rel="next"` or `<url>; rel="previous"`. The
//! query-parameter portion of each URL is an opaque cursor: passing it back
//! as the options argument of the same list call retrieves the adjacent page.
//!
//! # Example
//!
//! ```rust,ignore
//! let (orders, page) = client.orders().list_with_pagination(Some(&options)).await?;
//!
//! if let Some(cursor) = page.next {
//!     let (more, _) = client.orders().list_with_pagination(Some(&cursor)).await?;
//! }
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

/// An opaque set of query parameters addressing one page of a list endpoint.
///
/// Cursors are extracted from the `Link` header and are only meaningful when
/// sent back to the endpoint they came from. The parameter set is key-ordered
/// so serialization is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageCursor {
    params: BTreeMap<String, String>,
}

impl PageCursor {
    /// Extracts a cursor from the query string of a link URL.
    ///
    /// Returns `None` when the URL cannot be parsed or carries no query
    /// parameters.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        let parsed = Url::parse(url).ok()?;
        let params: BTreeMap<String, String> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        if params.is_empty() {
            return None;
        }
        Some(Self { params })
    }

    /// Returns the value of a single cursor parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Iterates over the cursor's parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` if the cursor carries no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Next/previous page cursors for a list response.
///
/// Either side is `None` when the corresponding relation is absent from the
/// `Link` header. A missing or malformed header yields an empty value, never
/// an error: the decoded body is still usable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Cursor for the next page, if any.
    pub next: Option<PageCursor>,
    /// Cursor for the previous page, if any.
    pub previous: Option<PageCursor>,
}

impl Pagination {
    /// Parses a `Link` header value into next/previous cursors.
    ///
    /// Entries with an unrecognized `rel`, an unparseable URL or no query
    /// string are skipped.
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for link in header_value.split(',') {
            let link = link.trim();

            let rel = link.split(';').find_map(|part| {
                let part = part.trim();
                part.strip_prefix("rel=").map(|r| r.trim_matches('"'))
            });

            let url = link
                .split(';')
                .next()
                .map(|s| s.trim().trim_start_matches('<').trim_end_matches('>'));

            if let (Some(rel), Some(url)) = (rel, url) {
                match rel {
                    "next" => result.next = PageCursor::from_url(url),
                    "previous" => result.previous = PageCursor::from_url(url),
                    _ => {}
                }
            }
        }

        result
    }

    /// Returns `true` if a next-page cursor is present.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` if a previous-page cursor is present.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: &str = "<https://x/y?page_info=abc>; rel=\"next\", <https://x/y?page_info=def>; rel=\"previous\"";

    #[test]
    fn test_parses_next_and_previous_cursors() {
        let page = Pagination::parse_link_header(BOTH);

        assert_eq!(page.next.as_ref().and_then(|c| c.get("page_info")), Some("abc"));
        assert_eq!(
            page.previous.as_ref().and_then(|c| c.get("page_info")),
            Some("def")
        );
    }

    #[test]
    fn test_next_only_leaves_previous_absent() {
        let header = "<https://shop.myshopify.com/admin/api/2024-10/orders.json?page_info=abc123>; rel=\"next\"";
        let page = Pagination::parse_link_header(header);

        assert!(page.has_next());
        assert!(!page.has_previous());
        assert_eq!(page.next.unwrap().get("page_info"), Some("abc123"));
    }

    #[test]
    fn test_previous_only_leaves_next_absent() {
        let header = "<https://shop.myshopify.com/admin/api/2024-10/orders.json?page_info=xyz789>; rel=\"previous\"";
        let page = Pagination::parse_link_header(header);

        assert!(!page.has_next());
        assert_eq!(page.previous.unwrap().get("page_info"), Some("xyz789"));
    }

    #[test]
    fn test_cursor_keeps_all_query_parameters() {
        let header =
            "<https://x/y?limit=3&page_info=abc>; rel=\"next\"";
        let page = Pagination::parse_link_header(header);

        let cursor = page.next.unwrap();
        assert_eq!(cursor.get("limit"), Some("3"));
        assert_eq!(cursor.get("page_info"), Some("abc"));
        let keys: Vec<&str> = cursor.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["limit", "page_info"]);
    }

    #[test]
    fn test_malformed_header_yields_no_cursors() {
        assert_eq!(Pagination::parse_link_header(""), Pagination::default());
        assert_eq!(
            Pagination::parse_link_header("garbage"),
            Pagination::default()
        );
        assert_eq!(
            Pagination::parse_link_header("<not a url>; rel=\"next\""),
            Pagination::default()
        );
        // URL without a query string carries no cursor
        assert_eq!(
            Pagination::parse_link_header("<https://x/y>; rel=\"next\""),
            Pagination::default()
        );
    }

    #[test]
    fn test_unknown_rel_is_ignored() {
        let header = "<https://x/y?page_info=abc>; rel=\"first\"";
        let page = Pagination::parse_link_header(header);
        assert_eq!(page, Pagination::default());
    }

    #[test]
    fn test_cursor_serializes_as_query_parameters() {
        let cursor = PageCursor::from_url("https://x/y?page_info=abc&limit=5").unwrap();
        let encoded = serde_json::to_value(&cursor).unwrap();

        assert_eq!(
            encoded,
            serde_json::json!({"limit": "5", "page_info": "abc"})
        );
    }
}
