//! The HTTP client shared by all resource services.
//!
//! A [`Client`] owns the resolved base URL and path prefix, the access
//! token, the retry budget and the delay function used between retries.
//! It is immutable after construction and cheap to share by reference.
//!
//! # Example
//!
//! ```rust,no_run
//! use shopify_admin::Client;
//!
//! # async fn run() -> Result<(), shopify_admin::Error> {
//! let client = Client::builder("my-shop", "shpat_token")
//!     .version("2024-10")
//!     .retries(3)
//!     .build()?;
//!
//! let shop = client.shop().get().await?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{CONTENT_TYPE, LINK, RETRY_AFTER};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{classify_response, Error};
use crate::pagination::Pagination;
use crate::version::api_path_prefix;

/// Delay between retries when the response carries no usable `Retry-After`.
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Upper bound on a server-supplied `Retry-After`, in seconds. Values above
/// this are treated as absent so a hostile or broken header cannot stall the
/// retry loop or overflow the sleep duration.
const MAX_RETRY_AFTER_SECS: f64 = 3600.0;

/// The future returned by a [`DelayFn`].
pub type DelayFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// The function the retry loop awaits between attempts.
///
/// Defaults to `tokio::time::sleep`; tests inject zero-delay or recording
/// replacements.
pub type DelayFn = Arc<dyn Fn(Duration) -> DelayFuture + Send + Sync>;

#[derive(Deserialize)]
struct CountEnvelope {
    count: u64,
}

/// An immutable handle to one shop's Admin API.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    path_prefix: String,
    token: String,
    additional_headers: Vec<(String, String)>,
    retries: u32,
    delay_fn: DelayFn,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("path_prefix", &self.path_prefix)
            .field("retries", &self.retries)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Starts building a client for the given shop and access token.
    ///
    /// The shop may be a bare name (`my-shop`), a myshopify domain
    /// (`my-shop.myshopify.com`) or a full URL.
    pub fn builder(shop: impl Into<String>, token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(shop.into(), token.into())
    }

    /// The resolved base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The resolved path prefix, e.g. `admin/api/2024-10`.
    #[must_use]
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// Sends a GET request and decodes the response body.
    pub async fn get<T, Q>(&self, path: &str, options: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let (body, _) = self.execute(Method::GET, path, options, None::<&()>).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Sends a GET request and decodes the response body along with the
    /// pagination cursors from the `Link` header.
    pub async fn get_with_pagination<T, Q>(
        &self,
        path: &str,
        options: Option<&Q>,
    ) -> Result<(T, Pagination), Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let (body, pagination) = self.execute(Method::GET, path, options, None::<&()>).await?;
        Ok((serde_json::from_str(&body)?, pagination))
    }

    /// Sends a POST request with an optional JSON body and decodes the
    /// response.
    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (body, _) = self
            .execute(Method::POST, path, None::<&()>, body)
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Sends a PUT request with a JSON body and decodes the response.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (body, _) = self
            .execute(Method::PUT, path, None::<&()>, Some(body))
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Sends a POST request whose response body is discarded.
    ///
    /// Used by action endpoints that return nothing the caller needs.
    pub async fn post_no_content<B>(&self, path: &str, body: Option<&B>) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, path, None::<&()>, body).await?;
        Ok(())
    }

    /// Sends a DELETE request, discarding the response body.
    pub async fn delete<Q>(&self, path: &str, options: Option<&Q>) -> Result<(), Error>
    where
        Q: Serialize + ?Sized,
    {
        self.execute(Method::DELETE, path, options, None::<&()>)
            .await?;
        Ok(())
    }

    /// Sends a GET request to a `.../count.json` endpoint and decodes the
    /// count envelope.
    pub async fn count<Q>(&self, path: &str, options: Option<&Q>) -> Result<u64, Error>
    where
        Q: Serialize + ?Sized,
    {
        let envelope: CountEnvelope = self.get(path, options).await?;
        Ok(envelope.count)
    }

    /// Sends one request, retrying transient failures up to the configured
    /// budget.
    ///
    /// Network-level failures are never retried. Between retries the loop
    /// sleeps for the server's `Retry-After` value, falling back to one
    /// second when the header is missing, malformed, negative or larger
    /// than [`MAX_RETRY_AFTER_SECS`].
    async fn execute<Q, B>(
        &self,
        method: Method,
        path: &str,
        options: Option<&Q>,
        body: Option<&B>,
    ) -> Result<(String, Pagination), Error>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self
            .base_url
            .join(&format!(
                "{}/{}",
                self.path_prefix,
                path.trim_start_matches('/')
            ))
            .map_err(|e| Error::Config(format!("invalid request path {path:?}: {e}")))?;

        let mut attempt: u32 = 0;
        loop {
            let mut request = self
                .http
                .request(method.clone(), url.clone())
                .header("X-Shopify-Access-Token", &self.token)
                .header(CONTENT_TYPE, "application/json");
            for (name, value) in &self.additional_headers {
                request = request.header(name.as_str(), value.as_str());
            }
            if let Some(options) = options {
                request = request.query(options);
            }
            if let Some(body) = body {
                request = request.json(body);
            }

            let started = Instant::now();
            let response = request.send().await?;

            let status = response.status();
            let link = response
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string);
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|secs| secs.is_finite() && *secs >= 0.0 && *secs <= MAX_RETRY_AFTER_SECS);

            let text = response.text().await?;
            tracing::debug!(
                %method,
                path,
                status = status.as_u16(),
                elapsed = ?started.elapsed(),
                "api request"
            );

            if status.is_success() {
                let pagination = link
                    .as_deref()
                    .map(Pagination::parse_link_header)
                    .unwrap_or_default();
                return Ok((text, pagination));
            }

            let err = classify_response(status.as_u16(), retry_after, &text);
            if err.is_retryable() && attempt < self.retries {
                let delay = err
                    .retry_after()
                    .map_or(DEFAULT_RETRY_DELAY, Duration::from_secs_f64);
                tracing::warn!(
                    status = status.as_u16(),
                    attempt,
                    delay = ?delay,
                    "transient response, backing off before retry"
                );
                (self.delay_fn)(delay).await;
                attempt += 1;
                continue;
            }
            return Err(err);
        }
    }
}

/// Builder for [`Client`]. Every option is independently optional.
pub struct ClientBuilder {
    shop: String,
    token: String,
    version: String,
    retries: u32,
    http_client: Option<reqwest::Client>,
    additional_headers: Vec<(String, String)>,
    base_url: Option<String>,
    delay_fn: Option<DelayFn>,
}

impl ClientBuilder {
    fn new(shop: String, token: String) -> Self {
        Self {
            shop,
            token,
            version: String::new(),
            retries: 0,
            http_client: None,
            additional_headers: Vec::new(),
            base_url: None,
            delay_fn: None,
        }
    }

    /// Pins the client to an API version, e.g. `"2024-10"` or `"unstable"`.
    ///
    /// Invalid version strings are ignored with a warning and requests are
    /// sent under the unversioned `admin` prefix.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the retry budget for rate-limited and unavailable responses.
    ///
    /// A budget of `n` means at most `n + 1` attempts per call. The default
    /// is 0: a single attempt, no retries.
    #[must_use]
    pub const fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Uses a caller-configured `reqwest::Client` instead of the default.
    #[must_use]
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Adds a header to every request the client sends.
    #[must_use]
    pub fn additional_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.additional_headers.push((name.into(), value.into()));
        self
    }

    /// Overrides the shop-derived base URL. Intended for tests and proxies.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Replaces the sleep used between retries. Intended for tests.
    #[must_use]
    pub fn delay_fn(mut self, delay_fn: DelayFn) -> Self {
        self.delay_fn = Some(delay_fn);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when no shop or base URL is given, or when
    /// the resulting base URL does not parse.
    pub fn build(self) -> Result<Client, Error> {
        let base = match self.base_url {
            Some(base) => base,
            None => {
                if self.shop.trim().is_empty() {
                    return Err(Error::Config("a shop name is required".to_string()));
                }
                shop_base_url(&self.shop)
            }
        };
        let base_url =
            Url::parse(&base).map_err(|e| Error::Config(format!("invalid base URL {base:?}: {e}")))?;

        Ok(Client {
            http: self.http_client.unwrap_or_default(),
            base_url,
            path_prefix: api_path_prefix(&self.version),
            token: self.token,
            additional_headers: self.additional_headers,
            retries: self.retries,
            delay_fn: self
                .delay_fn
                .unwrap_or_else(|| Arc::new(|d| Box::pin(tokio::time::sleep(d)))),
        })
    }
}

/// Expands a shop name into its myshopify base URL.
///
/// Full URLs pass through untouched, a trailing `.myshopify.com` is not
/// duplicated.
fn shop_base_url(shop: &str) -> String {
    if shop.starts_with("http://") || shop.starts_with("https://") {
        return shop.to_string();
    }
    let name = shop.trim_end_matches(".myshopify.com");
    format!("https://{name}.myshopify.com")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_shop_name_expands_to_myshopify_url() {
        let client = Client::builder("my-shop", "token").build().unwrap();
        assert_eq!(client.base_url().as_str(), "https://my-shop.myshopify.com/");
    }

    #[test]
    fn test_full_shop_domain_is_not_duplicated() {
        let client = Client::builder("my-shop.myshopify.com", "token")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "https://my-shop.myshopify.com/");
    }

    #[test]
    fn test_full_url_shop_passes_through() {
        let client = Client::builder("https://example.com", "token")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "https://example.com/");
    }

    #[test]
    fn test_default_path_prefix_without_version() {
        let client = Client::builder("my-shop", "token").build().unwrap();
        assert_eq!(client.path_prefix(), "admin");
    }

    #[test]
    fn test_version_sets_path_prefix() {
        let client = Client::builder("my-shop", "token")
            .version("2024-10")
            .build()
            .unwrap();
        assert_eq!(client.path_prefix(), "admin/api/2024-10");
    }

    #[test]
    fn test_invalid_version_falls_back_to_default_prefix() {
        let client = Client::builder("my-shop", "token")
            .version("9999-99b")
            .build()
            .unwrap();
        assert_eq!(client.path_prefix(), "admin");
    }

    #[test]
    fn test_base_url_override_wins_over_shop() {
        let client = Client::builder("my-shop", "token")
            .base_url("http://127.0.0.1:8080")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_empty_shop_without_base_url_fails() {
        let err = Client::builder("", "token").build().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unparseable_base_url_fails() {
        let err = Client::builder("my-shop", "token")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
