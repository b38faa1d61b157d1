//! A typed async client for the Shopify Admin REST API.
//!
//! The crate is organized around one shared [`Client`] holding the shop's
//! base URL, API version, credentials and retry policy, and a set of
//! per-resource services borrowed from it. All calls are `async` and return
//! the crate's [`Error`] on failure; dropping a call's future (for example
//! through `tokio::time::timeout`) cancels any pending request or backoff
//! sleep.
//!
//! # Quickstart
//!
//! ```rust,no_run
//! use shopify_admin::{Client, Error};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let client = Client::builder("my-shop", "shpat_xxx")
//!         .version("2024-10")
//!         .retries(3)
//!         .build()?;
//!
//!     let shop = client.shop().get().await?;
//!     println!("connected to {}", shop.name.unwrap_or_default());
//!
//!     let (orders, page) = client
//!         .orders()
//!         .list_with_pagination(None::<&shopify_admin::resources::ListOptions>)
//!         .await?;
//!     println!("fetched {} orders", orders.len());
//!
//!     if let Some(cursor) = page.next {
//!         let (more, _) = client.orders().list_with_pagination(Some(&cursor)).await?;
//!         println!("and {} more", more.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Rate limiting
//!
//! With a non-zero retry budget the client transparently retries responses
//! classified as transient (HTTP 429 and 503), honoring the server's
//! `Retry-After` header between attempts. All other failures are returned
//! immediately.

pub mod client;
pub mod error;
pub mod pagination;
pub mod resources;
pub mod version;

pub use client::{Client, ClientBuilder, DelayFn, DelayFuture};
pub use error::Error;
pub use pagination::{PageCursor, Pagination};
pub use version::{DEFAULT_API_PATH_PREFIX, UNSTABLE_API_VERSION};
