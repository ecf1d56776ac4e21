//! Wiki.js API integration.
//!
//! [`WikiJsClient`] talks to a Wiki.js GraphQL endpoint over blocking HTTP,
//! authenticating with a Bearer API key, and implements
//! [`wjs_reconcile::PageStore`] so the reconciler can drive it.
//!
//! ```no_run
//! use wjs_client::WikiJsClient;
//!
//! let client = WikiJsClient::new("https://wiki.example.com/graphql", "api-key");
//! let page = client.fetch_page(7)?;
//! println!("Page title: {}", page.title);
//! # Ok::<(), wjs_client::ClientError>(())
//! ```

// API client
mod client;
pub use client::WikiJsClient;

// Errors
mod error;
pub use error::ClientError;

// Wire types (internal)
mod types;
