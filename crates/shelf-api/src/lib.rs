//! Async HTTP client for the shelf inventory REST API.
//!
//! Every backend resource (`/product`, `/category`, `/dealer`, `/customer`)
//! exposes the same five operations behind the same response envelope, so
//! the client is generic over a [`Resource`] rather than duplicating one
//! wrapper per entity:
//!
//! - **[`ApiClient`]** — owns the `reqwest::Client` and base URL, issues one
//!   request per operation, and normalizes every response into either a
//!   parsed [`ApiResponse`] payload or a typed [`Error`].
//! - **[`ApiResponse`]** — the `{statusCode, message, data?}` envelope the
//!   backend wraps around every payload.
//! - **[`Resource`]** — implemented by domain types in `shelf-core`; supplies
//!   the path segment and the create/patch payload types.
//!
//! There is no retry, caching, or request coalescing here — callers get
//! exactly one HTTP round trip per method call. The store layer in
//! `shelf-core` builds its cache semantics on top.

pub mod client;
pub mod envelope;
pub mod error;
pub mod resource;
pub mod transport;

pub use client::ApiClient;
pub use envelope::ApiResponse;
pub use error::Error;
pub use resource::Resource;
pub use transport::TransportConfig;
