//! Blocking client for the PayWhirl subscription-billing REST API.
//!
//! # Overview
//! Every API operation is one method on [`PayWhirl`] that builds a path and a
//! parameter map and hands them to the [`Dispatcher`]. The dispatcher sends
//! exactly one request with the `api-key` / `api-secret` headers and returns
//! the JSON body as a `serde_json::Value`.
//!
//! # Design
//! - Request building and body decoding are pure; only the [`Transport`]
//!   touches the network. The default transport is `ureq`.
//! - Configuration is an immutable [`Config`] fixed at construction.
//! - HTTP error statuses are not errors. The service's JSON is returned as-is;
//!   use [`Dispatcher::send`] when the status code matters.
//! - No retries, caching or pagination.

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod http;
pub mod params;
mod resources;
pub mod transport;

pub use client::PayWhirl;
pub use config::{Config, ConfigBuilder, DEFAULT_BASE_URL};
pub use dispatcher::{decode_body, ApiResponse, Dispatcher};
pub use error::{Error, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use params::{ListQuery, Params};
pub use resources::DEFAULT_SUBSCRIPTION_STATUS;
pub use transport::{Transport, UreqTransport};
