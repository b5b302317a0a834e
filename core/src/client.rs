//! The `PayWhirl` client.
//!
//! # Design
//! `PayWhirl` wraps a [`Dispatcher`] and exposes one method per remote
//! endpoint. The methods live in [`crate::resources`], grouped by resource;
//! each one only assembles a path and a parameter map and delegates here.
//! Responses come back as `serde_json::Value` whatever their HTTP status.

use serde_json::Value;

use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::params::Params;
use crate::transport::{Transport, UreqTransport};

/// Typed entry point to the PayWhirl REST API.
///
/// ```no_run
/// use paywhirl::{Params, PayWhirl};
///
/// # fn main() -> paywhirl::Result<()> {
/// let client = PayWhirl::new("pwpk_xxx", "pwpsk_xxx")?;
/// let customer = client.create_customer(
///     Params::new()
///         .with("first_name", "Jane")
///         .with("last_name", "Doe")
///         .with("email", "jane@example.com"),
/// )?;
/// let subscriptions = client.get_subscriptions(customer["id"].as_u64().unwrap_or_default(), None)?;
/// println!("{subscriptions}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PayWhirl<T = UreqTransport> {
    dispatcher: Dispatcher<T>,
}

impl PayWhirl<UreqTransport> {
    /// Client for the production endpoint.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        Ok(Self::from_config(Config::new(key, secret)?))
    }

    pub fn from_config(config: Config) -> Self {
        Self {
            dispatcher: Dispatcher::new(config),
        }
    }

    /// Client configured from the `PAYWHIRL_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_config(Config::from_env()?))
    }
}

impl<T: Transport> PayWhirl<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self {
            dispatcher: Dispatcher::with_transport(config, transport),
        }
    }

    /// The underlying dispatcher, for raw calls or access to status codes.
    pub fn dispatcher(&self) -> &Dispatcher<T> {
        &self.dispatcher
    }

    pub(crate) fn get(&self, path: &str, params: Option<Params>) -> Result<Value> {
        self.dispatcher.call(HttpMethod::Get, path, params.as_ref())
    }

    pub(crate) fn post(&self, path: &str, params: Params) -> Result<Value> {
        self.dispatcher.call(HttpMethod::Post, path, Some(&params))
    }

    pub(crate) fn patch(&self, path: &str, params: Params) -> Result<Value> {
        self.dispatcher.call(HttpMethod::Patch, path, Some(&params))
    }

    pub(crate) fn delete(&self, path: &str) -> Result<Value> {
        self.dispatcher.call(HttpMethod::Delete, path, None)
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::testing::*;
    use super::*;

    #[test]
    fn new_rejects_empty_credentials() {
        assert!(PayWhirl::new("", "secret").is_err());
    }

    #[test]
    fn facade_returns_decoded_body() {
        let (client, recorder) = client();
        let body = client.get_account().unwrap();
        assert_eq!(body, json!({"ok": true}));
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn dispatcher_is_exposed_for_raw_calls() {
        let (client, recorder) = client();
        let response = client
            .dispatcher()
            .send(HttpMethod::Get, "/stats", None)
            .unwrap();
        assert_eq!(response.status, 200);
        assert_sent(&recorder, HttpMethod::Get, "/stats", None);
    }
}
