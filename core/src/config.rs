//! Immutable client configuration.
//!
//! A `Config` is validated once when it is built and never changes after
//! that. It can be assembled in code, read from `PAYWHIRL_*` environment
//! variables, or deserialized as part of a host application's config file.
//!
//! ```toml
//! [paywhirl]
//! key = "pwpk_..."
//! secret = "pwpsk_..."
//! base_url = "https://api.paywhirl.com"
//! verify_tls = true
//! timeout_secs = 30
//! ```

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Production endpoint of the service.
pub const DEFAULT_BASE_URL: &str = "https://api.paywhirl.com";

pub const ENV_KEY: &str = "PAYWHIRL_API_KEY";
pub const ENV_SECRET: &str = "PAYWHIRL_API_SECRET";
pub const ENV_BASE_URL: &str = "PAYWHIRL_BASE_URL";
pub const ENV_VERIFY_TLS: &str = "PAYWHIRL_VERIFY_TLS";
pub const ENV_TIMEOUT_SECS: &str = "PAYWHIRL_TIMEOUT_SECS";

/// Credentials and endpoint settings shared by every request of a client.
///
/// `Debug` redacts the secret.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct Config {
    key: String,
    secret: String,
    base_url: String,
    verify_tls: bool,
    timeout: Option<Duration>,
}

impl Config {
    /// Configuration for the production endpoint with strict TLS.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        Self::builder(key, secret).build()
    }

    pub fn builder(key: impl Into<String>, secret: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder {
            key: key.into(),
            secret: secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            verify_tls: true,
            timeout: None,
        }
    }

    /// Read configuration from the `PAYWHIRL_*` environment variables.
    ///
    /// # Errors
    ///
    /// `Configuration` if the key or secret is missing, or if
    /// `PAYWHIRL_VERIFY_TLS` / `PAYWHIRL_TIMEOUT_SECS` cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Configuration(format!("{name} is not set")))
        };

        let mut builder = Self::builder(required(ENV_KEY)?, required(ENV_SECRET)?);
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            builder = builder.base_url(base_url);
        }
        if let Some(raw) = lookup(ENV_VERIFY_TLS) {
            builder = builder.verify_tls(parse_bool(ENV_VERIFY_TLS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                Error::Configuration(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got `{raw}`"))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// Request timeout; `None` leaves the transport default in place.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("verify_tls", &self.verify_tls)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder returned by [`Config::builder`].
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    key: String,
    secret: String,
    base_url: String,
    verify_tls: bool,
    timeout: Option<Duration>,
}

impl ConfigBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Disabling verification is meant for local or staging endpoints only.
    pub fn verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// # Errors
    ///
    /// `InvalidArgument` if the key, secret or base URL is empty.
    pub fn build(self) -> Result<Config> {
        if self.key.is_empty() {
            return Err(Error::InvalidArgument("API key must not be empty".to_string()));
        }
        if self.secret.is_empty() {
            return Err(Error::InvalidArgument("API secret must not be empty".to_string()));
        }
        let base_url = self.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::InvalidArgument("base URL must not be empty".to_string()));
        }
        Ok(Config {
            key: self.key,
            secret: self.secret,
            base_url,
            verify_tls: self.verify_tls,
            timeout: self.timeout,
        })
    }
}

/// Wire shape of [`Config`] before validation.
#[derive(Deserialize)]
struct RawConfig {
    key: String,
    secret: String,
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_verify_tls")]
    verify_tls: bool,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

impl TryFrom<RawConfig> for Config {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let mut builder = Config::builder(raw.key, raw.secret)
            .base_url(raw.base_url)
            .verify_tls(raw.verify_tls);
        if let Some(secs) = raw.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_verify_tls() -> bool {
    true
}

fn parse_bool(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::Configuration(format!("{name} must be a boolean, got `{raw}`"))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn new_uses_production_defaults() {
        let config = Config::new("key", "secret").unwrap();
        assert_eq!(config.key(), "key");
        assert_eq!(config.secret(), "secret");
        assert_eq!(config.base_url(), "https://api.paywhirl.com");
        assert!(config.verify_tls());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn empty_credentials_are_rejected() {
        assert!(matches!(Config::new("", "secret"), Err(Error::InvalidArgument(_))));
        assert!(matches!(Config::new("key", ""), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let config = Config::builder("key", "secret")
            .base_url("http://localhost:3000/")
            .verify_tls(false)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "http://localhost:3000");
        assert!(!config.verify_tls());
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn builder_rejects_empty_base_url() {
        let err = Config::builder("key", "secret").base_url("/").build().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn debug_redacts_secret() {
        let config = Config::new("public-key", "very-secret-value").unwrap();
        let printed = format!("{config:?}");
        assert!(printed.contains("public-key"));
        assert!(!printed.contains("very-secret-value"));
    }

    #[test]
    fn from_lookup_requires_credentials() {
        let err = Config::from_lookup(lookup_from(&[(ENV_KEY, "k")])).unwrap_err();
        assert!(matches!(err, Error::Configuration(ref msg) if msg.contains(ENV_SECRET)));

        let err = Config::from_lookup(lookup_from(&[(ENV_KEY, ""), (ENV_SECRET, "s")])).unwrap_err();
        assert!(matches!(err, Error::Configuration(ref msg) if msg.contains(ENV_KEY)));
    }

    #[test]
    fn from_lookup_reads_optional_settings() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_KEY, "k"),
            (ENV_SECRET, "s"),
            (ENV_BASE_URL, "https://staging.example.test/"),
            (ENV_VERIFY_TLS, "no"),
            (ENV_TIMEOUT_SECS, "12"),
        ]))
        .unwrap();
        assert_eq!(config.base_url(), "https://staging.example.test");
        assert!(!config.verify_tls());
        assert_eq!(config.timeout(), Some(Duration::from_secs(12)));
    }

    #[test]
    fn from_lookup_rejects_malformed_values() {
        let err = Config::from_lookup(lookup_from(&[
            (ENV_KEY, "k"),
            (ENV_SECRET, "s"),
            (ENV_VERIFY_TLS, "maybe"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let err = Config::from_lookup(lookup_from(&[
            (ENV_KEY, "k"),
            (ENV_SECRET, "s"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: Config = serde_json::from_str(r#"{"key":"k","secret":"s"}"#).unwrap();
        assert_eq!(config, Config::new("k", "s").unwrap());

        let config: Config = serde_json::from_str(
            r#"{"key":"k","secret":"s","base_url":"http://127.0.0.1:9/","verify_tls":false,"timeout_secs":3}"#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:9");
        assert!(!config.verify_tls());
        assert_eq!(config.timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn deserialization_enforces_invariants() {
        let result: std::result::Result<Config, _> = serde_json::from_str(r#"{"key":"","secret":"s"}"#);
        assert!(result.is_err());
    }
}
