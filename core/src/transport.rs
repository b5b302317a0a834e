//! Execution of a built `HttpRequest`.
//!
//! The default transport is blocking `ureq`. A fresh agent is built for each
//! request, so no connection or TLS state outlives a call.

use tracing::warn;
use ureq::tls::TlsConfig;
use ureq::Agent;

use crate::config::Config;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Performs exactly one HTTP round-trip.
///
/// Implementations must hand back 4xx/5xx responses as `Ok` data; only
/// failures to obtain a response are errors.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        (**self).execute(request)
    }
}

/// `ureq`-backed transport honouring `verify_tls` and `timeout`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    verify_tls: bool,
    timeout: Option<std::time::Duration>,
}

impl UreqTransport {
    pub fn new(config: &Config) -> Self {
        Self {
            verify_tls: config.verify_tls(),
            timeout: config.timeout(),
        }
    }

    fn agent(&self) -> Agent {
        let mut builder = Agent::config_builder().http_status_as_error(false);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout_global(Some(timeout));
        }
        if !self.verify_tls {
            builder = builder.tls_config(TlsConfig::builder().disable_verification(true).build());
        }
        builder.build().new_agent()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let agent = self.agent();

        let result = match request.method {
            HttpMethod::Get => {
                let mut builder = agent.get(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Delete => {
                let mut builder = agent.delete(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post | HttpMethod::Patch => {
                let mut builder = if request.method == HttpMethod::Post {
                    agent.post(&request.url)
                } else {
                    agent.patch(&request.url)
                };
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.send(request.body.as_deref().unwrap_or_default().as_bytes())
            }
        };

        let mut response = result.inspect_err(|err| {
            warn!(method = %request.method, error = %err, "request failed before a response arrived");
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        // No size cap: a response that arrived in full is handed to decoding.
        let body = response.body_mut().with_config().limit(u64::MAX).read_to_vec()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
