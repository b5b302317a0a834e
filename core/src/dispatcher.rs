//! Turns a verb, a path and parameters into one HTTP call.
//!
//! # Design
//! The dispatcher holds an immutable [`Config`] and a [`Transport`]. Request
//! building ([`Dispatcher::build_request`]) and body decoding
//! ([`decode_body`]) are pure; the transport performs the only
//! I/O. The HTTP status is never turned into an error: whatever JSON the
//! service returns is handed back as-is.

use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::http::{find_header, HttpMethod, HttpRequest, HttpResponse};
use crate::params::Params;
use crate::transport::{Transport, UreqTransport};

pub const API_KEY_HEADER: &str = "api-key";
pub const API_SECRET_HEADER: &str = "api-secret";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Decoded body together with the status and headers it arrived with.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First response header with the given name, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// Single-shot request executor shared by every resource method.
#[derive(Debug, Clone)]
pub struct Dispatcher<T = UreqTransport> {
    config: Config,
    transport: T,
}

impl Dispatcher<UreqTransport> {
    pub fn new(config: Config) -> Self {
        let transport = UreqTransport::new(&config);
        Self { config, transport }
    }
}

impl<T: Transport> Dispatcher<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the request for `method` without sending it.
    ///
    /// GET appends `params` as a query string, POST and PATCH send them as a
    /// form body, DELETE drops them.
    pub fn build_request(&self, method: HttpMethod, path: &str, params: Option<&Params>) -> HttpRequest {
        let mut url = format!("{}{}", self.config.base_url(), path);
        let mut headers = vec![
            (API_KEY_HEADER.to_string(), self.config.key().to_string()),
            (API_SECRET_HEADER.to_string(), self.config.secret().to_string()),
        ];
        let mut body = None;

        match method {
            HttpMethod::Get => {
                if let Some(query) = params.map(Params::encode).filter(|q| !q.is_empty()) {
                    url.push('?');
                    url.push_str(&query);
                }
            }
            HttpMethod::Post | HttpMethod::Patch => {
                headers.push(("content-type".to_string(), FORM_CONTENT_TYPE.to_string()));
                body = Some(params.map(Params::encode).unwrap_or_default());
            }
            HttpMethod::Delete => {}
        }

        HttpRequest {
            method,
            url,
            headers,
            body,
        }
    }

    /// Execute one request and return the decoded body with its status.
    ///
    /// # Errors
    ///
    /// `Transport` if no response was received, `Decode` if the body is
    /// non-empty and not JSON.
    pub fn send(&self, method: HttpMethod, path: &str, params: Option<&Params>) -> Result<ApiResponse> {
        let request = self.build_request(method, path, params);
        debug!(%method, path, "dispatching request");

        let response = self.transport.execute(&request)?;
        debug!(%method, path, status = response.status, bytes = response.body.len(), "response received");

        let body = decode_body(&response)?;
        Ok(ApiResponse {
            status: response.status,
            headers: response.headers,
            body,
        })
    }

    /// Execute one request and return the decoded body, whatever the status.
    pub fn call(&self, method: HttpMethod, path: &str, params: Option<&Params>) -> Result<Value> {
        self.send(method, path, params).map(|response| response.body)
    }

    /// String-verb entry point.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for anything other than GET, POST, PATCH or DELETE;
    /// no request is made in that case.
    pub fn request(&self, verb: &str, path: &str, params: Option<&Params>) -> Result<Value> {
        let method: HttpMethod = verb.parse()?;
        self.call(method, path, params)
    }
}

/// Decode a response body. An empty body is `null`; anything else that is
/// not JSON, invalid UTF-8 included, is a `Decode` error.
pub fn decode_body(response: &HttpResponse) -> Result<Value> {
    if response.body.trim_ascii().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(&response.body)?)
}
