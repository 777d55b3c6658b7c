//! Single entry point for backend HTTP calls.
//!
//! DESIGN
//! ======
//! Every backend endpoint answers with the same `{message, data?}` envelope,
//! so encoding, credential handling and failure classification live here
//! once instead of at each call site.
//!
//! ERROR HANDLING
//! ==============
//! Any non-success outcome is returned as a [`DispatchError`]; nothing is
//! swallowed. Callers decide whether a failure is exceptional.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::collections::BTreeMap;
use std::rc::Rc;

use leptos::prelude::{LocalStorage, StoredValue};
use serde::de::DeserializeOwned;

use super::transport::{HttpRequest, Method, Transport};
use super::types::{Envelope, ErrorEnvelope};
use crate::config::ApiConfig;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Errors produced by [`Dispatcher::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// No response was received.
    #[error("network error: {cause}")]
    Network { cause: String },

    /// A response arrived with a status outside `200..300`.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A success response body was not a valid envelope.
    #[error("response parse failed: {cause}")]
    Parse { cause: String },

    /// The request body could not be encoded; nothing was sent.
    #[error("request encode failed: {cause}")]
    Encode { cause: String },
}

/// How a request body goes on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
    #[default]
    Json,
    Form,
}

/// Per-call request options.
#[derive(Clone, Debug, PartialEq)]
pub struct DispatchOptions {
    pub method: Method,
    pub body: Option<serde_json::Value>,
    pub encoding: Encoding,
    pub headers: BTreeMap<String, String>,
}

impl DispatchOptions {
    pub fn new(method: Method) -> Self {
        Self { method, body: None, encoding: Encoding::Json, headers: BTreeMap::new() }
    }

    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    pub fn post() -> Self {
        Self::new(Method::Post)
    }

    pub fn put() -> Self {
        Self::new(Method::Put)
    }

    pub fn delete() -> Self {
        Self::new(Method::Delete)
    }

    /// Send `body` as JSON text.
    #[must_use]
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self.encoding = Encoding::Json;
        self
    }

    /// Send `body` (a flat JSON object) as `key=value` form pairs.
    #[must_use]
    pub fn form(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self.encoding = Encoding::Form;
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Context handle for the dispatcher; it holds an `Rc` transport.
pub type DispatcherHandle = StoredValue<Dispatcher, LocalStorage>;

/// Issues backend calls against the configured base URL.
#[derive(Clone)]
pub struct Dispatcher {
    base: ApiConfig,
    transport: Rc<dyn Transport>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").field("base_url", &self.base.base_url).finish_non_exhaustive()
    }
}

impl Dispatcher {
    pub fn new(config: &ApiConfig, transport: Rc<dyn Transport>) -> Self {
        Self { base: config.clone(), transport }
    }

    /// Send one request to `path` and unwrap the response envelope.
    ///
    /// Returns the envelope's `data`, which is `None` when the backend sent
    /// none (or no body at all).
    ///
    /// # Errors
    ///
    /// - [`DispatchError::Encode`] if the body cannot be encoded.
    /// - [`DispatchError::Network`] if no response was received.
    /// - [`DispatchError::Http`] for a status outside `200..300`.
    /// - [`DispatchError::Parse`] for a malformed success body.
    pub async fn dispatch<T: DeserializeOwned>(
        &self,
        path: &str,
        options: DispatchOptions,
    ) -> Result<Option<T>, DispatchError> {
        let request = self.build_request(path, options)?;
        let method = request.method;

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| DispatchError::Network { cause: e.to_string() })?;

        if !is_success(response.status) {
            let message = failure_message(response.status, &response.body);
            leptos::logging::warn!("{} {path} failed: {} {message}", method.as_str(), response.status);
            return Err(DispatchError::Http { status: response.status, message });
        }

        let envelope = parse_envelope::<T>(&response.body)?;
        if !envelope.message.is_empty() {
            leptos::logging::log!("{}", envelope.message);
        }
        Ok(envelope.data)
    }

    fn build_request(&self, path: &str, options: DispatchOptions) -> Result<HttpRequest, DispatchError> {
        let DispatchOptions { method, body, encoding, mut headers } = options;
        let body = match body {
            Some(value) => {
                let (content_type, text) = encode_body(&value, encoding)?;
                headers.insert(CONTENT_TYPE.to_owned(), content_type.to_owned());
                Some(text)
            }
            None => None,
        };
        Ok(HttpRequest { method, url: self.base.url_for(path), headers, body })
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Encode `body` per `encoding`, returning the content type and wire text.
fn encode_body(body: &serde_json::Value, encoding: Encoding) -> Result<(&'static str, String), DispatchError> {
    match encoding {
        Encoding::Json => Ok((JSON_CONTENT_TYPE, body.to_string())),
        Encoding::Form => {
            let serde_json::Value::Object(fields) = body else {
                return Err(DispatchError::Encode { cause: "form body must be a JSON object".to_owned() });
            };
            let mut form = url::form_urlencoded::Serializer::new(String::new());
            for (key, value) in fields {
                let text = match value {
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Null => String::new(),
                    serde_json::Value::Bool(_) | serde_json::Value::Number(_) => value.to_string(),
                    serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                        return Err(DispatchError::Encode { cause: format!("form field `{key}` is not a scalar") });
                    }
                };
                form.append_pair(key, &text);
            }
            Ok((FORM_CONTENT_TYPE, form.finish()))
        }
    }
}

/// Message for a non-2xx response: the envelope's `message` when present.
fn failure_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with {status}"))
}

fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<Envelope<T>, DispatchError> {
    if body.trim().is_empty() {
        return Ok(Envelope { message: String::new(), data: None });
    }
    serde_json::from_str(body).map_err(|e| DispatchError::Parse { cause: e.to_string() })
}
