//! Outgoing request objects.
//!
//! A [`Request`] is a mutable description of what will be sent: method, URI,
//! headers and body. Requests are normally obtained from
//! [`Client::acquire_request`](crate::Client::acquire_request), configured by
//! the caller and then handed to
//! [`Client::make_raw_request`](crate::Client::make_raw_request).

use crate::client::error::{Error, Result};
use crate::client::pool::Reset;
use crate::models::headers::Headers;
use crate::models::method::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::Serialize;

/// An outgoing HTTP request.
#[derive(Debug, Clone, Default)]
pub struct Request {
    method: Method,
    uri: String,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Request {
    /// Creates an empty GET request with no URI.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Sets the target URI. The URI is validated when the request is sent.
    pub fn set_request_uri(&mut self, uri: impl Into<String>) {
        self.uri = uri.into();
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Replaces the request body.
    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        self.body = body.into();
    }

    /// Returns the body buffer for appending, e.g. through `std::io::Write`.
    pub fn body_writer(&mut self) -> &mut Vec<u8> {
        &mut self.body
    }

    /// Checks if the request has a non-empty body.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Gets a header value by name, ignoring case.
    ///
    /// Returns `None` when the header is absent or its value is not visible
    /// ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Gets the Content-Type header value if present.
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE.as_str())
    }

    /// Sets a header, replacing any existing value for the same name.
    ///
    /// Header names are case-insensitive, so `Content-Type` and
    /// `content-type` refer to the same header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHeader`] if the name or value cannot be sent
    /// on the wire.
    pub fn set_header(&mut self, name: &str, value: &str) -> Result<()> {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::InvalidHeader(format!("{}: {}", name, e)))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| Error::InvalidHeader(format!("{}: {}", name, e)))?;
        self.headers.insert(header_name, header_value);
        Ok(())
    }

    /// Merges `headers` onto the request, each entry overwriting any prior
    /// value for its name.
    pub fn apply_headers(&mut self, headers: &Headers) -> Result<()> {
        for (name, value) in headers {
            self.set_header(name, value)?;
        }
        Ok(())
    }

    /// Serializes `value` as JSON and appends it to the request body.
    ///
    /// `Content-Type: application/json` is set unless the request already
    /// carries a content type. On error the request is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if `value` cannot be represented as JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use hc::{Method, Request};
    /// use serde_json::json;
    ///
    /// let mut request = Request::new();
    /// request.set_method(Method::POST);
    /// request.write_json(&json!({"data": "good data"})).unwrap();
    ///
    /// assert_eq!(request.body(), br#"{"data":"good data"}"#);
    /// assert_eq!(request.content_type(), Some("application/json"));
    /// ```
    pub fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let encoded = serde_json::to_vec(value)?;
        if !self.headers.contains_key(CONTENT_TYPE) {
            self.headers
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        self.body.extend_from_slice(&encoded);
        Ok(())
    }
}

impl Reset for Request {
    fn reset(&mut self) {
        self.method = Method::default();
        self.uri.clear();
        self.headers.clear();
        self.body.clear();
    }
}
