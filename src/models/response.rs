//! HTTP response objects.
//!
//! A [`Response`] is filled in by
//! [`Client::make_raw_request`](crate::Client::make_raw_request) or returned
//! by [`Client::make_request`](crate::Client::make_request). The status code
//! is `0` until a response has been received.

use crate::client::error::Result;
use crate::client::pool::Reset;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

/// Represents an HTTP response received from a server.
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// HTTP status code (e.g., 200, 404, 500), or `0` before a response arrived.
    pub status_code: u16,

    /// Response headers as key-value pairs.
    ///
    /// Names are lower-case as normalized by the transport. Repeated headers
    /// are joined with `", "` in arrival order. Values that are not visible
    /// ASCII are skipped.
    pub headers: HashMap<String, String>,

    /// Response body as raw bytes.
    pub body: Vec<u8>,

    /// Time from sending the request until the body was fully read.
    pub duration: Duration,
}

impl Response {
    /// Creates an empty response with status code `0`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consumes the response, returning its status code and body.
    pub fn into_parts(self) -> (u16, Vec<u8>) {
        (self.status_code, self.body)
    }

    /// Checks if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Checks if the response status indicates a redirection (3xx).
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status_code)
    }

    /// Checks if the response status indicates a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// Checks if the response status indicates a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }

    /// Gets a header value by name, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Gets the Content-Type header value if present.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Attempts to parse the response body as UTF-8 text.
    pub fn body_as_string(&self) -> std::result::Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.clone())
    }

    /// Deserializes the JSON body into `T`.
    ///
    /// Fields are matched by name (or by `#[serde(rename)]`); unknown fields
    /// in the body are ignored unless `T` opts into
    /// `#[serde(deny_unknown_fields)]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the body is not valid
    /// JSON or does not match the shape of `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hc::Response;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Data {
    ///     #[serde(rename = "d1")]
    ///     data1: String,
    /// }
    ///
    /// let mut response = Response::new();
    /// response.body = br#"{"d1":"data1","d2":"data2"}"#.to_vec();
    ///
    /// let data: Data = response.read_json().unwrap();
    /// assert_eq!(data.data1, "data1");
    /// ```
    pub fn read_json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Deserializes the JSON body into an existing value.
    ///
    /// `out` is only overwritten when decoding succeeds.
    pub fn read_json_into<T: DeserializeOwned>(&self, out: &mut T) -> Result<()> {
        *out = self.read_json()?;
        Ok(())
    }

    /// Replaces the body with the JSON encoding of `value`.
    pub fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.body = serde_json::to_vec(value)?;
        Ok(())
    }
}

impl Reset for Response {
    fn reset(&mut self) {
        self.status_code = 0;
        self.headers.clear();
        self.body.clear();
        self.duration = Duration::ZERO;
    }
}
