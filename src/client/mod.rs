//! Blocking HTTP client with one-call shortcuts.
//!
//! [`Client`] wraps a `reqwest` blocking client together with the read/write
//! timeouts applied to every send and the pools that recycle [`Request`] and
//! [`Response`] objects. Every operation is a single synchronous round trip:
//! no retries, and transport errors are returned unchanged.

pub mod config;
pub mod error;
pub mod pool;

pub use config::{ClientConfig, Timeouts};
pub use error::{Error, Result};
pub use pool::{Pool, Reset};

use crate::models::{Headers, Method, Request, Response};
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// HTTP client holding shared timeouts and object pools.
///
/// `Client` is `Send + Sync`; wrap it in an `Arc` to share it between
/// threads. Timeout changes apply to sends started after the setter returns.
#[derive(Debug)]
pub struct Client {
    http: reqwest::blocking::Client,
    timeouts: RwLock<Timeouts>,
    requests: Pool<Request>,
    responses: Pool<Response>,
}

impl Client {
    /// Creates a client with no timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the underlying client cannot be
    /// initialized (e.g. the TLS backend fails to load).
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from explicit settings.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hc::{Client, ClientConfig};
    /// use std::time::Duration;
    ///
    /// # fn example() -> Result<(), hc::Error> {
    /// let config = ClientConfig::default().with_read_timeout(Duration::from_secs(5));
    /// let client = Client::with_config(config)?;
    ///
    /// let (status, body) = client.get("http://localhost:8080/health")?;
    /// println!("{} {}", status, String::from_utf8_lossy(&body));
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        // reqwest defaults to a 30s deadline; timeouts are applied per send instead.
        // Bodies are returned as sent, so no transparent decompression.
        let mut builder = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .no_gzip()
            .no_brotli()
            .no_deflate();
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self {
            http: builder.build()?,
            timeouts: RwLock::new(config.timeouts),
            requests: Pool::new(config.pool_capacity),
            responses: Pool::new(config.pool_capacity),
        })
    }

    /// Returns a copy of the current timeouts.
    pub fn timeouts(&self) -> Timeouts {
        match self.timeouts.read() {
            Ok(timeouts) => *timeouts,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn read_timeout(&self) -> Duration {
        self.timeouts().read_timeout
    }

    pub fn write_timeout(&self) -> Duration {
        self.timeouts().write_timeout
    }

    /// Sets the maximum time to wait for a response. Zero disables it.
    pub fn set_read_timeout(&self, timeout: Duration) {
        self.update_timeouts(|t| t.read_timeout = timeout);
    }

    /// Sets the maximum time to spend sending a request. Zero disables it.
    pub fn set_write_timeout(&self, timeout: Duration) {
        self.update_timeouts(|t| t.write_timeout = timeout);
    }

    fn update_timeouts<F>(&self, updater: F)
    where
        F: FnOnce(&mut Timeouts),
    {
        match self.timeouts.write() {
            Ok(mut timeouts) => updater(&mut *timeouts),
            Err(poisoned) => updater(&mut *poisoned.into_inner()),
        }
    }

    /// Returns a request in its initial state, recycled when possible.
    pub fn acquire_request(&self) -> Request {
        self.requests.acquire()
    }

    /// Returns a response in its initial state, recycled when possible.
    pub fn acquire_response(&self) -> Response {
        self.responses.acquire()
    }

    /// Resets `request` and keeps it for a later [`acquire_request`](Self::acquire_request).
    pub fn release_request(&self, request: Request) {
        self.requests.release(request);
    }

    /// Resets `response` and keeps it for a later [`acquire_response`](Self::acquire_response).
    pub fn release_response(&self, response: Response) {
        self.responses.release(response);
    }

    /// Sends a GET request and returns the status code and body.
    pub fn get(&self, url: &str) -> Result<(u16, Vec<u8>)> {
        self.shortcut(Method::GET, url, Vec::new(), None)
    }

    /// Sends a POST request with `body` and `headers`.
    pub fn post(
        &self,
        url: &str,
        body: impl Into<Vec<u8>>,
        headers: Option<&Headers>,
    ) -> Result<(u16, Vec<u8>)> {
        self.shortcut(Method::POST, url, body, headers)
    }

    /// Sends a PUT request with `body` and `headers`.
    pub fn put(
        &self,
        url: &str,
        body: impl Into<Vec<u8>>,
        headers: Option<&Headers>,
    ) -> Result<(u16, Vec<u8>)> {
        self.shortcut(Method::PUT, url, body, headers)
    }

    /// Sends a DELETE request with `body` and `headers`.
    pub fn delete(
        &self,
        url: &str,
        body: impl Into<Vec<u8>>,
        headers: Option<&Headers>,
    ) -> Result<(u16, Vec<u8>)> {
        self.shortcut(Method::DELETE, url, body, headers)
    }

    fn shortcut(
        &self,
        method: Method,
        url: &str,
        body: impl Into<Vec<u8>>,
        headers: Option<&Headers>,
    ) -> Result<(u16, Vec<u8>)> {
        self.make_request(method, url, body, headers)
            .map(Response::into_parts)
    }

    /// Builds a request from the arguments, sends it and returns the response.
    ///
    /// Each entry in `headers` overwrites any prior value for its name. No
    /// response is returned when the send fails.
    ///
    /// # Errors
    ///
    /// Returns a transport error ([`Error::is_transport`]) if the URL is
    /// invalid, a header cannot be encoded, or the exchange fails.
    pub fn make_request(
        &self,
        method: Method,
        url: &str,
        body: impl Into<Vec<u8>>,
        headers: Option<&Headers>,
    ) -> Result<Response> {
        let mut request = self.acquire_request();
        request.set_method(method);
        request.set_request_uri(url);
        request.set_body(body);
        if let Some(headers) = headers {
            if let Err(e) = request.apply_headers(headers) {
                self.release_request(request);
                return Err(e);
            }
        }

        let mut response = self.acquire_response();
        let result = self.make_raw_request(&request, &mut response);
        self.release_request(request);

        match result {
            Ok(()) => Ok(response),
            Err(e) => {
                self.release_response(response);
                Err(e)
            }
        }
    }

    /// Sends `request` as-is and fills `response` with the result.
    ///
    /// `response` is reset first. If the exchange fails after the status line
    /// arrived, the status code and headers stay populated and the body holds
    /// whatever was read.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hc::{Client, Method};
    /// use serde_json::json;
    ///
    /// # fn example() -> Result<(), hc::Error> {
    /// let client = Client::new()?;
    /// let mut request = client.acquire_request();
    /// let mut response = client.acquire_response();
    ///
    /// request.set_method(Method::POST);
    /// request.set_request_uri("http://localhost:8080/items");
    /// request.write_json(&json!({"data": "good data"}))?;
    ///
    /// client.make_raw_request(&request, &mut response)?;
    /// println!("Status: {}", response.status_code);
    /// # Ok(())
    /// # }
    /// ```
    pub fn make_raw_request(&self, request: &Request, response: &mut Response) -> Result<()> {
        response.reset();
        let url = validate_url(request.uri())?;
        let timeouts = self.timeouts();

        let mut builder = self
            .http
            .request(request.method().into(), url)
            .headers(request.headers().clone());
        if request.has_body() {
            builder = builder.body(request.body().to_vec());
        }
        if let Some(deadline) = timeouts.request_deadline() {
            builder = builder.timeout(deadline);
        }

        let started = Instant::now();
        let mut reply = builder.send().map_err(|e| {
            log::warn!("{} {} failed: {}", request.method(), request.uri(), e);
            Error::Transport(e)
        })?;

        response.status_code = reply.status().as_u16();
        for (name, value) in reply.headers() {
            if let Ok(value) = value.to_str() {
                response
                    .headers
                    .entry(name.as_str().to_string())
                    .and_modify(|existing| {
                        existing.push_str(", ");
                        existing.push_str(value);
                    })
                    .or_insert_with(|| value.to_string());
            }
        }

        let read = reply.copy_to(&mut response.body);
        response.duration = started.elapsed();
        if let Err(e) = read {
            log::warn!(
                "{} {}: reading body failed after {} bytes: {}",
                request.method(),
                request.uri(),
                response.body.len(),
                e
            );
            return Err(Error::Transport(e));
        }

        log::debug!(
            "{} {} -> {} ({} bytes in {:?})",
            request.method(),
            request.uri(),
            response.status_code,
            response.body.len(),
            response.duration
        );
        Ok(())
    }
}

/// Validates that the URL is well-formed and uses http or https.
fn validate_url(url: &str) -> Result<url::Url> {
    let parsed = url::Url::parse(url)?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(Error::InvalidUrl(format!(
            "only http and https are supported, got: {}",
            scheme
        )));
    }

    Ok(parsed)
}
