//! Free functions over a process-wide default client.
//!
//! The default [`Client`] is built lazily on first use with no timeouts.
//! All functions here share it, so a timeout set through
//! [`set_read_timeout`] applies to every later call in the process. Code
//! that needs independent settings should construct its own [`Client`].

use crate::client::config::DEFAULT_POOL_CAPACITY;
use crate::client::{Client, Pool, Result};
use crate::models::{Headers, Method, Request, Response};
use once_cell::sync::{Lazy, OnceCell};
use std::time::Duration;

static DEFAULT_CLIENT: OnceCell<Client> = OnceCell::new();

// Objects handed out by the free acquire functions. Kept apart from the
// default client so acquiring never has to build it.
static REQUESTS: Lazy<Pool<Request>> = Lazy::new(|| Pool::new(DEFAULT_POOL_CAPACITY));
static RESPONSES: Lazy<Pool<Response>> = Lazy::new(|| Pool::new(DEFAULT_POOL_CAPACITY));

/// Returns the process-wide client, building it on first use.
///
/// # Errors
///
/// Returns a transport error if the underlying client cannot be initialized.
/// A later call retries the initialization.
pub fn default_client() -> Result<&'static Client> {
    DEFAULT_CLIENT.get_or_try_init(|| {
        log::debug!("initializing default client");
        Client::new()
    })
}

/// Sends a GET request and returns the status code and body.
///
/// # Examples
///
/// ```no_run
/// # fn example() -> Result<(), hc::Error> {
/// let (status, body) = hc::get("http://localhost:8080/users/1")?;
/// assert_eq!(status, 200);
/// # let _ = body;
/// # Ok(())
/// # }
/// ```
pub fn get(url: &str) -> Result<(u16, Vec<u8>)> {
    default_client()?.get(url)
}

/// Sends a POST request with `body` and optional `headers`.
pub fn post(
    url: &str,
    body: impl Into<Vec<u8>>,
    headers: Option<&Headers>,
) -> Result<(u16, Vec<u8>)> {
    default_client()?.post(url, body, headers)
}

/// Sends a PUT request with `body` and optional `headers`.
pub fn put(
    url: &str,
    body: impl Into<Vec<u8>>,
    headers: Option<&Headers>,
) -> Result<(u16, Vec<u8>)> {
    default_client()?.put(url, body, headers)
}

/// Sends a DELETE request with `body` and optional `headers`.
pub fn delete(
    url: &str,
    body: impl Into<Vec<u8>>,
    headers: Option<&Headers>,
) -> Result<(u16, Vec<u8>)> {
    default_client()?.delete(url, body, headers)
}

/// See [`Client::make_request`].
pub fn make_request(
    method: Method,
    url: &str,
    body: impl Into<Vec<u8>>,
    headers: Option<&Headers>,
) -> Result<Response> {
    default_client()?.make_request(method, url, body, headers)
}

/// See [`Client::make_raw_request`].
pub fn make_raw_request(request: &Request, response: &mut Response) -> Result<()> {
    default_client()?.make_raw_request(request, response)
}

/// Returns a request in its initial state.
pub fn acquire_request() -> Request {
    REQUESTS.acquire()
}

/// Returns a response in its initial state.
pub fn acquire_response() -> Response {
    RESPONSES.acquire()
}

/// Resets `request` and keeps it for a later [`acquire_request`].
pub fn release_request(request: Request) {
    REQUESTS.release(request);
}

/// Resets `response` and keeps it for a later [`acquire_response`].
pub fn release_response(response: Response) {
    RESPONSES.release(response);
}

/// Sets the read timeout of the default client.
pub fn set_read_timeout(timeout: Duration) -> Result<()> {
    default_client()?.set_read_timeout(timeout);
    Ok(())
}

/// Sets the write timeout of the default client.
pub fn set_write_timeout(timeout: Duration) -> Result<()> {
    default_client()?.set_write_timeout(timeout);
    Ok(())
}
