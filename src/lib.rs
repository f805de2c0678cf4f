//! hc: shortcuts for a blocking HTTP client
//!
//! This crate wraps the `reqwest` blocking client with one-call helpers for
//! the common HTTP verbs, reusable request/response objects and JSON helpers
//! on those objects.
//!
//! # Architecture
//!
//! - **models**: [`Request`], [`Response`], [`Headers`] and [`Method`]
//! - **client**: [`Client`] with its timeouts, object pools and error types
//! - **shortcuts**: free functions bound to a process-wide default client
//!
//! # Usage
//!
//! One-call helpers return the status code and the body:
//!
//! ```no_run
//! use hc::Headers;
//!
//! # fn example() -> Result<(), hc::Error> {
//! let (status, body) = hc::get("http://localhost:8080/users")?;
//!
//! let mut headers = Headers::new();
//! headers.add("Content-Type", "application/json");
//! let (status, body) = hc::post(
//!     "http://localhost:8080/users",
//!     r#"{"name": "John"}"#,
//!     Some(&headers),
//! )?;
//! # let _ = (status, body);
//! # Ok(())
//! # }
//! ```
//!
//! For full control over the request, acquire a [`Request`] and a
//! [`Response`], configure the request and send it with
//! [`make_raw_request`]. Code that needs its own timeouts builds a
//! [`Client`] instead of using the free functions.

pub mod client;
pub mod models;
pub mod shortcuts;

pub use client::{Client, ClientConfig, Error, Result, Timeouts};
pub use models::{Headers, Method, Request, Response};
pub use shortcuts::{
    acquire_request, acquire_response, default_client, delete, get, make_raw_request,
    make_request, post, put, release_request, release_response, set_read_timeout,
    set_write_timeout,
};
