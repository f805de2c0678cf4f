//! Data models for HTTP requests and responses.
//!
//! This module contains the request, response and header types handed to and
//! returned from the [`Client`](crate::Client).

pub mod headers;
pub mod method;
pub mod request;
pub mod response;

pub use headers::Headers;
pub use method::Method;
pub use request::Request;
pub use response::Response;
