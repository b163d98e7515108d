//! Middleware components for HTTP request processing.

pub mod security_headers;
