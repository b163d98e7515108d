//! # Bookstore Backend Library
//!
//! A REST API exposing create/read/update/delete over a single "book" resource
//! stored in SQLite, with every write payload validated against a declared
//! schema before it reaches the database.
//!
//! ## Architecture
//!
//! - **Axum**: HTTP server and routing
//! - **SQLx**: asynchronous SQLite access
//! - **Tokio**: async runtime
//! - **Serde**: JSON (de)serialization
//!
//! ## Core Components
//!
//! - [`config`]: layered configuration loading
//! - [`db`]: pool setup and table bootstrap
//! - [`error`]: application error type and its HTTP mapping
//! - [`metrics`]: book lifecycle counters
//! - [`middleware`]: security headers
//! - [`routes`]: HTTP handlers and the router
//! - [`schema`]: create/update payload schemas
//! - [`state`]: shared application state
//! - [`store`]: the book table
//! - [`types`]: the `Book` model and response envelopes
//! - [`validator`]: schema validation of untrusted payloads

pub mod config;
pub mod db;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod schema;
pub mod state;
pub mod store;
pub mod types;
pub mod validator;

#[cfg(test)]
mod tests;
