//! REST API layer for HTTP request/response handling.
//!
//! Translates inbound HTTP requests into employee service calls and formats
//! the relayed results.
//!
//! # Modules
//!
//! - [`dto`] - Response types owned by the gateway
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
