//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`upstream`] - HTTP client for the upstream employee service

pub mod upstream;
