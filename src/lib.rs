//! # Employee Gateway
//!
//! A thin REST gateway that relays employee CRUD requests to an upstream
//! employee service, built with Axum and reqwest.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Employee entities and the upstream repository trait
//! - **Application Layer** ([`application`]) - Employee relay service
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest client for the upstream
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Behaviour
//!
//! Each endpoint issues exactly one upstream request and relays the result.
//! The only translated error is a 4xx on get-by-id, which becomes 404 Not
//! Found. Other upstream failures keep the upstream status; transport
//! failures become 502 Bad Gateway. Nothing is cached or retried.
//!
//! ## Quick Start
//!
//! ```bash
//! export UPSTREAM_BASE_URL="http://localhost:8112/api/v1/employee"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::EmployeeService;
    pub use crate::domain::entities::{Employee, EmployeeInput};
    pub use crate::error::AppError;
    pub use crate::infrastructure::upstream::HttpEmployeeRepository;
    pub use crate::state::AppState;
}
