//! Application layer services.
//!
//! Services consume repository traits and provide the operation-level API
//! used by HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::employee_service::EmployeeService`] - Employee relay operations

pub mod services;
