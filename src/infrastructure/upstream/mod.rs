//! Client for the upstream employee service.
//!
//! Provides [`HttpEmployeeRepository`], the reqwest implementation of
//! [`crate::domain::repositories::EmployeeRepository`], and the
//! [`UpstreamError`] it raises before errors are converted to
//! [`crate::error::AppError`].

mod error;
mod http_employee_repository;

pub use error::UpstreamError;
pub use http_employee_repository::HttpEmployeeRepository;
