//! Repository trait for the upstream employee store.

use crate::domain::entities::{Employee, EmployeeInput};
use crate::error::AppError;
use async_trait::async_trait;

/// Access to the employee records owned by the upstream service.
///
/// Each method maps to exactly one upstream request. Implementations must not
/// retry or cache.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::HttpEmployeeRepository`] - reqwest-backed upstream client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Lists every employee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the upstream answers with a non-success status.
    /// Returns [`AppError::BadGateway`] on transport or decoding failures.
    async fn find_all(&self) -> Result<Vec<Employee>, AppError>;

    /// Lists employees whose name contains `search`, as decided by the upstream.
    ///
    /// # Errors
    ///
    /// Same as [`EmployeeRepository::find_all`].
    async fn search_by_name(&self, search: &str) -> Result<Vec<Employee>, AppError>;

    /// Finds an employee by its upstream identifier.
    ///
    /// Returns `Ok(None)` when the upstream answers with any 4xx status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on 5xx responses.
    /// Returns [`AppError::BadGateway`] on transport or decoding failures.
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError>;

    /// Returns the highest salary across all employees.
    ///
    /// # Errors
    ///
    /// Same as [`EmployeeRepository::find_all`].
    async fn highest_salary(&self) -> Result<i32, AppError>;

    /// Returns the names of the ten highest earners, highest first.
    ///
    /// # Errors
    ///
    /// Same as [`EmployeeRepository::find_all`].
    async fn top_ten_earner_names(&self) -> Result<Vec<String>, AppError>;

    /// Creates an employee and returns the record with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] carrying the upstream status and body when
    /// the upstream rejects the input.
    /// Returns [`AppError::BadGateway`] on transport or decoding failures.
    async fn create(&self, input: EmployeeInput) -> Result<Employee, AppError>;

    /// Deletes an employee and returns the upstream's confirmation text verbatim.
    ///
    /// # Errors
    ///
    /// Same as [`EmployeeRepository::find_all`].
    async fn delete(&self, id: &str) -> Result<String, AppError>;

    /// Reports whether the upstream answers HTTP at all.
    ///
    /// Any response status counts as reachable.
    async fn is_reachable(&self) -> bool;
}
