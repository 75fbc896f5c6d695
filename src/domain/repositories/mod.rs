//! Repository trait definitions for the domain layer.
//!
//! The upstream employee service is the only data source, so the single
//! repository here describes its contract. The HTTP implementation lives in
//! `crate::infrastructure::upstream`; a `mockall` mock is generated for tests.

pub mod employee_repository;

pub use employee_repository::EmployeeRepository;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
