//! Services for the application layer.

pub mod employee_service;

pub use employee_service::EmployeeService;
