//! HTTP request handlers for API endpoints.

pub mod employees;
pub mod health;

pub use employees::{
    create_employee_handler, delete_employee_handler, get_employee_handler,
    highest_salary_handler, list_employees_handler, search_employees_handler,
    top_ten_earners_handler,
};
pub use health::health_handler;
