//! Employee route configuration.

use crate::api::handlers::{
    create_employee_handler, delete_employee_handler, get_employee_handler,
    highest_salary_handler, list_employees_handler, search_employees_handler,
    top_ten_earners_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Employee routes, relative to the mount point (`/api/v1/employee`).
///
/// # Endpoints
///
/// - `GET    /`                                  - List all employees
/// - `POST   /`                                  - Create an employee
/// - `GET    /search/{searchString}`             - Search employees by name
/// - `GET    /highestSalary`                     - Highest salary
/// - `GET    /topTenHighestEarningEmployeeNames` - Names of the ten top earners
/// - `GET    /{id}`                              - Get one employee
/// - `DELETE /{id}`                              - Delete an employee
///
/// The literal segments take precedence over `/{id}`.
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route("/search/{search}", get(search_employees_handler))
        .route("/highestSalary", get(highest_salary_handler))
        .route(
            "/topTenHighestEarningEmployeeNames",
            get(top_ten_earners_handler),
        )
        .route(
            "/{id}",
            get(get_employee_handler).delete(delete_employee_handler),
        )
}
