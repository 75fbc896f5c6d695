//! Handlers for the employee relay endpoints.
//!
//! Each handler forwards to exactly one upstream call through
//! [`crate::application::services::EmployeeService`] and returns the result
//! unchanged.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::domain::entities::{Employee, EmployeeInput};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all employees.
///
/// # Endpoint
///
/// `GET /api/v1/employee`
pub async fn list_employees_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = state.employee_service.list_employees().await?;
    Ok(Json(employees))
}

/// Lists employees whose name matches a search fragment.
///
/// # Endpoint
///
/// `GET /api/v1/employee/search/{searchString}`
pub async fn search_employees_handler(
    State(state): State<AppState>,
    Path(search): Path<String>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = state.employee_service.search_employees(&search).await?;
    Ok(Json(employees))
}

/// Returns one employee.
///
/// # Endpoint
///
/// `GET /api/v1/employee/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the upstream answers with any 4xx.
pub async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, AppError> {
    let employee = state.employee_service.get_employee(&id).await?;
    Ok(Json(employee))
}

/// Returns the highest salary as a bare JSON integer.
///
/// # Endpoint
///
/// `GET /api/v1/employee/highestSalary`
pub async fn highest_salary_handler(
    State(state): State<AppState>,
) -> Result<Json<i32>, AppError> {
    Ok(Json(state.employee_service.highest_salary().await?))
}

/// Returns the names of the ten highest earners.
///
/// # Endpoint
///
/// `GET /api/v1/employee/topTenHighestEarningEmployeeNames`
pub async fn top_ten_earners_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.employee_service.top_ten_earner_names().await?))
}

/// Creates an employee.
///
/// # Endpoint
///
/// `POST /api/v1/employee`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Jill Jenkins",
///   "salary": 139082,
///   "age": 48,
///   "title": "Financial Advisor"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a well-formed `EmployeeInput`.
/// Upstream rejections are relayed with the upstream's status.
pub async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<Json<Employee>, AppError> {
    let Json(input) = payload?;
    let employee = state.employee_service.create_employee(input).await?;
    Ok(Json(employee))
}

/// Deletes an employee.
///
/// # Endpoint
///
/// `DELETE /api/v1/employee/{id}`
///
/// # Response
///
/// The upstream's confirmation body as `text/plain`.
pub async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, AppError> {
    state.employee_service.delete_employee(&id).await
}
