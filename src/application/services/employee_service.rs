//! Employee relay service.

use crate::domain::entities::{Employee, EmployeeInput};
use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service exposing the employee operations to handlers and the admin CLI.
///
/// Every call is a single relay to the repository. The only translation done
/// here is turning a missing employee into [`AppError::NotFound`]; all other
/// errors pass through untouched.
pub struct EmployeeService<R: EmployeeRepository> {
    repository: Arc<R>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a new employee service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every employee known to the upstream.
    ///
    /// # Errors
    ///
    /// Propagates upstream failures unchanged.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        self.repository.find_all().await
    }

    /// Lists employees matching a name fragment.
    ///
    /// # Errors
    ///
    /// Propagates upstream failures unchanged.
    pub async fn search_employees(&self, search: &str) -> Result<Vec<Employee>, AppError> {
        self.repository.search_by_name(search).await
    }

    /// Retrieves one employee by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the upstream does not know the id.
    /// Propagates other upstream failures unchanged.
    pub async fn get_employee(&self, id: &str) -> Result<Employee, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Employee not found", json!({ "id": id })))
    }

    pub async fn highest_salary(&self) -> Result<i32, AppError> {
        self.repository.highest_salary().await
    }

    pub async fn top_ten_earner_names(&self) -> Result<Vec<String>, AppError> {
        self.repository.top_ten_earner_names().await
    }

    /// Creates an employee. Input is forwarded without local validation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] with the upstream's status if it rejects the input.
    pub async fn create_employee(&self, input: EmployeeInput) -> Result<Employee, AppError> {
        let employee = self.repository.create(input).await?;
        tracing::info!(id = %employee.id, "Employee created");
        Ok(employee)
    }

    /// Deletes an employee and returns the upstream's confirmation.
    ///
    /// # Errors
    ///
    /// Propagates upstream failures unchanged, including 4xx.
    pub async fn delete_employee(&self, id: &str) -> Result<String, AppError> {
        let confirmation = self.repository.delete(id).await?;
        tracing::info!(id, "Employee deleted");
        Ok(confirmation)
    }

    /// Reports whether the upstream answers at all.
    pub async fn upstream_reachable(&self) -> bool {
        self.repository.is_reachable().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockEmployeeRepository;
    use axum::http::StatusCode;

    fn create_test_employee(id: &str, name: &str, salary: i32) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            salary,
            age: 35,
            title: "Engineer".to_string(),
            email: format!("{}@company.com", name.to_lowercase()),
        }
    }

    #[tokio::test]
    async fn test_get_employee_success() {
        let mut mock_repo = MockEmployeeRepository::new();

        let employee = create_test_employee("42", "Alice", 100);
        mock_repo
            .expect_find_by_id()
            .withf(|id| id == "42")
            .times(1)
            .returning(move |_| Ok(Some(employee.clone())));

        let service = EmployeeService::new(Arc::new(mock_repo));

        let result = service.get_employee("42").await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().name, "Alice");
    }

    #[tokio::test]
    async fn test_get_employee_not_found() {
        let mut mock_repo = MockEmployeeRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = EmployeeService::new(Arc::new(mock_repo));

        let result = service.get_employee("missing").await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_employee_upstream_failure_propagates() {
        let mut mock_repo = MockEmployeeRepository::new();

        mock_repo.expect_find_by_id().times(1).returning(|_| {
            Err(AppError::upstream(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Upstream request failed",
                json!({}),
            ))
        });

        let service = EmployeeService::new(Arc::new(mock_repo));

        let result = service.get_employee("42").await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::Upstream { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn test_list_employees() {
        let mut mock_repo = MockEmployeeRepository::new();

        let employees = vec![
            create_test_employee("1", "Alice", 100),
            create_test_employee("2", "Bob", 200),
        ];
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(move || Ok(employees.clone()));

        let service = EmployeeService::new(Arc::new(mock_repo));

        let list = service.list_employees().await.unwrap();
        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn test_search_employees_passes_text_through() {
        let mut mock_repo = MockEmployeeRepository::new();

        mock_repo
            .expect_search_by_name()
            .withf(|search| search == "Ali ce")
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = EmployeeService::new(Arc::new(mock_repo));

        assert!(service.search_employees("Ali ce").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_employee_upstream_rejection_propagates() {
        let mut mock_repo = MockEmployeeRepository::new();

        mock_repo.expect_create().times(1).returning(|_| {
            Err(AppError::upstream(
                StatusCode::BAD_REQUEST,
                "Upstream request failed",
                json!({ "body": "invalid" }),
            ))
        });

        let service = EmployeeService::new(Arc::new(mock_repo));

        let input = EmployeeInput {
            name: String::new(),
            salary: -1,
            age: 0,
            title: String::new(),
        };
        let result = service.create_employee(input).await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::Upstream { status, .. } if status == StatusCode::BAD_REQUEST
        ));
    }

    #[tokio::test]
    async fn test_delete_employee_returns_confirmation() {
        let mut mock_repo = MockEmployeeRepository::new();

        mock_repo
            .expect_delete()
            .withf(|id| id == "42")
            .times(1)
            .returning(|_| Ok("Alice".to_string()));

        let service = EmployeeService::new(Arc::new(mock_repo));

        assert_eq!(service.delete_employee("42").await.unwrap(), "Alice");
    }

    #[tokio::test]
    async fn test_salary_queries() {
        let mut mock_repo = MockEmployeeRepository::new();

        mock_repo
            .expect_highest_salary()
            .times(1)
            .returning(|| Ok(250_000));
        mock_repo
            .expect_top_ten_earner_names()
            .times(1)
            .returning(|| Ok(vec!["Carol".to_string()]));

        let service = EmployeeService::new(Arc::new(mock_repo));

        assert_eq!(service.highest_salary().await.unwrap(), 250_000);
        assert_eq!(service.top_ten_earner_names().await.unwrap(), vec!["Carol"]);
    }
}
