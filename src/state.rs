//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::EmployeeService;
use crate::infrastructure::upstream::HttpEmployeeRepository;

/// State shared by every request.
///
/// Holds no mutable data; cloning only bumps the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<EmployeeService<HttpEmployeeRepository>>,
}

impl AppState {
    pub fn new(repository: Arc<HttpEmployeeRepository>) -> Self {
        Self {
            employee_service: Arc::new(EmployeeService::new(repository)),
        }
    }
}
