#![allow(dead_code)]

//! Shared test fixtures: an in-process upstream employee service and gateway
//! state wired against it.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_test::TestServer;
use employee_gateway::domain::entities::{Employee, EmployeeInput};
use employee_gateway::infrastructure::upstream::HttpEmployeeRepository;
use employee_gateway::routes::api_router;
use employee_gateway::state::AppState;
use serde_json::json;
use std::sync::{Arc, Mutex};
use url::Url;

/// Address that refuses connections, for unreachable-upstream tests.
pub const UNREACHABLE_UPSTREAM: &str = "http://127.0.0.1:9/api/v1/employee";

#[derive(Default)]
struct Store {
    employees: Vec<Employee>,
    next_id: u64,
}

type SharedStore = Arc<Mutex<Store>>;

async fn list(State(store): State<SharedStore>) -> Json<Vec<Employee>> {
    Json(store.lock().unwrap().employees.clone())
}

async fn search(
    State(store): State<SharedStore>,
    Path(text): Path<String>,
) -> Json<Vec<Employee>> {
    let needle = text.to_lowercase();
    let matches = store
        .lock()
        .unwrap()
        .employees
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    Json(matches)
}

async fn highest_salary(State(store): State<SharedStore>) -> Json<i32> {
    let max = store
        .lock()
        .unwrap()
        .employees
        .iter()
        .map(|e| e.salary)
        .max()
        .unwrap_or(0);
    Json(max)
}

async fn top_ten(State(store): State<SharedStore>) -> Json<Vec<String>> {
    let mut employees = store.lock().unwrap().employees.clone();
    employees.sort_by(|a, b| b.salary.cmp(&a.salary));
    Json(employees.into_iter().take(10).map(|e| e.name).collect())
}

async fn find(State(store): State<SharedStore>, Path(id): Path<String>) -> Response {
    let store = store.lock().unwrap();
    match store.employees.iter().find(|e| e.id == id) {
        Some(employee) => Json(employee.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create(State(store): State<SharedStore>, Json(input): Json<EmployeeInput>) -> Response {
    if input.name.trim().is_empty() || input.salary <= 0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "name must not be blank and salary must be positive" })),
        )
            .into_response();
    }

    let mut store = store.lock().unwrap();
    store.next_id += 1;
    let employee = Employee {
        id: format!("emp-{}", store.next_id),
        email: format!("{}@company.com", input.name.to_lowercase().replace(' ', ".")),
        name: input.name,
        salary: input.salary,
        age: input.age,
        title: input.title,
    };
    store.employees.push(employee.clone());

    Json(employee).into_response()
}

async fn remove(State(store): State<SharedStore>, Path(id): Path<String>) -> Response {
    let mut store = store.lock().unwrap();
    match store.employees.iter().position(|e| e.id == id) {
        Some(index) => store.employees.remove(index).name.into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Starts an in-memory upstream on an ephemeral port and returns its base URL.
///
/// Mirrors the upstream contract: the root is served with a trailing slash,
/// unknown ids answer 404, invalid input answers 400.
pub async fn spawn_fake_upstream() -> String {
    let app = Router::new()
        .route("/api/v1/employee/", get(list).post(create))
        .route("/api/v1/employee/search/{text}", get(search))
        .route("/api/v1/employee/highestSalary", get(highest_salary))
        .route(
            "/api/v1/employee/topTenHighestEarningEmployeeNames",
            get(top_ten),
        )
        .route("/api/v1/employee/{id}", get(find).delete(remove))
        .with_state(SharedStore::default());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api/v1/employee")
}

pub fn create_test_state(upstream_base_url: &str) -> AppState {
    let repository = HttpEmployeeRepository::new(
        reqwest::Client::new(),
        Url::parse(upstream_base_url).unwrap(),
    );
    AppState::new(Arc::new(repository))
}

/// Gateway test server relaying to the given upstream.
pub fn make_server(upstream_base_url: &str) -> TestServer {
    TestServer::new(api_router(create_test_state(upstream_base_url))).unwrap()
}

pub fn employee_input(name: &str, salary: i32) -> EmployeeInput {
    EmployeeInput {
        name: name.to_string(),
        salary,
        age: 30,
        title: "Engineer".to_string(),
    }
}
