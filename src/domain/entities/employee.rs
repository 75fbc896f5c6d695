//! Employee records relayed between clients and the upstream service.

use serde::{Deserialize, Serialize};

/// An employee as reported by the upstream service.
///
/// The gateway never assigns or rewrites any field; the record is deserialized
/// from the upstream response and serialized back to the client unchanged.
/// Fields the upstream sends beyond these are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub salary: i32,
    pub age: i32,
    pub title: String,
    pub email: String,
}

/// Input for creating an employee.
///
/// Carries no identifier: the upstream assigns it. Values are forwarded as-is,
/// validation is the upstream's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub name: String,
    pub salary: i32,
    pub age: i32,
    pub title: String,
}

impl Employee {
    /// Returns true if this record carries the same values as `input`.
    pub fn matches_input(&self, input: &EmployeeInput) -> bool {
        self.name == input.name
            && self.salary == input.salary
            && self.age == input.age
            && self.title == input.title
    }
}
