//! Core domain entities representing the relayed data model.
//!
//! Entities are plain data structures without business logic. They are not
//! owned by this service: every record is fetched from the upstream, relayed,
//! and dropped at the end of the request.
//!
//! # Entity Types
//!
//! - [`Employee`] - An employee record as the upstream reports it
//! - [`EmployeeInput`] - The fields needed to create one (no identifier)

pub mod employee;

pub use employee::{Employee, EmployeeInput};
