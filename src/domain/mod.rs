//! Domain layer containing the relayed entities and the upstream contract.
//!
//! # Architecture
//!
//! - [`entities`] - Employee data structures
//! - [`repositories`] - The [`repositories::EmployeeRepository`] trait
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. The upstream client in [`crate::infrastructure::upstream`]
//! implements the repository trait.

pub mod entities;
pub mod repositories;
