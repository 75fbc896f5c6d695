//! Data Transfer Objects for API responses.
//!
//! Employee records are relayed as the domain types themselves; only the
//! gateway's own responses need dedicated DTOs.

pub mod health;
