//! Catalog domain model.
//!
//! # Responsibility
//! - Define persisted entities (`Book`, `Writer`) and their field rules.
//! - Define the transfer objects exposed across the service boundary.
//!
//! # Invariants
//! - Entity ids are assigned by the store; `None` means "not yet inserted".
//! - Deletion is a hard delete; there are no tombstones.

pub mod book;
pub mod dto;
pub mod validation;
pub mod writer;
