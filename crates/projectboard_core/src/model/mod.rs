//! Domain model for board records.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Status is the only field that changes after creation.

pub mod project;
