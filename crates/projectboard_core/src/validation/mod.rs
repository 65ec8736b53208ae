//! Input validation for candidate field values.
//!
//! # Responsibility
//! - Provide pure, side-effect-free checks run before store mutation.
//!
//! # Invariants
//! - Validation never mutates its input and never touches the store.
//! - All configured checks on a field must pass for it to be accepted.

pub mod rules;
