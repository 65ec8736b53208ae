//! Use-case services over the project store.
//!
//! # Responsibility
//! - Provide the entry points views call with user-sourced input.
//!
//! # Invariants
//! - Services validate before mutating; the store itself never does.

pub mod board_service;
