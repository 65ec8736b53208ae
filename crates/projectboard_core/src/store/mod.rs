//! Board state ownership and change notification.
//!
//! # Responsibility
//! - Hold the authoritative project sequence.
//! - Fan mutations out to registered listeners synchronously.
//!
//! # Invariants
//! - All state changes go through `ProjectStore` mutators.
//! - Listeners only ever observe snapshot copies, never live state.

pub mod project_store;
