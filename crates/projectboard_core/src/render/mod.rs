//! Pure rendering of board state to text markup.
//!
//! # Responsibility
//! - Turn project snapshots into display text, nothing else.
//!
//! # Invariants
//! - Rendering is a pure function of its input; event wiring lives with
//!   the caller.

pub mod board;
