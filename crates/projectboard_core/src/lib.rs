//! Core domain logic for the project board.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod render;
pub mod service;
pub mod store;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use render::board::{render_board, render_project};
pub use service::board_service::{BoardService, BoardServiceError};
pub use store::project_store::{ListenerId, ProjectStore};
pub use validation::rules::{validate, FieldRule, FieldValue};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
