//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record shared by every board view.
//! - Keep the active/finished classification explicit via `ProjectStatus`.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `status` is always one of the two defined variants.
//! - Title, description and team size are immutable after creation; only
//!   the owning store changes `status`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every project on the board.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Board column a project currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work is ongoing; the default for newly created projects.
    Active,
    /// Work is done; projects land here when moved off the active list.
    Finished,
}

impl ProjectStatus {
    /// Lowercase label used in rendering and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

/// Canonical record for one board project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable global ID used for lookups and move operations.
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned; positive by the form contract.
    pub team_size: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new project with a generated stable ID and status `Active`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        team_size: u32,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, team_size)
    }

    /// Creates a project with a caller-provided stable ID.
    ///
    /// Used by callers where identity already exists externally. The
    /// provided `id` must remain stable for this project's lifetime.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        team_size: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            team_size,
            status: ProjectStatus::Active,
        }
    }

    /// Returns whether this project sits on the active list.
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}
