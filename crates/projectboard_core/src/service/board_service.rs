//! Board use-case service.
//!
//! # Responsibility
//! - Apply the form contract to raw user input before store mutation.
//! - Own the injected `ProjectStore` and expose its listener surface.
//!
//! # Invariants
//! - Invalid input surfaces as one generic error with no per-field
//!   detail; the submission is discarded and the store is untouched.
//! - Move requests pass through unchanged, keeping the store's silent
//!   no-op semantics.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::project_store::{ListenerId, ProjectStore};
use crate::validation::rules::{validate, FieldRule};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for board use-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardServiceError {
    /// One or more submitted fields failed the form contract.
    InvalidInput,
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid project input; submission discarded"),
        }
    }
}

impl Error for BoardServiceError {}

/// Board service facade over an explicitly injected store.
pub struct BoardService {
    store: ProjectStore,
}

impl BoardService {
    /// Creates a service owning the provided store.
    pub fn new(store: ProjectStore) -> Self {
        Self { store }
    }

    /// Submits one project from raw form input.
    ///
    /// # Contract
    /// - Title: required.
    /// - Description: required, at least 5 characters.
    /// - Team size: required, numeric, between 1 and 5 inclusive.
    ///
    /// Any failure yields the single generic `InvalidInput`; which field
    /// failed is deliberately not reported.
    pub fn submit_project(
        &mut self,
        title: &str,
        description: &str,
        team_size: &str,
    ) -> Result<ProjectId, BoardServiceError> {
        let title_ok = validate(&FieldRule::new(title).required());
        let description_ok = validate(&FieldRule::new(description).required().min_length(5));
        let team_size_ok = validate(&FieldRule::new(team_size).required().min(1.0).max(5.0));

        if !(title_ok && description_ok && team_size_ok) {
            warn!("event=project_rejected module=service status=error reason=form_contract");
            return Err(BoardServiceError::InvalidInput);
        }

        // The form contract admits numeric text only; anything that is
        // not a whole number of people is rejected the same generic way.
        let team_size: u32 = team_size
            .trim()
            .parse()
            .map_err(|_| BoardServiceError::InvalidInput)?;

        Ok(self.store.add_project(title, description, team_size))
    }

    /// Forwards a move request to the store.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) {
        self.store.move_project(id, new_status);
    }

    /// Registers a board listener on the underlying store.
    pub fn add_listener(&mut self, callback: impl Fn(Vec<Project>) + 'static) -> ListenerId {
        self.store.add_listener(callback)
    }

    /// Removes a previously registered listener.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.store.remove_listener(id)
    }

    /// Returns an owned copy of the current board.
    pub fn snapshot(&self) -> Vec<Project> {
        self.store.snapshot()
    }
}
