//! Project store.
//!
//! # Responsibility
//! - Sole owner of project state; single source of truth for all views.
//! - Notify every registered listener after each effective mutation.
//!
//! # Invariants
//! - No two projects share an identifier.
//! - The sequence is insertion-ordered and only grows.
//! - Listeners receive owned snapshot copies; mutating a snapshot cannot
//!   corrupt store state.
//! - `move_project` on an unknown id or unchanged status is a silent
//!   no-op, not an error.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::{debug, info};

/// Callback invoked with a full board snapshot after each mutation.
pub type Listener = Box<dyn Fn(Vec<Project>)>;

/// Handle returned by `add_listener`, usable for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Authoritative holder of all projects.
///
/// Constructed explicitly and passed by ownership or reference to the
/// callers that need it; there is no process-wide instance.
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore {
    /// Creates an empty store with no registered listeners.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Appends a new `Active` project and notifies all listeners.
    ///
    /// The store performs no input validation; callers run the form
    /// contract first (see `BoardService`). Returns the generated ID.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        team_size: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, team_size);
        let id = project.id;
        self.projects.push(project);
        info!(
            "event=project_added module=store status=ok id={id} total={}",
            self.projects.len()
        );
        self.notify_listeners();
        id
    }

    /// Moves a project to `new_status` and notifies listeners.
    ///
    /// Unknown ids and unchanged statuses are intentional no-ops: the
    /// drop gesture that triggers this may target the list a project is
    /// already on.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) {
        let changed = match self.projects.iter_mut().find(|p| p.id == id) {
            Some(project) if project.status != new_status => {
                project.status = new_status;
                true
            }
            Some(_) => {
                debug!("event=project_move_noop module=store id={id} reason=status_unchanged");
                false
            }
            None => {
                debug!("event=project_move_noop module=store id={id} reason=unknown_id");
                false
            }
        };

        if changed {
            info!(
                "event=project_moved module=store status=ok id={id} to={}",
                new_status.label()
            );
            self.notify_listeners();
        }
    }

    /// Registers a listener and returns its removal handle.
    ///
    /// No deduplication: registering the same callback twice yields two
    /// notifications per mutation.
    pub fn add_listener(&mut self, callback: impl Fn(Vec<Project>) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(callback)));
        id
    }

    /// Removes a previously registered listener.
    ///
    /// Returns whether a listener with this handle existed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Returns an owned copy of the current project sequence.
    ///
    /// Same copy semantics as listener notifications: the caller may
    /// mutate the result freely.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Number of projects currently held.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Delivers a fresh owned snapshot to every listener, in
    /// registration order.
    fn notify_listeners(&self) {
        for (_, listener) in &self.listeners {
            listener(self.projects.clone());
        }
    }
}
