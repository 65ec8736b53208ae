//! Board text rendering.
//!
//! # Responsibility
//! - Render a snapshot into the two-list board layout.
//! - Render one project entry with its assignment summary.
//!
//! # Invariants
//! - Output depends only on the given snapshot.
//! - Each list keeps the snapshot's insertion order.

use crate::model::project::{Project, ProjectStatus};

/// Renders the full board: the active list followed by the finished
/// list, each under its own heading.
pub fn render_board(projects: &[Project]) -> String {
    let mut out = String::new();
    for status in [ProjectStatus::Active, ProjectStatus::Finished] {
        out.push_str(&status.label().to_uppercase());
        out.push_str(" PROJECTS LIST\n");
        for project in projects.iter().filter(|p| p.status == status) {
            out.push_str(&render_project(project));
        }
    }
    out
}

/// Renders one project entry: title, assignment summary, description.
pub fn render_project(project: &Project) -> String {
    format!(
        "- {} [{}]\n    {} assigned\n    {}\n",
        project.title,
        short_id(project),
        persons(project.team_size),
        project.description
    )
}

/// Singular/plural assignment summary.
fn persons(team_size: u32) -> String {
    if team_size == 1 {
        "1 person".to_string()
    } else {
        format!("{team_size} persons")
    }
}

/// First id segment, enough to address a project interactively.
fn short_id(project: &Project) -> String {
    let id = project.id.to_string();
    id.split('-').next().unwrap_or(&id).to_string()
}
