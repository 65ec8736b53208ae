use projectboard_core::{Project, ProjectStatus};
use uuid::Uuid;

#[test]
fn project_new_sets_defaults() {
    let project = Project::new("Website relaunch", "rebuild the landing page", 3);

    assert!(!project.id.is_nil());
    assert_eq!(project.title, "Website relaunch");
    assert_eq!(project.description, "rebuild the landing page");
    assert_eq!(project.team_size, 3);
    assert_eq!(project.status, ProjectStatus::Active);
    assert!(project.is_active());
}

#[test]
fn with_id_keeps_the_caller_provided_identity() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let project = Project::with_id(id, "Audit", "security review", 2);

    assert_eq!(project.id, id);
    assert_eq!(project.status, ProjectStatus::Active);
}

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut project = Project::with_id(id, "Audit", "security review", 2);
    project.status = ProjectStatus::Finished;

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Audit");
    assert_eq!(json["description"], "security review");
    assert_eq!(json["team_size"], 2);
    assert_eq!(json["status"], "finished");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn status_labels_are_lowercase() {
    assert_eq!(ProjectStatus::Active.label(), "active");
    assert_eq!(ProjectStatus::Finished.label(), "finished");
}
