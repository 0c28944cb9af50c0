use taskline_core::Task;
use uuid::Uuid;

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("water the plants");

    assert!(!task.uuid.is_nil());
    assert_eq!(task.title, "water the plants");
    assert!(!task.is_completed);
    assert!(task.is_pending());
}

#[test]
fn toggle_completion_twice_restores_original_state() {
    let mut task = Task::new("call the bank");

    task.toggle_completion();
    assert!(task.is_completed);
    assert!(!task.is_pending());

    task.toggle_completion();
    assert!(!task.is_completed);
    assert!(task.is_pending());
}

#[test]
fn rename_replaces_title_and_keeps_identity() {
    let mut task = Task::new("draft");
    let original_id = task.uuid;

    task.rename("final");

    assert_eq!(task.title, "final");
    assert_eq!(task.uuid, original_id);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::with_id(task_id, "ship release");
    task.toggle_completion();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["uuid"], task_id.to_string());
    assert_eq!(json["title"], "ship release");
    assert_eq!(json["is_completed"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
