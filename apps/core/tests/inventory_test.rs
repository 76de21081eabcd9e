use vmsearch_core::inventory::{CommandInventory, InventoryError, InventorySource, StaticInventory};
use vmsearch_core::parser::parse;

#[test]
fn spawn_failure_is_reported_as_inventory_error() {
    let source = CommandInventory::new(vec!["vmsearch-no-such-binary".to_string()]);

    match source.fetch() {
        Err(InventoryError::Spawn(_)) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn empty_command_is_reported_without_spawning() {
    let source = CommandInventory::new(Vec::new());

    match source.fetch() {
        Err(InventoryError::EmptyCommand) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn captures_stdout_of_a_successful_command() {
    let source = CommandInventory::new(vec![
        "sh".to_string(),
        "-c".to_string(),
        "printf '\"Win10\" {abc-123}\\n'".to_string(),
    ]);

    let raw = source.fetch().unwrap();
    let records = parse(&raw, &[]);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Win10");
}

#[cfg(unix)]
#[test]
fn nonzero_exit_is_reported_with_stderr() {
    let source = CommandInventory::new(vec![
        "sh".to_string(),
        "-c".to_string(),
        "echo broken >&2; exit 3".to_string(),
    ]);

    match source.fetch() {
        Err(InventoryError::Failed { stderr, .. }) => assert!(stderr.contains("broken")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn static_fixture_parses_into_two_records() {
    let raw = StaticInventory::deterministic_fixture().fetch().unwrap();
    assert_eq!(parse(&raw, &[]).len(), 2);
}
