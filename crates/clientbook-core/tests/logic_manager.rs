//! End-to-end tests through the logic manager with file storage.

mod common;

use clientbook_core::logic::commands::HelpCommand;
use clientbook_core::{
    ClientBook, ClientBookError, ClientBookStorage, JsonClientBookStorage, LogicManager,
    ModelManager, ParseError,
};
use common::*;
use tempfile::TempDir;

fn logic_with_storage(dir: &TempDir) -> (LogicManager, std::path::PathBuf) {
    let path = dir.path().join("clientbook.json");
    let model = ModelManager::new(ClientBook::from_clients(vec![alice(), benson()]).unwrap());
    let storage = JsonClientBookStorage::new(&path);
    (LogicManager::new(model, Some(Box::new(storage))), path)
}

#[test]
fn test_mutating_command_is_saved() {
    let dir = TempDir::new().unwrap();
    let (mut logic, path) = logic_with_storage(&dir);

    logic.execute("deletepolicy 1 t/Life Insurance").unwrap();

    let saved = JsonClientBookStorage::new(&path).read().unwrap().unwrap();
    assert_eq!(&saved, logic.client_book());
    assert!(saved.clients()[0].tags().is_empty());
}

#[test]
fn test_read_only_command_does_not_write() {
    let dir = TempDir::new().unwrap();
    let (mut logic, path) = logic_with_storage(&dir);

    logic.execute("list").unwrap();
    logic.execute("sortpriority").unwrap();

    assert!(!path.exists());
}

#[test]
fn test_errors_surface_and_leave_state_intact() {
    let dir = TempDir::new().unwrap();
    let (mut logic, path) = logic_with_storage(&dir);

    let err = logic.execute("").unwrap_err();
    assert!(matches!(
        err,
        ClientBookError::Parse(ParseError::InvalidFormat(ref usage)) if usage == HelpCommand::MESSAGE_USAGE
    ));

    let err = logic.execute("frobnicate 1").unwrap_err();
    assert_eq!(err.to_string(), "Unknown command");

    let err = logic.execute("deletepolicy 1 t/Nonexistent").unwrap_err();
    assert!(matches!(err, ClientBookError::Command(_)));

    assert_eq!(logic.filtered_client_list().len(), 2);
    assert!(!path.exists());
}

#[test]
fn test_storage_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    // A directory where the data file should be makes the write fail.
    let path = dir.path().join("clientbook.json");
    std::fs::create_dir_all(&path).unwrap();
    let model = ModelManager::new(ClientBook::from_clients(vec![alice()]).unwrap());
    let mut logic = LogicManager::new(model, Some(Box::new(JsonClientBookStorage::new(&path))));

    let err = logic.execute("priority 1").unwrap_err();
    assert!(matches!(err, ClientBookError::Storage(ref m) if m.starts_with("Could not save data to file")));
}
