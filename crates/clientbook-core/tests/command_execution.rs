//! Execution tests for the remaining commands.

mod common;

use clientbook_core::logic::commands::{
    AddPolicyCommand, ClearCommand, DeleteClientCommand, EditCommand, PriorityCommand,
    SortPriorityCommand,
};
use clientbook_core::logic::messages::MESSAGE_USE_PRIORITY_COMMAND;
use clientbook_core::{parse_command, CommandError, Model, ModelManager};
use common::*;

fn run(model: &mut ModelManager, line: &str) -> Result<String, CommandError> {
    parse_command(line)
        .unwrap_or_else(|e| panic!("{line:?} failed to parse: {e}"))
        .execute(model)
        .map(|result| result.feedback_to_user)
}

fn displayed_names(model: &ModelManager) -> Vec<String> {
    model
        .filtered_client_list()
        .iter()
        .map(|c| c.name().to_string())
        .collect()
}

#[test]
fn test_one_past_end_fails_for_every_index_command() {
    let mut model = two_client_model();
    for line in [
        "addpolicy 3 t/Car",
        "deletepolicy 3 t/Car",
        "edit 3 p/999",
        "delete 3",
        "priority 3",
    ] {
        assert!(
            matches!(run(&mut model, line), Err(CommandError::InvalidClientIndex { .. })),
            "{line}"
        );
    }
    assert_eq!(model.client_book().len(), 2);
}

#[test]
fn test_add_client_and_reject_duplicate() {
    let mut model = two_client_model();
    let feedback = run(
        &mut model,
        "add n/Elle Meyer p/9482224 e/werner@example.com a/michegan ave t/Car Insurance",
    )
    .unwrap();
    assert!(feedback.starts_with("New client added: Elle Meyer; Phone: 9482224"));
    assert_eq!(model.filtered_client_list().len(), 3);

    let duplicate = run(
        &mut model,
        "add n/elle meyer p/111 e/other@example.com a/elsewhere",
    );
    assert_eq!(duplicate, Err(CommandError::DuplicateClient));
}

#[test]
fn test_add_policy() {
    let mut model = two_client_model();
    let feedback = run(&mut model, "addpolicy 1 t/Car Insurance t/Life Insurance").unwrap();
    assert_eq!(
        feedback,
        AddPolicyCommand::success_message(&model.filtered_client_list()[0])
    );
    assert_eq!(model.filtered_client_list()[0].tags().len(), 2);

    assert_eq!(
        run(&mut model, "addpolicy 1 t/Car Insurance"),
        Err(CommandError::PoliciesAlreadyPresent)
    );

    let feedback = run(&mut model, "addpolicy 2 t/Priority").unwrap();
    assert!(feedback.ends_with(MESSAGE_USE_PRIORITY_COMMAND));
    assert!(model.filtered_client_list()[1].has_priority());
}

#[test]
fn test_priority_keeps_single_priority_tag() {
    let mut model = typical_model();
    let feedback = run(&mut model, "priority 3").unwrap();
    assert!(feedback.starts_with("Marked client as priority: Carl Kurz"));

    let carl = &model.filtered_client_list()[2];
    assert_eq!(carl.tags().iter().filter(|t| t.is_priority()).count(), 1);
    assert_eq!(carl.tags().len(), 2);

    run(&mut model, "priority 1").unwrap();
    let alice = &model.filtered_client_list()[0];
    assert!(alice.has_priority());
    assert_eq!(alice.tags().len(), 2);
}

#[test]
fn test_sort_priority_is_stable_partition() {
    let mut model = typical_model();
    run(&mut model, "priority 4").unwrap();
    assert_eq!(
        run(&mut model, "sortpriority").unwrap(),
        SortPriorityCommand::MESSAGE_SUCCESS
    );
    assert_eq!(
        displayed_names(&model),
        vec!["Carl Kurz", "Daniel Meier", "Alice Pauline", "Benson Meier"]
    );
}

#[test]
fn test_sort_by_name_then_find() {
    let mut model = ModelManager::new(
        clientbook_core::ClientBook::from_clients(vec![daniel(), benson(), alice()]).unwrap(),
    );
    run(&mut model, "sort").unwrap();
    assert_eq!(
        displayed_names(&model),
        vec!["Alice Pauline", "Benson Meier", "Daniel Meier"]
    );

    assert_eq!(run(&mut model, "find meier").unwrap(), "2 clients listed!");
    assert_eq!(displayed_names(&model), vec!["Benson Meier", "Daniel Meier"]);

    assert_eq!(run(&mut model, "list").unwrap(), "Listed all clients");
    assert_eq!(model.filtered_client_list().len(), 3);
}

#[test]
fn test_find_and_or() {
    let mut model = typical_model();
    assert_eq!(run(&mut model, "findand n/meier t/car insurance").unwrap(), "1 clients listed!");
    assert_eq!(displayed_names(&model), vec!["Benson Meier"]);

    assert_eq!(
        run(&mut model, "findor n/pauline t/Priority").unwrap(),
        "2 clients listed!"
    );
    assert_eq!(displayed_names(&model), vec!["Alice Pauline", "Carl Kurz"]);

    assert_eq!(run(&mut model, "findand e/example.com a/street").unwrap(), "2 clients listed!");
    assert_eq!(displayed_names(&model), vec!["Carl Kurz", "Daniel Meier"]);

    assert_eq!(run(&mut model, "findand n/alice t/Priority").unwrap(), "0 clients listed!");
}

#[test]
fn test_edit_keeps_priority_and_rejects_rename_clash() {
    let mut model = typical_model();
    let feedback = run(&mut model, "edit 3 t/Travel Insurance").unwrap();
    assert!(feedback.starts_with("Edited Client: Carl Kurz"));
    let carl = &model.filtered_client_list()[2];
    assert!(carl.has_priority());
    assert_eq!(carl.tags().len(), 2);

    let before = model.client_book().clone();
    assert_eq!(
        run(&mut model, "edit 3 n/alice pauline"),
        Err(CommandError::DuplicateClient)
    );
    assert_eq!(model.client_book(), &before);

    run(&mut model, "edit 1 n/Alice Tan t/").unwrap();
    assert_eq!(model.filtered_client_list()[0].name().as_str(), "Alice Tan");
    assert!(model.filtered_client_list()[0].tags().is_empty());
}

#[test]
fn test_edit_usage_is_reported_for_bad_index() {
    let mut model = two_client_model();
    let err = run(&mut model, "edit 9 p/999").unwrap_err();
    assert!(err.to_string().ends_with(EditCommand::MESSAGE_USAGE));
}

#[test]
fn test_update_by_name() {
    let mut model = typical_model();
    run(&mut model, "find Carl").unwrap();

    let feedback = run(&mut model, "update n/benson meier p/+65 81234567").unwrap();
    assert!(feedback.starts_with("Updated Client: Benson Meier; Phone: +65 81234567"));
    assert_eq!(
        model.client_book().find_by_name("Benson Meier").unwrap().phone().as_str(),
        "+65 81234567"
    );

    assert_eq!(
        run(&mut model, "update n/Nobody e/nobody@example.com"),
        Err(CommandError::ClientNotFound("Nobody".to_string()))
    );
}

#[test]
fn test_delete_and_clear() {
    let mut model = typical_model();
    let feedback = run(&mut model, "delete 2").unwrap();
    assert!(feedback.starts_with("Deleted Client: Benson Meier"));
    assert_eq!(model.client_book().len(), 3);
    assert!(DeleteClientCommand::MESSAGE_USAGE.starts_with("delete"));

    assert_eq!(run(&mut model, "clear").unwrap(), ClearCommand::MESSAGE_SUCCESS);
    assert!(model.client_book().is_empty());
    assert!(model.filtered_client_list().is_empty());
    assert!(matches!(
        run(&mut model, "priority 1"),
        Err(CommandError::InvalidClientIndex { usage }) if usage == PriorityCommand::MESSAGE_USAGE
    ));
}

#[test]
fn test_help_and_exit_flags() {
    let mut model = two_client_model();
    let help = parse_command("help").unwrap().execute(&mut model).unwrap();
    assert!(help.show_help && !help.exit);
    let exit = parse_command("EXIT").unwrap().execute(&mut model).unwrap();
    assert!(exit.exit && !exit.show_help);
}
