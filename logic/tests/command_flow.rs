//! End-to-end flows: raw input lines through the dispatcher and the model.

use tutorbook_logic::error::{CommandError, ParseError};
use tutorbook_logic::{Model, parse_command};

fn run(model: &mut Model, line: &str) -> Result<String, String> {
    let command = parse_command(line).map_err(|e| e.to_string())?;
    command
        .execute(model)
        .map(|result| result.feedback)
        .map_err(|e| e.to_string())
}

#[test]
fn test_add_find_edit_delete_flow() {
    let mut model = Model::new();

    run(
        &mut model,
        "add n/Alice Pauline p/94351253 e/alice@example.com a/123, Jurong West Ave 6 f/300 c/1A t/friends",
    )
    .unwrap();
    run(
        &mut model,
        "add n/Benson Meier p/98765432 e/johnd@example.com a/311, Clementi Ave 2 f/250 c/2B",
    )
    .unwrap();
    assert_eq!(model.book().len(), 2);

    // Narrow the view to class 2B, then edit by display index
    let feedback = run(&mut model, "find c/2B").unwrap();
    assert_eq!(feedback, "1 persons listed!");
    assert_eq!(model.displayed_persons().len(), 1);

    let feedback = run(&mut model, "edit 1 p/91234567").unwrap();
    assert!(feedback.starts_with("Edited Person: Benson Meier; Phone: 91234567"));

    // Editing reset the view to everyone; display index 2 is Benson
    let feedback = run(&mut model, "delete 2").unwrap();
    assert!(feedback.starts_with("Deleted Person: Benson Meier"));
    assert_eq!(model.book().len(), 1);
}

#[test]
fn test_markpaid_then_find_by_month() {
    let mut model = Model::new();
    run(
        &mut model,
        "add n/Alice Pauline p/94351253 e/alice@example.com a/123 f/300 c/1A",
    )
    .unwrap();
    run(
        &mut model,
        "add n/Benson Meier p/98765432 e/johnd@example.com a/311 f/250 c/2B",
    )
    .unwrap();

    run(&mut model, "markpaid 1 m/2024-01").unwrap();

    let feedback = run(&mut model, "find m/2024-01").unwrap();
    assert_eq!(feedback, "1 persons listed!");
    assert_eq!(model.displayed_persons()[0].name.as_str(), "Alice Pauline");

    let feedback = run(&mut model, "find nm/2024-01").unwrap();
    assert_eq!(feedback, "1 persons listed!");
    assert_eq!(model.displayed_persons()[0].name.as_str(), "Benson Meier");
}

#[test]
fn test_edit_clears_tags_with_bare_tag_prefix() {
    let mut model = Model::new();
    run(
        &mut model,
        "add n/Alice Pauline p/94351253 e/alice@example.com a/123 f/300 c/1A t/friends t/owesMoney",
    )
    .unwrap();
    assert_eq!(model.book().persons()[0].tags.len(), 2);

    run(&mut model, "edit 1 t/").unwrap();
    assert!(model.book().persons()[0].tags.is_empty());
}

#[test]
fn test_duplicate_person_rejected_on_add() {
    let mut model = Model::new();
    run(
        &mut model,
        "add n/Alice Pauline p/94351253 e/alice@example.com a/123 f/300 c/1A",
    )
    .unwrap();

    let err = run(
        &mut model,
        "add n/alice pauline p/11111111 e/other@example.com a/456 f/100 c/2B",
    )
    .unwrap_err();
    assert_eq!(err, CommandError::DuplicatePerson.to_string());
}

#[test]
fn test_parse_errors_surface_their_messages() {
    let mut model = Model::new();

    let err = run(&mut model, "edit 1").unwrap_err();
    assert_eq!(err, ParseError::NothingEdited.to_string());

    let err = run(&mut model, "find n/").unwrap_err();
    assert_eq!(err, ParseError::EmptySearchValue.to_string());

    let err = run(&mut model, "find n/Bob c/1 m/2024-01").unwrap_err();
    assert!(err.starts_with("Invalid command format!"));

    let err = run(&mut model, "bogus").unwrap_err();
    assert_eq!(err, ParseError::UnknownCommand.to_string());
}

#[test]
fn test_clear_and_list() {
    let mut model = Model::new();
    run(
        &mut model,
        "add n/Alice Pauline p/94351253 e/alice@example.com a/123 f/300 c/1A",
    )
    .unwrap();

    let feedback = run(&mut model, "list").unwrap();
    assert_eq!(feedback, "Listed all persons");

    let feedback = run(&mut model, "clear").unwrap();
    assert_eq!(feedback, "Address book has been cleared!");
    assert!(model.book().is_empty());
    assert!(model.displayed_persons().is_empty());
}
