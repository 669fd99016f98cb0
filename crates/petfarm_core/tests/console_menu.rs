use petfarm_core::{ConsoleMenu, MenuState, PetController, PetKind, PetRepository, Repository};
use std::io::Cursor;

fn run_session(repo: &mut PetRepository, script: &str) -> String {
    let mut controller = PetController::new(repo);
    let mut output = Vec::new();
    let mut menu = ConsoleMenu::new(&mut controller, Cursor::new(script.as_bytes()), &mut output);
    menu.run().expect("in-memory I/O should not fail");
    assert_eq!(menu.state(), MenuState::Stopped);
    drop(menu);
    String::from_utf8(output).expect("menu output is UTF-8")
}

#[test]
fn exit_option_stops_the_loop() {
    let mut repo = PetRepository::new();
    let output = run_session(&mut repo, "0\n9\n");

    assert!(output.contains("=== Pet Farm ==="));
    assert!(output.contains("0. Exit"));
    assert!(output.ends_with("Goodbye.\n"));
    assert!(!output.contains("Total pets"));
}

#[test]
fn end_of_input_stops_the_loop() {
    let mut repo = PetRepository::new();
    let output = run_session(&mut repo, "9\n");

    assert!(output.contains("Total pets: 0"));
    assert!(!output.contains("Goodbye."));
}

#[test]
fn unknown_selection_keeps_running() {
    let mut repo = PetRepository::new();
    let output = run_session(&mut repo, "42\n0\n");

    assert!(output.contains("Unknown option `42`; choose 0-9."));
    assert!(output.contains("Goodbye."));
}

#[test]
fn add_teach_and_show_round_trip_through_menu() {
    let mut repo = PetRepository::new();
    let script = "1\nRex\nDog\n2020-05-01\nsit, paw\n7\n1\nroll over\n6\n1\n0\n";
    let output = run_session(&mut repo, script);

    assert!(output.contains("Pet added: #1 Rex (dog, domestic, born 2020-05-01)"));
    assert!(output.contains("Rex learned `roll over`."));
    assert!(output.contains("Rex knows: sit, paw, roll over"));

    let stored = repo.get(1).expect("pet added via the menu should be stored");
    assert_eq!(stored.kind, PetKind::Dog);
    assert_eq!(stored.commands.len(), 3);
}

#[test]
fn invalid_field_input_returns_to_menu() {
    let mut repo = PetRepository::new();
    let output = run_session(&mut repo, "1\nRex\ndragon\n1\nRex\ncat\n01/02/2020\n0\n");

    assert!(output.contains("unknown pet kind `dragon`"));
    assert!(output.contains("`01/02/2020` is not a date in YYYY-MM-DD form."));
    assert!(repo.is_empty());
}

#[test]
fn update_keeps_blank_fields_and_delete_reports_missing_pet() {
    let mut repo = PetRepository::new();
    let script = "1\nRex\ndog\n2020-05-01\n\n4\n1\nMax\n\n\n\n5\n7\n5\n1\n2\n0\n";
    let output = run_session(&mut repo, script);

    assert!(output.contains("Leave a field blank to keep its current value."));
    assert!(output.contains("Pet updated: #1 Max (dog, domestic, born 2020-05-01)"));
    assert!(output.contains("No pet with id 7."));
    assert!(output.contains("Pet removed: #1 Max"));
    assert!(output.contains("No pets registered yet."));
    assert!(repo.is_empty());
}

#[test]
fn bad_pet_id_is_reported() {
    let mut repo = PetRepository::new();
    let output = run_session(&mut repo, "3\nabc\n3\n\n0\n");

    assert!(output.contains("`abc` is not a valid pet id."));
    assert!(output.contains("Pet id is required."));
}

#[test]
fn step_after_stop_is_a_no_op() {
    let mut repo = PetRepository::new();
    let mut controller = PetController::new(&mut repo);
    let mut output = Vec::new();
    let mut menu = ConsoleMenu::new(&mut controller, Cursor::new("0\n".as_bytes()), &mut output);

    assert_eq!(menu.state(), MenuState::Running);
    assert_eq!(menu.step().expect("in-memory I/O should not fail"), MenuState::Stopped);
    assert_eq!(menu.step().expect("in-memory I/O should not fail"), MenuState::Stopped);
    drop(menu);
    let printed = String::from_utf8(output).expect("menu output is UTF-8");
    assert_eq!(printed.matches("=== Pet Farm ===").count(), 1);
}
