mod common;

use predicates::prelude::*;

#[test]
fn test_cli_end_to_end() {
    common::vendo()
        .write_stdin(common::script(&["$2", "$1", "A", "terminate"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("The Vegan Chocolate Vending Machine"))
        .stdout(predicate::str::contains("[Your coins so far is $3.00]"))
        .stdout(predicate::str::contains("A - Organic Raw ($2.00)"))
        .stdout(predicate::str::contains("B - Caramel ($2.50)"))
        .stdout(predicate::str::contains("Here is your Organic Raw. Enjoy!"))
        .stdout(predicate::str::contains("Unused coins returned. ($1.00)"))
        .stdout(predicate::str::contains("Bye. Until next time."))
        .stdout(predicate::str::contains(
            "Terminating VeganChocoVendo application...",
        ));
}

#[test]
fn test_cli_locked_selection() {
    common::vendo()
        .write_stdin(common::script(&["$1", "c", "terminate"]))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Snack not yet available. Please insert more coins.",
        ))
        .stdout(predicate::str::contains("Unused coins returned. ($1.00)"))
        .stdout(predicate::str::contains("Here is your").not());
}

#[test]
fn test_cli_empty_stdin_terminates() {
    common::vendo()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Terminating VeganChocoVendo application...",
        ))
        .stdout(predicate::str::contains("Unused coins returned").not());
}

#[test]
fn test_cli_help() {
    common::vendo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--script"))
        .stdout(predicate::str::contains("--format"));
}
