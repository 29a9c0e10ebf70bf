use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Precondition: None.
/// Action: Run `wamap --help`.
/// Expectation: The beginner explanation and every conversion flag are shown.
#[test]
fn long_help_explains_maps() {
    cargo_bin_cmd!("wamap")
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("SavedLevels")
                .and(predicate::str::contains("--template"))
                .and(predicate::str::contains("--maxcolours"))
                .and(predicate::str::contains("--transparent-colour"))
                .and(predicate::str::contains("--no-transparency"))
                .and(predicate::str::contains("--dither")),
        );
}

/// Precondition: None.
/// Action: Run `wamap` without arguments.
/// Expectation: Usage error with clap's exit code 2.
#[test]
fn missing_arguments_is_usage_error() {
    cargo_bin_cmd!("wamap").assert().failure().code(2);
}
