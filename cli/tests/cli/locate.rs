use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Precondition: No Steam or game install is reachable from the environment.
/// Action: Run `wamap locate` with only an empty `HOME`.
/// Expectation: Command fails and reports that SavedLevels was not detected.
#[cfg(unix)]
#[test]
fn locate_not_found() {
    let home = tempfile::tempdir().unwrap();
    cargo_bin_cmd!("wamap")
        .env_clear()
        .env("HOME", home.path())
        .current_dir(home.path())
        .arg("locate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not detected"));
}
