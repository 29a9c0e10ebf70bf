use crate::utils::{write_picture, write_template};
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

/// Precondition: A converted map exists.
/// Action: Run `wamap chunk list <map>`.
/// Expectation: The PNG chunks are listed with hex offsets.
#[test]
fn chunk_list_basic() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("picture.png");
    let output = dir.path().join("map.png");
    write_picture(&input);
    cargo_bin_cmd!("wamap")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    cargo_bin_cmd!("wamap")
        .args(["chunk", "list"])
        .arg(&output)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("IHDR")
                .and(predicate::str::contains("PLTE"))
                .and(predicate::str::contains("tRNS"))
                .and(predicate::str::contains("IDAT"))
                .and(predicate::str::contains("IEND"))
                .and(predicate::str::contains("0x0008")),
        );
}

/// Precondition: A template map with a `waLV` chunk exists.
/// Action: Run `wamap chunk list --header --long <template>`.
/// Expectation: Header row, the `waLV` chunk and its body are shown.
#[test]
fn chunk_list_header_and_body() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("template.png");
    write_template(&template, b"settings-body");

    cargo_bin_cmd!("wamap")
        .args(["chunk", "list", "--header", "--long"])
        .arg(&template)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Index")
                .and(predicate::str::contains("Offset"))
                .and(predicate::str::contains("Body"))
                .and(predicate::str::contains("waLV"))
                .and(predicate::str::contains("settings-body"))
                .and(predicate::str::contains("Flags"))
                .and(predicate::str::contains("-p-"))
                .and(predicate::str::contains("ok")),
        );
}

/// Precondition: The file does not exist.
/// Action: Run `wamap chunk list <missing>`.
/// Expectation: Command fails.
#[test]
fn chunk_list_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    cargo_bin_cmd!("wamap")
        .args(["chunk", "list"])
        .arg(dir.path().join("missing.png"))
        .assert()
        .failure();
}

/// Precondition: A template map whose `waLV` chunk has a damaged CRC.
/// Action: Run `wamap chunk list <template>`.
/// Expectation: The damaged chunk is still listed and marked `broken`.
#[test]
fn chunk_list_reports_broken_crc() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("template.png");
    let settings = b"settings-body";
    let level = write_template(&template, settings);

    let mut bytes = fs::read(&template).unwrap();
    let start = bytes
        .windows(level.len())
        .position(|w| w == level.as_slice())
        .unwrap();
    let crc_at = start + level.len() - 1;
    bytes[crc_at] ^= 0xFF;
    fs::write(&template, &bytes).unwrap();

    cargo_bin_cmd!("wamap")
        .args(["chunk", "list"])
        .arg(&template)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("waLV")
                .and(predicate::str::contains("broken"))
                .and(predicate::str::contains("IEND")),
        );
}
