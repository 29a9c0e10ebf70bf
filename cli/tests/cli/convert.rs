use crate::utils::{write_picture, write_template};
use assert_cmd::cargo::cargo_bin_cmd;
use libwamap::{ChunkType, chunks, prelude::*};
use predicates::prelude::*;
use std::fs;

/// Precondition: A 20x12 RGB picture exists.
/// Action: Run `wamap <input> <output>`.
/// Expectation: A 16x8 palette PNG is written and a confirmation is printed.
#[test]
fn convert_simple() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("picture.png");
    let output = dir.path().join("map.png");
    write_picture(&input);

    cargo_bin_cmd!("wamap")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Created W:A map"));

    let map = image::open(&output).unwrap();
    assert_eq!((map.width(), map.height()), (16, 8));
    let bytes = fs::read(&output).unwrap();
    assert!(chunks(&bytes).any(|c| c.ty() == ChunkType::PLTE));
    assert!(chunks(&bytes).any(|c| c.ty() == ChunkType::tRNS));
}

/// Precondition: A picture and a template map with a `waLV` chunk exist.
/// Action: Run `wamap <input> <output> --template <template>`.
/// Expectation: The output carries the template's chunk right before `IEND`.
#[test]
fn convert_with_template() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("picture.png");
    let output = dir.path().join("map.png");
    let template = dir.path().join("template.png");
    write_picture(&input);
    let chunk = write_template(&template, b"water level 3");

    cargo_bin_cmd!("wamap")
        .arg(&input)
        .arg(&output)
        .arg("--template")
        .arg(&template)
        .assert()
        .success();

    let bytes = fs::read(&output).unwrap();
    let end = bytes.len() - 12;
    assert_eq!(&bytes[end - chunk.len()..end], chunk.as_slice());
}

/// Precondition: A picture exists.
/// Action: Run `wamap <input> <output> --no-transparency --maxcolours 8 --dither`.
/// Expectation: The output has no `tRNS` chunk and at most 8 palette entries.
#[test]
fn convert_without_transparency() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("picture.png");
    let output = dir.path().join("map.png");
    write_picture(&input);

    cargo_bin_cmd!("wamap")
        .arg(&input)
        .arg(&output)
        .args(["--no-transparency", "--maxcolours", "8", "--dither"])
        .assert()
        .success();

    let bytes = fs::read(&output).unwrap();
    assert!(chunks(&bytes).all(|c| c.ty() != ChunkType::tRNS));
    let plte = chunks(&bytes).find(|c| c.ty() == ChunkType::PLTE).unwrap();
    assert!(plte.length() <= 8 * 3);
}

/// Precondition: A picture exists.
/// Action: Run `wamap <input> <output> --maxcolours 113`.
/// Expectation: Validation error, no output file is created.
#[test]
fn convert_rejects_too_many_colours() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("picture.png");
    let output = dir.path().join("map.png");
    write_picture(&input);

    cargo_bin_cmd!("wamap")
        .arg(&input)
        .arg(&output)
        .args(["--maxcolours", "113"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 112"));

    assert!(!output.exists());
}

/// Precondition: A picture exists.
/// Action: Run `wamap <input> <output> -c 0 300 0`.
/// Expectation: Validation error, no output file is created.
#[test]
fn convert_rejects_colour_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("picture.png");
    let output = dir.path().join("map.png");
    write_picture(&input);

    cargo_bin_cmd!("wamap")
        .arg(&input)
        .arg(&output)
        .args(["-c", "0", "300", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 0 and 255"));

    assert!(!output.exists());
}

/// Precondition: The input path does not exist.
/// Action: Run `wamap <missing> <output>`.
/// Expectation: Command fails with exit code 1, no output file is created.
#[test]
fn convert_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("map.png");

    cargo_bin_cmd!("wamap")
        .arg(dir.path().join("missing.png"))
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not create map"));

    assert!(!output.exists());
}
