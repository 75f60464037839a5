//! Smoke tests for the seedbrot binary.

extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn writes_a_bmp_and_echoes_the_seed() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.bmp");
    Command::cargo_bin("seedbrot")
        .unwrap()
        .args(&["--output", out.to_str().unwrap()])
        .args(&["--size", "16x12", "--seed", "1", "--iterations", "50"])
        .assert()
        .success()
        .stderr(predicate::str::contains("seed: 1"));
    let bytes = fs::read(&out).unwrap();
    assert_eq!(&bytes[0..2], b"BM");
    assert_eq!(bytes.len(), 54 + 1024 + 16 * 12);
}

#[test]
fn writes_a_png_when_asked() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.png");
    Command::cargo_bin("seedbrot")
        .unwrap()
        .args(&["--output", out.to_str().unwrap()])
        .args(&["--size", "16x12", "--seed", "7", "--format", "png"])
        .args(&["--variant", "julia"])
        .assert()
        .success();
    let bytes = fs::read(&out).unwrap();
    assert_eq!(&bytes[0..4], &[0x89, b'P', b'N', b'G']);
}

#[test]
fn oversized_requests_are_clamped_to_the_format_maximum() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("clamped.png");
    Command::cargo_bin("seedbrot")
        .unwrap()
        .args(&["--output", out.to_str().unwrap()])
        .args(&["--size", "9999x9999", "--seed", "3", "--format", "png"])
        .args(&["--iterations", "10"])
        .assert()
        .success();
    let bytes = fs::read(&out).unwrap();
    // 320x200 is the PNG ceiling; the IDAT arithmetic pins the size.
    let idat_data = 200 * (320 + 1) + 11;
    assert_eq!(bytes.len(), 8 + 25 + (12 + idat_data) + 12);
}

#[test]
fn identical_seeds_write_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.bmp");
    let b = dir.path().join("b.bmp");
    for out in &[&a, &b] {
        Command::cargo_bin("seedbrot")
            .unwrap()
            .args(&["--output", out.to_str().unwrap()])
            .args(&["--size", "20x20", "--seed", "42"])
            .assert()
            .success();
    }
    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}

#[test]
fn rejects_an_unparseable_size() {
    Command::cargo_bin("seedbrot")
        .unwrap()
        .args(&["--output", "unused.bmp", "--size", "banana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
}
