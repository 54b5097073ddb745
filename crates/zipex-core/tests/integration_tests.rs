//! Integration tests for zipex-core.
//!
//! These tests verify end-to-end extraction against real filesystem state.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use zipex_core::ExtractError;
use zipex_core::extract_zip;
use zipex_core::test_utils::create_test_zip;
use zipex_core::test_utils::create_test_zip_deflated;

fn write_archive(dir: &Path, name: &str, data: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, data).unwrap();
    path
}

#[test]
fn test_extract_known_entries() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(
        temp.path(),
        "a.zip",
        &create_test_zip(vec![("a.txt", b"hello"), ("dir/b.txt", b"world")]),
    );
    let dest = temp.path().join("out");

    let report = extract_zip(&archive, &dest).unwrap();

    assert_eq!(fs::read(dest.join("a.txt")).unwrap(), b"hello");
    assert_eq!(fs::read(dest.join("dir/b.txt")).unwrap(), b"world");
    assert_eq!(report.files_extracted, 2);
    assert_eq!(report.bytes_written, 10);
    assert_eq!(report.destination, dest);
}

#[test]
fn test_extract_deflated_entries() {
    let temp = TempDir::new().unwrap();
    let content = "sample ".repeat(100);
    let archive = write_archive(
        temp.path(),
        "a.zip",
        &create_test_zip_deflated(vec![("notes.txt", content.as_bytes())]),
    );
    let dest = temp.path().join("out");

    extract_zip(&archive, &dest).unwrap();

    assert_eq!(fs::read_to_string(dest.join("notes.txt")).unwrap(), content);
}

#[test]
fn test_extract_explicit_directory_entries() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(
        temp.path(),
        "a.zip",
        &create_test_zip(vec![("dir/", b""), ("dir/sub/", b""), ("dir/sub/c.txt", b"c")]),
    );
    let dest = temp.path().join("out");

    let report = extract_zip(&archive, &dest).unwrap();

    assert!(dest.join("dir/sub").is_dir());
    assert_eq!(fs::read(dest.join("dir/sub/c.txt")).unwrap(), b"c");
    assert_eq!(report.directories_created, 2);
    assert_eq!(report.files_extracted, 1);
}

#[test]
fn test_extract_archive_with_prepended_data() {
    let temp = TempDir::new().unwrap();
    // Self-extracting style: junk bytes ahead of the first local header.
    let mut data = b"#!/bin/sh stub".to_vec();
    data.extend(create_test_zip(vec![("a.txt", b"hello")]));
    let archive = write_archive(temp.path(), "sfx.zip", &data);
    let dest = temp.path().join("out");

    let report = extract_zip(&archive, &dest).unwrap();

    assert_eq!(fs::read(dest.join("a.txt")).unwrap(), b"hello");
    assert_eq!(report.files_extracted, 1);
}

#[test]
fn test_invalid_archive_leaves_destination_untouched() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(temp.path(), "fake.zip", b"just some text");
    let dest = temp.path().join("out");

    let err = extract_zip(&archive, &dest).unwrap_err();

    assert!(err.is_invalid_format());
    assert!(!dest.exists(), "invalid input must not create the destination");
}

#[test]
fn test_zero_byte_archive_is_invalid() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(temp.path(), "zero.zip", b"");
    let dest = temp.path().join("out");

    let err = extract_zip(&archive, &dest).unwrap_err();

    assert!(err.is_invalid_format());
    assert!(!dest.exists());
}

#[test]
fn test_missing_archive_is_not_found() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("a.zip");
    let dest = temp.path().join("out");

    let err = extract_zip(&archive, &dest).unwrap_err();

    // A missing file is a fatal I/O condition, never "not a valid archive".
    assert!(matches!(err, ExtractError::NotFound { .. }));
    assert!(!err.is_invalid_format());
    assert!(!dest.exists());
}

#[test]
fn test_extraction_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(
        temp.path(),
        "a.zip",
        &create_test_zip(vec![("a.txt", b"hello"), ("dir/b.txt", b"world")]),
    );
    let dest = temp.path().join("out");

    extract_zip(&archive, &dest).unwrap();
    let second = extract_zip(&archive, &dest).unwrap();

    assert_eq!(second.files_extracted, 2);
    assert_eq!(fs::read(dest.join("a.txt")).unwrap(), b"hello");
    assert_eq!(fs::read(dest.join("dir/b.txt")).unwrap(), b"world");
}

#[test]
fn test_overwrites_colliding_files() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(
        temp.path(),
        "a.zip",
        &create_test_zip(vec![("a.txt", b"fresh")]),
    );
    let dest = temp.path().join("out");
    fs::create_dir_all(&dest).unwrap();
    fs::write(dest.join("a.txt"), "stale").unwrap();

    extract_zip(&archive, &dest).unwrap();

    assert_eq!(fs::read(dest.join("a.txt")).unwrap(), b"fresh");
}

#[test]
fn test_creates_missing_parent_directories() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(
        temp.path(),
        "a.zip",
        &create_test_zip(vec![("a.txt", b"hello")]),
    );
    let dest = temp.path().join("deep/nested/out");

    extract_zip(&archive, &dest).unwrap();

    assert!(dest.is_dir());
    assert_eq!(fs::read(dest.join("a.txt")).unwrap(), b"hello");
}

#[test]
fn test_existing_destination_is_a_noop() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(
        temp.path(),
        "a.zip",
        &create_test_zip(vec![("a.txt", b"hello")]),
    );
    let dest = temp.path().join("out");
    fs::create_dir_all(&dest).unwrap();

    extract_zip(&archive, &dest).unwrap();

    assert_eq!(fs::read(dest.join("a.txt")).unwrap(), b"hello");
}

#[test]
fn test_unrelated_files_survive_extraction() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(
        temp.path(),
        "a.zip",
        &create_test_zip(vec![("a.txt", b"hello")]),
    );
    let dest = temp.path().join("out");
    fs::create_dir_all(&dest).unwrap();
    fs::write(dest.join("keep.txt"), "unrelated").unwrap();

    extract_zip(&archive, &dest).unwrap();

    assert_eq!(fs::read_to_string(dest.join("keep.txt")).unwrap(), "unrelated");
    assert_eq!(fs::read(dest.join("a.txt")).unwrap(), b"hello");
}

#[test]
fn test_extract_empty_archive() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(temp.path(), "empty.zip", &create_test_zip(vec![]));
    let dest = temp.path().join("out");

    let report = extract_zip(&archive, &dest).unwrap();

    assert!(dest.is_dir());
    assert_eq!(report.total_items(), 0);
}

#[test]
fn test_truncated_central_directory_is_invalid() {
    let temp = TempDir::new().unwrap();
    let data = create_test_zip(vec![("a.txt", b"hello")]);
    // Keep the local header magic but cut the archive short of its
    // central directory.
    let archive = write_archive(temp.path(), "cut.zip", &data[..data.len() / 2]);
    let dest = temp.path().join("out");

    let err = extract_zip(&archive, &dest).unwrap_err();

    assert!(err.is_invalid_format());
    assert!(!dest.exists());
}
