//! Test utilities for building zip archives.
//!
//! Reusable helpers for creating in-memory test archives, shared by the
//! core integration tests and the CLI tests.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use zip::CompressionMethod;
use zip::write::SimpleFileOptions;
use zip::write::ZipWriter;

/// Creates an in-memory zip archive from a list of entries.
///
/// Each entry is a tuple of (path, content). Files are stored uncompressed.
/// A path ending in `/` becomes an explicit directory entry.
///
/// # Examples
///
/// ```
/// use zipex_core::test_utils::create_test_zip;
///
/// let data = create_test_zip(vec![("file.txt", b"hello"), ("dir/nested.txt", b"world")]);
/// ```
#[must_use]
pub fn create_test_zip(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    create_zip_with_method(entries, CompressionMethod::Stored)
}

/// Creates an in-memory zip archive with deflate-compressed entries.
#[must_use]
pub fn create_test_zip_deflated(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    create_zip_with_method(entries, CompressionMethod::Deflated)
}

fn create_zip_with_method(entries: Vec<(&str, &[u8])>, method: CompressionMethod) -> Vec<u8> {
    let buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(buffer));

    let options = SimpleFileOptions::default()
        .compression_method(method)
        .unix_permissions(0o644);

    for (path, data) in entries {
        if path.ends_with('/') {
            zip.add_directory(path, options).unwrap();
        } else {
            zip.start_file(path, options).unwrap();
            zip.write_all(data).unwrap();
        }
    }

    zip.finish().unwrap().into_inner()
}
