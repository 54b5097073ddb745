//! Zip archive extraction library with format validation.
//!
//! `zipex-core` validates that an input file is a structurally valid zip
//! archive before extracting all of its entries into a destination
//! directory, creating the destination (and any missing parents) on demand.
//!
//! # Examples
//!
//! ```no_run
//! use zipex_core::extract_zip;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = extract_zip("archive.zip", "/output/dir")?;
//! println!("Extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod extract;
pub mod report;
pub mod test_utils;
pub mod validate;

// Re-export main API types
pub use error::ExtractError;
pub use error::Result;
pub use extract::extract_zip;
pub use report::ExtractionReport;
pub use validate::is_zip_file;
