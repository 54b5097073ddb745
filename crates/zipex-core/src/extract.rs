//! Zip extraction engine.

use std::fs;
use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Instant;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::ExtractError;
use crate::ExtractionReport;
use crate::Result;
use crate::validate;

/// Validates the archive and extracts every entry into `destination`.
///
/// The archive is checked for a zip signature before anything is written:
/// an invalid input leaves the filesystem untouched, including the
/// destination directory itself. On a valid archive the destination (and
/// any missing parents) is created, then every entry is materialized at
/// its stored relative path in archive order. Existing files at colliding
/// paths are overwritten. A failure partway through is fatal and already
/// written entries are not rolled back.
///
/// # Errors
///
/// - [`ExtractError::NotFound`] if the archive path does not exist.
/// - [`ExtractError::InvalidFormat`] if the file is not a valid zip.
/// - [`ExtractError::Io`] for any other failure while reading the archive,
///   creating the destination, or writing an entry.
///
/// # Examples
///
/// ```no_run
/// use zipex_core::extract_zip;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = extract_zip("a.zip", ".")?;
/// println!("Extracted all files to '{}'", report.destination.display());
/// # Ok(())
/// # }
/// ```
pub fn extract_zip<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    destination: Q,
) -> Result<ExtractionReport> {
    let archive_path = archive_path.as_ref();
    let destination = destination.as_ref();
    let start = Instant::now();

    if !validate::is_zip_file(archive_path)? {
        return Err(ExtractError::InvalidFormat {
            path: archive_path.to_path_buf(),
        });
    }

    let file = validate::open_archive(archive_path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| map_zip_error(e, archive_path))?;

    fs::create_dir_all(destination)?;

    let mut report = ExtractionReport::new(destination);
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| map_zip_error(e, archive_path))?;

        let Some(relative) = entry.enclosed_name() else {
            return Err(ExtractError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("entry has an unusable path: {}", entry.name()),
            )));
        };
        let outpath = destination.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&outpath)?;
            report.directories_created += 1;
        } else {
            if let Some(parent) = outpath.parent()
                && !parent.exists()
            {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = File::create(&outpath)?;
            report.bytes_written += io::copy(&mut entry, &mut outfile)?;
            report.files_extracted += 1;
        }
    }

    report.duration = start.elapsed();
    Ok(report)
}

/// Maps a zip crate error onto the extraction error taxonomy.
///
/// I/O failures pass through untranslated; every structural problem the
/// parser reports (bad central directory, corrupt headers, unsupported
/// features) counts as an invalid archive.
fn map_zip_error(err: ZipError, archive_path: &Path) -> ExtractError {
    match err {
        ZipError::Io(e) => ExtractError::Io(e),
        _ => ExtractError::InvalidFormat {
            path: archive_path.to_path_buf(),
        },
    }
}
