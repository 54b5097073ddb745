//! Zip format validation.

use std::fs::File;
use std::io::ErrorKind;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::path::Path;

use crate::ExtractError;
use crate::Result;

/// Local file header signature: `PK\x03\x04`.
const LOCAL_FILE_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// End-of-central-directory signature: `PK\x05\x06` (a bare record is the
/// whole of an empty archive).
const EOCD_MAGIC: [u8; 4] = [0x50, 0x4B, 0x05, 0x06];

/// Data descriptor signature: `PK\x07\x08` (spanned archive marker).
const SPANNED_MARKER_MAGIC: [u8; 4] = [0x50, 0x4B, 0x07, 0x08];

/// Furthest the end-of-central-directory record can start from the end of
/// the file: the 22-byte fixed record plus a 65535-byte comment.
const EOCD_SEARCH_WINDOW: u64 = 22 + 65_535;

/// Checks whether the file at `path` is recognizable as a zip archive.
///
/// A file whose leading bytes are the local file header of a normal
/// archive, the bare end-of-central-directory record of an empty archive,
/// or the spanned archive marker is accepted outright. Otherwise the tail
/// of the file is searched for an end-of-central-directory record, so
/// archives with prepended data (self-extracting style) are accepted too.
/// A zero-byte or truncated file is not a zip.
///
/// # Errors
///
/// Returns [`ExtractError::NotFound`] if `path` does not exist and
/// [`ExtractError::Io`] for any other read failure. A file that merely
/// fails the signature check yields `Ok(false)`, not an error.
///
/// # Examples
///
/// ```no_run
/// use zipex_core::is_zip_file;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// if !is_zip_file("a.zip")? {
///     eprintln!("not a zip archive");
/// }
/// # Ok(())
/// # }
/// ```
pub fn is_zip_file<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    let mut file = open_archive(path)?;

    let mut magic = [0u8; 4];
    match file.read_exact(&mut magic) {
        Ok(()) if has_zip_magic(&magic) => Ok(true),
        Ok(()) => contains_eocd(&mut file),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(ExtractError::Io(e)),
    }
}

/// Searches the tail of the file for an end-of-central-directory record.
///
/// Prepended data moves the first local header away from offset zero, so
/// the record near the end of the file is the only reliable marker. The
/// scan is deliberately permissive: a false positive is caught by the
/// central directory parse during extraction.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn contains_eocd(file: &mut File) -> Result<bool> {
    let len = file.metadata()?.len();
    let window = len.min(EOCD_SEARCH_WINDOW);

    file.seek(SeekFrom::End(-(window as i64)))?;
    let mut tail = Vec::with_capacity(window as usize);
    file.take(window).read_to_end(&mut tail)?;

    Ok(tail.windows(EOCD_MAGIC.len()).any(|w| w == EOCD_MAGIC))
}

/// Opens the archive file, mapping a missing path to [`ExtractError::NotFound`].
pub(crate) fn open_archive(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ExtractError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ExtractError::Io(e)
        }
    })
}

fn has_zip_magic(magic: &[u8; 4]) -> bool {
    *magic == LOCAL_FILE_MAGIC || *magic == EOCD_MAGIC || *magic == SPANNED_MARKER_MAGIC
}
