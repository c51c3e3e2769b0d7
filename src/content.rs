/*!
 * File content loading
 */

use std::fs;
use std::path::Path;

/// Read a file's content as text.
///
/// The whole file is read into memory and decoded as UTF-8. An empty file
/// yields an empty string. Files that cannot be read or are not valid UTF-8
/// are reported as unreadable (`None`) with a warning; the scan continues.
pub fn read_file_content(path: &Path) -> Option<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Warning: Could not read file {}: {}", path.display(), e);
            return None;
        }
    };

    match String::from_utf8(bytes) {
        Ok(text) => Some(text),
        Err(e) => {
            eprintln!(
                "Warning: Could not decode file {}: {}",
                path.display(),
                e.utf8_error()
            );
            None
        }
    }
}
