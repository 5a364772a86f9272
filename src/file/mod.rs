
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

/// Reads the given text file and returns all of its lines as a `Vec<String>`.
///
/// This function:
/// - Reads the whole file as raw bytes.
/// - Decodes them permissively: invalid UTF-8 sequences are replaced with
///   U+FFFD instead of failing the read.
/// - Splits on line endings, handling both Unix (`\n`) and Windows (`\r\n`).
///
/// # Errors
///
/// - Returns an `io::ErrorKind::NotFound` if the file does not exist or cannot be opened.
/// - Returns other I/O errors if reading fails at any point.
pub fn read_txt_lossy(path: &str) -> io::Result<Vec<String>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    let text = String::from_utf8_lossy(&bytes);
    let lines = text
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect();

    Ok(lines)
}

/// Writes any `data: &T` (where `T: Display`) to a file.
///
/// - `base_path` is the file path *without* suffix (e.g. `"output/wafer_bin"`).
/// - `suffix` is an optional extension like `".json"` or `".txt"`.
///    If `None`, defaults to `".json"`.
///    If `base_path` already ends with that suffix, it won't be duplicated.
/// - Missing parent directories are created first.
///
/// # Errors
/// Returns any I/O error encountered when creating the directory or writing the file.
pub fn write_to_file<T: std::fmt::Display>(
    data: &T,
    base_path: &str,
    suffix: Option<&str>,
) -> io::Result<()> {
    // decide on suffix
    let suffix = suffix.unwrap_or(".json");
    // build the real path
    let mut path = String::from(base_path);
    if !path.ends_with(suffix) {
        path.push_str(suffix);
    }
    ensure_parent_dir(&path)?;
    // create + write
    let mut file = File::create(&path)?;
    write!(file, "{}", data)?;
    Ok(())
}

/// Creates the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &str) -> io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
