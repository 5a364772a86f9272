#[cfg(test)]
mod tests;

use std::fs::{self, File};
use std::io::{self, Error, ErrorKind, Read, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::file::ensure_parent_dir;

/// Default chunk size for static hosting: 10 MiB.
pub const DEFAULT_CHUNK_SIZE: usize = 10 * 1024 * 1024;

/// What `split_file` wrote: the part paths in index order and the total
/// number of payload bytes across them.
#[derive(Debug)]
pub struct ChunkReport {
    pub parts: Vec<PathBuf>,
    pub total_bytes: u64,
}

/// Path of the numbered part file for `chunk_path`, counting from 0.
pub fn part_path(chunk_path: &str, index: usize) -> PathBuf {
    PathBuf::from(format!("{}.part{}", chunk_path, index))
}

/// Split a binary file into numbered fixed-size parts for static hosting.
///
/// Each part is written to `<chunk_path>.part<N>`; every part except possibly
/// the last holds exactly `chunk_size` bytes. An empty input produces no
/// parts. The parent directory of `chunk_path` is created if missing.
///
/// # Errors
///
/// - Returns `io::ErrorKind::InvalidInput` if `chunk_size` is zero.
/// - Returns `io::ErrorKind::NotFound` if the input file does not exist.
/// - Returns other I/O errors from reading the input or writing a part.
pub fn split_file(input_path: &str, chunk_path: &str, chunk_size: usize) -> io::Result<ChunkReport> {
    if chunk_size == 0 {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            "Chunk size must be non-zero",
        ));
    }

    ensure_parent_dir(chunk_path)?;

    let mut file = File::open(input_path)?;
    let mut buf = vec![0u8; chunk_size];
    let mut parts: Vec<PathBuf> = Vec::new();
    let mut total_bytes: u64 = 0;

    loop {
        let filled = read_full(&mut file, &mut buf)?;
        if filled == 0 {
            break;
        }

        let path = part_path(chunk_path, parts.len());
        let mut out = File::create(&path)?;
        out.write_all(&buf[..filled])?;
        debug!(part = parts.len(), bytes = filled, path = %path.display(), "wrote chunk");

        total_bytes += filled as u64;
        parts.push(path);

        // short read means EOF
        if filled < chunk_size {
            break;
        }
    }

    remove_stale_parts(chunk_path, parts.len())?;

    Ok(ChunkReport { parts, total_bytes })
}

/// Delete leftover part files from an earlier run with more parts, so that
/// concatenating everything under `chunk_path` always rebuilds the current
/// input.
fn remove_stale_parts(chunk_path: &str, first_index: usize) -> io::Result<()> {
    let mut index = first_index;
    loop {
        let path = part_path(chunk_path, index);
        if !path.exists() {
            break;
        }
        fs::remove_file(&path)?;
        debug!(part = index, path = %path.display(), "removed stale chunk");
        index += 1;
    }
    Ok(())
}

/// Read until `buf` is full or EOF; returns the number of bytes read.
fn read_full(file: &mut File, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = file.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
