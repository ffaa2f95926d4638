//! Whole-file writes, directory checks and listings.

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::mode::{open, OpenMode};

/// Chunk size used by [`reader_to_file`].
pub const CHUNK_SIZE: usize = 4096;

/// Reports whether `path` exists.
///
/// Errors other than "not found" (permission denied on a parent, say) count
/// as existing.
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().try_exists().unwrap_or(true)
}

/// Creates the parent directory of `path`, and any missing ancestors.
pub fn mkdir_if_not_exist(path: impl AsRef<Path>) -> Result<()> {
    let Some(dir) = path.as_ref().parent() else {
        return Ok(());
    };
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    debug!("files: mkdir {}", dir.display());
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(dir)?;
    Ok(())
}

fn remove_existing(path: &Path) -> Result<()> {
    if exists(path) {
        debug!("files: remove {}", path.display());
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Replaces the file at `path` with `data`. Suited to small files.
pub fn bytes_to_file(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    remove_existing(path)?;
    debug!("files: write {} bytes to {}", data.len(), path.display());
    let mut f = open(path, OpenMode::Write)?;
    f.write_all(data)?;
    Ok(())
}

/// Replaces the file at `path` with everything `r` yields, copying in
/// [`CHUNK_SIZE`] chunks through a buffered writer. Suited to large files.
///
/// Returns the number of bytes written.
pub fn reader_to_file<R: Read + ?Sized>(path: impl AsRef<Path>, r: &mut R) -> Result<u64> {
    let path = path.as_ref();
    remove_existing(path)?;
    let mut w = BufWriter::new(open(path, OpenMode::Write)?);
    let mut chunk = [0u8; CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let n = match r.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        w.write_all(&chunk[..n])?;
        total += n as u64;
    }
    w.flush()?;
    debug!("files: streamed {} bytes to {}", total, path.display());
    Ok(total)
}

/// Lists the regular files in `dir` whose names match `filter`, sorted by
/// name.
///
/// With `full_path` the entries are joined onto `dir`; otherwise they are
/// bare file names.
pub fn file_list(dir: impl AsRef<Path>, filter: &str, full_path: bool) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let re = Regex::new(filter)?;

    let mut res = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        if !re.is_match(&name.to_string_lossy()) {
            continue;
        }
        if full_path {
            res.push(dir.join(&name));
        } else {
            res.push(PathBuf::from(name));
        }
    }
    res.sort();
    debug!("files: {} matches for {:?} in {}", res.len(), filter, dir.display());
    Ok(res)
}
