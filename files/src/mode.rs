//! Open modes.

use std::fs::{File, OpenOptions};
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// How [`open`] opens a file.
///
/// Parsed from the short strings `"r"`, `"w"`, `"a"`, `"wa"`/`"aw"` and
/// `"rw"`/`"wr"`. Anything else means [`OpenMode::Read`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// `"r"`: read-only.
    #[default]
    Read,
    /// `"w"`: write-only, created if missing. Existing contents are
    /// overwritten in place, not truncated.
    Write,
    /// `"a"`: append to an existing file.
    Append,
    /// `"wa"` or `"aw"`: append, created if missing.
    WriteAppend,
    /// `"rw"` or `"wr"`: read-write, created if missing.
    ReadWrite,
}

impl OpenMode {
    /// Parses a mode string, falling back to read-only.
    pub fn parse(mode: &str) -> Self {
        match mode {
            "r" => OpenMode::Read,
            "w" => OpenMode::Write,
            "a" => OpenMode::Append,
            "wa" | "aw" => OpenMode::WriteAppend,
            "rw" | "wr" => OpenMode::ReadWrite,
            _ => OpenMode::Read,
        }
    }

    /// Returns the matching [`OpenOptions`].
    pub fn options(&self) -> OpenOptions {
        let mut opts = OpenOptions::new();
        match self {
            OpenMode::Read => opts.read(true),
            OpenMode::Write => opts.write(true).create(true),
            OpenMode::Append => opts.append(true),
            OpenMode::WriteAppend => opts.append(true).create(true),
            OpenMode::ReadWrite => opts.read(true).write(true).create(true),
        };
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.mode(0o664);
        }
        opts
    }
}

impl From<&str> for OpenMode {
    fn from(mode: &str) -> Self {
        Self::parse(mode)
    }
}

/// Opens `path` in the given mode.
pub fn open(path: impl AsRef<Path>, mode: impl Into<OpenMode>) -> Result<File> {
    let path = path.as_ref();
    let mode = mode.into();
    debug!("files: open {} ({:?})", path.display(), mode);
    Ok(mode.options().open(path)?)
}
