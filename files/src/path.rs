//! File name rewriting.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Prepends `prefix` to the last component of `path`.
///
/// `path_base_add_prefix("a/b.txt", "old_")` is `a/old_b.txt`. An empty path
/// stays empty.
pub fn path_base_add_prefix(path: impl AsRef<Path>, prefix: &str) -> PathBuf {
    let path = path.as_ref();
    let Some(name) = path.file_name() else {
        return path.to_path_buf();
    };
    let mut base = OsString::from(prefix);
    base.push(name);
    path.with_file_name(base)
}

/// Inserts `suffix` between the stem and the extension of the last
/// component of `path`.
///
/// `path_base_add_suffix("a/b.txt", "_v2")` is `a/b_v2.txt`. An empty path
/// stays empty.
pub fn path_base_add_suffix(path: impl AsRef<Path>, suffix: &str) -> PathBuf {
    let path = path.as_ref();
    let Some(stem) = path.file_stem() else {
        return path.to_path_buf();
    };
    let mut base = stem.to_os_string();
    base.push(suffix);
    if let Some(ext) = path.extension() {
        base.push(".");
        base.push(ext);
    }
    path.with_file_name(base)
}

/// Drops the last extension from `name`, keeping any directories.
pub fn remove_name_ext(name: impl AsRef<Path>) -> PathBuf {
    name.as_ref().with_extension("")
}
