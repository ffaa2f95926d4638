//! URL parsing and path joining.

use url::Url;

use crate::error::{NetsError, Result};

/// Parses an absolute URL that has both a scheme and a host.
pub fn parse_url(raw: &str) -> Result<Url> {
    let u = Url::parse(raw).map_err(|e| NetsError::invalid_url(raw, e))?;
    if u.scheme().is_empty() || u.host_str().is_none_or(str::is_empty) {
        return Err(NetsError::invalid_url(raw, "missing scheme or host"));
    }
    Ok(u)
}

/// Appends `paths` to the path of `u`, one `/`-separated segment at a time.
///
/// Empty segments are dropped, so `"a/"`, `"/b"` and `""` join cleanly.
/// Segments are percent-encoded as needed.
pub fn join_url_paths(u: &mut Url, paths: &[&str]) -> Result<()> {
    if paths.is_empty() {
        return Ok(());
    }
    let raw = u.to_string();
    let mut segments = u
        .path_segments_mut()
        .map_err(|_| NetsError::invalid_url(raw, "url cannot have a path"))?;
    segments.pop_if_empty();
    for path in paths {
        segments.extend(path.split('/').filter(|s| !s.is_empty()));
    }
    Ok(())
}
