//! HTTP download to a local file.

use std::path::Path;

use kitbag_buffer::ByteBuffer;
use tracing::debug;
use ureq::http::header::CONTENT_LENGTH;

use crate::address::{join_url_paths, parse_url};
use crate::config::{DownloadConfig, DEFAULT_BIG_SIZE};
use crate::error::{NetsError, Result};

/// Downloads `url`, with `url_paths` appended to its path, into
/// `local_path`. Returns the number of bytes written.
///
/// The parent directory of `local_path` is created if missing and an
/// existing file is replaced. A missing or unreadable `Content-Length`
/// counts as small.
pub fn http_download(
    url: &str,
    local_path: impl AsRef<Path>,
    url_paths: &[&str],
    config: &DownloadConfig,
) -> Result<u64> {
    let local_path = local_path.as_ref();
    let mut u = parse_url(url)?;
    join_url_paths(&mut u, url_paths)?;
    kitbag_files::mkdir_if_not_exist(local_path)?;

    debug!("nets: GET {}", u);
    let mut req = config.agent().get(u.as_str());
    if let Some(ua) = &config.user_agent {
        req = req.header("User-Agent", ua.as_str());
    }
    let resp = req.call()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(NetsError::Status {
            status: status.as_u16(),
            url: u.to_string(),
        });
    }

    let size = resp
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);
    let mut body = resp.into_body().into_reader();

    if size >= config.big_size {
        debug!("nets: streaming {} bytes to {}", size, local_path.display());
        return Ok(kitbag_files::reader_to_file(local_path, &mut body)?);
    }

    let mut buf = ByteBuffer::with_capacity(presize(size));
    let n = buf.read_from(&mut body)?;
    debug!("nets: writing {} bytes to {}", n, local_path.display());
    kitbag_files::bytes_to_file(local_path, buf.unread_bytes())?;
    Ok(n)
}

/// Initial buffer capacity for a body that declares `content_length` bytes.
/// The declared length is only a hint, so it is capped at
/// [`DEFAULT_BIG_SIZE`] whatever `big_size` the caller configured.
pub(crate) fn presize(content_length: u64) -> usize {
    usize::try_from(content_length.min(DEFAULT_BIG_SIZE)).unwrap_or(0)
}
