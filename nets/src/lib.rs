//! URL validation and HTTP downloads.
//!
//! [`http_download`] fetches a URL into a local file. Small bodies are
//! collected in memory and written in one go; bodies whose declared length
//! reaches [`DownloadConfig::big_size`] are streamed to disk.
//!
//! # Example
//!
//! ```rust,no_run
//! use kitbag_nets::{http_download, DownloadConfig};
//! use std::time::Duration;
//!
//! let config = DownloadConfig::new().with_timeout(Duration::from_secs(30));
//! let n = http_download(
//!     "https://example.com/releases",
//!     "downloads/v1.2.0.tar.gz",
//!     &["v1.2.0", "app.tar.gz"],
//!     &config,
//! )
//! .unwrap();
//! println!("downloaded {} bytes", n);
//! ```

mod address;
mod config;
mod download;
mod error;

pub use address::{join_url_paths, parse_url};
pub use config::{DownloadConfig, DEFAULT_BIG_SIZE};
pub use download::http_download;
pub use error::{NetsError, Result};
