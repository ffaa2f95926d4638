//! File and path helpers.
//!
//! - [`OpenMode`] / [`open`]: open a file from a short mode string
//! - [`bytes_to_file`] / [`reader_to_file`]: replace a file's contents from
//!   memory or from a stream
//! - [`exists`], [`mkdir_if_not_exist`]: filesystem checks
//! - [`path_base_add_prefix`], [`path_base_add_suffix`], [`remove_name_ext`]:
//!   file name rewriting
//! - [`file_list`]: regex-filtered directory listing
//!
//! # Example
//!
//! ```rust
//! use kitbag_files::{path_base_add_suffix, remove_name_ext};
//! use std::path::Path;
//!
//! assert_eq!(
//!     path_base_add_suffix("logs/app.log", ".1"),
//!     Path::new("logs/app.1.log")
//! );
//! assert_eq!(remove_name_ext("archive.tar.gz"), Path::new("archive.tar"));
//! ```

mod error;
mod mode;
mod ops;
mod path;

pub use error::{FilesError, Result};
pub use mode::{open, OpenMode};
pub use ops::{
    bytes_to_file, exists, file_list, mkdir_if_not_exist, reader_to_file, CHUNK_SIZE,
};
pub use path::{path_base_add_prefix, path_base_add_suffix, remove_name_ext};
