//! Error types for loading menu files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a menu file.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The menu file could not be read.
    #[error("failed to read menu file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An item line had a price that is not a non-negative integer.
    #[error("invalid price in menu for {restaurant}: {line:?}")]
    InvalidPrice { restaurant: String, line: String },

    /// An item line had nothing before the ` - ` separator.
    #[error("missing item name in menu for {restaurant}: {line:?}")]
    MissingItemName { restaurant: String, line: String },
}
