/*!
 * Error types for the subreader application.
 *
 * Malformed blocks are never errors; those are dropped while parsing.
 * These types cover what can actually fail around the parser: resolving a
 * format, persisting output and validating configuration.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving subtitle files
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// The serialized document could not be written; nothing was persisted
    #[error("Failed to persist subtitles to {path}: {source}")]
    Persist {
        /// Destination that was being written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// No format implementation handles this file
    #[error("Unsupported subtitle format: {0}")]
    UnsupportedFormat(String),
}

impl SubtitleError {
    pub fn persist(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persist {
            path: path.into(),
            source,
        }
    }
}

/// Application level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
