// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the msgcheck application.
//!
//! Environmental failures live here. A rejected message is not an error:
//! rejection is reported through [`crate::rules::Verdict`] and exit code 1,
//! while these errors abort the run with a fatal status and no stdout
//! diagnostic.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for msgcheck operations.
#[derive(Error, Debug)]
pub enum MsgCheckError {
    /// The commit message file could not be opened or read.
    #[error("Failed to read commit message from {path}: {source}")]
    MessageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for msgcheck operations.
pub type Result<T> = std::result::Result<T, MsgCheckError>;
