// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Reading the message file and splitting it into prefix and subject.

use std::fs;
use std::path::Path;

use crate::error::{MsgCheckError, Result};
use crate::rules::PREFIX_SEPARATOR;

/// Read the proposed commit message from the file git hands to the hook.
///
/// Git writes the message to a file and passes its path as the hook's
/// first argument. The file handle is scoped to this call and released on
/// every path out of it.
pub fn read_message(path: &Path) -> Result<String> {
    tracing::debug!("Reading commit message from {}", path.display());

    fs::read_to_string(path).map_err(|source| MsgCheckError::MessageRead {
        path: path.to_path_buf(),
        source,
    })
}

/// A commit message split into its prefix and subject halves.
///
/// Both halves are the raw substrings produced by the split. Nothing is
/// trimmed: `" feat: x"` keeps the leading space in its prefix, and the
/// subject keeps the space that usually follows the separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageParts {
    /// Everything before the separator.
    pub prefix: String,
    /// Everything after the separator.
    pub subject: String,
}

impl MessageParts {
    /// Split a raw message on the prefix separator.
    ///
    /// Returns `None` unless the separator occurs exactly once in the whole
    /// message, i.e. the split yields exactly two parts.
    pub fn split(raw: &str) -> Option<Self> {
        let parts: Vec<&str> = raw.split(PREFIX_SEPARATOR).collect();

        match parts.as_slice() {
            [prefix, subject] => Some(Self {
                prefix: (*prefix).to_string(),
                subject: (*subject).to_string(),
            }),
            _ => None,
        }
    }
}
