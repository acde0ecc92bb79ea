// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// msgcheck - Git commit message hook
///
/// Validates a proposed commit message against the `<type>: <subject>`
/// convention and exits non-zero so git rejects a bad commit.
#[derive(Parser, Debug)]
#[command(name = "msgcheck")]
#[command(author = "Eshan Roy")]
#[command(about = "Git commit-msg hook enforcing <type>: <subject>", long_about = None)]
pub struct Cli {
    /// Path to the file holding the proposed commit message
    ///
    /// Git writes the message to a file and passes its path as the hook's
    /// first argument.
    pub message_file: PathBuf,
}
