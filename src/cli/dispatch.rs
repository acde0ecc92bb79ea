// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook execution.

use crate::error::Result;
use crate::message;
use crate::rules::{self, Verdict};

use super::args::Cli;

/// Run the hook with the given arguments.
///
/// Reads the message file, validates it, and prints the diagnostic for a
/// rejected message. The caller turns the verdict into the exit code. A
/// read failure propagates without printing anything to stdout.
pub fn run(cli: Cli) -> Result<Verdict> {
    tracing::debug!("Validating {}", cli.message_file.display());

    let raw = message::read_message(&cli.message_file)?;
    let verdict = rules::validate(&raw);

    if let Verdict::Rejected(diagnostic) = &verdict {
        diagnostic.print();
    }

    Ok(verdict)
}
