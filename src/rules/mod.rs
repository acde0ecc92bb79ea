// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation rules for commit messages.
//!
//! This module holds the fixed message convention and the sequential
//! checks that enforce it.

mod validator;

pub use validator::{validate, Diagnostic, Verdict};

/// Commit type prefixes accepted before the separator, in the order they
/// are listed in diagnostics.
pub const MESSAGE_PREFIXES: &[&str] = &["feat", "fix", "chore"];

/// Separator between the type prefix and the subject.
pub const PREFIX_SEPARATOR: char = ':';
