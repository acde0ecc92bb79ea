// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! msgcheck - Git commit message hook
//!
//! A commit-msg hook binary that checks a proposed commit message against
//! the `<type>: <subject>` convention:
//!
//! - the message contains the `:` separator exactly once
//! - the type before the separator is one of `feat`, `fix`, `chore`
//! - the subject after the separator is all lowercase
//!
//! The first failing check prints a diagnostic to stdout and the process
//! exits 1 so git rejects the commit; a clean message prints nothing and
//! exits 0.
//!
//! # Example
//!
//! ```
//! use msgcheck::rules::{validate, Verdict};
//!
//! assert!(validate("feat: add login form").is_accepted());
//! assert!(matches!(validate("feat add login form"), Verdict::Rejected(_)));
//! ```

// Module declarations
pub mod cli;
pub mod error;
pub mod message;
pub mod rules;

// Re-exports for convenience
pub use error::{MsgCheckError, Result};
pub use rules::{validate, Verdict};
