// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The sequential validation gate and its diagnostics.

use console::style;

use crate::message::MessageParts;

use super::MESSAGE_PREFIXES;

/// Outcome of validating one commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The message satisfies every check.
    Accepted,
    /// The message failed a check; the diagnostic says which one.
    Rejected(Diagnostic),
}

impl Verdict {
    /// Whether the message was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Diagnostic for the first check a message failed.
///
/// The checks run in a fixed order and stop at the first failure, so one
/// rejected message produces exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The separator did not occur exactly once.
    IncorrectFormat,
    /// The part before the separator is not an allowed prefix.
    IncorrectPrefix {
        /// The offending prefix, echoed back untrimmed.
        prefix: String,
    },
    /// The subject is not all lowercase.
    IncorrectLettercase,
}

impl Diagnostic {
    /// The diagnostic text, one entry per output line.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Diagnostic::IncorrectFormat => vec![
                "Incorrect format! Message should be formatted as follows:".to_string(),
                "<type>: <subject>".to_string(),
            ],
            Diagnostic::IncorrectPrefix { prefix } => vec![
                format!("Message prefix \"{}\" is incorrect!", prefix),
                String::new(),
                format!("Possible prefixes are: {}", MESSAGE_PREFIXES.join(", ")),
            ],
            Diagnostic::IncorrectLettercase => {
                vec!["Message should be all lowercase!".to_string()]
            }
        }
    }

    /// Print the diagnostic to stdout.
    ///
    /// Styling is applied per line and drops away when stdout is not a
    /// terminal, so piped output is exactly the text from [`lines`].
    ///
    /// [`lines`]: Diagnostic::lines
    pub fn print(&self) {
        for line in self.lines() {
            println!("{}", style(line).red());
        }
    }
}

/// Validate a raw commit message against the convention.
///
/// The checks run in order: structure, prefix, subject lettercase. The
/// first failure wins and later checks are not evaluated.
pub fn validate(raw: &str) -> Verdict {
    let Some(parts) = MessageParts::split(raw) else {
        return Verdict::Rejected(Diagnostic::IncorrectFormat);
    };

    if !MESSAGE_PREFIXES.contains(&parts.prefix.as_str()) {
        return Verdict::Rejected(Diagnostic::IncorrectPrefix {
            prefix: parts.prefix,
        });
    }

    if !is_all_lowercase(&parts.subject) {
        return Verdict::Rejected(Diagnostic::IncorrectLettercase);
    }

    Verdict::Accepted
}

/// Whether a string is all lowercase: no uppercase characters and at least
/// one lowercase character. A string with no cased characters at all
/// (empty, digits, punctuation) does not count as lowercase.
fn is_all_lowercase(s: &str) -> bool {
    s.chars().any(char::is_lowercase) && !s.chars().any(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_message() {
        assert_eq!(validate("feat: add login form"), Verdict::Accepted);
    }

    #[test]
    fn test_accepts_trailing_newline() {
        // Git leaves the editor's trailing newline in the message file.
        assert_eq!(validate("fix: handle empty input\n"), Verdict::Accepted);
    }

    #[test]
    fn test_accepts_every_allowed_prefix() {
        for prefix in MESSAGE_PREFIXES {
            let verdict = validate(&format!("{}: do something", prefix));
            assert!(verdict.is_accepted(), "prefix {:?} rejected", prefix);
        }
    }

    #[test]
    fn test_rejects_missing_separator() {
        assert_eq!(
            validate("feat add login form"),
            Verdict::Rejected(Diagnostic::IncorrectFormat)
        );
    }

    #[test]
    fn test_rejects_repeated_separator() {
        assert_eq!(
            validate("fix: fix: bug"),
            Verdict::Rejected(Diagnostic::IncorrectFormat)
        );
    }

    #[test]
    fn test_rejects_unknown_prefix() {
        assert_eq!(
            validate("Feat: add login form"),
            Verdict::Rejected(Diagnostic::IncorrectPrefix {
                prefix: "Feat".to_string()
            })
        );
    }

    #[test]
    fn test_prefix_echoed_untrimmed() {
        // Membership is exact string equality, so surrounding whitespace
        // makes the prefix unknown and is echoed back as-is.
        assert_eq!(
            validate(" feat: add login form"),
            Verdict::Rejected(Diagnostic::IncorrectPrefix {
                prefix: " feat".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_uppercase_in_subject() {
        assert_eq!(
            validate("feat: Add login form"),
            Verdict::Rejected(Diagnostic::IncorrectLettercase)
        );
    }

    #[test]
    fn test_rejects_subject_without_cased_characters() {
        assert_eq!(
            validate("fix: 1234"),
            Verdict::Rejected(Diagnostic::IncorrectLettercase)
        );
        assert_eq!(
            validate("fix:"),
            Verdict::Rejected(Diagnostic::IncorrectLettercase)
        );
    }

    #[test]
    fn test_format_check_runs_first() {
        // An unknown prefix with a bad structure still reports the format
        // failure; the later checks never run.
        assert_eq!(
            validate("Nope: a: b"),
            Verdict::Rejected(Diagnostic::IncorrectFormat)
        );
    }

    #[test]
    fn test_format_diagnostic_lines() {
        assert_eq!(
            Diagnostic::IncorrectFormat.lines(),
            vec![
                "Incorrect format! Message should be formatted as follows:",
                "<type>: <subject>",
            ]
        );
    }

    #[test]
    fn test_prefix_diagnostic_lines() {
        let diagnostic = Diagnostic::IncorrectPrefix {
            prefix: "Feat".to_string(),
        };
        assert_eq!(
            diagnostic.lines(),
            vec![
                "Message prefix \"Feat\" is incorrect!",
                "",
                "Possible prefixes are: feat, fix, chore",
            ]
        );
    }

    #[test]
    fn test_lettercase_diagnostic_lines() {
        assert_eq!(
            Diagnostic::IncorrectLettercase.lines(),
            vec!["Message should be all lowercase!"]
        );
    }

    #[test]
    fn test_is_all_lowercase() {
        assert!(is_all_lowercase("add login form"));
        assert!(is_all_lowercase(" add login form\n"));
        assert!(!is_all_lowercase("Add login form"));
        assert!(!is_all_lowercase("1234"));
        assert!(!is_all_lowercase(""));
    }
}
