//! Library errors.
//!
//! Every failure carries a single user-visible diagnostic message; the
//! exact wording is part of the library's compatibility contract, so
//! `Display` renders the message verbatim with no decoration.

use std::fmt;

/// An error raised while parsing a plural-rule expression or loading a
/// MO catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Plural-rule expression did not parse. `pos` is the zero-based
    /// byte offset into the expression at which the fault was detected.
    PluralRules { message: String, pos: usize },
    /// The MO file is structurally malformed.
    Format { message: String },
    /// The MO file could not be read from disk.
    Io { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn plural_rules(message: impl Into<String>, pos: usize) -> Self {
        Error::PluralRules {
            message: message.into(),
            pos,
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        Error::Format {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Error::Io {
            message: message.into(),
        }
    }

    /// The diagnostic message.
    pub fn message(&self) -> &str {
        match self {
            Error::PluralRules { message, .. } => message,
            Error::Format { message } => message,
            Error::Io { message } => message,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Error {}
