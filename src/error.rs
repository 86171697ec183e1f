/*!
Structured errors reported by a failed parse. At most one [`ParseError`] is
live per parse attempt; the first failing token (or the first unfulfilled
argument during validation) wins, and everything after it is abandoned.
*/

use thiserror::Error;

/// The coarse classification of a [`ParseError`], for callers that branch on
/// error category rather than on the rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A token couldn't be resolved to any registered argument, or an
    /// argument was used in the wrong position (named as positional, or
    /// vice versa).
    UnknownArgument,

    /// A value was present but failed type coercion.
    InvalidArgument,

    /// A required argument was never supplied and has no default.
    NoArgument,

    /// A multi-value argument received fewer values than its minimum and
    /// has no default.
    Insufficient,
}

/**
A single structured parse failure.

Each variant carries the raw token and/or the long name of the argument it
concerns, so callers can produce their own user-facing messaging; the
[`Display`][core::fmt::Display] impl provides a reasonable default rendering.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown argument {token:?}")]
    UnknownArgument { token: String },

    #[error("option --{option}: unable to parse {token:?}: {message}")]
    InvalidArgument {
        token: String,
        option: String,
        message: String,
    },

    #[error("option --{option}: no value was specified")]
    NoArgument { option: String },

    #[error("option --{option}: not enough values were specified")]
    Insufficient { option: String },
}

impl ParseError {
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match *self {
            ParseError::UnknownArgument { .. } => ErrorKind::UnknownArgument,
            ParseError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            ParseError::NoArgument { .. } => ErrorKind::NoArgument,
            ParseError::Insufficient { .. } => ErrorKind::Insufficient,
        }
    }

    /// The raw command-line token that triggered the failure, when the
    /// failure was triggered by a specific token.
    #[inline]
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match *self {
            ParseError::UnknownArgument { ref token }
            | ParseError::InvalidArgument { ref token, .. } => Some(token),
            ParseError::NoArgument { .. } | ParseError::Insufficient { .. } => None,
        }
    }

    /// The long name of the argument the failure concerns, if it was
    /// resolved before the failure occurred.
    #[inline]
    #[must_use]
    pub fn option(&self) -> Option<&str> {
        match *self {
            ParseError::InvalidArgument { ref option, .. }
            | ParseError::NoArgument { ref option }
            | ParseError::Insufficient { ref option } => Some(option),
            ParseError::UnknownArgument { .. } => None,
        }
    }
}
