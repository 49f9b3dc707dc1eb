//! Error types for indicator encoding and decoding.
//!
//! ## Error Categories
//!
//! - **Invalid Numbers**: A digit run that does not fit in an `i32`
//! - **Syntax Errors**: Structurally malformed text (stray brackets, dangling `-`, foreign characters)
//! - **Unexpected End**: Input that stops inside a bracketed list or a range literal
//! - **Invalid Arguments**: Coordinates the format cannot carry (negative values, oversized grid indices)
//! - **Limits**: A decode that produced more cells than the configured limit
//!
//! Positions are byte offsets into the indicator text. Indicators are single-line, so
//! there is no line/column pair.
//!
//! ## Examples
//!
//! ```rust
//! use matrix_indicator::{parse, Error};
//!
//! let result: Result<Vec<(i32, i32)>, Error> = parse("1,[2,3").cells().collect();
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("Decode error: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding or decoding an indicator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A numeric token that could not be parsed as an `i32`
    #[error("Invalid number '{token}' at position {position}: {reason}")]
    InvalidNumber {
        position: usize,
        token: String,
        reason: String,
    },

    /// Structurally malformed indicator text
    #[error("Syntax error at position {position}: {msg}")]
    Syntax { position: usize, msg: String },

    /// Input ended while a list or range was still open
    #[error("Unexpected end of input at position {position}, expected {expected}")]
    UnexpectedEof { position: usize, expected: String },

    /// An argument the format cannot represent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Decoding produced more cells than allowed
    #[error("Cell limit of {limit} exceeded")]
    LimitExceeded { limit: usize },
}

impl Error {
    /// Creates an invalid number error for the token starting at `position`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use matrix_indicator::Error;
    ///
    /// let reason = "99999999999".parse::<i32>().unwrap_err();
    /// let err = Error::invalid_number(4, "99999999999", &reason);
    /// assert!(err.to_string().contains("position 4"));
    /// ```
    pub fn invalid_number<E: fmt::Display>(position: usize, token: &str, reason: &E) -> Self {
        Error::InvalidNumber {
            position,
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a syntax error at the given byte offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use matrix_indicator::Error;
    ///
    /// let err = Error::syntax(3, "unbalanced ']'");
    /// assert_eq!(err.to_string(), "Syntax error at position 3: unbalanced ']'");
    /// ```
    pub fn syntax(position: usize, msg: &str) -> Self {
        Error::Syntax {
            position,
            msg: msg.to_string(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(position: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            position,
            expected: expected.to_string(),
        }
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidArgument(msg.to_string())
    }

    /// Creates a cell limit error.
    pub fn limit_exceeded(limit: usize) -> Self {
        Error::LimitExceeded { limit }
    }

    /// Byte offset into the indicator text, for errors raised while scanning.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::InvalidNumber { position, .. }
            | Error::Syntax { position, .. }
            | Error::UnexpectedEof { position, .. } => Some(*position),
            Error::InvalidArgument(_) | Error::LimitExceeded { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_for_scan_errors() {
        let reason = "x".parse::<i32>().unwrap_err();
        assert_eq!(Error::invalid_number(4, "x", &reason).position(), Some(4));
        assert_eq!(Error::syntax(7, "x").position(), Some(7));
        assert_eq!(Error::unexpected_eof(2, "']'").position(), Some(2));
        assert_eq!(Error::invalid_argument("negative").position(), None);
        assert_eq!(Error::limit_exceeded(10).position(), None);
    }

    #[test]
    fn test_display_messages() {
        let reason = "4294967296".parse::<i32>().unwrap_err();
        let err = Error::invalid_number(0, "4294967296", &reason);
        assert!(err.to_string().starts_with("Invalid number '4294967296' at position 0"));

        let err = Error::unexpected_eof(5, "']'");
        assert_eq!(
            err.to_string(),
            "Unexpected end of input at position 5, expected ']'"
        );

        assert_eq!(
            Error::limit_exceeded(3).to_string(),
            "Cell limit of 3 exceeded"
        );
    }
}
