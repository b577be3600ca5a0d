//! Error type for the input layer, CLI option parsing and tree validation.
//!
//! Solving itself never fails: an impossible threshold is a length-0 answer,
//! and internal invariant violations go to the diagnostics sink instead.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RunError>;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended before the `N` or `S` header value.
    #[error("missing header value `{field}`")]
    MissingHeader { field: &'static str },

    /// A token that is not a valid integer of the expected width.
    #[error("token {position} (`{token}`) is not a valid {expected}")]
    InvalidToken {
        position: usize,
        token: String,
        expected: &'static str,
    },

    #[error("expected {expected} items, found {found}")]
    MissingItems { expected: usize, found: usize },

    #[error("unknown strategy `{0}` (expected prefix-tree, brute-force or shrink-memo)")]
    UnknownStrategy(String),

    #[error("unknown diagnostics level `{0}` (expected off, assert or trace)")]
    UnknownDiagnostics(String),

    #[error("unknown output format `{0}` (expected csv, table or json)")]
    UnknownFormat(String),

    /// A structural invariant of the prefix tree does not hold.
    #[error("invalid prefix tree: {0}")]
    InvalidTree(String),
}

impl RunError {
    pub fn invalid_tree(msg: impl Into<String>) -> Self {
        Self::InvalidTree(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::RunError;

    #[test]
    fn messages_name_the_offending_token() {
        let err = RunError::InvalidToken {
            position: 3,
            token: "x7".to_string(),
            expected: "32-bit integer",
        };
        assert_eq!(
            err.to_string(),
            "token 3 (`x7`) is not a valid 32-bit integer"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: RunError = io.into();
        assert!(matches!(err, RunError::Io(_)));
    }
}
