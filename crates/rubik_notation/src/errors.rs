use thiserror::Error;

/// Error produced when parsing move notation.
///
/// Parsing never partially succeeds: the first invalid token aborts the whole
/// parse and is reported here.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Input contained no moves.
    #[error("no moves given")]
    Empty,
    /// Token is longer than a turn letter plus a modifier.
    #[error("invalid move '{token}': move should be at most 2 characters long")]
    TooLong {
        /// Offending token.
        token: String,
    },
    /// First character of the token is not a known turn.
    #[error("invalid move '{token}': unknown turn '{turn}'")]
    UnknownTurn {
        /// Offending token.
        token: String,
        /// Offending character.
        turn: char,
    },
    /// Second character of the token is neither `2` nor `'`.
    #[error("invalid move '{token}': unknown modifier '{modifier}'")]
    UnknownModifier {
        /// Offending token.
        token: String,
        /// Offending character.
        modifier: char,
    },
}

impl ParseError {
    /// Returns the token that failed to parse, or an empty string if there
    /// were no tokens at all.
    pub fn token(&self) -> &str {
        match self {
            ParseError::Empty => "",
            ParseError::TooLong { token }
            | ParseError::UnknownTurn { token, .. }
            | ParseError::UnknownModifier { token, .. } => token,
        }
    }
}
