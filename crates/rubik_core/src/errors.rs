use thiserror::Error;

/// Error produced when parsing a [`crate::Face`] from color codes.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ParseFaceError {
    /// Wrong number of stickers.
    #[error("expected 9 stickers, got {0}")]
    WrongLength(usize),
    /// Character is not a color code.
    #[error("unknown color code '{0}'")]
    UnknownColor(char),
}
