use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum QRError {
    /// The error correction level token is not one of L, M, Q or H.
    #[error("invalid error correction level {0:?}: expected one of L, M, Q, H")]
    InvalidECLevel(String),

    /// The encoded data needs more bits than the chosen level can hold.
    #[error("data too long: needed {needed} bits, but only {capacity} available")]
    DataTooLong { needed: usize, capacity: usize },

    /// A byte mode character has a code point above 255.
    #[error("invalid character {0:?}: byte mode only supports code points up to 255")]
    InvalidChar(char),

    #[error("invalid masking pattern {0}: expected 0 to 7")]
    InvalidMaskingPattern(u8),
}

pub type QRResult<T> = Result<T, QRError>;
