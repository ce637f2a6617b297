use thiserror::Error;

use super::metadata::ECLevel;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum QRError {
    #[error("data too long: {len} bytes exceed the capacity of version {version} at level {ec_level:?}")]
    CapacityExceeded { len: usize, ec_level: ECLevel, version: usize },

    #[error("invalid version {0}, expected 1 to 40")]
    InvalidVersion(usize),

    #[error("invalid error correction level {0:?}")]
    InvalidECLevel(String),

    #[error("invalid masking pattern {0}, expected 0 to 7")]
    InvalidMaskingPattern(u8),
}

pub type QRResult<T> = Result<T, QRError>;
