use thiserror::Error;

use crate::{DecodeError, EncodeError};

/// Unified error type covering decoding, encoding and I/O.
///
/// Returned by convenience methods like [`RuleSet::from_file()`](crate::RuleSet::from_file).
#[derive(Debug, Error)]
pub enum RulerError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
