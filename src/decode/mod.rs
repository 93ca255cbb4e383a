mod error;
mod json;

pub use error::{DecodeError, EncodeError};
pub use json::{decode, encode};
