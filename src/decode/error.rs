use thiserror::Error;

/// Errors produced when decoding rules or records from JSON.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value in rule {index} ('{path}'): {reason}")]
    InvalidValue {
        index: usize,
        path: String,
        reason: &'static str,
    },

    #[error("unsupported record value at '{path}'")]
    UnsupportedRecordValue { path: String },

    #[error("record JSON must be an object, found {found}")]
    RecordNotObject { found: &'static str },
}

/// Errors produced when encoding rules to JSON.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("rule {index} ('{path}') has a non-finite float value")]
    NonFiniteFloat { index: usize, path: String },
}
