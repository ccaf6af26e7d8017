//! Error handling for PlotKit
//!
//! The layout operations themselves are total and never fail. Errors only
//! arise at the edges: decoding persisted or shared state, and encoding it
//! back out.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Decoding error
///
/// Raised when a durable blob or a shared link cannot be turned back into
/// an `AppState`. Callers treat every variant as "source absent".
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The input was empty
    #[error("Encoded state is empty")]
    Empty,

    /// The share token was not valid URL-safe base64
    #[error("Invalid share token: {reason}")]
    InvalidToken {
        /// The reason the token was rejected.
        reason: String,
    },

    /// The decoded bytes were not UTF-8
    #[error("Encoded state is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The JSON did not match the `AppState` shape
    #[error("Malformed state JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main error type for PlotKit
///
/// A unified error type that can represent any error from the core layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Decode error
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// State could not be serialized
    #[error("Failed to encode state: {0}")]
    Encode(String),
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
