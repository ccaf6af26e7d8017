//! Error types for the sync crate.

use plotkit_settings::PersistenceError;
use thiserror::Error;

/// Errors raised while committing a transition.
///
/// When one is returned, the live state, the location and the store all
/// still hold the previous value.
#[derive(Error, Debug)]
pub enum SyncError {
    /// The new state could not be serialized.
    #[error(transparent)]
    Encode(#[from] plotkit_core::Error),

    /// Every attempt to write the durable store failed.
    #[error("Durable write failed after {attempts} attempts: {source}")]
    Persist {
        attempts: u32,
        #[source]
        source: PersistenceError,
    },
}

/// Result type alias for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;
