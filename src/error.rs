//! Error types for collectkit.

use thiserror::Error;

/// Result type alias for collectkit operations.
pub type CollectResult<T> = Result<T, CollectError>;

/// Errors that can occur in the fallible parts of the crate.
///
/// The collection itself is total; these come from the bounded channel and
/// from JSON export.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectError {
    /// The channel buffer has no free slot.
    #[error("Channel full: capacity {capacity} reached")]
    ChannelFull { capacity: usize },

    /// The channel was closed before the send.
    #[error("Channel closed")]
    ChannelClosed,

    /// A channel was requested with an unusable capacity.
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(usize),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CollectError {
    /// Creates a ChannelFull error.
    pub fn channel_full(capacity: usize) -> Self {
        Self::ChannelFull { capacity }
    }

    /// Creates an InvalidCapacity error.
    pub fn invalid_capacity(capacity: usize) -> Self {
        Self::InvalidCapacity(capacity)
    }

    /// Creates a Serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

impl From<serde_json::Error> for CollectError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
