//! Error types for effmap-core.

use crate::geomid::GeometryId;
use thiserror::Error;

/// Result type alias for effmap-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for effmap operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A hit was recorded after the accumulator was closed.
    #[error("accumulator is closed: cannot record hit for {id}")]
    AccumulatorClosed {
        /// Channel whose record call was rejected.
        id: GeometryId,
    },

    /// A snapshot was requested while the accumulator is still open.
    #[error("accumulator is still open: close() must run before snapshot()")]
    AccumulatorOpen,

    /// A geometry identifier exceeded the supported address depth.
    #[error("invalid geometry address depth: {depth} (maximum {max})")]
    InvalidDepth {
        /// Depth that was requested.
        depth: usize,
        /// Maximum supported depth.
        max: usize,
    },
}
