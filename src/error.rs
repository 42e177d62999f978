//! Error types for the wire protocol core.
//!
//! Every fallible entry point returns [`Result`]. Encoding, the hybrid
//! logical clock, and the delta compressor are infallible by design (see
//! the crate-level docs) and never appear here.

use thiserror::Error;

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decoding wire bytes or validating furniture names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A furniture name outside the closed set was passed to
    /// [`crate::types::furniture_index`].
    #[error("unknown furniture kind: {0:?}")]
    UnknownFurnitureKind(String),

    /// A tag byte outside `0x01..=0x07` was encountered during decode.
    #[error("unknown operation kind: tag byte 0x{tag:02x}")]
    UnknownOperationKind {
        /// The tag byte that was read.
        tag: u8,
    },

    /// A buffer was shorter than required for the next read.
    #[error("insufficient bytes: need {needed}, have {available}")]
    InsufficientBytes {
        /// Number of bytes the next read required.
        needed: usize,
        /// Number of bytes actually available.
        available: usize,
    },

    /// A batch frame's declared length prefix did not match the buffer length.
    #[error("frame length mismatch: header declares {declared}, buffer is {actual}")]
    FrameLengthMismatch {
        /// Length prefix read from the frame header.
        declared: usize,
        /// Actual length of the buffer passed to decode.
        actual: usize,
    },
}

impl Error {
    /// True for errors raised while decoding a single operation (as opposed
    /// to a batch frame or a furniture name lookup).
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownOperationKind { .. } | Error::InsufficientBytes { .. }
        )
    }
}
