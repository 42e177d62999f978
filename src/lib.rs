//! Wire protocol core for a real-time collaborative spatial editor.
//!
//! Five pieces, leaves-first: the [`types`] registry (operation kinds and
//! furniture kinds), the [`hlc`] hybrid logical clock, the [`codec`] that
//! turns operations into bytes and back, the [`batch`] framer that packs
//! many operations into one network frame, and the [`delta`] compressor
//! that exploits temporal locality in drag streams.
//!
//! This crate is the hot path of the editor — every user gesture traverses
//! it, at peak during drag at tens of events per second per peer — and its
//! byte-exact layout is the contract between peers of different generations
//! and runtimes. Transport, persistence, authentication, and schema
//! evolution are all out of scope: this crate produces and consumes opaque
//! byte buffers only.
#![warn(missing_docs)]

/// Batch framing: pack many encoded operations into one network frame.
pub mod batch;
/// Byte-exact codec between [`types::Operation`] values and wire buffers.
pub mod codec;
/// Crate-wide configuration surface.
pub mod config;
/// Wire-contract constants (tag bytes, fixed sizes, delta-compressor tuning).
pub mod constants;
/// Per-peer position delta compression for drag streams.
pub mod delta;
/// Error types.
pub mod error;
/// Hybrid logical clock.
pub mod hlc;
/// Structured logging macros.
pub mod logging;
/// Wire-level type definitions: operations and furniture kinds.
pub mod types;

#[cfg(test)]
mod json_shadow;
#[cfg(test)]
mod proptests;

pub use error::{Error, Result};
pub use hlc::{ClockSource, Hlc, HlcClock};
pub use types::{furniture_index, furniture_name, Operation};
