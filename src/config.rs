//! Configuration surface for the wire protocol.
//!
//! There is no runtime configuration for the codec or batch framer — the
//! wire layout is fixed. The only tunables are the delta compressor's
//! scale/range/deadzone, and those are compiled-in via [`crate::constants`]
//! for every production code path. [`Config`] exists for introspection and
//! diagnostic tooling (e.g. printing the effective constants, or driving a
//! test harness with a narrowed deadzone) — constructing one and changing
//! its fields does not alter what [`crate::delta::DeltaCompressor`] does,
//! since that type reads the compiled-in constants directly.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Snapshot of the delta compressor's wire constants, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Fixed-point scale factor (units per metre).
    pub scale: f32,
    /// Maximum delta magnitude in metres before falling back to a full move.
    pub range_m: f32,
    /// Maximum magnitude below which a change is suppressed, in metres.
    pub deadzone_m: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: constants::DELTA_SCALE,
            range_m: constants::DELTA_RANGE_M,
            deadzone_m: constants::DELTA_DEADZONE_M,
        }
    }
}
