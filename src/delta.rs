//! Delta compression for position-update streams (e.g. drag gestures).
//!
//! One [`DeltaCompressor`] instance per peer-side: the send side emits full
//! or delta moves and suppresses sub-deadzone noise; the receive side
//! mirrors the same type to reconstruct absolute positions. This is a
//! separate wire format from [`crate::codec`]'s `Move` operation — compact
//! enough to matter at drag frequency, and deliberately not folded into the
//! general operation codec since it carries compressor-local state
//! (`last_known`) rather than being stateless.
//!
//! ```text
//!   0    1       5          13         19 or 25
//!   +----+-------+----------+----------+
//!   | f  | u32 O | u64 HLC  | payload  |
//!   +----+-------+----------+----------+
//!   f: bit 0 = delta?, bit 1 = relative? (set together)
//!   payload: 3 x f32 (full) or 3 x i16 scaled by 1000 (delta)
//! ```

use std::collections::HashMap;

use crate::constants::{
    COMPRESSED_MOVE_DELTA_SIZE, COMPRESSED_MOVE_FULL_SIZE, DELTA_DEADZONE_M, DELTA_RANGE_M,
    DELTA_SCALE,
};
use crate::error::{Error, Result};
use crate::hlc::Hlc;
use crate::log_trace;

const FLAG_FULL: u8 = 0b00;
const FLAG_DELTA: u8 = 0b11;

/// A compressed position update: either an absolute position or a
/// displacement from the receiver's last reconstructed position for the
/// same object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompressedMove {
    /// An absolute position, used for an object's first emission or
    /// whenever the displacement would exceed the int16 fixed-point range.
    Full {
        /// Identifier of the object.
        object_id: u32,
        /// Timestamp this update was produced at.
        hlc: Hlc,
        /// Absolute X position, in metres.
        x: f32,
        /// Absolute Y position, in metres.
        y: f32,
        /// Absolute Z position, in metres.
        z: f32,
    },
    /// A displacement from the last known position, scaled by
    /// [`DELTA_SCALE`] and stored as int16.
    Delta {
        /// Identifier of the object.
        object_id: u32,
        /// Timestamp this update was produced at.
        hlc: Hlc,
        /// Displacement along X, in millimetres.
        dx: i16,
        /// Displacement along Y, in millimetres.
        dy: i16,
        /// Displacement along Z, in millimetres.
        dz: i16,
    },
}

impl CompressedMove {
    /// Exact byte length this value will encode as: 25 for full, 19 for delta.
    pub fn encoded_size(&self) -> usize {
        match self {
            CompressedMove::Full { .. } => COMPRESSED_MOVE_FULL_SIZE,
            CompressedMove::Delta { .. } => COMPRESSED_MOVE_DELTA_SIZE,
        }
    }

    /// Encode into the compressed-move wire format.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = vec![0u8; self.encoded_size()];
        match *self {
            CompressedMove::Full {
                object_id,
                hlc,
                x,
                y,
                z,
            } => {
                buf[0] = FLAG_FULL;
                buf[1..5].copy_from_slice(&object_id.to_le_bytes());
                buf[5..13].copy_from_slice(&hlc.to_u64().to_le_bytes());
                buf[13..17].copy_from_slice(&x.to_le_bytes());
                buf[17..21].copy_from_slice(&y.to_le_bytes());
                buf[21..25].copy_from_slice(&z.to_le_bytes());
            }
            CompressedMove::Delta {
                object_id,
                hlc,
                dx,
                dy,
                dz,
            } => {
                buf[0] = FLAG_DELTA;
                buf[1..5].copy_from_slice(&object_id.to_le_bytes());
                buf[5..13].copy_from_slice(&hlc.to_u64().to_le_bytes());
                buf[13..15].copy_from_slice(&dx.to_le_bytes());
                buf[15..17].copy_from_slice(&dy.to_le_bytes());
                buf[17..19].copy_from_slice(&dz.to_le_bytes());
            }
        }
        buf
    }

    /// Decode a compressed-move frame.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 13 {
            return Err(Error::InsufficientBytes {
                needed: 13,
                available: bytes.len(),
            });
        }
        let flags = bytes[0];
        let object_id = u32::from_le_bytes(bytes[1..5].try_into().unwrap());
        let hlc = Hlc::from_u64(u64::from_le_bytes(bytes[5..13].try_into().unwrap()));

        if flags & FLAG_DELTA == FLAG_DELTA {
            if bytes.len() < COMPRESSED_MOVE_DELTA_SIZE {
                return Err(Error::InsufficientBytes {
                    needed: COMPRESSED_MOVE_DELTA_SIZE,
                    available: bytes.len(),
                });
            }
            Ok(CompressedMove::Delta {
                object_id,
                hlc,
                dx: i16::from_le_bytes(bytes[13..15].try_into().unwrap()),
                dy: i16::from_le_bytes(bytes[15..17].try_into().unwrap()),
                dz: i16::from_le_bytes(bytes[17..19].try_into().unwrap()),
            })
        } else {
            if bytes.len() < COMPRESSED_MOVE_FULL_SIZE {
                return Err(Error::InsufficientBytes {
                    needed: COMPRESSED_MOVE_FULL_SIZE,
                    available: bytes.len(),
                });
            }
            Ok(CompressedMove::Full {
                object_id,
                hlc,
                x: f32::from_le_bytes(bytes[13..17].try_into().unwrap()),
                y: f32::from_le_bytes(bytes[17..21].try_into().unwrap()),
                z: f32::from_le_bytes(bytes[21..25].try_into().unwrap()),
            })
        }
    }
}

/// Per-peer position tracker: compresses outgoing position updates and
/// reconstructs incoming ones.
///
/// A single instance is owned by exactly one executor (one peer-side); it
/// is not internally synchronized. The compressor only advances its
/// `last_known` entry when it emits something the peer will also apply —
/// suppressed updates leave both sides' state untouched, keeping sender and
/// receiver aligned.
#[derive(Debug, Default)]
pub struct DeltaCompressor {
    last_known: HashMap<u32, [f32; 3]>,
}

impl DeltaCompressor {
    /// Create an empty compressor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compress a position update for `object_id`.
    ///
    /// Returns `None` if the change is below the deadzone and should be
    /// dropped without updating any state.
    pub fn compress(&mut self, object_id: u32, x: f32, y: f32, z: f32, hlc: Hlc) -> Option<CompressedMove> {
        let Some(&[lx, ly, lz]) = self.last_known.get(&object_id) else {
            self.last_known.insert(object_id, [x, y, z]);
            log_trace!(object_id, "first emission for object, sending full position");
            return Some(CompressedMove::Full {
                object_id,
                hlc,
                x,
                y,
                z,
            });
        };

        let (dx, dy, dz) = (x - lx, y - ly, z - lz);
        let max_abs = dx.abs().max(dy.abs()).max(dz.abs());

        if max_abs < DELTA_DEADZONE_M {
            log_trace!(object_id, max_abs, "suppressing sub-deadzone move");
            return None;
        }

        self.last_known.insert(object_id, [x, y, z]);

        if max_abs <= DELTA_RANGE_M {
            log_trace!(object_id, max_abs, "emitting delta move");
            Some(CompressedMove::Delta {
                object_id,
                hlc,
                dx: (dx * DELTA_SCALE).round() as i16,
                dy: (dy * DELTA_SCALE).round() as i16,
                dz: (dz * DELTA_SCALE).round() as i16,
            })
        } else {
            log_trace!(object_id, max_abs, "displacement exceeds delta range, falling back to full");
            Some(CompressedMove::Full {
                object_id,
                hlc,
                x,
                y,
                z,
            })
        }
    }

    /// Reconstruct the absolute position carried by a compressed move,
    /// updating this side's tracked state to match.
    ///
    /// Requires the caller to deliver moves for a given `object_id` in the
    /// order the sender produced them; out-of-order delivery causes drift
    /// (see the crate-level concurrency notes).
    pub fn decompress(&mut self, mv: &CompressedMove) -> (f32, f32, f32) {
        match *mv {
            CompressedMove::Full {
                object_id, x, y, z, ..
            } => {
                log_trace!(object_id, "applying full position");
                self.last_known.insert(object_id, [x, y, z]);
                (x, y, z)
            }
            CompressedMove::Delta {
                object_id,
                dx,
                dy,
                dz,
                ..
            } => {
                log_trace!(object_id, dx, dy, dz, "applying delta position");
                let [lx, ly, lz] = self.last_known.get(&object_id).copied().unwrap_or([0.0; 3]);
                let pos = [
                    lx + dx as f32 / DELTA_SCALE,
                    ly + dy as f32 / DELTA_SCALE,
                    lz + dz as f32 / DELTA_SCALE,
                ];
                self.last_known.insert(object_id, pos);
                (pos[0], pos[1], pos[2])
            }
        }
    }

    /// Force the next emission for `object_id` to be a full move.
    pub fn forget(&mut self, object_id: u32) {
        self.last_known.remove(&object_id);
    }

    /// Drop all tracked positions.
    pub fn clear(&mut self) {
        self.last_known.clear();
    }
}
