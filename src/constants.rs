//! Global constants used throughout the wire protocol.
//!
//! These values are part of the wire contract: changing any of them changes
//! the bytes a conforming peer produces and expects. They are centralized
//! here, rather than scattered as magic numbers, so the contract is visible
//! in one place.

/// Tag byte for a [`crate::types::Operation::Move`].
pub const TAG_MOVE: u8 = 0x01;
/// Tag byte for a [`crate::types::Operation::Rotate`].
pub const TAG_ROTATE: u8 = 0x02;
/// Tag byte for a [`crate::types::Operation::Place`].
pub const TAG_PLACE: u8 = 0x03;
/// Tag byte for a [`crate::types::Operation::Remove`].
pub const TAG_REMOVE: u8 = 0x04;
/// Tag byte for a [`crate::types::Operation::Scale`].
pub const TAG_SCALE: u8 = 0x05;
/// Tag byte for a [`crate::types::Operation::BatchMove`].
pub const TAG_BATCH_MOVE: u8 = 0x06;
/// Tag byte for a [`crate::types::Operation::BatchRotate`].
pub const TAG_BATCH_ROTATE: u8 = 0x07;

/// Byte length of the common operation header (tag + HLC + object id).
pub const HEADER_SIZE: usize = 13;
/// Byte length of a Move/Rotate/Scale payload (three binary32 fields).
pub const VEC3_PAYLOAD_SIZE: usize = 12;
/// Byte length of a Place payload (furniture index + six binary32 fields).
pub const PLACE_PAYLOAD_SIZE: usize = 25;
/// Byte length of a Remove payload.
pub const REMOVE_PAYLOAD_SIZE: usize = 0;
/// Byte length of a single batch item (object id + three binary32 fields).
pub const BATCH_ITEM_SIZE: usize = 16;
/// Byte length of the batch frame header (length prefix + operation count).
pub const FRAME_HEADER_SIZE: usize = 6;

/// Number of furniture kinds in the closed set.
pub const FURNITURE_KIND_COUNT: usize = 7;

/// Fixed-point scale factor for compressed-move deltas: 1 unit = 1 mm.
pub const DELTA_SCALE: f32 = 1000.0;
/// Maximum magnitude of a single delta component, in metres (`32767 / DELTA_SCALE`).
pub const DELTA_RANGE_M: f32 = 32.767;
/// Maximum magnitude below which a position change is suppressed, in metres.
pub const DELTA_DEADZONE_M: f32 = 0.0005;

/// Byte length of a full compressed-move frame.
pub const COMPRESSED_MOVE_FULL_SIZE: usize = 25;
/// Byte length of a delta compressed-move frame.
pub const COMPRESSED_MOVE_DELTA_SIZE: usize = 19;
