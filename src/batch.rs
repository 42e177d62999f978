//! Batch framing: pack a sequence of encoded operations into one
//! self-describing frame, and split a frame back into its operations.
//!
//! ```text
//!   0       4       6
//!   +-------+-------+-------- ops bytes --------+
//!   | u32 L | u16 N |  N operations, back-to-back
//!   +-------+-------+------------------------------+
//!   L = total frame length (includes this 6-byte header)
//!   N = number of operations
//! ```

use crate::codec;
use crate::constants::FRAME_HEADER_SIZE;
use crate::error::{Error, Result};
use crate::log_trace;
use crate::types::Operation;

/// Pack `ops` into a single framed buffer.
///
/// Computes the total size once, allocates one buffer, writes the header,
/// then encodes each operation in place via [`codec::encode_into`] — no
/// per-operation allocation.
pub fn encode_batch_frame(ops: &[Operation]) -> Vec<u8> {
    let ops_size: usize = ops.iter().map(codec::encoded_size).sum();
    let total = FRAME_HEADER_SIZE + ops_size;

    let mut buf = vec![0u8; total];
    buf[0..4].copy_from_slice(&(total as u32).to_le_bytes());
    buf[4..6].copy_from_slice(&(ops.len() as u16).to_le_bytes());

    let mut offset = FRAME_HEADER_SIZE;
    for op in ops {
        offset = codec::encode_into(&mut buf, offset, op);
    }
    debug_assert_eq!(offset, total);
    buf
}

/// Split a frame back into its constituent operations, in producer order.
///
/// # Errors
///
/// Returns [`Error::FrameLengthMismatch`] if the header's length prefix does
/// not exactly match `bytes.len()`, or an error from [`codec::decode_at`] if
/// any operation within the frame is malformed. A malformed frame yields no
/// operations at all — partial decodes are never delivered.
pub fn decode_batch_frame(bytes: &[u8]) -> Result<Vec<Operation>> {
    let declared = peek_frame_length(bytes)?;
    if declared != bytes.len() {
        return Err(Error::FrameLengthMismatch {
            declared,
            actual: bytes.len(),
        });
    }
    let count = peek_batch_count(bytes)?;
    log_trace!(declared, count, "decoding batch frame");

    let mut ops = Vec::with_capacity(count as usize);
    let mut offset = FRAME_HEADER_SIZE;
    for _ in 0..count {
        let (op, consumed) = codec::decode_at(bytes, offset)?;
        log_trace!(offset, consumed, tag = op.tag(), "split operation out of frame");
        offset += consumed;
        ops.push(op);
    }
    Ok(ops)
}

/// Read only the length prefix, without decoding any operation.
///
/// Used by transport framing to know when a full frame has arrived on the
/// wire. Per the reference behavior, this only requires the first 6 header
/// bytes to be present; it does not check the length prefix against the
/// buffer's actual length (that is [`decode_batch_frame`]'s job).
pub fn peek_frame_length(bytes: &[u8]) -> Result<usize> {
    need_header(bytes)?;
    Ok(u32::from_le_bytes(bytes[0..4].try_into().unwrap()) as usize)
}

/// Read only the operation count, without decoding any operation.
pub fn peek_batch_count(bytes: &[u8]) -> Result<u16> {
    need_header(bytes)?;
    Ok(u16::from_le_bytes(bytes[4..6].try_into().unwrap()))
}

fn need_header(bytes: &[u8]) -> Result<()> {
    if bytes.len() < FRAME_HEADER_SIZE {
        return Err(Error::InsufficientBytes {
            needed: FRAME_HEADER_SIZE,
            available: bytes.len(),
        });
    }
    Ok(())
}
