//! Byte-exact translation between [`Operation`] values and wire buffers.
//!
//! All multi-byte integers and floats are little-endian; floats are raw
//! IEEE-754 binary32 bit patterns (no rounding, no NaN normalization). This
//! is a hard contract: producers and consumers of different runtimes must
//! agree on it, since it is the only thing standing between two peers and
//! silently corrupted geometry.
//!
//! ```text
//! header (13 bytes)
//!   0    1          9        13
//!   +----+----------+--------+---- payload ----+
//!   | t  |  u64 HLC |  u32 O |       ...
//!   +----+----------+--------+-----------------+
//! ```

use crate::constants::*;
use crate::error::{Error, Result};
use crate::hlc::Hlc;
use crate::types::{BatchMoveItem, BatchRotateItem, Operation};
use crate::{log_debug, log_trace};

/// Exact byte length that encoding `op` will produce.
pub fn encoded_size(op: &Operation) -> usize {
    HEADER_SIZE
        + match op {
            Operation::Move { .. } | Operation::Rotate { .. } | Operation::Scale { .. } => {
                VEC3_PAYLOAD_SIZE
            }
            Operation::Place { .. } => PLACE_PAYLOAD_SIZE,
            Operation::Remove { .. } => REMOVE_PAYLOAD_SIZE,
            Operation::BatchMove { items, .. } => 2 + items.len() * BATCH_ITEM_SIZE,
            Operation::BatchRotate { items, .. } => 2 + items.len() * BATCH_ITEM_SIZE,
        }
}

/// Allocate a fresh buffer of [`encoded_size`] bytes and encode `op` into it.
pub fn encode(op: &Operation) -> Vec<u8> {
    let mut buf = vec![0u8; encoded_size(op)];
    let written = encode_into(&mut buf, 0, op);
    debug_assert_eq!(written, buf.len());
    buf
}

/// Encode `op` into `view` starting at `offset`, returning the first unused
/// offset. Used by [`crate::batch`] to pack many operations into one frame
/// without an intermediate allocation per operation.
///
/// # Panics
///
/// Panics if `view` is not at least `offset + encoded_size(op)` bytes long.
/// Callers (this crate's own batch framer) are expected to size the buffer
/// up front via [`encoded_size`].
pub fn encode_into(view: &mut [u8], offset: usize, op: &Operation) -> usize {
    let mut o = write_header(view, offset, op.tag(), op.hlc(), op.object_id());

    match op {
        Operation::Move { dx, dy, dz, .. } => o = write_vec3(view, o, *dx, *dy, *dz),
        Operation::Rotate { rx, ry, rz, .. } => o = write_vec3(view, o, *rx, *ry, *rz),
        Operation::Scale { sx, sy, sz, .. } => o = write_vec3(view, o, *sx, *sy, *sz),
        Operation::Place {
            furniture_type,
            x,
            y,
            z,
            rx,
            ry,
            rz,
            ..
        } => {
            view[o] = *furniture_type;
            o += 1;
            o = write_vec3(view, o, *x, *y, *z);
            o = write_vec3(view, o, *rx, *ry, *rz);
        }
        Operation::Remove { .. } => {}
        Operation::BatchMove { items, .. } => {
            o = write_u16(view, o, items.len() as u16);
            for item in items {
                view[o..o + 4].copy_from_slice(&item.object_id.to_le_bytes());
                o += 4;
                o = write_vec3(view, o, item.dx, item.dy, item.dz);
            }
        }
        Operation::BatchRotate { items, .. } => {
            o = write_u16(view, o, items.len() as u16);
            for item in items {
                view[o..o + 4].copy_from_slice(&item.object_id.to_le_bytes());
                o += 4;
                o = write_vec3(view, o, item.rx, item.ry, item.rz);
            }
        }
    }
    o
}

/// Decode exactly one operation starting at offset 0 of `bytes`.
pub fn decode(bytes: &[u8]) -> Result<Operation> {
    let (op, _) = decode_at(bytes, 0)?;
    Ok(op)
}

/// Decode one operation starting at `offset` within `view`, returning the
/// operation and the number of bytes consumed (including the header). Used
/// by [`crate::batch`] to split a frame into its constituent operations.
pub fn decode_at(view: &[u8], offset: usize) -> Result<(Operation, usize)> {
    need(view, offset, HEADER_SIZE)?;
    let tag = view[offset];
    let hlc = Hlc::from_u64(read_u64(view, offset + 1));
    let object_id = read_u32(view, offset + 9);
    log_trace!(offset, tag, object_id, "decoding operation header");
    let mut o = offset + HEADER_SIZE;

    let op = match tag {
        TAG_MOVE => {
            need(view, o, VEC3_PAYLOAD_SIZE)?;
            let (dx, dy, dz) = read_vec3(view, &mut o);
            Operation::Move {
                object_id,
                hlc,
                dx,
                dy,
                dz,
            }
        }
        TAG_ROTATE => {
            need(view, o, VEC3_PAYLOAD_SIZE)?;
            let (rx, ry, rz) = read_vec3(view, &mut o);
            Operation::Rotate {
                object_id,
                hlc,
                rx,
                ry,
                rz,
            }
        }
        TAG_SCALE => {
            need(view, o, VEC3_PAYLOAD_SIZE)?;
            let (sx, sy, sz) = read_vec3(view, &mut o);
            Operation::Scale {
                object_id,
                hlc,
                sx,
                sy,
                sz,
            }
        }
        TAG_PLACE => {
            need(view, o, PLACE_PAYLOAD_SIZE)?;
            let furniture_type = view[o];
            o += 1;
            let (x, y, z) = read_vec3(view, &mut o);
            let (rx, ry, rz) = read_vec3(view, &mut o);
            Operation::Place {
                object_id,
                hlc,
                furniture_type,
                x,
                y,
                z,
                rx,
                ry,
                rz,
            }
        }
        TAG_REMOVE => Operation::Remove { object_id, hlc },
        TAG_BATCH_MOVE => {
            need(view, o, 2)?;
            let count = read_u16(view, o);
            o += 2;
            let mut items = Vec::with_capacity(count as usize);
            for _ in 0..count {
                need(view, o, BATCH_ITEM_SIZE)?;
                let object_id = read_u32(view, o);
                o += 4;
                let (dx, dy, dz) = read_vec3(view, &mut o);
                items.push(BatchMoveItem {
                    object_id,
                    dx,
                    dy,
                    dz,
                });
            }
            Operation::BatchMove { hlc, items }
        }
        TAG_BATCH_ROTATE => {
            need(view, o, 2)?;
            let count = read_u16(view, o);
            o += 2;
            let mut items = Vec::with_capacity(count as usize);
            for _ in 0..count {
                need(view, o, BATCH_ITEM_SIZE)?;
                let object_id = read_u32(view, o);
                o += 4;
                let (rx, ry, rz) = read_vec3(view, &mut o);
                items.push(BatchRotateItem {
                    object_id,
                    rx,
                    ry,
                    rz,
                });
            }
            Operation::BatchRotate { hlc, items }
        }
        other => {
            log_debug!(tag = other, offset, "rejecting unknown operation tag");
            return Err(Error::UnknownOperationKind { tag: other });
        }
    };

    Ok((op, o - offset))
}

fn write_header(view: &mut [u8], offset: usize, tag: u8, hlc: Hlc, object_id: u32) -> usize {
    view[offset] = tag;
    view[offset + 1..offset + 9].copy_from_slice(&hlc.to_u64().to_le_bytes());
    view[offset + 9..offset + 13].copy_from_slice(&object_id.to_le_bytes());
    offset + HEADER_SIZE
}

fn write_u16(view: &mut [u8], offset: usize, v: u16) -> usize {
    view[offset..offset + 2].copy_from_slice(&v.to_le_bytes());
    offset + 2
}

fn write_vec3(view: &mut [u8], offset: usize, a: f32, b: f32, c: f32) -> usize {
    view[offset..offset + 4].copy_from_slice(&a.to_le_bytes());
    view[offset + 4..offset + 8].copy_from_slice(&b.to_le_bytes());
    view[offset + 8..offset + 12].copy_from_slice(&c.to_le_bytes());
    offset + 12
}

fn read_u16(view: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes(view[offset..offset + 2].try_into().unwrap())
}

fn read_u32(view: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(view[offset..offset + 4].try_into().unwrap())
}

fn read_u64(view: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes(view[offset..offset + 8].try_into().unwrap())
}

fn read_f32(view: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes(view[offset..offset + 4].try_into().unwrap())
}

fn read_vec3(view: &[u8], offset: &mut usize) -> (f32, f32, f32) {
    let a = read_f32(view, *offset);
    let b = read_f32(view, *offset + 4);
    let c = read_f32(view, *offset + 8);
    *offset += 12;
    (a, b, c)
}

/// Verify at least `needed` bytes are available starting at `offset`.
fn need(view: &[u8], offset: usize, needed: usize) -> Result<()> {
    let available = view.len().saturating_sub(offset);
    if available < needed {
        return Err(Error::InsufficientBytes { needed, available });
    }
    Ok(())
}
