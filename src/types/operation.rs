//! The operation value: a closed, tagged sum of spatial mutations.

use crate::hlc::Hlc;

/// A single item inside a [`Operation::BatchMove`] payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchMoveItem {
    /// Identifier of the object this displacement applies to.
    pub object_id: u32,
    /// Displacement along X, in metres.
    pub dx: f32,
    /// Displacement along Y, in metres.
    pub dy: f32,
    /// Displacement along Z, in metres.
    pub dz: f32,
}

/// A single item inside a [`Operation::BatchRotate`] payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchRotateItem {
    /// Identifier of the object this rotation applies to.
    pub object_id: u32,
    /// Rotation about X, in radians.
    pub rx: f32,
    /// Rotation about Y, in radians.
    pub ry: f32,
    /// Rotation about Z, in radians.
    pub rz: f32,
}

/// A spatial mutation operation, as exchanged between editor peers.
///
/// This is the closed, discriminated set the wire's leading tag byte
/// selects among (see [`crate::codec`]). `BatchMove` and `BatchRotate` carry
/// no `object_id` of their own: the header field is reserved for those two
/// kinds and is always written as `0` on encode (see
/// [`crate::codec::encode_into`]); a non-zero value read back from a peer is
/// tolerated and discarded rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Translate an object by `(dx, dy, dz)` metres.
    Move {
        /// Identifier of the object being moved.
        object_id: u32,
        /// Timestamp this operation was produced at.
        hlc: Hlc,
        /// Displacement along X, in metres.
        dx: f32,
        /// Displacement along Y, in metres.
        dy: f32,
        /// Displacement along Z, in metres.
        dz: f32,
    },
    /// Rotate an object by `(rx, ry, rz)` radians.
    Rotate {
        /// Identifier of the object being rotated.
        object_id: u32,
        /// Timestamp this operation was produced at.
        hlc: Hlc,
        /// Rotation about X, in radians.
        rx: f32,
        /// Rotation about Y, in radians.
        ry: f32,
        /// Rotation about Z, in radians.
        rz: f32,
    },
    /// Place a new piece of furniture into the scene.
    Place {
        /// Identifier assigned to the newly placed object.
        object_id: u32,
        /// Timestamp this operation was produced at.
        hlc: Hlc,
        /// Wire index of the furniture kind (see [`crate::types::furniture`]).
        furniture_type: u8,
        /// Absolute X position, in metres.
        x: f32,
        /// Absolute Y position, in metres.
        y: f32,
        /// Absolute Z position, in metres.
        z: f32,
        /// Rotation about X, in radians.
        rx: f32,
        /// Rotation about Y, in radians.
        ry: f32,
        /// Rotation about Z, in radians.
        rz: f32,
    },
    /// Remove an object from the scene.
    Remove {
        /// Identifier of the object being removed.
        object_id: u32,
        /// Timestamp this operation was produced at.
        hlc: Hlc,
    },
    /// Scale an object by `(sx, sy, sz)`.
    Scale {
        /// Identifier of the object being scaled.
        object_id: u32,
        /// Timestamp this operation was produced at.
        hlc: Hlc,
        /// Scale factor along X.
        sx: f32,
        /// Scale factor along Y.
        sy: f32,
        /// Scale factor along Z.
        sz: f32,
    },
    /// Translate many objects in one payload.
    BatchMove {
        /// Timestamp this batch was produced at.
        hlc: Hlc,
        /// Per-object displacements, in producer order.
        items: Vec<BatchMoveItem>,
    },
    /// Rotate many objects in one payload.
    BatchRotate {
        /// Timestamp this batch was produced at.
        hlc: Hlc,
        /// Per-object rotations, in producer order.
        items: Vec<BatchRotateItem>,
    },
}

impl Operation {
    /// The tag byte this operation encodes as.
    pub fn tag(&self) -> u8 {
        use crate::constants::*;
        match self {
            Operation::Move { .. } => TAG_MOVE,
            Operation::Rotate { .. } => TAG_ROTATE,
            Operation::Place { .. } => TAG_PLACE,
            Operation::Remove { .. } => TAG_REMOVE,
            Operation::Scale { .. } => TAG_SCALE,
            Operation::BatchMove { .. } => TAG_BATCH_MOVE,
            Operation::BatchRotate { .. } => TAG_BATCH_ROTATE,
        }
    }

    /// The HLC timestamp this operation carries.
    pub fn hlc(&self) -> Hlc {
        match self {
            Operation::Move { hlc, .. }
            | Operation::Rotate { hlc, .. }
            | Operation::Place { hlc, .. }
            | Operation::Remove { hlc, .. }
            | Operation::Scale { hlc, .. }
            | Operation::BatchMove { hlc, .. }
            | Operation::BatchRotate { hlc, .. } => *hlc,
        }
    }

    /// The header object identifier this operation carries. `0` for the
    /// batch kinds, since that field is reserved for them.
    pub fn object_id(&self) -> u32 {
        match self {
            Operation::Move { object_id, .. }
            | Operation::Rotate { object_id, .. }
            | Operation::Place { object_id, .. }
            | Operation::Remove { object_id, .. }
            | Operation::Scale { object_id, .. } => *object_id,
            Operation::BatchMove { .. } | Operation::BatchRotate { .. } => 0,
        }
    }
}
