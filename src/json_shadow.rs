//! A JSON-serializable mirror of [`Operation`], used only to measure the
//! binary-vs-JSON size ratio required by property 8 of the testable
//! properties. This type never appears on the wire and is compiled only
//! under `cfg(test)`.

use serde::Serialize;

use crate::hlc::Hlc;
use crate::types::{BatchMoveItem, BatchRotateItem, Operation};

#[derive(Serialize)]
#[serde(tag = "kind")]
enum ShadowOp {
    Move {
        object_id: u32,
        hlc: u64,
        dx: f32,
        dy: f32,
        dz: f32,
    },
    Rotate {
        object_id: u32,
        hlc: u64,
        rx: f32,
        ry: f32,
        rz: f32,
    },
    Place {
        object_id: u32,
        hlc: u64,
        furniture_type: u8,
        x: f32,
        y: f32,
        z: f32,
        rx: f32,
        ry: f32,
        rz: f32,
    },
    Remove {
        object_id: u32,
        hlc: u64,
    },
    Scale {
        object_id: u32,
        hlc: u64,
        sx: f32,
        sy: f32,
        sz: f32,
    },
    BatchMove {
        hlc: u64,
        items: Vec<(u32, f32, f32, f32)>,
    },
    BatchRotate {
        hlc: u64,
        items: Vec<(u32, f32, f32, f32)>,
    },
}

fn to_shadow(op: &Operation) -> ShadowOp {
    let hlc_u64 = |hlc: &Hlc| hlc.to_u64();
    match op {
        Operation::Move {
            object_id,
            hlc,
            dx,
            dy,
            dz,
        } => ShadowOp::Move {
            object_id: *object_id,
            hlc: hlc_u64(hlc),
            dx: *dx,
            dy: *dy,
            dz: *dz,
        },
        Operation::Rotate {
            object_id,
            hlc,
            rx,
            ry,
            rz,
        } => ShadowOp::Rotate {
            object_id: *object_id,
            hlc: hlc_u64(hlc),
            rx: *rx,
            ry: *ry,
            rz: *rz,
        },
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
        } => ShadowOp::Place {
            object_id: *object_id,
            hlc: hlc_u64(hlc),
            furniture_type: *furniture_type,
            x: *x,
            y: *y,
            z: *z,
            rx: *rx,
            ry: *ry,
            rz: *rz,
        },
        Operation::Remove { object_id, hlc } => ShadowOp::Remove {
            object_id: *object_id,
            hlc: hlc_u64(hlc),
        },
        Operation::Scale {
            object_id,
            hlc,
            sx,
            sy,
            sz,
        } => ShadowOp::Scale {
            object_id: *object_id,
            hlc: hlc_u64(hlc),
            sx: *sx,
            sy: *sy,
            sz: *sz,
        },
        Operation::BatchMove { hlc, items } => ShadowOp::BatchMove {
            hlc: hlc_u64(hlc),
            items: items
                .iter()
                .map(|i: &BatchMoveItem| (i.object_id, i.dx, i.dy, i.dz))
                .collect(),
        },
        Operation::BatchRotate { hlc, items } => ShadowOp::BatchRotate {
            hlc: hlc_u64(hlc),
            items: items
                .iter()
                .map(|i: &BatchRotateItem| (i.object_id, i.rx, i.ry, i.rz))
                .collect(),
        },
    }
}

/// Byte length of `op` serialized as JSON, for comparison against the
/// binary wire encoding.
pub fn json_size(op: &Operation) -> usize {
    serde_json::to_vec(&to_shadow(op)).expect("shadow types always serialize").len()
}
