//! Property-based tests for the quantified invariants in the wire protocol
//! design (round-trip fidelity, size exactness, HLC ordering, batch
//! round-trip, and delta-compressor precision).

use proptest::prelude::*;

use crate::batch::{decode_batch_frame, encode_batch_frame};
use crate::codec::{decode, encode, encoded_size};
use crate::delta::DeltaCompressor;
use crate::hlc::Hlc;
use crate::types::{BatchMoveItem, BatchRotateItem, Operation};

fn finite_f32() -> impl Strategy<Value = f32> {
    (-10_000.0f32..10_000.0f32).prop_filter("finite", |v| v.is_finite())
}

fn hlc_strategy() -> impl Strategy<Value = Hlc> {
    (0u64..(1u64 << 48), any::<u16>()).prop_map(|(w, c)| Hlc::new(w, c))
}

fn batch_item_strategy() -> impl Strategy<Value = (u32, f32, f32, f32)> {
    (any::<u32>(), finite_f32(), finite_f32(), finite_f32())
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (any::<u32>(), hlc_strategy(), finite_f32(), finite_f32(), finite_f32()).prop_map(
            |(object_id, hlc, dx, dy, dz)| Operation::Move {
                object_id,
                hlc,
                dx,
                dy,
                dz
            }
        ),
        (any::<u32>(), hlc_strategy(), finite_f32(), finite_f32(), finite_f32()).prop_map(
            |(object_id, hlc, rx, ry, rz)| Operation::Rotate {
                object_id,
                hlc,
                rx,
                ry,
                rz
            }
        ),
        (any::<u32>(), hlc_strategy(), finite_f32(), finite_f32(), finite_f32()).prop_map(
            |(object_id, hlc, sx, sy, sz)| Operation::Scale {
                object_id,
                hlc,
                sx,
                sy,
                sz
            }
        ),
        (any::<u32>(), hlc_strategy()).prop_map(|(object_id, hlc)| Operation::Remove {
            object_id,
            hlc
        }),
        (
            any::<u32>(),
            hlc_strategy(),
            0u8..7,
            finite_f32(),
            finite_f32(),
            finite_f32(),
            finite_f32(),
            finite_f32(),
            finite_f32(),
        )
            .prop_map(|(object_id, hlc, furniture_type, x, y, z, rx, ry, rz)| {
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
            }),
        (hlc_strategy(), prop::collection::vec(batch_item_strategy(), 0..8)).prop_map(
            |(hlc, items)| Operation::BatchMove {
                hlc,
                items: items
                    .into_iter()
                    .map(|(object_id, dx, dy, dz)| BatchMoveItem {
                        object_id,
                        dx,
                        dy,
                        dz
                    })
                    .collect(),
            }
        ),
        (hlc_strategy(), prop::collection::vec(batch_item_strategy(), 0..8)).prop_map(
            |(hlc, items)| Operation::BatchRotate {
                hlc,
                items: items
                    .into_iter()
                    .map(|(object_id, rx, ry, rz)| BatchRotateItem {
                        object_id,
                        rx,
                        ry,
                        rz
                    })
                    .collect(),
            }
        ),
    ]
}

proptest! {
    /// Property 1: decode(encode(op)) == op, and re-encoding is bit-identical.
    #[test]
    fn round_trip_and_re_encode_is_bit_identical(op in operation_strategy()) {
        let bytes = encode(&op);
        let decoded = decode(&bytes).unwrap();
        prop_assert_eq!(&decoded, &op);
        prop_assert_eq!(encode(&decoded), bytes);
    }

    /// Property 2: encoded_size(op) equals the byte length of encode(op).
    #[test]
    fn encoded_size_is_exact(op in operation_strategy()) {
        prop_assert_eq!(encoded_size(&op), encode(&op).len());
    }

    /// Property 4: Hlc u64 round-trip and order preservation.
    #[test]
    fn hlc_u64_round_trip_preserves_order(
        a in hlc_strategy(),
        b in hlc_strategy(),
    ) {
        prop_assert_eq!(Hlc::from_u64(a.to_u64()), a);
        prop_assert_eq!(Hlc::from_u64(b.to_u64()), b);
        prop_assert_eq!(a < b, a.to_u64() < b.to_u64());
    }

    /// Property 5: decode_batch_frame(encode_batch_frame(ops)) == ops.
    #[test]
    fn batch_frame_round_trips(ops in prop::collection::vec(operation_strategy(), 0..12)) {
        let frame = encode_batch_frame(&ops);
        let decoded = decode_batch_frame(&frame).unwrap();
        prop_assert_eq!(decoded, ops);
    }

    /// Property 6: a mirrored compressor/decompressor pair reconstructs
    /// every non-suppressed position to within 1mm per axis.
    #[test]
    fn delta_stream_reconstructs_within_one_millimetre(
        positions in prop::collection::vec(
            (-1000.0f32..1000.0f32, -1000.0f32..1000.0f32, -1000.0f32..1000.0f32),
            1..30,
        )
    ) {
        let mut tx = DeltaCompressor::new();
        let mut rx = DeltaCompressor::new();
        let mut hlc_counter = 0u16;

        for (x, y, z) in positions {
            let hlc = Hlc::new(1_700_000_000_000, hlc_counter);
            hlc_counter = hlc_counter.wrapping_add(1);

            if let Some(mv) = tx.compress(1, x, y, z, hlc) {
                let (rx_x, rx_y, rx_z) = rx.decompress(&mv);
                prop_assert!((rx_x - x).abs() <= 0.001);
                prop_assert!((rx_y - y).abs() <= 0.001);
                prop_assert!((rx_z - z).abs() <= 0.001);
            }
        }
    }
}
