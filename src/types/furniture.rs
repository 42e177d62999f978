//! Furniture kind registry: a closed, total bijection between wire indices
//! and names.

use crate::error::{Error, Result};

const FURNITURE_NAMES: [&str; crate::constants::FURNITURE_KIND_COUNT] = [
    "chair",
    "round-table",
    "rect-table",
    "trestle-table",
    "podium",
    "stage",
    "bar",
];

/// Return the furniture name for a wire index, if it falls in the closed set.
///
/// Total on `0..FURNITURE_KIND_COUNT`; out-of-range indices (as may appear
/// in a decoded [`crate::types::Operation::Place`] from a peer running a
/// newer furniture set) return `None` rather than panicking, leaving
/// validation to the application.
pub fn furniture_name(index: u8) -> Option<&'static str> {
    FURNITURE_NAMES.get(index as usize).copied()
}

/// Look up the wire index for a furniture name.
///
/// # Errors
///
/// Returns [`Error::UnknownFurnitureKind`] if `name` is not one of the
/// closed set of furniture kinds.
pub fn furniture_index(name: &str) -> Result<u8> {
    FURNITURE_NAMES
        .iter()
        .position(|&n| n == name)
        .map(|i| i as u8)
        .ok_or_else(|| Error::UnknownFurnitureKind(name.to_string()))
}
