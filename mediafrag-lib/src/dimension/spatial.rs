//! Validation of the spatial dimension (`xywh=[unit:]x,y,w,h`).
use std::sync::LazyLock;

use regex::Regex;

use crate::{Coordinate, Rejection, SpatialSelector, SpatialUnit};

/// `pixel:` is optional
static PIXEL_COORDINATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:pixel:)?([0-9]+),([0-9]+),([0-9]+),([0-9]+)$").unwrap()
});

/// `percent:` is mandatory
static PERCENT_SELECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^percent:([0-9]+),([0-9]+),([0-9]+),([0-9]+)$").unwrap()
});

const COORDINATES: [Coordinate; 4] = [Coordinate::X, Coordinate::Y, Coordinate::W, Coordinate::H];

const MAX_PERCENT: u64 = 100;

/// Validate a decoded `xywh` value
pub(crate) fn validate(value: &str) -> Result<SpatialSelector, Rejection> {
    let (unit, captures) = if let Some(captures) = PIXEL_COORDINATES.captures(value) {
        (SpatialUnit::Pixel, captures)
    } else if let Some(captures) = PERCENT_SELECTION.captures(value) {
        (SpatialUnit::Percent, captures)
    } else {
        return Err(Rejection::InvalidSpatial);
    };

    let mut xywh = [0_u64; 4];
    for (i, coordinate) in COORDINATES.into_iter().enumerate() {
        xywh[i] = coordinate_value(&captures[i + 1], unit, coordinate)?;
    }
    Ok(SpatialSelector::new(value, unit, xywh))
}

/// Coordinates are read in `x, y, w, h` order, so the first one out of
/// range is reported. Under `percent` a value too large for `u64` is just
/// another value above 100.
fn coordinate_value(
    digits: &str,
    unit: SpatialUnit,
    coordinate: Coordinate,
) -> Result<u64, Rejection> {
    let parsed = digits.parse::<u64>().ok();
    match (unit, parsed) {
        (SpatialUnit::Pixel, Some(pixels)) => Ok(pixels),
        (SpatialUnit::Pixel, None) => Err(Rejection::CoordinateOverflow(coordinate)),
        (SpatialUnit::Percent, Some(percent)) if percent <= MAX_PERCENT => Ok(percent),
        (SpatialUnit::Percent, _) => Err(Rejection::PercentOutOfRange(coordinate)),
    }
}
