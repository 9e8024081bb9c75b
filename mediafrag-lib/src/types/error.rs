use serde::Serialize;
use strum::Display;
use thiserror::Error;

use crate::Dimension;

/// One of the four coordinates of a spatial selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Coordinate {
    /// Horizontal offset
    X,
    /// Vertical offset
    Y,
    /// Width
    W,
    /// Height
    H,
}

/// Reasons for which a dimension validator refuses a decoded value.
///
/// A rejected value never reaches the parse result; the rejection is handed
/// to the [`Reporter`](crate::Reporter) instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    /// The value matches none of the NPT, SMPTE or wall-clock grammars
    #[error("Invalid temporal dimension")]
    InvalidTemporal,

    /// Both ends of a time range are given but the start lies after the end
    #[error("Please ensure that start < end")]
    StartAfterEnd,

    /// A wall-clock time matched the grammar but names no calendar instant
    /// (e.g. month `13`)
    #[error("Invalid wall-clock time: {0}")]
    InvalidClockTime(String),

    /// The value matches neither the pixel nor the percent grammar
    #[error("Invalid spatial dimension")]
    InvalidSpatial,

    /// A pixel coordinate does not fit into an unsigned 64 bit integer
    #[error("Spatial coordinate {0} is too large")]
    CoordinateOverflow(Coordinate),

    /// A percent selection coordinate lies outside of `0..=100`, however
    /// large it is
    #[error("Please ensure that 0 <= {0} <= 100")]
    PercentOutOfRange(Coordinate),
}

impl Rejection {
    /// The dimension whose validator produced this rejection
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        match self {
            Rejection::InvalidTemporal
            | Rejection::StartAfterEnd
            | Rejection::InvalidClockTime(_) => Dimension::Temporal,
            Rejection::InvalidSpatial
            | Rejection::CoordinateOverflow(_)
            | Rejection::PercentOutOfRange(_) => Dimension::Spatial,
        }
    }
}

/// Percent-decoding failures.
///
/// Tokens that fail to decode are dropped like any other malformed token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A `%` is not followed by two hexadecimal digits
    #[error("Malformed percent escape at offset {0}")]
    MalformedEscape(usize),

    /// The decoded octets are not valid UTF-8
    #[error("Percent decoded value is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}
