//! The registry of supported media fragment dimensions and their validators.
//!
//! Adding a dimension means adding a [`Dimension`] variant, a key in
//! [`Dimension::key`] and an arm in [`Dimension::validate`].
use serde::Serialize;
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{Rejection, Selector};

mod named;
mod spatial;
mod temporal;
mod track;

pub use temporal::TemporalOrdering;

/// A media fragment dimension understood by this parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum Dimension {
    /// Time ranges, key `t`
    #[strum(serialize = "t")]
    #[serde(rename = "t")]
    Temporal,
    /// Rectangular regions, key `xywh`
    #[strum(serialize = "xywh")]
    #[serde(rename = "xywh")]
    Spatial,
    /// Tracks by name, key `track`
    #[strum(serialize = "track")]
    #[serde(rename = "track")]
    Track,
    /// Named sections, key `id`
    #[strum(serialize = "id")]
    #[serde(rename = "id")]
    Named,
}

impl Dimension {
    /// The key naming this dimension in a URI
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Dimension::Temporal => "t",
            Dimension::Spatial => "xywh",
            Dimension::Track => "track",
            Dimension::Named => "id",
        }
    }

    /// Look up a decoded key.
    ///
    /// Matching is exact and case-sensitive. Unknown keys yield `None`; they
    /// are not an error since future dimensions may be added.
    #[must_use]
    pub fn lookup(key: &str) -> Option<Self> {
        Self::iter().find(|dimension| dimension.key() == key)
    }

    /// Validate a decoded value of this dimension
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] reason if `value` is not a valid value of
    /// this dimension. Track and named values are never rejected.
    pub fn validate(self, value: &str, ordering: TemporalOrdering) -> Result<Selector, Rejection> {
        match self {
            Dimension::Temporal => temporal::validate(value, ordering).map(Selector::Temporal),
            Dimension::Spatial => spatial::validate(value).map(Selector::Spatial),
            Dimension::Track => Ok(Selector::Track(track::validate(value))),
            Dimension::Named => Ok(Selector::Named(named::validate(value))),
        }
    }
}
