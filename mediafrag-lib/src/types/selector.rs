//! Typed records for values that passed dimension validation.
//!
//! Every record keeps the decoded value it was built from, so a selector can
//! always be written back into its `key=value` form.
use std::fmt::{self, Display, Formatter};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

use crate::Dimension;

/// Octets that cannot appear verbatim in a query or fragment value without
/// changing how the surrounding octet string tokenizes
const VALUE_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// Addressing scheme of a temporal selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, StrumDisplay, EnumString, Serialize)]
pub enum TemporalUnit {
    /// Normal Play Time, seconds or `h:mm:ss`
    #[strum(serialize = "npt")]
    #[serde(rename = "npt")]
    Npt,
    /// SMPTE timecode without an explicit frame rate
    #[strum(serialize = "smpte")]
    #[serde(rename = "smpte")]
    Smpte,
    /// SMPTE timecode at 25 frames per second
    #[strum(serialize = "smpte-25")]
    #[serde(rename = "smpte-25")]
    Smpte25,
    /// SMPTE timecode at 30 frames per second
    #[strum(serialize = "smpte-30")]
    #[serde(rename = "smpte-30")]
    Smpte30,
    /// SMPTE timecode at 30 frames per second, drop-frame
    #[strum(serialize = "smpte-30-drop")]
    #[serde(rename = "smpte-30-drop")]
    Smpte30Drop,
    /// Wall-clock time (ISO 8601)
    #[strum(serialize = "clock")]
    #[serde(rename = "clock")]
    Clock,
}

impl TemporalUnit {
    /// The SMPTE variants, longest prefix first
    pub(crate) const SMPTE: [TemporalUnit; 4] = [
        TemporalUnit::Smpte30Drop,
        TemporalUnit::Smpte30,
        TemporalUnit::Smpte25,
        TemporalUnit::Smpte,
    ];

    /// Strip the `<unit>:` prefix from `time`, if present
    pub(crate) fn strip_prefix<'a>(&self, time: &'a str) -> Option<&'a str> {
        time.strip_prefix(self.as_ref())?.strip_prefix(':')
    }
}

/// Addressing scheme of a spatial selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, StrumDisplay, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SpatialUnit {
    /// Absolute pixel coordinates (the default)
    Pixel,
    /// Coordinates in percent of the media frame
    Percent,
}

/// A validated `t` value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemporalSelector {
    value: String,
    unit: TemporalUnit,
    start: String,
    end: String,
}

impl TemporalSelector {
    pub(crate) fn new(value: &str, unit: TemporalUnit, start: &str, end: &str) -> Self {
        Self {
            value: value.to_owned(),
            unit,
            start: start.to_owned(),
            end: end.to_owned(),
        }
    }

    /// The decoded value this selector was built from
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn unit(&self) -> TemporalUnit {
        self.unit
    }

    /// Start of the range without its unit prefix; empty if open
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// End of the range without its unit prefix; empty if open
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }
}

/// A validated `xywh` value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpatialSelector {
    value: String,
    unit: SpatialUnit,
    x: u64,
    y: u64,
    w: u64,
    h: u64,
}

impl SpatialSelector {
    pub(crate) fn new(value: &str, unit: SpatialUnit, [x, y, w, h]: [u64; 4]) -> Self {
        Self {
            value: value.to_owned(),
            unit,
            x,
            y,
            w,
            h,
        }
    }

    /// The decoded value this selector was built from
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn unit(&self) -> SpatialUnit {
        self.unit
    }

    #[must_use]
    pub const fn x(&self) -> u64 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> u64 {
        self.y
    }

    #[must_use]
    pub const fn w(&self) -> u64 {
        self.w
    }

    #[must_use]
    pub const fn h(&self) -> u64 {
        self.h
    }
}

/// A `track` value; the track name is the value itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackSelector {
    value: String,
    name: String,
}

impl TrackSelector {
    pub(crate) fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
            name: value.to_owned(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An `id` value; the id is the value itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedSelector {
    value: String,
    id: String,
}

impl NamedSelector {
    pub(crate) fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
            id: value.to_owned(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// A validated media fragment selector of any dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Selector {
    /// `t=...`
    Temporal(TemporalSelector),
    /// `xywh=...`
    Spatial(SpatialSelector),
    /// `track=...`
    Track(TrackSelector),
    /// `id=...`
    Named(NamedSelector),
}

impl Selector {
    /// The dimension this selector belongs to
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        match self {
            Selector::Temporal(_) => Dimension::Temporal,
            Selector::Spatial(_) => Dimension::Spatial,
            Selector::Track(_) => Dimension::Track,
            Selector::Named(_) => Dimension::Named,
        }
    }

    /// The decoded value this selector was built from
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Selector::Temporal(s) => s.value(),
            Selector::Spatial(s) => s.value(),
            Selector::Track(s) => s.value(),
            Selector::Named(s) => s.value(),
        }
    }

    /// Field names and values in rendering order, starting with `value`
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("value", self.value().to_owned())];
        match self {
            Selector::Temporal(s) => fields.extend([
                ("unit", s.unit.to_string()),
                ("start", s.start.clone()),
                ("end", s.end.clone()),
            ]),
            Selector::Spatial(s) => fields.extend([
                ("unit", s.unit.to_string()),
                ("x", s.x.to_string()),
                ("y", s.y.to_string()),
                ("w", s.w.to_string()),
                ("h", s.h.to_string()),
            ]),
            Selector::Track(s) => fields.push(("name", s.name.clone())),
            Selector::Named(s) => fields.push(("id", s.id.clone())),
        }
        fields
    }

    /// Percent-encode this selector back into a `key=value` pair
    #[must_use]
    pub fn to_pair(&self) -> String {
        format!(
            "{}={}",
            self.dimension(),
            utf8_percent_encode(self.value(), VALUE_ENCODE_SET)
        )
    }

    #[must_use]
    pub const fn as_temporal(&self) -> Option<&TemporalSelector> {
        match self {
            Selector::Temporal(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_spatial(&self) -> Option<&SpatialSelector> {
        match self {
            Selector::Spatial(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_track(&self) -> Option<&TrackSelector> {
        match self {
            Selector::Track(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_named(&self) -> Option<&NamedSelector> {
        match self {
            Selector::Named(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .fields()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        write!(f, "{{{}}}", fields.join(", "))
    }
}
