use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Serializer, ser::SerializeMap};
use strum::Display as StrumDisplay;

use crate::{Dimension, Selector};

/// The part of a URI an octet string was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Between `?` and `#`
    Query,
    /// After `#`
    Hash,
}

/// Accepted selectors of one octet string, grouped by dimension.
///
/// Dimensions are kept in the order they were first seen, selectors of the
/// same dimension in the order they appeared. A dimension is only present if
/// at least one of its values was accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentResult {
    entries: Vec<(Dimension, Vec<Selector>)>,
}

impl FragmentResult {
    pub(crate) fn push(&mut self, selector: Selector) {
        let dimension = selector.dimension();
        match self.entries.iter_mut().find(|(d, _)| *d == dimension) {
            Some((_, selectors)) => selectors.push(selector),
            None => self.entries.push((dimension, vec![selector])),
        }
    }

    /// All accepted selectors of `dimension`, in appearance order
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> Option<&[Selector]> {
        self.entries
            .iter()
            .find(|(d, _)| *d == dimension)
            .map(|(_, selectors)| selectors.as_slice())
    }

    /// Like [`FragmentResult::get`], looked up by key name (`t`, `xywh`, ...)
    #[must_use]
    pub fn get_key(&self, key: &str) -> Option<&[Selector]> {
        self.get(Dimension::lookup(key)?)
    }

    /// Dimensions with at least one accepted selector, first-seen first
    pub fn keys(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.entries.iter().map(|(d, _)| *d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &[Selector])> {
        self.entries.iter().map(|(d, s)| (*d, s.as_slice()))
    }

    /// Every accepted selector, grouped by dimension
    pub fn selectors(&self) -> impl Iterator<Item = &Selector> {
        self.entries.iter().flat_map(|(_, s)| s)
    }

    /// Number of dimensions with at least one accepted selector
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-encode the accepted selectors into an `&`-separated octet string.
    ///
    /// Parsing the returned string yields a result equal to `self`.
    #[must_use]
    pub fn to_octets(&self) -> String {
        self.selectors()
            .map(Selector::to_pair)
            .collect::<Vec<_>>()
            .join("&")
    }

    fn render(&self, f: &mut Formatter<'_>, side: Side) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "{side}: {{}}");
        }
        writeln!(f, "{side}:")?;
        for (dimension, selectors) in self.iter() {
            writeln!(f, "  {dimension}:")?;
            for selector in selectors {
                let mut marker = "-";
                for (name, value) in selector.fields() {
                    writeln!(f, "    {marker} {name}: {value}")?;
                    marker = " ";
                }
            }
        }
        Ok(())
    }
}

impl Serialize for FragmentResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (dimension, selectors) in &self.entries {
            map.serialize_entry(dimension.key(), selectors)?;
        }
        map.end()
    }
}

/// Selectors found in the query and in the fragment of a URI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Selectors from the query (`?...`)
    pub query: FragmentResult,
    /// Selectors from the fragment (`#...`)
    pub hash: FragmentResult,
}

impl ParseResult {
    /// The selectors found on `side`
    #[must_use]
    pub const fn side(&self, side: Side) -> &FragmentResult {
        match side {
            Side::Query => &self.query,
            Side::Hash => &self.hash,
        }
    }

    /// `true` if neither side holds a single accepted selector
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.hash.is_empty()
    }
}

/// Multi-line rendering for diagnostics, e.g.
///
/// ```text
/// query: {}
/// hash:
///   t:
///     - value: 10,20
///       unit: npt
///       start: 10
///       end: 20
/// ```
impl Display for ParseResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.query.render(f, Side::Query)?;
        self.hash.render(f, Side::Hash)
    }
}
