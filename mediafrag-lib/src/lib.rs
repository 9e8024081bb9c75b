//! `mediafrag_lib` extracts [Media Fragments URI] selectors from URIs.
//!
//! The query (`?...`) and the fragment (`#...`) of a URI are split into
//! `key=value` pairs. Pairs whose key names one of the four supported
//! dimensions are validated and turned into typed selectors:
//!
//! | key     | dimension | example                                  |
//! |---------|-----------|------------------------------------------|
//! | `t`     | temporal  | `t=10,20`, `t=smpte-25:0:01:00`, `t=clock:2011-10-01T23:00:45Z` |
//! | `xywh`  | spatial   | `xywh=160,120,320,240`, `xywh=percent:25,25,50,50` |
//! | `track` | track     | `track=audio`                            |
//! | `id`    | named     | `id=chapter-1`                           |
//!
//! Parsing never fails. Unknown keys and malformed pairs are skipped, values
//! that do not validate are reported to a [`Reporter`] and left out.
//!
//! "Hello world" example:
//! ```
//! use mediafrag_lib::{Dimension, TemporalUnit};
//!
//! let result = mediafrag_lib::parse("https://example.com/video.ogv#t=10,20&id=intro");
//! let t = result.hash.get(Dimension::Temporal).unwrap()[0].as_temporal().unwrap();
//! assert_eq!(t.unit(), TemporalUnit::Npt);
//! assert_eq!((t.start(), t.end()), ("10", "20"));
//! println!("{result}");
//! ```
//!
//! For more control build a [`Parser`] yourself:
//!
//! ```
//! use mediafrag_lib::{NoopReporter, Parser};
//!
//! let parser = Parser::builder()
//!     .strict_ordering(true)
//!     .reporter(Box::new(NoopReporter))
//!     .build();
//! assert!(parser.parse("video.ogv#t=20,10").is_empty());
//! ```
//!
//! [Media Fragments URI]: https://www.w3.org/TR/media-frags/
#![warn(clippy::all, clippy::pedantic)]
#![warn(
    absolute_paths_not_starting_with_crate,
    rustdoc::invalid_html_tags,
    missing_copy_implementations,
    missing_debug_implementations,
    semicolon_in_expressions_from_macros,
    unreachable_pub,
    unused_extern_crates,
    variant_size_differences,
    clippy::missing_const_for_fn
)]
#![deny(anonymous_parameters, macro_use_extern_crate)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

mod dimension;
mod parser;
mod reporter;
mod tokenize;
mod types;
mod uri;

#[cfg(test)]
pub(crate) mod test_utils;

pub use dimension::{Dimension, TemporalOrdering};
pub use parser::Parser;
pub use reporter::{LogReporter, NoopReporter, Reporter};
pub use tokenize::{DecodedPair, PAIR_SEPARATOR, RawPair, percent_decode, split_pairs, tokenize};
pub use types::*;
pub use uri::{Location, NoLocation, split_uri};

/// Parse the media fragments of `uri` with a default [`Parser`]
#[must_use]
pub fn parse(uri: &str) -> ParseResult {
    Parser::default().parse(uri)
}

/// Parse the media fragments of `uri`, falling back to the URI supplied by
/// `location` when `uri` is `None`
#[must_use]
pub fn parse_media_fragments_uri<L: Location + ?Sized>(
    uri: Option<&str>,
    location: &L,
) -> ParseResult {
    Parser::default().parse_optional(uri, location)
}
