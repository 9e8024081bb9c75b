use typed_builder::TypedBuilder;

use crate::{
    Dimension, FragmentResult, Location, LogReporter, ParseResult, Reporter, Side,
    dimension::TemporalOrdering, split_uri, tokenize,
};

/// Parses the media fragments of URIs.
///
/// See crate-level documentation for usage example.
#[derive(TypedBuilder, Debug)]
#[builder(field_defaults(default, setter(into)))]
#[builder(builder_method(doc = "
Create a builder for building a `Parser`.

On the builder call, call methods with same name as its fields to set their values.

Finally, call `.build()` to create the instance of `Parser`.
"))]
pub struct Parser {
    /// When `true`, NPT and SMPTE ranges must not end before they start,
    /// as is always required for wall-clock ranges.
    ///
    /// Off by default, so `t=20,10` yields a selector.
    strict_ordering: bool,

    /// Receives a diagnostic for every rejected (and accepted) value.
    ///
    /// Defaults to [`LogReporter`]; pass a [`NoopReporter`](crate::NoopReporter)
    /// to silence warnings.
    #[builder(default = default_reporter(), setter(!into))]
    reporter: Box<dyn Reporter>,
}

fn default_reporter() -> Box<dyn Reporter> {
    Box::new(LogReporter)
}

impl Default for Parser {
    fn default() -> Self {
        Parser::builder().build()
    }
}

impl Parser {
    /// Extract the media fragments from the query and the fragment of `uri`.
    ///
    /// This never fails: values that do not validate are reported and left
    /// out, unknown keys and malformed pairs are skipped.
    #[must_use]
    pub fn parse(&self, uri: &str) -> ParseResult {
        let (query, hash) = split_uri(uri);
        ParseResult {
            query: self.parse_octets(query, Side::Query),
            hash: self.parse_octets(hash, Side::Hash),
        }
    }

    /// Parse `uri`, or the URI of `location` if `uri` is `None`.
    ///
    /// Without either, the result is empty.
    #[must_use]
    pub fn parse_optional<L: Location + ?Sized>(
        &self,
        uri: Option<&str>,
        location: &L,
    ) -> ParseResult {
        match uri {
            Some(uri) => self.parse(uri),
            None => location
                .href()
                .map(|href| self.parse(&href))
                .unwrap_or_default(),
        }
    }

    /// Extract the media fragments of a single `&`-separated octet string,
    /// such as the query or the fragment of a URI (without `?` or `#`)
    #[must_use]
    pub fn parse_octets(&self, octets: &str, side: Side) -> FragmentResult {
        let ordering = TemporalOrdering::from(self.strict_ordering);
        let mut result = FragmentResult::default();

        for pair in tokenize(octets) {
            let Some(dimension) = Dimension::lookup(&pair.key) else {
                log::trace!("Ignoring unsupported dimension: {}", pair.key);
                continue;
            };
            match dimension.validate(&pair.value, ordering) {
                Ok(selector) => {
                    self.reporter.accepted(side, &selector);
                    result.push(selector);
                }
                Err(rejection) => self.reporter.rejected(side, &pair, &rejection),
            }
        }
        result
    }

    /// Whether NPT and SMPTE ranges are checked for their ordering
    #[must_use]
    pub const fn strict_ordering(&self) -> bool {
        self.strict_ordering
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        Coordinate, NoLocation, NoopReporter, Rejection, SpatialUnit, TemporalUnit,
        test_utils::{Report, collecting_parser, pair},
    };

    #[test]
    fn test_parse_query_and_hash() {
        let (parser, _) = collecting_parser(false);
        let result =
            parser.parse("http://example.com/video.ogv?t=10,20&track=audio#xywh=percent:10,10,50,50");

        let t = result.query.get(Dimension::Temporal).unwrap();
        assert_eq!(t.len(), 1);
        let t = t[0].as_temporal().unwrap();
        assert_eq!(t.unit(), TemporalUnit::Npt);
        assert_eq!((t.start(), t.end()), ("10", "20"));
        assert_eq!(
            result.query.get_key("track").unwrap()[0]
                .as_track()
                .unwrap()
                .name(),
            "audio"
        );

        let xywh = result.hash.get(Dimension::Spatial).unwrap()[0]
            .as_spatial()
            .unwrap();
        assert_eq!(xywh.unit(), SpatialUnit::Percent);
        assert_eq!([xywh.x(), xywh.y(), xywh.w(), xywh.h()], [10, 10, 50, 50]);
        assert!(result.hash.get(Dimension::Temporal).is_none());
    }

    #[test]
    fn test_repeated_keys_keep_order() {
        let (parser, _) = collecting_parser(false);
        let result = parser.parse("#id=chapter-1&id=chapter-2");
        let ids: Vec<_> = result
            .hash
            .get(Dimension::Named)
            .unwrap()
            .iter()
            .map(|s| s.as_named().unwrap().id())
            .collect();
        assert_eq!(ids, vec!["chapter-1", "chapter-2"]);
    }

    #[test]
    fn test_unknown_keys_are_silent() {
        let (parser, reporter) = collecting_parser(false);
        let result = parser.parse("video.mp4?foo=bar#foo=bar&T=10&Id=x");
        assert!(result.is_empty());
        assert!(reporter.reports().is_empty());
    }

    #[test]
    fn test_rejections_are_reported_not_kept() {
        let (parser, reporter) = collecting_parser(false);
        let result = parser.parse(
            "#t=clock:2018-01-01T10:00:00Z,clock:2018-01-01T09:00:00Z&xywh=percent:10,10,150,50&t=abc",
        );
        assert!(result.hash.is_empty());
        assert_eq!(
            reporter.reports(),
            vec![
                Report::Rejected(
                    Side::Hash,
                    pair("t", "clock:2018-01-01T10:00:00Z,clock:2018-01-01T09:00:00Z"),
                    Rejection::StartAfterEnd
                ),
                Report::Rejected(
                    Side::Hash,
                    pair("xywh", "percent:10,10,150,50"),
                    Rejection::PercentOutOfRange(Coordinate::W)
                ),
                Report::Rejected(Side::Hash, pair("t", "abc"), Rejection::InvalidTemporal),
            ]
        );
    }

    #[test]
    fn test_invalid_value_does_not_hide_others() {
        let (parser, reporter) = collecting_parser(false);
        let result = parser.parse("#t=bogus&t=5&xywh=1,2,3&id=a");
        assert_eq!(result.hash.get(Dimension::Temporal).unwrap().len(), 1);
        assert_eq!(result.hash.get(Dimension::Named).unwrap().len(), 1);
        assert!(result.hash.get(Dimension::Spatial).is_none());
        assert_eq!(
            reporter.rejections(),
            vec![Rejection::InvalidTemporal, Rejection::InvalidSpatial]
        );
    }

    #[test]
    fn test_accepted_selectors_are_reported() {
        let (parser, reporter) = collecting_parser(false);
        let result = parser.parse("?track=1");
        let selector = result.query.get(Dimension::Track).unwrap()[0].clone();
        assert_eq!(reporter.reports(), vec![Report::Accepted(Side::Query, selector)]);
    }

    #[test]
    fn test_strict_ordering() {
        let (lax, _) = collecting_parser(false);
        assert!(!lax.parse("#t=20,10").is_empty());

        let (strict, reporter) = collecting_parser(true);
        assert!(strict.strict_ordering());
        assert!(strict.parse("#t=20,10").is_empty());
        assert_eq!(reporter.rejections(), vec![Rejection::StartAfterEnd]);
    }

    #[test]
    fn test_reporter_does_not_change_result() {
        let uri = "a?t=npt:5&xywh=percent:1,2,3,400#id=x&track=y&t=smpte:1:00:00";
        let (collecting, _) = collecting_parser(false);
        let silent = Parser::builder().reporter(Box::new(NoopReporter)).build();
        assert_eq!(collecting.parse(uri), silent.parse(uri));
        assert_eq!(Parser::default().parse(uri), silent.parse(uri));
    }

    #[test]
    fn test_parse_optional() {
        let parser = Parser::builder().reporter(Box::new(NoopReporter)).build();
        let from_location = parser.parse_optional(None, "page.html#t=10");
        assert_eq!(from_location, parser.parse("page.html#t=10"));

        let explicit = parser.parse_optional(Some("page.html#id=a"), "page.html#t=10");
        assert!(explicit.hash.get(Dimension::Named).is_some());

        assert!(parser.parse_optional(None, &NoLocation).is_empty());
    }

    #[test]
    fn test_parse_octets() {
        let parser = Parser::builder().reporter(Box::new(NoopReporter)).build();
        let result = parser.parse_octets("t=1&t=2", Side::Hash);
        assert_eq!(result.get(Dimension::Temporal).unwrap().len(), 2);
    }
}
