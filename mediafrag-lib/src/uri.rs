use url::Url;

/// Split `uri` into its query and fragment octet strings.
///
/// The fragment is everything after the first `#`. The query is everything
/// between the first `?` in front of that `#` and the `#` (or the end of
/// input). A missing delimiter yields an empty string. Nothing is decoded.
///
/// ```
/// use mediafrag_lib::split_uri;
///
/// assert_eq!(split_uri("video.ogv?t=10#xywh=1,2,3,4"), ("t=10", "xywh=1,2,3,4"));
/// assert_eq!(split_uri("video.ogv#t=10?x"), ("", "t=10?x"));
/// ```
#[must_use]
pub fn split_uri(uri: &str) -> (&str, &str) {
    let (head, fragment) = uri.split_once('#').unwrap_or((uri, ""));
    let query = head.split_once('?').map_or("", |(_, query)| query);
    (query, fragment)
}

/// Supplies the URI to parse when the caller does not pass one, in the way a
/// browser would hand over the address of the current document.
pub trait Location {
    /// The current location, if there is one
    fn href(&self) -> Option<String>;
}

/// A location that is never set
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoLocation;

impl Location for NoLocation {
    fn href(&self) -> Option<String> {
        None
    }
}

impl Location for str {
    fn href(&self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl Location for String {
    fn href(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl Location for Url {
    fn href(&self) -> Option<String> {
        Some(self.as_str().to_owned())
    }
}

impl<L: Location> Location for Option<L> {
    fn href(&self) -> Option<String> {
        self.as_ref().and_then(Location::href)
    }
}
