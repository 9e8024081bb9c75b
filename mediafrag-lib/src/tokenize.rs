//! Splits an octet string into decoded key-value pairs.
//!
//! Pairs are separated by `&`; key and value by the first `=` of a pair.
//! Tokens without a key or a value, and tokens whose percent-encoding is
//! broken, are skipped without an error.
use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::DecodeError;

/// The only primary separator for key-value pairs
pub const PAIR_SEPARATOR: char = '&';

/// A key-value token before percent-decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPair<'a> {
    pub key: &'a str,
    pub raw_value: &'a str,
}

impl<'a> RawPair<'a> {
    /// Split a single token on its first `=`.
    ///
    /// Returns `None` if there is no `=`, or if the key or the value would be
    /// empty.
    #[must_use]
    pub fn from_token(token: &'a str) -> Option<Self> {
        let (key, raw_value) = token.split_once('=')?;
        if key.is_empty() || raw_value.is_empty() {
            return None;
        }
        Some(Self { key, raw_value })
    }

    /// Percent-decode key and value
    ///
    /// # Errors
    ///
    /// Fails if either part contains a malformed escape or decodes to
    /// invalid UTF-8
    pub fn decode(&self) -> Result<DecodedPair, DecodeError> {
        Ok(DecodedPair {
            key: percent_decode(self.key)?,
            value: percent_decode(self.raw_value)?,
        })
    }
}

/// A key-value pair after percent-decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPair {
    pub key: String,
    pub value: String,
}

/// Percent-decode `input` the way `decodeURIComponent` does.
///
/// Every `%` must start a `%XX` escape (hex digits in either case) and the
/// decoded octets must form valid UTF-8. `+` is left alone.
///
/// # Errors
///
/// - `DecodeError::MalformedEscape`, if a `%` is not followed by two hex digits
/// - `DecodeError::InvalidUtf8`, if the decoded octets are not UTF-8
pub fn percent_decode(input: &str) -> Result<String, DecodeError> {
    let bytes = input.as_bytes();
    let mut offset = 0;
    while let Some(found) = bytes[offset..].iter().position(|&b| b == b'%') {
        let at = offset + found;
        match bytes.get(at + 1..at + 3) {
            Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => offset = at + 3,
            _ => return Err(DecodeError::MalformedEscape(at)),
        }
    }

    percent_decode_str(input)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|e| DecodeError::InvalidUtf8(e.to_string()))
}

/// Split `octets` into raw tokens, keeping only well-formed pairs
pub fn split_pairs(octets: &str) -> impl Iterator<Item = RawPair<'_>> {
    octets.split(PAIR_SEPARATOR).filter_map(|token| {
        let pair = RawPair::from_token(token);
        if pair.is_none() && !token.is_empty() {
            log::trace!("Skipping malformed token: {token:?}");
        }
        pair
    })
}

/// Split and decode `octets` into key-value pairs, in input order.
///
/// Duplicate keys are kept.
#[must_use]
pub fn tokenize(octets: &str) -> Vec<DecodedPair> {
    split_pairs(octets)
        .filter_map(|raw| match raw.decode() {
            Ok(pair) => Some(pair),
            Err(e) => {
                log::trace!("Skipping token `{}={}`: {e}", raw.key, raw.raw_value);
                None
            }
        })
        .collect()
}
