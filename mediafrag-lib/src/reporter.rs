//! Diagnostics for dropped and accepted selectors.
//!
//! Parsing never fails; a value that does not validate is left out of the
//! result and handed to a [`Reporter`]. Reporters only observe: swapping one
//! for another never changes what a parse returns.
use std::fmt::Debug;

use crate::{DecodedPair, Rejection, Selector, Side};

/// Sink for parser diagnostics
pub trait Reporter: Debug + Send + Sync {
    /// A recognized key carried a value its validator refused
    fn rejected(&self, side: Side, pair: &DecodedPair, rejection: &Rejection);

    /// A selector was accepted into the result
    fn accepted(&self, _side: Side, _selector: &Selector) {}
}

/// Reports through the `log` facade: rejections as warnings, accepted
/// selectors at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn rejected(&self, side: Side, pair: &DecodedPair, rejection: &Rejection) {
        log::warn!(
            "Media Fragments URI parsing warning: {rejection} ({side}: `{}={}`)",
            pair.key,
            pair.value
        );
    }

    fn accepted(&self, side: Side, selector: &Selector) {
        log::debug!("{side}: {} {selector}", selector.dimension());
    }
}

/// Drops every diagnostic
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn rejected(&self, _side: Side, _pair: &DecodedPair, _rejection: &Rejection) {}
}
