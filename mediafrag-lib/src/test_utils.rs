use std::sync::{Arc, Mutex};

use crate::{DecodedPair, Parser, Rejection, Reporter, Selector, Side};

/// A diagnostic captured by [`CollectingReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Report {
    Rejected(Side, DecodedPair, Rejection),
    Accepted(Side, Selector),
}

/// Records every diagnostic so tests can assert on them.
///
/// Clones share the same record.
#[derive(Debug, Default, Clone)]
pub(crate) struct CollectingReporter {
    reports: Arc<Mutex<Vec<Report>>>,
}

impl CollectingReporter {
    pub(crate) fn reports(&self) -> Vec<Report> {
        self.reports.lock().unwrap().clone()
    }

    /// Only the rejections, in the order they were reported
    pub(crate) fn rejections(&self) -> Vec<Rejection> {
        self.reports()
            .into_iter()
            .filter_map(|report| match report {
                Report::Rejected(_, _, rejection) => Some(rejection),
                Report::Accepted(..) => None,
            })
            .collect()
    }
}

impl Reporter for CollectingReporter {
    fn rejected(&self, side: Side, pair: &DecodedPair, rejection: &Rejection) {
        self.reports
            .lock()
            .unwrap()
            .push(Report::Rejected(side, pair.clone(), rejection.clone()));
    }

    fn accepted(&self, side: Side, selector: &Selector) {
        self.reports
            .lock()
            .unwrap()
            .push(Report::Accepted(side, selector.clone()));
    }
}

/// A parser wired to a fresh [`CollectingReporter`]
pub(crate) fn collecting_parser(strict_ordering: bool) -> (Parser, CollectingReporter) {
    let reporter = CollectingReporter::default();
    let parser = Parser::builder()
        .strict_ordering(strict_ordering)
        .reporter(Box::new(reporter.clone()))
        .build();
    (parser, reporter)
}

/// Helper to build a decoded pair
pub(crate) fn pair(key: &str, value: &str) -> DecodedPair {
    DecodedPair {
        key: key.to_string(),
        value: value.to_string(),
    }
}
