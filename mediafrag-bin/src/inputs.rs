//! Reading URI lists, one URI per line.
//!
//! Empty lines and lines starting with `#` are skipped, so a list file can
//! carry comments. Note that a bare fragment like `#t=10` therefore cannot
//! be listed on its own line; pass it as an argument instead.

use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Read};

/// Comment marker for ignoring lines in URI lists
const COMMENT_MARKER: &str = "#";

/// URIs read from a reader
#[derive(Debug, Clone)]
pub(crate) struct UriList {
    /// The URIs in the order they were read, trimmed
    pub(crate) uris: Vec<String>,
}

impl UriList {
    /// Create a `UriList` from any reader
    pub(crate) fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let lines: Vec<String> = BufReader::new(reader)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("Cannot read lines from reader")?;

        Ok(UriList {
            uris: Self::filter_lines(lines),
        })
    }

    fn filter_lines(lines: Vec<String>) -> Vec<String> {
        lines
            .into_iter()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
            .collect()
    }
}
