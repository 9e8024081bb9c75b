use anyhow::{Context, Result};
use mediafrag_lib::ParseResult;
use serde::Serialize;

use super::ResultFormatter;

/// A parse result together with the input it came from
#[derive(Serialize)]
struct JsonOutput<'a> {
    uri: &'a str,
    #[serde(flatten)]
    result: &'a ParseResult,
}

/// Formats every result as a pretty-printed JSON object
pub(crate) struct Json;

impl ResultFormatter for Json {
    fn format(&self, uri: &str, result: &ParseResult) -> Result<String> {
        let output = JsonOutput { uri, result };
        serde_json::to_string_pretty(&output)
            .map(|json| json + "\n")
            .context("Cannot format result as JSON")
    }
}
