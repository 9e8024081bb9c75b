pub(crate) mod color;
pub(crate) mod json;
pub(crate) mod log;
pub(crate) mod plain;

use anyhow::Result;
use mediafrag_lib::ParseResult;

use crate::options::OutputFormat;

/// Turns the result of parsing one input into text for stdout
pub(crate) trait ResultFormatter {
    /// Format the selectors `result` found in `uri`
    fn format(&self, uri: &str, result: &ParseResult) -> Result<String>;
}

/// Create a result formatter based on the given format option
pub(crate) fn get_formatter(format: OutputFormat) -> Box<dyn ResultFormatter> {
    match format {
        OutputFormat::Plain => Box::new(plain::Plain),
        OutputFormat::Json => Box::new(json::Json),
    }
}
