use anyhow::Result;
use mediafrag_lib::ParseResult;

use super::ResultFormatter;

/// The indented `query:`/`hash:` listing of [`ParseResult`]'s `Display`,
/// headed by the input it was parsed from
pub(crate) struct Plain;

impl ResultFormatter for Plain {
    fn format(&self, uri: &str, result: &ParseResult) -> Result<String> {
        Ok(format!("{uri}\n{result}"))
    }
}
