use crate::inputs::UriList;
use crate::verbosity::Verbosity;
use anyhow::{Context, Error, Result, anyhow};
use clap::builder::PossibleValuesParser;
use clap::{Parser, builder::TypedValueParser};
use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;
use std::{fs, path::PathBuf, str::FromStr};
use strum::{Display, VariantNames};

pub(crate) const MEDIAFRAG_CONFIG_FILE: &str = "mediafrag.toml";

/// Input that stands for "read URIs from stdin"
pub(crate) const STDIN_INPUT: &str = "-";

// We use a custom help message here because we want to show the default
// value of the config file, but also be able to check if the user has
// provided a custom value. If they didn't, we won't throw an error if
// the file doesn't exist.
const HELP_MSG_CONFIG_FILE: &str = formatcp!(
    "Configuration file to use\n\n[default: {}]",
    MEDIAFRAG_CONFIG_FILE,
);

/// The format to print parse results in
#[derive(Debug, Deserialize, Default, Clone, Copy, Display, VariantNames, PartialEq, Eq)]
#[non_exhaustive]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub(crate) enum OutputFormat {
    /// Indented key/value listing per side, dimension and selector
    #[default]
    Plain,
    /// One JSON document per input
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(format: &str) -> Result<Self, Self::Err> {
        match format.to_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format {format}")),
        }
    }
}

impl OutputFormat {
    /// Returns `true` if the output format is `Plain`
    pub(crate) const fn is_plain(self) -> bool {
        matches!(self, OutputFormat::Plain)
    }
}

// Macro for generating default functions to be used by serde
macro_rules! default_function {
    ( $( $name:ident : $T:ty = $e:expr; )* ) => {
        $(
            #[allow(clippy::missing_const_for_fn)]
            fn $name() -> $T {
                $e
            }
        )*
    };
}

// Generate the functions for serde defaults
default_function! {
    verbosity: Verbosity = Verbosity::default();
}

// Macro for merging configuration values
macro_rules! fold_in {
    ($cli:ident , $toml:ident ; $ty:ident { $( $key:ident : $default:expr, )* } ) => {
        if (false) {
            #[allow(dead_code, unused, clippy::diverging_sub_expression)]
            let _check_fold_in_exhaustivity = $ty {
                $($key: unreachable!(), )*
            };
        };
        $(
            if $cli.$key == $default && $toml.$key != $default {
                $cli.$key = $toml.$key;
            }
        )*
    };
}

#[derive(Parser, Debug)]
#[command(version, about)]
pub(crate) struct MediafragOptions {
    /// URIs to inspect.
    #[arg(
        name = "inputs",
        long_help = "URIs to inspect. The query (`?...`) and the fragment (`#...`) of every
input are searched for media fragments (`t`, `xywh`, `track`, `id`).

Use `-` to read URIs from standard input, one per line. Lines starting
with '#' and empty lines are skipped.

Without inputs, the URI given by `--default-uri` is inspected."
    )]
    raw_inputs: Vec<String>,

    /// Configuration file to use
    #[arg(short, long = "config")]
    #[arg(help = HELP_MSG_CONFIG_FILE)]
    pub(crate) config_file: Option<PathBuf>,

    #[clap(flatten)]
    pub(crate) config: Config,
}

impl MediafragOptions {
    /// The URIs to parse, with `-` expanded to the lines of stdin
    pub(crate) fn inputs(&self) -> Result<Vec<String>> {
        let mut inputs = Vec::with_capacity(self.raw_inputs.len());
        for raw_input in &self.raw_inputs {
            if raw_input == STDIN_INPUT {
                let list = UriList::from_reader(std::io::stdin())
                    .context("Cannot read URIs from stdin")?;
                inputs.extend(list.uris);
            } else {
                inputs.push(raw_input.clone());
            }
        }
        Ok(inputs)
    }
}

/// The main configuration for mediafrag
#[derive(Parser, Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Verbose program output
    #[clap(flatten)]
    #[serde(default = "verbosity")]
    pub(crate) verbose: Verbosity,

    /// Output format of the parse results
    #[arg(short, long, default_value = "plain", value_parser = PossibleValuesParser::new(OutputFormat::VARIANTS).map(|s| s.parse::<OutputFormat>().unwrap()))]
    #[serde(default)]
    pub(crate) format: OutputFormat,

    /// Reject NPT and SMPTE ranges whose start lies after their end.
    /// Wall-clock ranges are always checked.
    #[arg(long, verbatim_doc_comment)]
    #[serde(default)]
    pub(crate) strict_ordering: bool,

    /// Do not print a warning for values that fail validation
    #[arg(long)]
    #[serde(default)]
    pub(crate) no_warnings: bool,

    /// Exit with code 2 if an input yields no media fragment at all
    #[arg(long)]
    #[serde(default)]
    pub(crate) fail_on_empty: bool,

    /// URI to inspect when no input is given
    #[arg(long, value_name = "URI")]
    #[serde(default)]
    pub(crate) default_uri: Option<String>,
}

impl Config {
    /// Load configuration from a file
    pub(crate) fn load_from_file(path: &Path) -> Result<Config> {
        // Read configuration file
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).with_context(|| "Failed to parse configuration file")
    }

    /// Merge the configuration from TOML into the CLI configuration
    pub(crate) fn merge(&mut self, toml: Config) {
        // NOTE: if you see an error within this macro call, check to make sure that
        // that the fields provided to fold_in! match all the fields of the Config struct.
        fold_in! {
            // Destination and source configs
            self, toml;

            Config {
                verbose: Verbosity::default(),
                format: OutputFormat::default(),
                strict_ordering: false,
                no_warnings: false,
                fail_on_empty: false,
                default_uri: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn verify_app() {
        use clap::CommandFactory;
        MediafragOptions::command().debug_assert();
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("Plain").unwrap(), OutputFormat::Plain);
        assert!(OutputFormat::from_str("text").is_err());
        assert!(OutputFormat::from_str("yaml").is_err());
    }

    #[test]
    fn test_load_config() {
        let config: Config = toml::from_str(
            r#"
            format = "json"
            strict_ordering = true
            default_uri = "video.ogv#t=10"
            verbose = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.strict_ordering);
        assert!(!config.no_warnings);
        assert_eq!(config.default_uri.as_deref(), Some("video.ogv#t=10"));
        assert_eq!(config.verbose.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_unknown_config_key() {
        assert!(toml::from_str::<Config>("max_redirects = 3").is_err());
    }

    #[test]
    fn test_merge_prefers_cli_values() {
        let mut cli = Config {
            format: OutputFormat::Plain,
            default_uri: Some("cli.ogv".to_string()),
            ..Config::default()
        };
        let toml = Config {
            format: OutputFormat::Json,
            strict_ordering: true,
            default_uri: Some("toml.ogv".to_string()),
            ..Config::default()
        };

        cli.merge(toml);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.strict_ordering);
        assert_eq!(cli.default_uri.as_deref(), Some("cli.ogv"));
    }
}
