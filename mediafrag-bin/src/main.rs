//! `mediafrag` prints the Media Fragments selectors found in URIs.
//!
//! The binary is a thin wrapper around mediafrag-lib.
//!
//! Inspect a URI:
//! ```sh
//! mediafrag "https://example.com/video.ogv#t=10,20&xywh=percent:25,25,50,50"
//! ```
//!
//! Read URIs from stdin and print JSON:
//! ```sh
//! cat uris.txt | mediafrag --format json -
//! ```
//!
//! Fail if a URI carries no valid selector:
//! ```sh
//! mediafrag --fail-on-empty --strict-ordering "video.ogv#t=20,10"
//! ```
#![warn(clippy::all, clippy::pedantic)]
#![warn(
    absolute_paths_not_starting_with_crate,
    rustdoc::invalid_html_tags,
    missing_copy_implementations,
    missing_debug_implementations,
    semicolon_in_expressions_from_macros,
    unreachable_pub,
    unused_extern_crates,
    variant_size_differences,
    clippy::missing_const_for_fn
)]
#![deny(anonymous_parameters, macro_use_extern_crate)]
#![deny(missing_docs)]

use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;

use anyhow::{Context, Error, Result, bail};
use clap::{Parser, crate_version};
use formatters::log::init_logging;
use log::{debug, error};
use mediafrag_lib::{LogReporter, NoopReporter, Reporter};

mod formatters;
mod inputs;
mod options;
mod verbosity;

use crate::options::{Config, MEDIAFRAG_CONFIG_FILE, MediafragOptions};

/// A C-like enum that can be cast to `i32` and used as process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitCode {
    Success = 0,
    // NOTE: exit code 1 is used for any `Result::Err` bubbled up to `main()`
    // using the `?` operator.
    #[allow(unused)]
    UnexpectedFailure = 1,
    EmptyResult = 2,
    ConfigFile = 3,
}

fn main() -> Result<()> {
    // std::process::exit doesn't guarantee that all destructors will be run,
    // therefore we wrap the main code in another function to ensure that.
    let exit_code = run_main()?;
    std::process::exit(exit_code);
}

/// Merge a potential config file into the command-line options
fn load_config(opts: &mut MediafragOptions) -> Result<()> {
    // Load a potentially existing config file and merge it into the config from
    // the CLI
    if let Some(config_file) = &opts.config_file {
        match Config::load_from_file(config_file) {
            Ok(c) => opts.config.merge(c),
            Err(e) => {
                bail!(
                    "Cannot load configuration file `{}`: {e:?}",
                    config_file.display()
                );
            }
        }
    } else {
        // Without an explicit config file, a `mediafrag.toml` in the current
        // directory is used if it exists. An invalid default file is an error
        // just like an invalid explicit one.
        let default_config = PathBuf::from(MEDIAFRAG_CONFIG_FILE);
        if default_config.is_file() {
            match Config::load_from_file(&default_config) {
                Ok(c) => opts.config.merge(c),
                Err(e) => {
                    bail!(
                        "Cannot load default configuration file `{}`: {e:?}",
                        default_config.display()
                    );
                }
            }
        }
    }

    Ok(())
}

/// Load the options and call the mediafrag entrypoint
fn run_main() -> Result<i32> {
    use std::process::exit;

    let mut opts = MediafragOptions::parse();
    let loaded = load_config(&mut opts);

    // The config file may set `verbose` and `format`, so logging starts
    // only once it is merged
    init_logging(&opts.config.verbose, opts.config.format);

    if let Err(e) = loaded {
        error!(
            "Error while loading config: {e}\n\
            See `mediafrag --help` (version {}) for the available keys",
            crate_version!()
        );
        exit(ExitCode::ConfigFile as i32);
    }

    match run(&opts) {
        Err(e) if Some(ErrorKind::BrokenPipe) == underlying_io_error_kind(&e) => {
            exit(ExitCode::Success as i32);
        }
        res => res,
    }
}

/// Check if the given error can be traced back to an `io::ErrorKind`
/// This is helpful for troubleshooting the root cause of an error.
/// Code is taken from the anyhow documentation.
fn underlying_io_error_kind(error: &Error) -> Option<io::ErrorKind> {
    for cause in error.chain() {
        if let Some(io_error) = cause.downcast_ref::<io::Error>() {
            return Some(io_error.kind());
        }
    }
    None
}

fn reporter(config: &Config) -> Box<dyn Reporter> {
    if config.no_warnings {
        Box::new(NoopReporter)
    } else {
        Box::new(LogReporter)
    }
}

/// Parse every input and print the selectors found in it
fn run(opts: &MediafragOptions) -> Result<i32> {
    let config = &opts.config;
    let parser = mediafrag_lib::Parser::builder()
        .strict_ordering(config.strict_ordering)
        .reporter(reporter(config))
        .build();
    let formatter = formatters::get_formatter(config.format);

    let inputs = opts.inputs()?;
    let mut results = Vec::new();
    if inputs.is_empty() {
        let Some(default_uri) = &config.default_uri else {
            bail!("No input given. Pass a URI, `-` for stdin, or set `default_uri`");
        };
        debug!("No input given, using default URI `{default_uri}`");
        results.push((
            default_uri.as_str(),
            parser.parse_optional(None, &config.default_uri),
        ));
    } else {
        results.extend(inputs.iter().map(|uri| (uri.as_str(), parser.parse(uri))));
    }

    let mut stdout = io::stdout().lock();
    let mut empty = 0;
    for (uri, result) in &results {
        if result.is_empty() {
            debug!("No media fragment found in `{uri}`");
            empty += 1;
        }
        write!(stdout, "{}", formatter.format(uri, result)?)
            .context("Cannot write result to stdout")?;
    }
    stdout.flush()?;

    if config.fail_on_empty && empty > 0 {
        error!("{empty} of {} input(s) yielded no media fragment", results.len());
        return Ok(ExitCode::EmptyResult as i32);
    }
    Ok(ExitCode::Success as i32)
}
