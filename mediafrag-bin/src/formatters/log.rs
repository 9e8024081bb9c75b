use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

use crate::{formatters, options::OutputFormat, verbosity::Verbosity};

/// Initialize the logging system with the given verbosity level.
///
/// Log lines go to stderr, so they never mix with the parse results.
pub(crate) fn init_logging(verbose: &Verbosity, format: OutputFormat) {
    // Set a base level for all modules to `warn`.
    // It will be overridden by RUST_LOG if it's set.
    let env = Env::default().filter_or("RUST_LOG", "warn");

    let mut builder = Builder::from_env(env);
    builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if std::env::var("RUST_LOG").is_err() {
        builder.filter_level(LevelFilter::Warn);

        // Our own crates follow `-v`/`-q`
        let level_filter = verbose.log_level_filter();
        builder
            .filter_module("mediafrag", level_filter)
            .filter_module("mediafrag_lib", level_filter);
    }

    if format.is_plain() {
        builder.format(move |buf, record| {
            let level = record.level();
            let color = formatters::color::color_for_level(level);
            writeln!(
                buf,
                "{} {}",
                color.apply_to(format!("[{level}]")),
                record.args()
            )
        });
    } else {
        // Machine-readable output: keep stderr free of escape codes
        builder.format(move |buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    }

    builder.init();
}
