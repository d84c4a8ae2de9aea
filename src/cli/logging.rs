//! Module implementing logging for the application.
//!
//! This includes setting up log filtering given a verbosity value,
//! as well as defining how the logs are being formatted to stderr.

use std::env;
use std::sync::Mutex;

use log::{self, SetLoggerError};
use slog::{Drain, FilterLevel, Logger};
use slog_envlogger::LogBuilder;
use slog_scope;
use slog_stdlog;
use slog_term::{CompactFormat, TermDecorator};


/// Environment variable with additional log filters, in the `env_logger` syntax.
const FILTER_VAR: &str = "RUST_LOG";

/// Logging level used when neither -v nor -q has been passed.
const DEFAULT_FILTER_LEVEL: FilterLevel = FilterLevel::Warning;


/// Initialize logging with given verbosity.
/// The verbosity value has the same meaning as in args::Options::verbosity.
pub fn init(verbosity: isize) -> Result<(), SetLoggerError> {
    let level = filter_level(verbosity);

    let decorator = TermDecorator::new().stderr().build();
    let drain = CompactFormat::new(decorator).build().fuse();

    // Extra filters from the environment apply on top of the -v/-q level.
    let mut builder = LogBuilder::new(drain).filter(None, level);
    if let Ok(ref filters) = env::var(FILTER_VAR) {
        builder = builder.parse(filters);
    }
    let drain = Mutex::new(builder.build()).fuse();

    // Make `log` macros go through the `slog` logger.
    let logger = Logger::root(drain, o!());
    slog_scope::set_global_logger(logger).cancel_reset();
    slog_stdlog::init_with_level(log_level(level))?;

    Ok(())
}

/// Map the verbosity (number of -v minus number of -q) onto a filtering level.
fn filter_level(verbosity: isize) -> FilterLevel {
    let level = DEFAULT_FILTER_LEVEL.as_usize() as isize + verbosity;
    if level <= FilterLevel::Off.as_usize() as isize {
        FilterLevel::Off
    } else if level >= FilterLevel::Trace.as_usize() as isize {
        FilterLevel::Trace
    } else {
        FilterLevel::from_usize(level as usize).unwrap_or(DEFAULT_FILTER_LEVEL)
    }
}

/// Most verbose `log` level that passes through the `slog` filter.
fn log_level(level: FilterLevel) -> log::Level {
    match level {
        FilterLevel::Off | FilterLevel::Critical | FilterLevel::Error => log::Level::Error,
        FilterLevel::Warning => log::Level::Warn,
        FilterLevel::Info => log::Level::Info,
        FilterLevel::Debug => log::Level::Debug,
        FilterLevel::Trace => log::Level::Trace,
    }
}
