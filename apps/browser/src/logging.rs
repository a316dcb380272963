//! Subscriber setup. The subscriber is installed before settings are read so
//! warnings from loading them are printed; the level is set afterwards.

use directory_client::Settings;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

const STARTUP_LEVEL: &str = "info";

pub struct LogFilter {
    /// `None` when `RUST_LOG` chose the filter; it is then left alone.
    handle: Option<reload::Handle<EnvFilter, Registry>>,
}

impl LogFilter {
    pub fn apply_settings(&self, settings: &Settings) {
        let Some(handle) = &self.handle else {
            return;
        };
        let level = settings.log_filter();
        if let Err(error) = handle.modify(|filter| *filter = EnvFilter::new(level)) {
            warn!(%error, level, "logging: could not apply configured level");
        }
    }
}

/// Filter in effect before settings load, and whether settings may replace it.
fn startup_filter(rust_log: Option<&str>) -> (EnvFilter, bool) {
    match rust_log.map(EnvFilter::try_new) {
        Some(Ok(filter)) => (filter, false),
        _ => (EnvFilter::new(STARTUP_LEVEL), true),
    }
}

pub fn init() -> LogFilter {
    let rust_log = std::env::var("RUST_LOG").ok();
    let (filter, configurable) = startup_filter(rust_log.as_deref());
    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    LogFilter {
        handle: configurable.then_some(handle),
    }
}

#[cfg(test)]
#[path = "tests/logging_tests.rs"]
mod tests;
