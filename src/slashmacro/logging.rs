//! Logger initialization for the binary
//!
//! The library only talks to the `log` facade. Binaries call [`init_logging`] early in
//! `main` to install `env_logger` as the backend.

use std::sync::Once;

/// Logger configuration
///
/// `filter` follows the `env_logger` filter syntax (e.g. "warn", "slashmacro=debug").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }
}

static INIT: Once = Once::new();

/// Install the global logger once; later calls are ignored
///
/// Filter precedence: the configured filter, then `RUST_LOG`, then `warn`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.write_style(config.write_style);

        // A host program may have installed its own logger.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
