//! Logger setup.
//!
//! Installs a `fern` dispatcher behind the `log` facade. Library code only
//! ever talks to `log` (through [`crate::diagnostics::LogSink`]); calling
//! [`init_logging`] is left to the application.

use log::LevelFilter;
use serde::Deserialize;

use crate::diagnostics::DEFAULT_TARGET;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level written out.
    pub level: LevelFilter,
    /// Target used by the diagnostic sink handed to the components.
    pub target: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            target: DEFAULT_TARGET.to_owned(),
        }
    }
}

/// Installs the global logger. Fails if a logger is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(config.level)
        .chain(std::io::stderr())
        .apply()?;

    log::debug!("logging initialized at {}", config.level);
    Ok(())
}
