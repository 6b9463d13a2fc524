//! Diagnostic sink.
//!
//! Components that report diagnostics take a `&dyn DiagnosticSink` instead of
//! writing to a global logger, so they can be exercised without a live
//! rendering surface. [`LogSink`] is the sink used in production; it forwards
//! everything to the [`log`] facade.

use log::Level;

/// Target used when no other is configured.
pub const DEFAULT_TARGET: &str = "globe_gl";

/// Write-only receiver of leveled diagnostic messages.
pub trait DiagnosticSink {
    fn log(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}

/// Forwards diagnostics to the `log` facade under a fixed target.
#[derive(Debug, Clone)]
pub struct LogSink {
    target: String,
}

impl LogSink {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}

impl DiagnosticSink for LogSink {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: self.target.as_str(), level, "{message}");
    }
}


#[cfg(test)]
mod tests {
    use super::recording::RecordingSink;
    use super::*;

    #[test]
    fn helpers_tag_levels() {
        let sink = RecordingSink::default();
        sink.info("compiling");
        sink.error("broken");

        assert_eq!(
            sink.messages(),
            vec![
                (Level::Info, "compiling".to_owned()),
                (Level::Error, "broken".to_owned()),
            ]
        );
    }

    #[test]
    fn log_sink_defaults_to_crate_target() {
        assert_eq!(LogSink::default().target(), DEFAULT_TARGET);
        assert_eq!(LogSink::new("globe_gl::shader").target(), "globe_gl::shader");
    }
}
