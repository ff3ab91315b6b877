//! Logging configuration.
//!
//! Library code only emits `tracing` events; installing a subscriber is the binary's (or a test's) job.

use tracing_subscriber::EnvFilter;

/// Subscriber settings for the `cairn` binary.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset or invalid
    pub default_filter: String,
    /// Whether to emit ANSI colors
    pub ansi: bool,
    /// Whether to print the event target (module path)
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            ansi: true,
            with_target: false,
        }
    }
}

impl LogConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback filter directive
    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    /// Enable or disable ANSI colors
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Enable or disable event targets
    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    /// Build the env filter: `RUST_LOG` if set and valid, otherwise `default_filter`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }

    /// Install a global `fmt` subscriber. Returns false if one was already installed.
    pub fn init(&self) -> bool {
        tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_ansi(self.ansi)
            .with_target(self.with_target)
            .try_init()
            .is_ok()
    }
}
