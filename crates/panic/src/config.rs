//! Bridge configuration via `panic.toml`
//!
//! The active configuration is process-global. It is read on every panic by
//! the hook and on every recovery, so changes made with [`configure`] apply
//! to the next panic.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::{ConfigError, ConfigResult};

/// Conventional config file name
pub const CONFIG_FILE_NAME: &str = "panic.toml";

/// Function path prefixes of the runtime's panic dispatch frames
///
/// Only functions that run while a panic is being dispatched are listed.
/// `std::panicking::catch_unwind` and its helpers belong to recovery points
/// and must never match.
pub const DEFAULT_DISPATCH_MARKERS: &[&str] = &[
    "std::panicking::rust_panic",
    "std::panicking::panic_with_hook",
    "std::panicking::begin_panic",
    "std::panicking::panic_handler",
    "core::panicking::panic",
    "std::panic::panic_any",
    "std::sys::backtrace::__rust_end_short_backtrace",
    "std::sys_common::backtrace::__rust_end_short_backtrace",
    "rust_begin_unwind",
    "__rustc::rust_begin_unwind",
    "core::option::unwrap_failed",
    "core::option::expect_failed",
    "core::result::unwrap_failed",
];

/// Panic bridge configuration
///
/// # Example
///
/// ```toml
/// forward_to_previous_hook = false
/// log_recovered = true
/// dispatch_markers = ["std::panicking::rust_panic", "core::panicking::panic"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanicConfig {
    /// Frames whose function path starts with one of these prefixes are
    /// panic dispatch frames and are trimmed from recovered traces
    #[serde(default = "default_dispatch_markers")]
    pub dispatch_markers: Vec<String>,
    /// Run the hook that was installed before ours (the default hook prints
    /// the panic message to stderr)
    #[serde(default = "default_true")]
    pub forward_to_previous_hook: bool,
    /// Emit a `debug` event for every panic recovered by `catch`
    #[serde(default = "default_true")]
    pub log_recovered: bool,
}

fn default_dispatch_markers() -> Vec<String> {
    DEFAULT_DISPATCH_MARKERS
        .iter()
        .map(|marker| marker.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

impl Default for PanicConfig {
    fn default() -> Self {
        Self {
            dispatch_markers: default_dispatch_markers(),
            forward_to_previous_hook: true,
            log_recovered: true,
        }
    }
}

impl PanicConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Panic bridge configuration
#
# Run the previously installed panic hook after capturing the trace
# (default: true). The standard hook prints the panic message to stderr.
forward_to_previous_hook = true

# Log every panic recovered by `catch` at debug level (default: true)
log_recovered = true

# Function path prefixes of the runtime's panic dispatch frames. Frames up to
# and including the last of these are trimmed from recovered stack traces.
# dispatch_markers = [
#     "std::panicking::rust_panic",
#     "std::panicking::panic_with_hook",
#     "std::panicking::begin_panic",
#     "std::panicking::panic_handler",
#     "core::panicking::panic",
#     "std::panic::panic_any",
#     "std::sys::backtrace::__rust_end_short_backtrace",
#     "std::sys_common::backtrace::__rust_end_short_backtrace",
#     "rust_begin_unwind",
#     "__rustc::rust_begin_unwind",
#     "core::option::unwrap_failed",
#     "core::option::expect_failed",
#     "core::result::unwrap_failed",
# ]
"#
    }

    /// Parse and validate config text
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: PanicConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Check that the markers can identify dispatch frames
    pub fn validate(&self) -> ConfigResult<()> {
        if self.dispatch_markers.is_empty() {
            return Err(ConfigError::invalid("dispatch_markers must not be empty"));
        }
        if let Some(index) = self
            .dispatch_markers
            .iter()
            .position(|marker| marker.trim().is_empty())
        {
            return Err(ConfigError::invalid(format!(
                "dispatch_markers[{}] is empty",
                index
            )));
        }
        Ok(())
    }
}

static ACTIVE_CONFIG: Lazy<RwLock<PanicConfig>> =
    Lazy::new(|| RwLock::new(PanicConfig::default()));

/// Replace the active configuration
pub fn configure(config: PanicConfig) -> ConfigResult<()> {
    config.validate()?;
    info!(
        target: "exception::panic",
        markers = config.dispatch_markers.len(),
        forward_to_previous_hook = config.forward_to_previous_hook,
        log_recovered = config.log_recovered,
        "Configured panic bridge"
    );
    *ACTIVE_CONFIG.write() = config;
    Ok(())
}

/// Snapshot of the active configuration
pub fn current_config() -> PanicConfig {
    ACTIVE_CONFIG.read().clone()
}

/// Run `f` against the active configuration without cloning it
pub(crate) fn with_config<R>(f: impl FnOnce(&PanicConfig) -> R) -> R {
    f(&ACTIVE_CONFIG.read())
}
