// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform system-log sinks.
//!
//! On macOS entries go to unified logging, grouped by subsystem and category.  View them with:
//!
//! ```text
//! log stream --predicate 'subsystem == "company.app"'
//! ```
//!
//! Elsewhere they are forwarded to the [`log`] facade under the target
//! `"<subsystem>::<category>"`, so whichever `log` implementation the host installs
//! (syslog, journald, env_logger, ...) receives them.

use crate::severity::PlatformSeverity;
use crate::sink::{SystemLogEntry, SystemLogSink};
use std::sync::Arc;

/// The system log for the current platform.
pub fn platform_system_log() -> Arc<dyn SystemLogSink> {
    #[cfg(target_os = "macos")]
    {
        Arc::new(OsLogSink::new())
    }
    #[cfg(not(target_os = "macos"))]
    {
        Arc::new(LogFacadeSink::new())
    }
}

/// Writes to macOS unified logging.
#[cfg(target_os = "macos")]
#[derive(Default)]
pub struct OsLogSink {
    handles: std::sync::Mutex<std::collections::HashMap<(String, &'static str), Arc<oslog::OsLog>>>,
}

#[cfg(target_os = "macos")]
impl std::fmt::Debug for OsLogSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsLogSink").finish_non_exhaustive()
    }
}

#[cfg(target_os = "macos")]
impl OsLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&self, subsystem: &str, category: &'static str) -> Arc<oslog::OsLog> {
        let mut handles = self
            .handles
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        handles
            .entry((subsystem.to_string(), category))
            .or_insert_with(|| Arc::new(oslog::OsLog::new(subsystem, category)))
            .clone()
    }
}

#[cfg(target_os = "macos")]
impl SystemLogSink for OsLogSink {
    fn write(&self, entry: &SystemLogEntry<'_>) {
        let level = match entry.severity {
            PlatformSeverity::Debug => oslog::Level::Debug,
            PlatformSeverity::Info => oslog::Level::Info,
            PlatformSeverity::Default => oslog::Level::Default,
            PlatformSeverity::Error => oslog::Level::Error,
            PlatformSeverity::Fault => oslog::Level::Fault,
        };
        self.handle(entry.subsystem, entry.category)
            .with_level(level, entry.message);
    }

    fn flush(&self) {
        //unified logging owns its buffers
    }
}

/// Forwards entries to the `log` crate facade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LogFacadeSink {}

impl LogFacadeSink {
    pub const fn new() -> Self {
        Self {}
    }

    /// `log` has no notice or fault level; they collapse onto warn and error.
    pub const fn facade_level(severity: PlatformSeverity) -> log::Level {
        match severity {
            PlatformSeverity::Debug => log::Level::Debug,
            PlatformSeverity::Info => log::Level::Info,
            PlatformSeverity::Default => log::Level::Warn,
            PlatformSeverity::Error | PlatformSeverity::Fault => log::Level::Error,
        }
    }
}

impl SystemLogSink for LogFacadeSink {
    fn write(&self, entry: &SystemLogEntry<'_>) {
        let level = Self::facade_level(entry.severity);
        if level > log::max_level() {
            return;
        }
        let target = format!("{}::{}", entry.subsystem, entry.category);
        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{}", entry.message))
                .level(level)
                .target(&target)
                .file(entry.call_site.map(|site| site.file))
                .line(entry.call_site.map(|site| site.line))
                .build(),
        );
    }

    fn flush(&self) {
        log::logger().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn facade_levels() {
        assert_eq!(
            LogFacadeSink::facade_level(PlatformSeverity::Default),
            log::Level::Warn
        );
        assert_eq!(
            LogFacadeSink::facade_level(PlatformSeverity::Fault),
            log::Level::Error
        );
        assert_eq!(
            LogFacadeSink::facade_level(PlatformSeverity::Debug),
            log::Level::Debug
        );
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn facade_write_without_logger_is_silent() {
        let sink = LogFacadeSink::new();
        sink.write(&SystemLogEntry {
            subsystem: "test.app",
            category: "App",
            severity: PlatformSeverity::Info,
            message: "no logger installed",
            call_site: None,
        });
        sink.flush();
    }
}
