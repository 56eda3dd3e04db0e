// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gating and fan-out of log events.
//!
//! Every log call funnels through [`emit`]:
//! 1. the caller snapshots the shared [`LoggerConfig`] once, under the binding lock
//! 2. the `enabled` and minimum-level gates are applied to that snapshot
//! 3. the formatted line goes to every console sink, and the raw message to every
//!    system-log sink, each only when its flag is on
//!
//! Sinks run after the lock is released.  A `configure` racing a log call can only decide
//! whether a borderline message appears; it never corrupts one.

use crate::global_sinks::{console_sinks, system_log_sinks};
use crate::log_event::LogEvent;
use crate::sink::SystemLogEntry;
use crate::subsystem;
use crate::{LoggerConfig, Severity};

/// Whether a message at `level` would currently be emitted.
pub(crate) fn enabled(level: Severity) -> bool {
    subsystem::config().allows(level)
}

/// Sends `event` to the sinks if `config` lets it through.
///
/// `config` is the snapshot the caller already gated on; no lock is taken here.
pub(crate) fn emit(subsystem: &str, config: &LoggerConfig, event: LogEvent) {
    if !config.allows(event.severity) {
        return;
    }

    if config.console_sink {
        let line = event.console_line();
        for sink in console_sinks() {
            sink.write_line(&line);
        }
    }

    if config.system_log_sink {
        let entry = SystemLogEntry {
            subsystem,
            category: event.category.system_log_name(),
            severity: event.severity.platform_severity(),
            message: &event.message,
            call_site: event.call_site,
        };
        for sink in system_log_sinks() {
            sink.write(&entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::PlatformSeverity;
    use crate::Category;

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn gates_by_minimum_level() {
        let (_guard, console, system_log) = crate::test_support::capture();
        subsystem::configure(LoggerConfig::default().with_minimum_level(Severity::Warning));

        for level in Severity::ALL {
            emit("gate.test", &subsystem::config(), LogEvent::new(level, Category::App, "gated"));
        }

        let lines = console.drain_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("[WARNING]"));
        assert!(lines[2].contains("[CRITICAL]"));
        assert_eq!(system_log.drain_entries().len(), 3);
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn disabled_suppresses_everything() {
        let (_guard, console, system_log) = crate::test_support::capture();
        subsystem::configure(LoggerConfig::default().with_enabled(false));

        emit(
            "gate.test",
            &subsystem::config(),
            LogEvent::new(Severity::Critical, Category::Error, "dropped"),
        );

        assert!(console.drain_lines().is_empty());
        assert!(system_log.drain_entries().is_empty());
        assert!(!enabled(Severity::Critical));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn system_log_receives_raw_message() {
        let (_guard, console, system_log) = crate::test_support::capture();

        let event = LogEvent::new(Severity::Warning, Category::Network, "timeout")
            .with_context(Some("api"));
        emit("company.app", &subsystem::config(), event);

        assert!(console.drain_logs().ends_with("[WARNING] 🌐 timeout [api]"));
        let entries = system_log.drain_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].subsystem, "company.app");
        assert_eq!(entries[0].category, "Network");
        assert_eq!(entries[0].severity, PlatformSeverity::Default);
        assert_eq!(entries[0].message, "timeout");
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn sink_flags_are_independent() {
        let (_guard, console, system_log) = crate::test_support::capture();

        subsystem::configure(LoggerConfig::default().with_console_sink(false));
        emit(
            "flags.test",
            &subsystem::config(),
            LogEvent::new(Severity::Info, Category::App, "one"),
        );
        assert!(console.drain_lines().is_empty());
        assert_eq!(system_log.drain_entries().len(), 1);

        subsystem::configure(LoggerConfig::default().with_system_log_sink(false));
        emit(
            "flags.test",
            &subsystem::config(),
            LogEvent::new(Severity::Info, Category::App, "two"),
        );
        assert_eq!(console.drain_lines().len(), 1);
        assert!(system_log.drain_entries().is_empty());
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn gates_on_the_given_snapshot() {
        let (_guard, console, system_log) = crate::test_support::capture();
        let snapshot = subsystem::config();
        subsystem::configure(LoggerConfig::default().with_enabled(false));

        emit("snapshot.test", &snapshot, LogEvent::new(Severity::Error, Category::App, "kept"));
        assert_eq!(console.drain_lines().len(), 1);
        assert_eq!(system_log.drain_entries().len(), 1);

        let silenced = subsystem::config();
        subsystem::configure(LoggerConfig::default());
        emit("snapshot.test", &silenced, LogEvent::new(Severity::Error, Category::App, "dropped"));
        assert!(console.drain_lines().is_empty());
        assert!(system_log.drain_entries().is_empty());
    }
}
