// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sinks
//!
//! Sinks that capture output in memory instead of writing it anywhere.  They are meant for
//! tests that need to assert on exactly what a logger emitted:
//!
//! - [`InMemoryConsole`] keeps every formatted console line
//! - [`InMemorySystemLog`] keeps every system-log entry, including its subsystem and category
//!
//! Both use a `Mutex<Vec<_>>` internally and are shared through `Arc` with the global sink
//! registry.

use crate::log_event::CallSite;
use crate::severity::PlatformSeverity;
use crate::sink::{ConsoleSink, SystemLogEntry, SystemLogSink};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A console sink that stores lines in a `Vec<String>`.
///
/// # Example
///
/// ```rust
/// use applog::{InMemoryConsole, set_console_sinks};
/// use std::sync::Arc;
///
/// let console = Arc::new(InMemoryConsole::new());
/// set_console_sinks(vec![console.clone()]);
///
/// let logger = applog::Logger::new("doc.example").unwrap();
/// logger.info("Test message");
///
/// let logs = console.drain_logs();
/// assert!(logs.contains("[INFO] 📱 Test message"));
/// ```
#[derive(Debug)]
pub struct InMemoryConsole {
    lines: Mutex<Vec<String>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: derived, required by ConsoleSink
// - Default: empty buffer
// - Clone: NOT implemented, sinks are shared through Arc
// - PartialEq/Eq/Hash: NOT implemented, comparing mutex contents is not meaningful

impl Default for InMemoryConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryConsole {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes every captured line, leaving the buffer empty.
    pub fn drain_lines(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    /// Drains all lines into a single newline-joined string.
    ///
    /// ```rust
    /// use applog::{ConsoleSink, InMemoryConsole};
    ///
    /// let console = InMemoryConsole::new();
    /// console.write_line("first");
    /// console.write_line("second");
    /// assert_eq!(console.drain_logs(), "first\nsecond");
    /// assert_eq!(console.drain_logs(), "");
    /// ```
    pub fn drain_logs(&self) -> String {
        self.drain_lines().join("\n")
    }

    /// Writes every captured line to stderr and clears the buffer.
    ///
    /// Handy when a test fails and you want to see what was logged.
    pub fn drain_to_console(&self) {
        for line in self.drain_lines() {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&wasm_bindgen::JsValue::from(line.as_str()));
            #[cfg(not(target_arch = "wasm32"))]
            eprintln!("{}", line);
        }
    }
}

impl ConsoleSink for InMemoryConsole {
    fn write_line(&self, line: &str) {
        self.lock().push(line.to_string());
    }

    fn flush(&self) {
        // No-op since we're storing in memory
    }
}

/// An owned copy of a [`SystemLogEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CapturedEntry {
    pub subsystem: String,
    pub category: &'static str,
    pub severity: PlatformSeverity,
    pub message: String,
    pub call_site: Option<CallSite>,
}

impl From<&SystemLogEntry<'_>> for CapturedEntry {
    fn from(entry: &SystemLogEntry<'_>) -> Self {
        Self {
            subsystem: entry.subsystem.to_string(),
            category: entry.category,
            severity: entry.severity,
            message: entry.message.to_string(),
            call_site: entry.call_site,
        }
    }
}

/// A system-log sink that stores entries in memory.
#[derive(Debug, Default)]
pub struct InMemorySystemLog {
    entries: Mutex<Vec<CapturedEntry>>,
}

impl InMemorySystemLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every captured entry, leaving the buffer empty.
    pub fn drain_entries(&self) -> Vec<CapturedEntry> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl SystemLogSink for InMemorySystemLog {
    fn write(&self, entry: &SystemLogEntry<'_>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.into());
    }

    fn flush(&self) {}
}
