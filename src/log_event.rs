// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-call log event.
//!
//! A [`LogEvent`] is built once per log call that passes the level gates, handed to the
//! sinks and then dropped.  Nothing retains it.
//!
//! The console renders it as a single line:
//!
//! ```text
//! 14:03:27.512 [INFO] 📱 Hello [ctxA]
//! ```
//!
//! while the system log receives only the raw message, so platform tooling can apply
//! its own formatting and redaction.

use crate::{Category, Severity};
use chrono::{DateTime, Local};
use std::fmt::Display;
use std::panic::Location;

/// Source location of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
    /// Only known when supplied by a macro such as [`method_entry!`](crate::method_entry).
    pub function: Option<&'static str>,
}

impl CallSite {
    /// The location of the caller, following `#[track_caller]` frames.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
            function: None,
        }
    }

    pub fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }

    /// Last path component of [`Self::file`].
    pub fn file_name(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

/**
A single log message on its way to the sinks.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    pub context: Option<String>,
    pub call_site: Option<CallSite>,
}

impl LogEvent {
    /// Creates an event stamped with the current local time.
    pub fn new(severity: Severity, category: Category, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            severity,
            category,
            message: message.into(),
            context: None,
            call_site: None,
        }
    }

    /// Attaches a context suffix.  Empty contexts are dropped.
    pub fn with_context(mut self, context: Option<&str>) -> Self {
        self.context = context.filter(|c| !c.is_empty()).map(str::to_string);
        self
    }

    pub fn with_call_site(mut self, call_site: CallSite) -> Self {
        self.call_site = Some(call_site);
        self
    }

    /// `HH:MM:SS.mmm` in local time.
    pub fn timestamp_string(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    /// The line written to console sinks.
    pub fn console_line(&self) -> String {
        self.to_string()
    }
}

pub(crate) fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%H:%M:%S%.3f").to_string()
}

impl Display for LogEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {} {}",
            self.timestamp_string(),
            self.severity,
            self.category.glyph(),
            self.message
        )?;
        if let Some(context) = &self.context {
            write!(f, " [{}]", context)?;
        }
        Ok(())
    }
}

/*
Boilerplate notes for LogEvent:

- Clone/PartialEq: derived so test sinks can store and compare events
- Display: the console rendering
- Default: no sensible severity/category/message to pick, not implemented
- Hash: DateTime<Local> is hashable but events are never used as keys
*/
