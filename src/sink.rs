// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_event::CallSite;
use crate::severity::PlatformSeverity;
use std::fmt::Debug;

/**
A destination for pre-formatted console lines.

Implementations must not panic and should not block for long; logging is best-effort and
failed writes are never retried.
*/
pub trait ConsoleSink: Debug + Send + Sync {
    /**
        Writes one formatted line.  The line carries no trailing newline.
    */
    fn write_line(&self, line: &str);

    /**
    The application may imminently exit.  Ensure buffered lines are written out.
    */
    fn flush(&self);
}

/// What the system log receives for a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemLogEntry<'a> {
    pub subsystem: &'a str,
    pub category: &'static str,
    pub severity: PlatformSeverity,
    /// The message as the caller wrote it, without timestamp, level or glyph.
    pub message: &'a str,
    pub call_site: Option<CallSite>,
}

/**
A platform system log, grouping entries by subsystem and category.
*/
pub trait SystemLogSink: Debug + Send + Sync {
    fn write(&self, entry: &SystemLogEntry<'_>);

    fn flush(&self);
}

/*
Boilerplate notes.

# ConsoleSink, SystemLogSink

Sinks are process-lifetime collaborators shared behind Arc, so Clone is not needed on the trait.
Send + Sync are required since any thread may log.
Eq/Hash/Default/Display are meaningless for a destination.
*/
