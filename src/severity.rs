// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered severities and their mapping onto the platform system log.

use std::fmt::Display;

/// How serious a log message is.
///
/// Severities are totally ordered; a message is emitted only when its severity is at
/// least the configured [`LoggerConfig::minimum_level`](crate::LoggerConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Developer-facing detail, usually only interesting in debug builds
    Debug,
    /// Normal operation worth recording
    Info,
    /// Suspicious condition that did not fail anything
    Warning,
    /// An operation failed
    Error,
    /// The application may not be able to continue
    Critical,
}

impl Severity {
    /// Every severity, lowest first.
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Numeric priority used for filtering.  Monotonic in the declaration order.
    pub const fn priority(self) -> u8 {
        match self {
            Severity::Debug => 0,
            Severity::Info => 1,
            Severity::Warning => 2,
            Severity::Error => 3,
            Severity::Critical => 4,
        }
    }

    /// The uppercase name printed between brackets on console lines.
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// The severity the system log understands.
    pub const fn platform_severity(self) -> PlatformSeverity {
        match self {
            Severity::Debug => PlatformSeverity::Debug,
            Severity::Info => PlatformSeverity::Info,
            Severity::Warning => PlatformSeverity::Default,
            Severity::Error => PlatformSeverity::Error,
            Severity::Critical => PlatformSeverity::Fault,
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/**
Severity levels of the platform system log.

These follow the unified logging levels: `Default` is the "notice" level that warnings
land on, and `Fault` is reserved for critical failures.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformSeverity {
    Debug,
    Info,
    Default,
    Error,
    Fault,
}
