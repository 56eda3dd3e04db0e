// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::Severity;

/**
Runtime settings shared by every [`Logger`](crate::Logger) in the process.

Every field has a total domain, so [`Logger::configure`](crate::Logger::configure) accepts any
value without validation.  The default minimum level depends on the build: debug builds log
everything, release builds start at [`Severity::Info`].

```
use applog::{LoggerConfig, Severity};

let config = LoggerConfig::default()
    .with_minimum_level(Severity::Warning)
    .with_console_sink(false);
assert!(config.enabled);
assert!(config.system_log_sink);
```
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoggerConfig {
    pub minimum_level: Severity,
    pub enabled: bool,
    pub console_sink: bool,
    pub system_log_sink: bool,
}

impl LoggerConfig {
    /// The build-dependent default.  Usable in `const` and `static` contexts.
    pub const DEFAULT: LoggerConfig = LoggerConfig {
        minimum_level: if cfg!(debug_assertions) {
            Severity::Debug
        } else {
            Severity::Info
        },
        enabled: true,
        console_sink: true,
        system_log_sink: true,
    };

    pub const fn new(
        minimum_level: Severity,
        enabled: bool,
        console_sink: bool,
        system_log_sink: bool,
    ) -> Self {
        Self {
            minimum_level,
            enabled,
            console_sink,
            system_log_sink,
        }
    }

    pub const fn with_minimum_level(mut self, minimum_level: Severity) -> Self {
        self.minimum_level = minimum_level;
        self
    }

    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub const fn with_console_sink(mut self, console_sink: bool) -> Self {
        self.console_sink = console_sink;
        self
    }

    pub const fn with_system_log_sink(mut self, system_log_sink: bool) -> Self {
        self.system_log_sink = system_log_sink;
        self
    }

    /// Whether a message at `level` passes both gates.
    pub const fn allows(&self, level: Severity) -> bool {
        self.enabled && level.priority() >= self.minimum_level.priority()
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
