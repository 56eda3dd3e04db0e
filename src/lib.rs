//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# applog

applog is a process-wide logging facade that tags every message with a severity *and* a
category.

# The problem

An application logs from many places: authentication, sync, subscriptions, the network
layer.  Plain leveled logging answers "how bad is it?" but not "which part of the app is
this?", and platform logs (macOS unified logging in particular) want both a subsystem and a
category on every entry.  applog makes the category a first-class, closed set and keeps a
single subsystem for the whole process.

# One subsystem per process

The first [`Logger::new`] binds its subsystem for the lifetime of the process.  Constructing
another logger with the same subsystem is fine; asking for a different one fails with
[`LoggerError::SubsystemConflict`] and changes nothing.

```rust
use applog::{Logger, LoggerError};

let logger = Logger::new("com.example.app")?;
logger.info("Hello");
assert!(Logger::new("com.example.other").is_err());
# Ok::<(), LoggerError>(())
```

[`Logger::shared`] derives the subsystem from the host application's identifier instead
(`com.company.app` becomes `company.app`) and goes through the same check.

# Levels and categories

| Severity   | Default category | System log level |
|------------|------------------|------------------|
| `debug`    | `App`            | debug            |
| `info`     | `App`            | info             |
| `warning`  | `Error`          | default (notice) |
| `error`    | `Error`          | error            |
| `critical` | `Error`          | fault            |

Each [`Category`] has a glyph shown on the console and a name used by the system log.
Category wrappers such as [`Logger::auth`] or [`Logger::network_at`] pick the category for
you, and the state wrappers ([`Logger::sync_state`], ...) log canned descriptions at a
sensible default severity.

# Output

Messages that pass the [`LoggerConfig`] gates are written

* to every console sink as `14:03:27.512 [INFO] 📱 Hello [context]`
* to every system-log sink as the raw message, with subsystem, category and platform severity

The default sinks are stdout and the platform system log (unified logging on macOS, the
[`log`] facade elsewhere).  Tests usually swap both for [`InMemoryConsole`] and
[`InMemorySystemLog`].

# Multithreading

Any thread may log.  Construction and configuration share one mutex; logging only takes it
long enough to copy the configuration.  No thread or task is ever spawned.
*/

mod category;
mod config;
mod console;
mod dispatch;
mod error;
pub mod global_sinks;
mod inmemory_sink;
mod log_event;
mod logger;
mod macros;
mod severity;
mod sink;
mod state;
mod subsystem;
pub mod system_log;
mod sys;

pub use category::Category;
pub use config::LoggerConfig;
pub use console::StdoutConsole;
pub use error::LoggerError;
pub use global_sinks::{
    add_console_sink, add_system_log_sink, console_sinks, flush_sinks, set_console_sinks,
    set_system_log_sinks, system_log_sinks,
};
pub use inmemory_sink::{CapturedEntry, InMemoryConsole, InMemorySystemLog};
pub use log_event::{CallSite, LogEvent};
pub use logger::{LogOptions, Logger};
pub use severity::{PlatformSeverity, Severity};
pub use sink::{ConsoleSink, SystemLogEntry, SystemLogSink};
pub use state::{
    AppLifecycle, AuthState, RemoteBackendState, StateEvent, SubscriptionState, SyncState,
};
pub use subsystem::{FALLBACK_SUBSYSTEM, bound_subsystem, derive_subsystem, host_identifier};
pub use sys::Duration;

#[doc(hidden)]
pub mod hidden {
    pub use crate::macros::enclosing_function_name;
}
