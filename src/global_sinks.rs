// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide sink registry.
//!
//! Sinks are process-lifetime collaborators: loggers do not own them, they look them up on
//! every emitted message.  Two lists are kept, one of [`ConsoleSink`]s receiving formatted
//! lines and one of [`SystemLogSink`]s receiving raw messages.
//!
//! By default the console list holds a single [`StdoutConsole`] and the system-log list holds
//! the platform system log (see [`platform_system_log`]).
//!
//! # Replacing sinks in tests
//!
//! ```
//! use applog::{InMemoryConsole, InMemorySystemLog, set_console_sinks, set_system_log_sinks};
//! use std::sync::Arc;
//!
//! let console = Arc::new(InMemoryConsole::new());
//! let system_log = Arc::new(InMemorySystemLog::new());
//! set_console_sinks(vec![console.clone()]);
//! set_system_log_sinks(vec![system_log.clone()]);
//!
//! let logger = applog::Logger::new("doc.sinks").unwrap();
//! logger.warning("Only captured in memory");
//!
//! assert!(console.drain_logs().contains("[WARNING] 🚨 Only captured in memory"));
//! assert_eq!(system_log.drain_entries()[0].message, "Only captured in memory");
//! ```
//!
//! # Lifecycle
//!
//! Sinks are reference-counted.  A sink removed by `set_*_sinks` stays alive until every
//! in-flight log call holding it has finished.

use crate::console::StdoutConsole;
use crate::sink::{ConsoleSink, SystemLogSink};
use crate::system_log::platform_system_log;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

#[derive(Debug, Clone)]
struct Sinks {
    console: Vec<Arc<dyn ConsoleSink>>,
    system_log: Vec<Arc<dyn SystemLogSink>>,
}

static GLOBAL_SINKS: OnceLock<RwLock<Sinks>> = OnceLock::new();

fn registry() -> &'static RwLock<Sinks> {
    GLOBAL_SINKS.get_or_init(|| {
        RwLock::new(Sinks {
            console: vec![Arc::new(StdoutConsole::new())],
            system_log: vec![platform_system_log()],
        })
    })
}

fn with_sinks<R>(f: impl FnOnce(&Sinks) -> R) -> R {
    let sinks = registry().read().unwrap_or_else(PoisonError::into_inner);
    f(&*sinks)
}

fn with_sinks_mut<R>(f: impl FnOnce(&mut Sinks) -> R) -> R {
    let mut sinks = registry().write().unwrap_or_else(PoisonError::into_inner);
    f(&mut *sinks)
}

/// The console sinks currently registered.
///
/// Cloning the `Arc`s keeps the lock hold time to a reference-count bump per sink.
pub fn console_sinks() -> Vec<Arc<dyn ConsoleSink>> {
    with_sinks(|sinks| sinks.console.clone())
}

/// The system-log sinks currently registered.
pub fn system_log_sinks() -> Vec<Arc<dyn SystemLogSink>> {
    with_sinks(|sinks| sinks.system_log.clone())
}

/// Appends a console sink.
pub fn add_console_sink(sink: Arc<dyn ConsoleSink>) {
    with_sinks_mut(|sinks| sinks.console.push(sink));
}

/// Replaces every console sink.  An empty list discards console output.
pub fn set_console_sinks(new_sinks: Vec<Arc<dyn ConsoleSink>>) {
    with_sinks_mut(|sinks| sinks.console = new_sinks);
}

/// Appends a system-log sink.
pub fn add_system_log_sink(sink: Arc<dyn SystemLogSink>) {
    with_sinks_mut(|sinks| sinks.system_log.push(sink));
}

/// Replaces every system-log sink.
pub fn set_system_log_sinks(new_sinks: Vec<Arc<dyn SystemLogSink>>) {
    with_sinks_mut(|sinks| sinks.system_log = new_sinks);
}

/// Flushes every registered sink.  Call before the process exits.
pub fn flush_sinks() {
    let (console, system_log) = with_sinks(|sinks| (sinks.console.clone(), sinks.system_log.clone()));
    for sink in console {
        sink.flush();
    }
    for sink in system_log {
        sink.flush();
    }
}
