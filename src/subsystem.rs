// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide subsystem binding.
//!
//! Exactly one subsystem identifier may be bound per process.  The first successful
//! [`construct`] binds it; later calls with the same identifier succeed without touching
//! any state, and calls with a different identifier fail with
//! [`LoggerError::SubsystemConflict`] and leave the binding as it was.
//!
//! The binding and the shared [`LoggerConfig`] sit behind one mutex, so a construction
//! racing a [`configure`] (or another construction) always observes a consistent state.
//!
//! # Deriving a subsystem
//!
//! [`derive_subsystem`] turns a host application identifier into a subsystem by keeping its
//! last two dot-separated components:
//!
//! ```
//! use applog::derive_subsystem;
//!
//! assert_eq!(derive_subsystem(Some("com.company.app")), "company.app");
//! assert_eq!(derive_subsystem(Some("myapp")), "myapp");
//! assert_eq!(derive_subsystem(None), "unknown.app");
//! ```

use crate::error::LoggerError;
use crate::logger::Logger;
use crate::LoggerConfig;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Subsystem used when the host provides no identifier.
pub const FALLBACK_SUBSYSTEM: &str = "unknown.app";

#[derive(Debug)]
struct Binding {
    subsystem: Option<Arc<str>>,
    config: LoggerConfig,
}

static BINDING: Mutex<Binding> = Mutex::new(Binding {
    subsystem: None,
    config: LoggerConfig::DEFAULT,
});

fn binding() -> MutexGuard<'static, Binding> {
    // A panic while holding the lock cannot leave Binding half-written.
    BINDING.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Binds `requested` as the process subsystem, or validates it against the bound one.
pub(crate) fn construct(requested: &str) -> Result<Logger, LoggerError> {
    let mut binding = binding();
    if let Some(existing) = &binding.subsystem {
        return if existing.as_ref() == requested {
            Ok(Logger::from_bound(existing.clone()))
        } else {
            Err(LoggerError::SubsystemConflict {
                existing: existing.to_string(),
                attempted: requested.to_string(),
            })
        };
    }
    let subsystem: Arc<str> = Arc::from(requested);
    binding.subsystem = Some(subsystem.clone());
    Ok(Logger::from_bound(subsystem))
}

/// The subsystem bound for this process, if any logger has been constructed.
pub fn bound_subsystem() -> Option<String> {
    binding().subsystem.as_deref().map(str::to_string)
}

pub(crate) fn configure(config: LoggerConfig) {
    binding().config = config;
}

pub(crate) fn config() -> LoggerConfig {
    binding().config
}

/// Derives a subsystem from a host application identifier.
///
/// Keeps the last two dot-separated components, the whole identifier when it has fewer
/// than two, and [`FALLBACK_SUBSYSTEM`] when there is no identifier.
pub fn derive_subsystem(host_identifier: Option<&str>) -> String {
    let Some(identifier) = host_identifier.filter(|id| !id.is_empty()) else {
        return FALLBACK_SUBSYSTEM.to_string();
    };
    let components: Vec<&str> = identifier.split('.').collect();
    match components.len() {
        0 | 1 => identifier.to_string(),
        n => components[n - 2..].join("."),
    }
}

/// The host application's identifier.
///
/// On macOS this is the bundle identifier launch services exports to app processes.
/// Other platforms have no equivalent and return `None`.
pub fn host_identifier() -> Option<String> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("__CFBundleIdentifier")
            .ok()
            .filter(|id| !id.is_empty())
    }
    #[cfg(not(target_os = "macos"))]
    {
        None
    }
}

/// Clears the binding and restores the default configuration.
#[cfg(test)]
pub(crate) fn _reset_for_testing() {
    let mut binding = binding();
    binding.subsystem = None;
    binding.config = LoggerConfig::DEFAULT;
}
