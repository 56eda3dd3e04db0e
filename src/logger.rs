// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`Logger`] handle and its convenience API.

use crate::dispatch;
use crate::error::LoggerError;
use crate::log_event::{CallSite, LogEvent};
use crate::state::{AppLifecycle, AuthState, RemoteBackendState, StateEvent, SubscriptionState, SyncState};
use crate::subsystem::{self, derive_subsystem, host_identifier};
use crate::sys::{Duration, Instant};
use crate::{Category, LoggerConfig, Severity};
use std::future::Future;
use std::sync::Arc;

/**
Per-call overrides for the level wrappers ([`Logger::info_with`] and friends).

```
use applog::{Category, LogOptions};

let options = LogOptions::new().category(Category::Network).context("api.rs");
assert_eq!(options.context.as_deref(), Some("api.rs"));
```
*/
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LogOptions {
    /// Replaces the wrapper's default category.
    pub category: Option<Category>,
    /// Appended to the console line as ` [context]`.
    pub context: Option<String>,
}

impl LogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/**
A handle to the process-wide logger.

Every handle refers to the single subsystem bound for the process and to the shared
[`LoggerConfig`]; handles hold no state of their own and are interchangeable.

# Construction

The first [`Logger::new`] binds its subsystem.  Later calls with the same subsystem succeed,
calls with any other subsystem fail:

```
use applog::{Logger, LoggerError};

let logger = Logger::new("com.test.myapp")?;
let again = Logger::new("com.test.myapp")?;
assert_eq!(logger, again);

let err = Logger::new("com.test.other").unwrap_err();
assert!(matches!(err, LoggerError::SubsystemConflict { .. }));
assert_eq!(applog::bound_subsystem().as_deref(), Some("com.test.myapp"));
# Ok::<(), LoggerError>(())
```

# Logging

```
# let logger = applog::Logger::new("doc.logging").unwrap();
use applog::{Category, LogOptions, SyncState};

logger.info("App initialized");
logger.error_with("Request failed", LogOptions::new().category(Category::Network));
logger.user_action("Button tap", Some("settings"));
logger.sync_state(SyncState::SyncFailed, Some("network unavailable"));
let total = logger.time("Sum", || (1..=10).sum::<u32>());
assert_eq!(total, 55);
```

Logging never fails and never panics; output that cannot be written is dropped.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Logger {
    subsystem: Arc<str>,
}

impl Logger {
    /// Creates a logger for subsystem `name`, binding it if no subsystem is bound yet.
    ///
    /// # Errors
    ///
    /// [`LoggerError::SubsystemConflict`] when a different subsystem is already bound.
    pub fn new(name: &str) -> Result<Self, LoggerError> {
        subsystem::construct(name)
    }

    /**
    The logger for the host application, with a subsystem derived from its identifier.

    See [`derive_subsystem`].  This goes through the same binding as [`Logger::new`], so it
    fails if the process already bound a different subsystem explicitly.
    */
    pub fn shared() -> Result<Self, LoggerError> {
        Self::new(&derive_subsystem(host_identifier().as_deref()))
    }

    pub(crate) fn from_bound(subsystem: Arc<str>) -> Self {
        Self { subsystem }
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    /// Replaces the shared configuration.  Affects every handle in the process.
    pub fn configure(&self, config: LoggerConfig) {
        subsystem::configure(config);
    }

    pub fn config(&self) -> LoggerConfig {
        subsystem::config()
    }

    /// Whether a message at `level` would currently reach the sinks.
    pub fn is_enabled(&self, level: Severity) -> bool {
        dispatch::enabled(level)
    }

    /// Logs `message` with an explicit severity and category.
    ///
    /// A non-empty `context` is appended to the console line in brackets.
    #[track_caller]
    pub fn log(&self, level: Severity, category: Category, message: &str, context: Option<&str>) {
        self.emit(level, category, message, context, CallSite::caller());
    }

    fn emit(
        &self,
        level: Severity,
        category: Category,
        message: &str,
        context: Option<&str>,
        call_site: CallSite,
    ) {
        let config = subsystem::config();
        if !config.allows(level) {
            return;
        }
        let event = LogEvent::new(level, category, message)
            .with_context(context)
            .with_call_site(call_site);
        dispatch::emit(&self.subsystem, &config, event);
    }
}

macro_rules! level_wrappers {
    ($($(#[$doc:meta])* $name:ident, $with:ident => $level:expr, $category:expr;)*) => {
        impl Logger {
            $(
                $(#[$doc])*
                #[track_caller]
                pub fn $name(&self, message: &str) {
                    self.emit($level, $category, message, None, CallSite::caller());
                }

                #[track_caller]
                pub fn $with(&self, message: &str, options: LogOptions) {
                    self.emit(
                        $level,
                        options.category.unwrap_or($category),
                        message,
                        options.context.as_deref(),
                        CallSite::caller(),
                    );
                }
            )*
        }
    };
}

level_wrappers! {
    /// Logs at [`Severity::Debug`] under [`Category::App`].
    debug, debug_with => Severity::Debug, Category::App;
    /// Logs at [`Severity::Info`] under [`Category::App`].
    info, info_with => Severity::Info, Category::App;
    /// Logs at [`Severity::Warning`] under [`Category::Error`].
    warning, warning_with => Severity::Warning, Category::Error;
    /// Logs at [`Severity::Error`] under [`Category::Error`].
    error, error_with => Severity::Error, Category::Error;
    /// Logs at [`Severity::Critical`] under [`Category::Error`].
    critical, critical_with => Severity::Critical, Category::Error;
}

macro_rules! category_wrappers {
    ($($name:ident, $at:ident => $category:expr;)*) => {
        impl Logger {
            $(
                #[doc = concat!("Logs at [`Severity::Info`] under [`", stringify!($category), "`].")]
                #[track_caller]
                pub fn $name(&self, message: &str) {
                    self.emit(Severity::Info, $category, message, None, CallSite::caller());
                }

                #[doc = concat!("Logs at `level` under [`", stringify!($category), "`].")]
                #[track_caller]
                pub fn $at(&self, level: Severity, message: &str) {
                    self.emit(level, $category, message, None, CallSite::caller());
                }
            )*
        }
    };
}

category_wrappers! {
    auth, auth_at => Category::Auth;
    data, data_at => Category::Data;
    network, network_at => Category::Network;
    ui, ui_at => Category::Ui;
    sync, sync_at => Category::Sync;
    subscription, subscription_at => Category::Subscription;
    premium, premium_at => Category::Premium;
    configuration, configuration_at => Category::Configuration;
    notification, notification_at => Category::Notification;
    remote_backend, remote_backend_at => Category::RemoteBackend;
    jar, jar_at => Category::Jar;
}

/// `"<primary> - <detail>"`, or just `primary` when there is no (or an empty) detail.
fn with_detail(primary: &str, detail: Option<&str>) -> String {
    match detail.filter(|d| !d.is_empty()) {
        Some(detail) => format!("{} - {}", primary, detail),
        None => primary.to_string(),
    }
}

impl Logger {
    /// Logs a user action at [`Severity::Info`] under [`Category::UserAction`].
    #[track_caller]
    pub fn user_action(&self, action: &str, details: Option<&str>) {
        self.emit(
            Severity::Info,
            Category::UserAction,
            &with_detail(action, details),
            None,
            CallSite::caller(),
        );
    }

    /// Logs a performance note, appending ` (took X.XXXs)` when a duration is given.
    #[track_caller]
    pub fn performance(&self, message: &str, duration: Option<Duration>) {
        self.performance_at(message, duration, CallSite::caller());
    }

    fn performance_at(&self, message: &str, duration: Option<Duration>, call_site: CallSite) {
        let message = match duration {
            Some(duration) => format!("{} (took {:.3}s)", message, duration.as_secs_f64()),
            None => message.to_string(),
        };
        self.emit(Severity::Info, Category::Performance, &message, None, call_site);
    }

    /// Logs a state transition at its default severity.
    ///
    /// The message is the state's description, followed by ` - <detail>` when given.
    #[track_caller]
    pub fn state<S: StateEvent>(&self, state: S, detail: Option<&str>) {
        self.state_at(state.default_severity(), state, detail);
    }

    /// Logs a state transition at an explicit severity.
    #[track_caller]
    pub fn state_at<S: StateEvent>(&self, level: Severity, state: S, detail: Option<&str>) {
        self.emit(
            level,
            state.category(),
            &with_detail(state.description(), detail),
            None,
            CallSite::caller(),
        );
    }

    #[track_caller]
    pub fn app_lifecycle(&self, event: AppLifecycle, details: Option<&str>) {
        self.state(event, details);
    }

    #[track_caller]
    pub fn auth_state(&self, state: AuthState, user_info: Option<&str>) {
        self.state(state, user_info);
    }

    #[track_caller]
    pub fn sync_state(&self, state: SyncState, details: Option<&str>) {
        self.state(state, details);
    }

    #[track_caller]
    pub fn subscription_state(&self, state: SubscriptionState, product_id: Option<&str>) {
        self.state(state, product_id);
    }

    #[track_caller]
    pub fn remote_backend_state(&self, state: RemoteBackendState, details: Option<&str>) {
        self.state(state, details);
    }

    /**
    Emits a debug line `→ Entering <method>` with the caller's file name as context.

    The [`method_entry!`](crate::method_entry) macro fills in the enclosing function's name.
    */
    #[track_caller]
    pub fn method_entry(&self, method: &'static str) {
        self.trace_method("→ Entering", method, CallSite::caller());
    }

    /// Emits a debug line `← Exiting <method>` with the caller's file name as context.
    #[track_caller]
    pub fn method_exit(&self, method: &'static str) {
        self.trace_method("← Exiting", method, CallSite::caller());
    }

    fn trace_method(&self, direction: &str, method: &'static str, call_site: CallSite) {
        let call_site = call_site.with_function(method);
        self.emit(
            Severity::Debug,
            Category::App,
            &format!("{} {}", direction, method),
            Some(call_site.file_name()),
            call_site,
        );
    }

    fn completed(&self, operation: &str, elapsed: Duration, call_site: CallSite) {
        self.performance_at(&format!("{} completed", operation), Some(elapsed), call_site);
    }

    /**
    Runs `work`, then logs `<operation> completed (took X.XXXs)` under
    [`Category::Performance`] and returns what `work` returned.

    A panic in `work` propagates and nothing is logged.  The line is written whatever `work`
    returns, including an `Err`; use [`Logger::try_time`] for fallible work.
    */
    #[track_caller]
    pub fn time<T>(&self, operation: &str, work: impl FnOnce() -> T) -> T {
        let call_site = CallSite::caller();
        let start = Instant::now();
        let result = work();
        self.completed(operation, start.elapsed(), call_site);
        result
    }

    /// Like [`Logger::time`], but logs only when `work` succeeds.  Errors are returned as-is.
    #[track_caller]
    pub fn try_time<T, E>(
        &self,
        operation: &str,
        work: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        let call_site = CallSite::caller();
        let start = Instant::now();
        let value = work()?;
        self.completed(operation, start.elapsed(), call_site);
        Ok(value)
    }

    /// Awaits `work`, then logs its duration like [`Logger::time`].
    ///
    /// Only the awaiting task is suspended; timing starts at the first poll.
    #[track_caller]
    pub fn time_async<T, F>(&self, operation: &str, work: F) -> impl Future<Output = T>
    where
        F: Future<Output = T>,
    {
        let call_site = CallSite::caller();
        async move {
            let start = Instant::now();
            let result = work.await;
            self.completed(operation, start.elapsed(), call_site);
            result
        }
    }

    /// Awaits `work`, logging its duration only on success.
    #[track_caller]
    pub fn try_time_async<T, E, F>(
        &self,
        operation: &str,
        work: F,
    ) -> impl Future<Output = Result<T, E>>
    where
        F: Future<Output = Result<T, E>>,
    {
        let call_site = CallSite::caller();
        async move {
            let start = Instant::now();
            let value = work.await?;
            self.completed(operation, start.elapsed(), call_site);
            Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::PlatformSeverity;

    fn logger() -> Logger {
        Logger::new("com.test.logging").unwrap()
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn level_wrappers_use_default_categories() {
        let (_guard, console, _system_log) = crate::test_support::capture();
        let logger = logger();
        logger.debug("d");
        logger.info("i");
        logger.warning("w");
        logger.error("e");
        logger.critical("c");

        let lines = console.drain_lines();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with("[DEBUG] 📱 d"));
        assert!(lines[1].ends_with("[INFO] 📱 i"));
        assert!(lines[2].ends_with("[WARNING] 🚨 w"));
        assert!(lines[3].ends_with("[ERROR] 🚨 e"));
        assert!(lines[4].ends_with("[CRITICAL] 🚨 c"));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn options_override_category_and_context() {
        let (_guard, console, system_log) = crate::test_support::capture();
        logger().error_with(
            "Request failed",
            LogOptions::new().category(Category::Network).context("ctxA"),
        );
        assert!(console.drain_logs().ends_with("[ERROR] 🌐 Request failed [ctxA]"));
        assert_eq!(system_log.drain_entries()[0].category, "Network");
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn console_line_structure() {
        let (_guard, console, _system_log) = crate::test_support::capture();
        logger().info("Hello");
        let line = console.drain_logs();
        let (timestamp, rest) = line.split_once(' ').unwrap();
        assert_eq!(rest, "[INFO] 📱 Hello");
        let bytes = timestamp.as_bytes();
        assert_eq!(bytes.len(), 12);
        assert_eq!(bytes[2], b':');
        assert_eq!(bytes[5], b':');
        assert_eq!(bytes[8], b'.');
        assert!(timestamp.chars().filter(|c| c.is_ascii_digit()).count() == 9);
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn category_wrappers_default_to_info() {
        let (_guard, console, system_log) = crate::test_support::capture();
        let logger = logger();
        logger.auth("Login attempt");
        logger.network_at(Severity::Warning, "Slow response");
        logger.remote_backend("Connection established");

        let lines = console.drain_lines();
        assert!(lines[0].ends_with("[INFO] 🔐 Login attempt"));
        assert!(lines[1].ends_with("[WARNING] 🌐 Slow response"));
        assert!(lines[2].ends_with("[INFO] 🔥 Connection established"));
        let entries = system_log.drain_entries();
        assert_eq!(entries[0].category, "Authentication");
        assert_eq!(entries[1].severity, PlatformSeverity::Default);
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn user_action_and_performance_messages() {
        let (_guard, console, _system_log) = crate::test_support::capture();
        let logger = logger();
        logger.user_action("Button tap", Some("settings"));
        logger.user_action("Opened app", None);
        logger.performance("App startup", Some(Duration::from_millis(500)));
        logger.performance("Cache warm", None);

        let lines = console.drain_lines();
        assert!(lines[0].ends_with("👤 Button tap - settings"));
        assert!(lines[1].ends_with("👤 Opened app"));
        assert!(lines[2].ends_with("⚡ App startup (took 0.500s)"));
        assert!(lines[3].ends_with("⚡ Cache warm"));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn state_wrappers_use_default_severity() {
        let (_guard, console, system_log) = crate::test_support::capture();
        let logger = logger();
        logger.sync_state(SyncState::SyncFailed, None);
        logger.sync_state(SyncState::SyncFailed, Some("timeout"));
        logger.subscription_state(SubscriptionState::Expired, Some("pro.monthly"));
        logger.app_lifecycle(AppLifecycle::Launched, None);
        logger.state_at(Severity::Critical, RemoteBackendState::Disconnected, None);

        let lines = console.drain_lines();
        assert!(lines[0].ends_with("[ERROR] 🔄 Sync failed"));
        assert!(lines[1].ends_with("[ERROR] 🔄 Sync failed - timeout"));
        assert!(lines[2].ends_with("[WARNING] 💰 Subscription expired - pro.monthly"));
        assert!(lines[3].ends_with("[INFO] 📱 App launch completed"));
        assert!(lines[4].ends_with("[CRITICAL] 🔥 Disconnected from remote backend"));

        let entries = system_log.drain_entries();
        assert_eq!(entries[0].message, "Sync failed");
        assert_eq!(entries[0].severity, PlatformSeverity::Error);
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn gated_states_are_dropped() {
        let (_guard, console, _system_log) = crate::test_support::capture();
        let logger = logger();
        logger.configure(LoggerConfig::default().with_minimum_level(Severity::Info));
        logger.sync_state(SyncState::Idle, None);
        logger.auth_state(AuthState::SignedIn, Some("user 42"));

        let lines = console.drain_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("🔐 User signed in successfully - user 42"));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn method_tracing_uses_file_name_context() {
        let (_guard, console, system_log) = crate::test_support::capture();
        let logger = logger();
        logger.method_entry("load_items");
        logger.method_exit("load_items");

        let lines = console.drain_lines();
        assert!(lines[0].ends_with("[DEBUG] 📱 → Entering load_items [logger.rs]"));
        assert!(lines[1].ends_with("[DEBUG] 📱 ← Exiting load_items [logger.rs]"));
        let site = system_log.drain_entries()[0].call_site.unwrap();
        assert_eq!(site.function, Some("load_items"));
        assert_eq!(site.file_name(), "logger.rs");
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn call_site_points_at_caller() {
        let (_guard, _console, system_log) = crate::test_support::capture();
        let line = line!() + 1;
        logger().info("where am I");
        let site = system_log.drain_entries()[0].call_site.unwrap();
        assert_eq!(site.line, line);
        assert!(site.file.ends_with("logger.rs"));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn time_returns_result_and_logs_once() {
        let (_guard, console, _system_log) = crate::test_support::capture();
        let result = logger().time("op", || "R");
        assert_eq!(result, "R");

        let lines = console.drain_lines();
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert!(line.contains("[INFO] ⚡ op completed (took "));
        let took = line
            .rsplit_once("(took ")
            .and_then(|(_, rest)| rest.strip_suffix("s)"))
            .unwrap();
        let (whole, fraction) = took.split_once('.').unwrap();
        assert!(whole.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(fraction.len(), 3);
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn time_logs_even_when_work_returns_err() {
        let (_guard, console, _system_log) = crate::test_support::capture();
        let result: Result<u8, &str> = logger().time("fallible", || Err("boom"));
        assert_eq!(result, Err("boom"));
        assert!(console.drain_logs().contains("fallible completed (took"));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn try_time_skips_line_on_error() {
        let (_guard, console, _system_log) = crate::test_support::capture();
        let logger = logger();
        let failed: Result<u8, &str> = logger.try_time("failing", || Err("boom"));
        assert_eq!(failed, Err("boom"));
        assert!(console.drain_lines().is_empty());

        let ok: Result<u8, &str> = logger.try_time("passing", || Ok(7));
        assert_eq!(ok, Ok(7));
        assert!(console.drain_logs().contains("passing completed (took"));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn with_detail_ignores_empty() {
        assert_eq!(with_detail("a", Some("b")), "a - b");
        assert_eq!(with_detail("a", Some("")), "a");
        assert_eq!(with_detail("a", None), "a");
    }
}
