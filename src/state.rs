// SPDX-License-Identifier: MIT OR Apache-2.0

//! Standard state transitions with canned descriptions.
//!
//! Logging a state through [`Logger::state`](crate::Logger::state) (or one of the named
//! wrappers such as [`Logger::sync_state`](crate::Logger::sync_state)) keeps the wording
//! of common lifecycle messages identical across an application.

use crate::{Category, Severity};

/// A state transition that knows how to describe itself.
pub trait StateEvent {
    /// Human-readable description used as the log message.
    fn description(&self) -> &'static str;

    /// Severity used when the caller does not pick one.
    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    /// The category the state is logged under.
    fn category(&self) -> Category;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppLifecycle {
    Launching,
    Launched,
    Backgrounding,
    Foregrounding,
    Terminating,
    MemoryWarning,
}

impl StateEvent for AppLifecycle {
    fn description(&self) -> &'static str {
        match self {
            AppLifecycle::Launching => "App is launching",
            AppLifecycle::Launched => "App launch completed",
            AppLifecycle::Backgrounding => "App entering background",
            AppLifecycle::Foregrounding => "App entering foreground",
            AppLifecycle::Terminating => "App terminating",
            AppLifecycle::MemoryWarning => "Memory warning received",
        }
    }

    fn category(&self) -> Category {
        Category::App
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthState {
    SignedOut,
    SigningIn,
    SignedIn,
    SignInFailed,
    SigningOut,
    TokenRefresh,
    TokenExpired,
}

impl StateEvent for AuthState {
    fn description(&self) -> &'static str {
        match self {
            AuthState::SignedOut => "User signed out",
            AuthState::SigningIn => "User signing in",
            AuthState::SignedIn => "User signed in successfully",
            AuthState::SignInFailed => "Sign in failed",
            AuthState::SigningOut => "User signing out",
            AuthState::TokenRefresh => "Token refresh",
            AuthState::TokenExpired => "Token expired",
        }
    }

    fn category(&self) -> Category {
        Category::Auth
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncState {
    Idle,
    Syncing,
    SyncCompleted,
    SyncFailed,
    ConflictResolved,
    Offline,
}

impl StateEvent for SyncState {
    fn description(&self) -> &'static str {
        match self {
            SyncState::Idle => "Sync idle",
            SyncState::Syncing => "Syncing data",
            SyncState::SyncCompleted => "Sync completed successfully",
            SyncState::SyncFailed => "Sync failed",
            SyncState::ConflictResolved => "Sync conflict resolved",
            SyncState::Offline => "Offline mode",
        }
    }

    fn default_severity(&self) -> Severity {
        match self {
            SyncState::Idle => Severity::Debug,
            SyncState::Syncing | SyncState::SyncCompleted => Severity::Info,
            SyncState::SyncFailed => Severity::Error,
            SyncState::ConflictResolved | SyncState::Offline => Severity::Warning,
        }
    }

    fn category(&self) -> Category {
        Category::Sync
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionState {
    Loading,
    Active,
    Inactive,
    Expired,
    Cancelled,
    Failed,
    Restored,
    Pending,
}

impl StateEvent for SubscriptionState {
    fn description(&self) -> &'static str {
        match self {
            SubscriptionState::Loading => "Loading subscription status",
            SubscriptionState::Active => "Subscription active",
            SubscriptionState::Inactive => "Subscription inactive",
            SubscriptionState::Expired => "Subscription expired",
            SubscriptionState::Cancelled => "Subscription cancelled",
            SubscriptionState::Failed => "Subscription failed",
            SubscriptionState::Restored => "Subscription restored",
            SubscriptionState::Pending => "Subscription pending",
        }
    }

    fn default_severity(&self) -> Severity {
        match self {
            SubscriptionState::Expired | SubscriptionState::Cancelled => Severity::Warning,
            SubscriptionState::Failed => Severity::Error,
            _ => Severity::Info,
        }
    }

    fn category(&self) -> Category {
        Category::Subscription
    }
}

/// Connectivity of a hosted backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteBackendState {
    Connecting,
    Connected,
    Disconnected,
    Configured,
    ConfigurationFailed,
    AuthenticationChanged,
}

impl StateEvent for RemoteBackendState {
    fn description(&self) -> &'static str {
        match self {
            RemoteBackendState::Connecting => "Connecting to remote backend",
            RemoteBackendState::Connected => "Connected to remote backend",
            RemoteBackendState::Disconnected => "Disconnected from remote backend",
            RemoteBackendState::Configured => "Remote backend configured successfully",
            RemoteBackendState::ConfigurationFailed => "Remote backend configuration failed",
            RemoteBackendState::AuthenticationChanged => "Remote backend authentication changed",
        }
    }

    fn default_severity(&self) -> Severity {
        match self {
            RemoteBackendState::Disconnected => Severity::Warning,
            RemoteBackendState::ConfigurationFailed => Severity::Error,
            _ => Severity::Info,
        }
    }

    fn category(&self) -> Category {
        Category::RemoteBackend
    }
}
