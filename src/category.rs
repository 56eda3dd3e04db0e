// SPDX-License-Identifier: MIT OR Apache-2.0

//! Functional areas a log message can be tagged with.

/// The functional area a log message belongs to.
///
/// A category is orthogonal to [`Severity`](crate::Severity).  It decides the glyph that
/// prefixes console lines and the category name the system log groups entries under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    App,
    Auth,
    Data,
    Network,
    Ui,
    Sync,
    Subscription,
    Performance,
    UserAction,
    Configuration,
    Notification,
    Error,
    Premium,
    /// A hosted backend such as a realtime database or BaaS.
    RemoteBackend,
    Jar,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::App,
        Category::Auth,
        Category::Data,
        Category::Network,
        Category::Ui,
        Category::Sync,
        Category::Subscription,
        Category::Performance,
        Category::UserAction,
        Category::Configuration,
        Category::Notification,
        Category::Error,
        Category::Premium,
        Category::RemoteBackend,
        Category::Jar,
    ];

    /// Visual marker printed before the message on console lines.
    pub const fn glyph(self) -> &'static str {
        match self {
            Category::App => "📱",
            Category::Auth => "🔐",
            Category::Data => "🗃️",
            Category::Network => "🌐",
            Category::Ui => "🎨",
            Category::Sync => "🔄",
            Category::Subscription => "💰",
            Category::Performance => "⚡",
            Category::UserAction => "👤",
            Category::Configuration => "🔧",
            Category::Notification => "📢",
            Category::Error => "🚨",
            Category::Premium => "⭐",
            Category::RemoteBackend => "🔥",
            Category::Jar => "🏺",
        }
    }

    /// Category name used by the system log.
    pub const fn system_log_name(self) -> &'static str {
        match self {
            Category::App => "App",
            Category::Auth => "Authentication",
            Category::Data => "Data",
            Category::Network => "Network",
            Category::Ui => "UI",
            Category::Sync => "Sync",
            Category::Subscription => "Subscription",
            Category::Performance => "Performance",
            Category::UserAction => "UserAction",
            Category::Configuration => "Configuration",
            Category::Notification => "Notification",
            Category::Error => "Error",
            Category::Premium => "Premium",
            Category::RemoteBackend => "RemoteBackend",
            Category::Jar => "Jar",
        }
    }
}
