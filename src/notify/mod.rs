// src/notify/mod.rs

//! User-facing notifications.
//!
//! The workflow reports progress and failures through a [`Notifier`] it is
//! handed, never through a global channel. Production uses
//! [`TracingNotifier`]; tests record notifications instead.

use std::fmt;

use tracing::{error, info};

use crate::errors::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationLevel::Info => f.write_str("info"),
            NotificationLevel::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Sink for notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification) -> Result<()>;
}

/// Emits notifications as structured `tracing` events on the
/// `sourcepredict_wf::notify` target.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) -> Result<()> {
        let Notification { level, title, body } = notification;
        match level {
            NotificationLevel::Info => info!(title = %title, body = %body, "notification"),
            NotificationLevel::Error => error!(title = %title, body = %body, "notification"),
        }
        Ok(())
    }
}
