//! # notify-adapters
//!
//! `NotificationSink` implementations: a toast log the UI drains after
//! each event, a `tracing` sink, and a fan-out combining two sinks.

use std::sync::{Mutex, MutexGuard, PoisonError};

use domains::{Notification, NotificationSink, NotificationStyle};
use tracing::{info, warn};

/// Keeps toasts in arrival order until the presentation layer drains them.
#[derive(Debug, Default)]
pub struct ToastLog {
    toasts: Mutex<Vec<Notification>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock still guards a consistent Vec.
    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock())
    }
}

impl NotificationSink for ToastLog {
    fn notify(&self, notification: Notification) {
        self.lock().push(notification);
    }
}

/// Writes each toast to the log stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        let Notification { title, description, style } = notification;
        match style {
            NotificationStyle::Default => info!(%title, %description, "toast"),
            NotificationStyle::Destructive => warn!(%title, %description, "toast"),
        }
    }
}

/// Forwards every toast to both sinks, `A` first.
#[derive(Debug, Default)]
pub struct Fanout<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Fanout<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: NotificationSink, B: NotificationSink> NotificationSink for Fanout<A, B> {
    fn notify(&self, notification: Notification) {
        self.first.notify(notification.clone());
        self.second.notify(notification);
    }
}
