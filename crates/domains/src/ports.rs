//! # Ports
//!
//! Collaborators the core calls out to. Adapters live in other crates.

use crate::models::Notification;

#[cfg(any(test, feature = "testing"))]
use mockall::automock;

/// Receives the outcome of every confirmed mutation (the toast system).
///
/// Fire-and-forget: the core never waits on or inspects the result.
#[cfg_attr(any(test, feature = "testing"), automock)]
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<T: NotificationSink + ?Sized> NotificationSink for std::sync::Arc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for Box<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}
