//! Notification sink port
//!
//! Fire-and-forget human-readable notices ("cannot switch model while
//! generating", "generation stopped"). No return value, no acknowledgement.

/// Sink for user-facing notices.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str);
}

/// No-op sink for when notifications are not needed.
pub struct NoNotifications;

impl NotificationSink for NoNotifications {
    fn notify(&self, _message: &str) {}
}
