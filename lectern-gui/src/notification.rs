use std::time::{Duration, Instant};

use lectern_ui::component::notification::Level;

/// Default time a notification stays on screen.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
}

impl From<NotificationKind> for Level {
    fn from(kind: NotificationKind) -> Level {
        match kind {
            NotificationKind::Error => Level::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub timeout: Duration,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Surfaces user-facing messages.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    expires_at: Instant,
}

/// Notifications currently on screen, oldest first.
#[derive(Debug, Default)]
pub struct Toasts {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            expires_at: now + notification.timeout,
            notification,
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drops the toasts whose timeout elapsed.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Error => tracing::error!("{}", notification.message),
        }
        self.push_at(notification, Instant::now());
    }
}
