//! Transient user feedback. Submission code only sees the [`Notifier`]
//! capability; how a notification is rendered and when it expires belongs to
//! the implementation (the browser toast stack in [`toast`]).

#[cfg(target_arch = "wasm32")]
pub mod toast;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// What to show. The dispatcher assigns the id and owns lifetime and
/// placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Fire-and-forget notification sink.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}
