/**
 * User Notifications
 *
 * The client reports progress and outcomes through a [`Notifier`]: a
 * loading indicator, toasts, and navigation requests. A UI implements the
 * trait; [`TracingNotifier`] just logs.
 */

use std::time::Duration;

/// How long success toasts stay visible
pub const SUCCESS_TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    /// `None` leaves the duration to the UI
    pub duration: Option<Duration>,
}

impl Toast {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            description: description.into(),
            variant: ToastVariant::Default,
            duration: Some(SUCCESS_TOAST_DURATION),
        }
    }

    pub fn validation(description: impl Into<String>) -> Self {
        Self::destructive("Validation Error", description)
    }

    pub fn session_expired() -> Self {
        Self::destructive("Session Expired", "Please login again.")
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self::destructive("Error", description)
    }

    fn destructive(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            variant: ToastVariant::Destructive,
            duration: None,
        }
    }
}

/// Receiver of client UI events
pub trait Notifier: Send + Sync {
    fn start_loading(&self);
    fn finish_loading(&self);
    fn toast(&self, toast: Toast);
    /// Navigate to an application path such as `/login`
    fn redirect(&self, path: &str);
}

/// Notifier that writes every event to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn start_loading(&self) {
        tracing::trace!("loading started");
    }

    fn finish_loading(&self) {
        tracing::trace!("loading finished");
    }

    fn toast(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Default => tracing::info!("{}: {}", toast.title, toast.description),
            ToastVariant::Destructive => tracing::warn!("{}: {}", toast.title, toast.description),
        }
    }

    fn redirect(&self, path: &str) {
        tracing::info!("redirect to {}", path);
    }
}
