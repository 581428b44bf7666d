//! Toast notifications
//!
//! Workflows emit toasts and move on; nothing waits for a toast to be shown
//! or dismissed.

use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use uuid::Uuid;

/// How long a toast stays visible when auto-dismissed
pub const DEFAULT_TOAST_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            description: None,
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title)
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Fire-and-forget sink for user-facing notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Writes toasts to the log, for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: Toast) {
        let description = toast.description.as_deref().unwrap_or("");
        match toast.kind {
            ToastKind::Error => log::error!("{} {}", toast.title, description),
            ToastKind::Success | ToastKind::Info => {
                log::info!("{} {}", toast.title, description)
            }
        }
    }
}

/// Visible toasts in the order they were raised
///
/// A queue built with [`ToastQueue::auto_dismissing`] removes each toast once
/// its lifetime has elapsed. Dismissal timers run on the current Tokio
/// runtime; without one, toasts stay until dismissed by id.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Arc<Mutex<Vec<Toast>>>,
    lifetime: Option<Duration>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auto_dismissing(lifetime: Duration) -> Self {
        Self {
            toasts: Arc::default(),
            lifetime: Some(lifetime),
        }
    }

    pub fn visible(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.toasts.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.lock().is_empty()
    }

    /// Remove a toast, returning whether it was still visible
    pub fn dismiss(&self, id: Uuid) -> bool {
        remove_toast(&self.toasts, id)
    }

    fn schedule_dismiss(&self, id: Uuid, after: Duration) {
        let Ok(runtime) = Handle::try_current() else {
            log::debug!("no runtime, toast {} stays until dismissed", id);
            return;
        };
        let toasts = Arc::clone(&self.toasts);
        runtime.spawn(async move {
            tokio::time::sleep(after).await;
            remove_toast(&toasts, id);
        });
    }
}

fn remove_toast(toasts: &Mutex<Vec<Toast>>, id: Uuid) -> bool {
    let mut toasts = toasts.lock();
    let before = toasts.len();
    toasts.retain(|toast| toast.id != id);
    toasts.len() != before
}

impl Notifier for ToastQueue {
    fn notify(&self, toast: Toast) {
        log::debug!("toast raised: {:?} {}", toast.kind, toast.title);
        let id = toast.id;
        self.toasts.lock().push(toast);
        if let Some(lifetime) = self.lifetime {
            self.schedule_dismiss(id, lifetime);
        }
    }
}
