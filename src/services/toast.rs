use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

use crate::error::AppError;

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub message: String,
    #[serde(skip)]
    shown_at: Instant,
}

impl Toast {
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < TOAST_DURATION
    }
}

/// Holds at most one toast. A new toast replaces the current one; there is
/// no queue.
#[derive(Debug, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn show(&mut self, title: impl Into<String>, message: impl Into<String>, now: Instant) {
        self.current = Some(Toast {
            title: title.into(),
            message: message.into(),
            shown_at: now,
        });
    }

    pub fn current_at(&self, now: Instant) -> Option<&Toast> {
        self.current.as_ref().filter(|toast| toast.is_visible_at(now))
    }
}

/// Notification sound played alongside a toast.
pub trait Chime: Send + Sync {
    fn play(&self) -> Result<(), AppError>;
}

/// Plays nothing.
pub struct SilentChime;

impl Chime for SilentChime {
    fn play(&self) -> Result<(), AppError> {
        Ok(())
    }
}
