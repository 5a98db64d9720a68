//! Transient "switched mode" notices.
//!
//! A posted notice auto-dismisses after a fixed short delay. Posting a new
//! notice replaces the current one and restarts the timer; dropping the
//! host cancels any pending timer.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use atrium_core::composer::Notice;

/// Holds the currently visible transient notice, if any.
///
/// Must be used from within a tokio runtime: posting spawns the
/// auto-dismiss timer task.
#[derive(Debug)]
pub struct NoticeHost {
    current: Arc<Mutex<Option<Notice>>>,
    timer: Option<JoinHandle<()>>,
    ttl: Duration,
}

impl NoticeHost {
    /// How long a notice stays visible.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(2);

    pub fn new() -> Self {
        Self::with_ttl(Self::DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            timer: None,
            ttl,
        }
    }

    /// Shows `notice`, replacing any current one and restarting the
    /// auto-dismiss timer.
    pub fn post(&mut self, notice: Notice) {
        *self.current.lock().unwrap() = Some(notice);
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        let slot = Arc::clone(&self.current);
        let ttl = self.ttl;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            *slot.lock().unwrap() = None;
        }));
    }

    /// The notice currently on screen, if any.
    pub fn current(&self) -> Option<Notice> {
        *self.current.lock().unwrap()
    }

    /// Dismisses the current notice immediately.
    pub fn clear(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        *self.current.lock().unwrap() = None;
    }
}

impl Default for NoticeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for NoticeHost {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
