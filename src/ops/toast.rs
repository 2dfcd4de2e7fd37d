use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::time::{Duration, Instant};

/// Most entries retained at once; older entries are dropped on push.
pub const MAX_TOASTS: usize = 3;

/// Default lifetime of a toast.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3200);

/// A transient notification entry.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub message: String,
    /// When the entry auto-expires.
    pub deadline: Instant,
}

/// Session-local queue of transient notifications, newest first.
///
/// There is no timer thread: the owner calls `sweep` on its event-loop
/// tick, so expiry can never fire against torn-down state.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        ToastQueue::default()
    }

    /// Newest-first view of the live entries.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Prepend a new entry, keeping at most `MAX_TOASTS`, and return its id.
    pub fn push(&mut self, title: &str, message: &str, timeout: Option<Duration>) -> String {
        let id = toast_id();
        let toast = Toast {
            id: id.clone(),
            title: if title.is_empty() { "Notice" } else { title }.to_string(),
            message: message.to_string(),
            deadline: Instant::now() + timeout.unwrap_or(DEFAULT_TIMEOUT),
        };
        self.toasts.insert(0, toast);
        self.toasts.truncate(MAX_TOASTS);
        id
    }

    /// Remove an entry by id. Removing an id that already expired or was
    /// never queued is a no-op; manual removal may race with expiry.
    pub fn remove(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop all entries whose deadline has passed.
    pub fn sweep(&mut self, now: Instant) {
        self.toasts.retain(|t| t.deadline > now);
    }
}

/// Time-and-random id, practically unique per call. Collisions are not
/// defended against at this scale.
fn toast_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let random = RandomState::new().build_hasher().finish();
    format!("{}-{:x}", millis, random)
}
