use crate::view::RoundView;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

pub const VIEW_CACHE_MAX_AGE: chrono::Duration = chrono::Duration::seconds(30);

/// Notifications landing within this window of our own write are echoes of
/// that write, not news. Suppressing them is a liveness nicety only; the
/// recompute is idempotent either way.
pub const ECHO_WINDOW: chrono::Duration = chrono::Duration::seconds(2);

#[derive(Clone, Debug)]
pub struct CachedRoundView {
    pub view: RoundView,
    pub cached_time: DateTime<Utc>,
}

pub type ViewCacheMap = Arc<RwLock<HashMap<i64, CachedRoundView>>>;

#[must_use]
pub fn new_view_cache() -> ViewCacheMap {
    Arc::new(RwLock::new(HashMap::new()))
}

/// Return the cached view if it is still inside the freshness window.
pub async fn get_cached_view(
    cache: &ViewCacheMap,
    round_id: i64,
    now: DateTime<Utc>,
) -> Option<RoundView> {
    let map = cache.read().await;
    let cached = map.get(&round_id)?;
    if now - cached.cached_time < VIEW_CACHE_MAX_AGE {
        Some(cached.view.clone())
    } else {
        None
    }
}

pub async fn put_cached_view(
    cache: &ViewCacheMap,
    round_id: i64,
    view: RoundView,
    now: DateTime<Utc>,
) {
    let mut map = cache.write().await;
    map.insert(
        round_id,
        CachedRoundView {
            view,
            cached_time: now,
        },
    );
}

/// Per-round record of this device's last score write, used to ignore the
/// change notification that write bounces back at us.
#[derive(Debug, Default)]
pub struct EchoGuard {
    last_local_write: HashMap<i64, DateTime<Utc>>,
}

impl EchoGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_local_write(&mut self, round_id: i64, at: DateTime<Utc>) {
        self.last_local_write.insert(round_id, at);
    }

    /// False when a notification for the round arrives inside the echo
    /// window of our own write.
    #[must_use]
    pub fn should_refresh(&self, round_id: i64, notified_at: DateTime<Utc>) -> bool {
        match self.last_local_write.get(&round_id) {
            Some(written_at) => notified_at - *written_at >= ECHO_WINDOW,
            None => true,
        }
    }
}
