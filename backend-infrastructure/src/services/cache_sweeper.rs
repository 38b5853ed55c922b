use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::MemoryCache;

/// Runs forever, purging expired cache entries every `interval`.
pub async fn schedule_cache_sweeps(cache: Arc<MemoryCache>, interval: Duration) {
    loop {
        tokio::time::sleep(interval).await;
        let purged = cache.purge_expired();
        if purged > 0 {
            debug!(
                "cache sweep dropped {} expired entries, {} remain",
                purged,
                cache.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn idle_expired_entries_are_swept() {
        let cache = Arc::new(MemoryCache::new());
        cache.set("event_rotation", &"stale", Some(Duration::from_secs(1)));
        cache.set("all_brawlers", &"fresh", Some(Duration::from_secs(3600)));
        let sweeper = tokio::spawn(schedule_cache_sweeps(cache.clone(), Duration::from_secs(60)));

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert_eq!(cache.len(), 1);
        sweeper.abort();
    }
}
