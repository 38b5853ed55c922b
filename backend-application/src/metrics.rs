use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    upstream_requests: AtomicU64,
    upstream_failures: AtomicU64,
    mock_responses: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub upstream_requests: u64,
    pub upstream_failures: u64,
    pub mock_responses: u64,
}

impl Metrics {
    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_upstream_request(&self) {
        self.upstream_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_upstream_failure(&self) {
        self.upstream_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_mock_response(&self) {
        self.mock_responses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            upstream_requests: self.upstream_requests.load(Ordering::Relaxed),
            upstream_failures: self.upstream_failures.load(Ordering::Relaxed),
            mock_responses: self.mock_responses.load(Ordering::Relaxed),
        }
    }

    pub fn render_prometheus(&self) -> String {
        let snapshot = self.snapshot();

        format!(
            "# TYPE brawlbuddy_cache_hits_total counter\n\
brawlbuddy_cache_hits_total {}\n\
# TYPE brawlbuddy_cache_misses_total counter\n\
brawlbuddy_cache_misses_total {}\n\
# TYPE brawlbuddy_upstream_requests_total counter\n\
brawlbuddy_upstream_requests_total {}\n\
# TYPE brawlbuddy_upstream_failures_total counter\n\
brawlbuddy_upstream_failures_total {}\n\
# TYPE brawlbuddy_mock_responses_total counter\n\
brawlbuddy_mock_responses_total {}\n",
            snapshot.cache_hits,
            snapshot.cache_misses,
            snapshot.upstream_requests,
            snapshot.upstream_failures,
            snapshot.mock_responses
        )
    }
}
