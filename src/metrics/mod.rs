//! Request counters for the NetBox client.
//!
//! Tracks how much the data fetch stage cost: HTTP round trips, failures,
//! time spent waiting on NetBox and how many records came back.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Shared metrics collector. Clones observe the same counters.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    inner: Arc<Counters>,
}

#[derive(Debug, Default)]
struct Counters {
    http_requests: AtomicU64,
    http_errors: AtomicU64,
    http_duration_ms: AtomicU64,
    pages_fetched: AtomicU64,
    contacts_fetched: AtomicU64,
    groups_fetched: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished HTTP request and whether it failed.
    pub fn record_http_request(&self, duration: Duration, failed: bool) {
        let c = &self.inner;
        c.http_requests.fetch_add(1, Ordering::Relaxed);
        c.http_duration_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
        if failed {
            c.http_errors.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record one page of a paginated listing.
    pub fn record_page(&self) {
        self.inner.pages_fetched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contacts_fetched(&self, count: usize) {
        self.inner
            .contacts_fetched
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_groups_fetched(&self, count: usize) {
        self.inner
            .groups_fetched
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Get a snapshot of all counters.
    pub fn summary(&self) -> MetricsSummary {
        let c = &self.inner;
        let http_requests = c.http_requests.load(Ordering::Relaxed);
        let http_duration_ms = c.http_duration_ms.load(Ordering::Relaxed);
        MetricsSummary {
            http_requests,
            http_errors: c.http_errors.load(Ordering::Relaxed),
            http_duration_ms,
            http_duration_avg_ms: if http_requests == 0 {
                0.0
            } else {
                http_duration_ms as f64 / http_requests as f64
            },
            pages_fetched: c.pages_fetched.load(Ordering::Relaxed),
            contacts_fetched: c.contacts_fetched.load(Ordering::Relaxed),
            groups_fetched: c.groups_fetched.load(Ordering::Relaxed),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub http_requests: u64,
    pub http_errors: u64,
    pub http_duration_ms: u64,
    pub http_duration_avg_ms: f64,
    pub pages_fetched: u64,
    pub contacts_fetched: u64,
    pub groups_fetched: u64,
}

impl fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} requests ({} failed, {:.1} ms avg), {} pages, {} contacts, {} groups",
            self.http_requests,
            self.http_errors,
            self.http_duration_avg_ms,
            self.pages_fetched,
            self.contacts_fetched,
            self.groups_fetched
        )
    }
}
