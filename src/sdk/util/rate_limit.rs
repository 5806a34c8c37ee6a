use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const REQUESTS_PER_MINUTE: u32 = 30;
const POLL_INTERVAL_MS: u64 = 100;

/// Shared blocking rate limiter for Google Maps API calls.
#[derive(Clone)]
pub struct Limiter {
    inner: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl Limiter {
    pub fn new() -> Self {
        Self::with_quota(REQUESTS_PER_MINUTE)
    }

    pub fn with_quota(per_minute: u32) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(per_minute.max(1)).unwrap());
        Self {
            inner: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Blocks until a request slot is available.
    pub fn wait(&self) {
        while self.inner.check().is_err() {
            thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
        }
    }
}

impl Default for Limiter {
    fn default() -> Self {
        Self::new()
    }
}
