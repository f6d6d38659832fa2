use dashmap::DashMap;
use std::time::{Duration, Instant};

// Rate limit entry - tracks requests per client key
pub struct RateLimitEntry {
    pub count: u32,
    pub window_start: Instant,
}

// Fixed-window counter keyed by client identity. The whole window resets on
// the first request after expiry, so bursts of up to 2x the limit can land
// across a window boundary.
pub struct RateLimiter {
    entries: DashMap<String, RateLimitEntry>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            limit,
            window,
        }
    }

    // Returns true if the request is admitted
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    // Same as check(), with the clock supplied by the caller so tests don't
    // have to sleep through real windows. The read-modify-write runs under
    // the map entry's shard lock, so concurrent requests for the same key
    // cannot over-admit.
    pub fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert(RateLimitEntry {
                count: 0,
                window_start: now,
            });

        // window expired? reset it
        if now.duration_since(entry.window_start) > self.window {
            entry.count = 1;
            entry.window_start = now;
            return true;
        }

        // under limit? allow
        if entry.count < self.limit {
            entry.count += 1;
            return true;
        }

        // over limit - rejections do not grow the count
        false
    }

    // Drop entries whose window has expired. Keeps the map bounded by the
    // set of clients seen within the last window.
    pub fn sweep(&self, now: Instant) {
        self.entries
            .retain(|_, entry| now.duration_since(entry.window_start) <= self.window);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(60);

    #[test]
    fn admits_up_to_limit_then_rejects() {
        let limiter = RateLimiter::new(5, WINDOW);
        let now = Instant::now();

        for _ in 0..5 {
            assert!(limiter.check_at("1.2.3.4", now));
        }
        assert!(!limiter.check_at("1.2.3.4", now));
    }

    #[test]
    fn rejects_inside_window_regardless_of_elapsed_time() {
        let limiter = RateLimiter::new(5, WINDOW);
        let now = Instant::now();

        for _ in 0..5 {
            assert!(limiter.check_at("1.2.3.4", now));
        }
        // 10 seconds in, still the same window
        assert!(!limiter.check_at("1.2.3.4", now + Duration::from_secs(10)));
    }

    #[test]
    fn window_reset_admits_again() {
        let limiter = RateLimiter::new(5, WINDOW);
        let now = Instant::now();

        for _ in 0..6 {
            limiter.check_at("1.2.3.4", now);
        }
        assert!(limiter.check_at("1.2.3.4", now + Duration::from_secs(61)));
    }

    #[test]
    fn reset_starts_a_fresh_count() {
        let limiter = RateLimiter::new(2, WINDOW);
        let now = Instant::now();

        assert!(limiter.check_at("a", now));
        assert!(limiter.check_at("a", now));
        assert!(!limiter.check_at("a", now));

        let later = now + Duration::from_secs(61);
        assert!(limiter.check_at("a", later));
        assert!(limiter.check_at("a", later));
        assert!(!limiter.check_at("a", later));
    }

    #[test]
    fn distinct_keys_are_independent() {
        let limiter = RateLimiter::new(1, WINDOW);
        let now = Instant::now();

        assert!(limiter.check_at("a", now));
        assert!(!limiter.check_at("a", now));
        assert!(limiter.check_at("b", now));
    }

    #[test]
    fn sweep_drops_only_expired_entries() {
        let limiter = RateLimiter::new(5, WINDOW);
        let now = Instant::now();

        limiter.check_at("old", now);
        limiter.check_at("fresh", now + Duration::from_secs(50));
        assert_eq!(limiter.len(), 2);

        limiter.sweep(now + Duration::from_secs(61));
        assert_eq!(limiter.len(), 1);

        // the surviving entry still enforces its count
        for _ in 0..4 {
            assert!(limiter.check_at("fresh", now + Duration::from_secs(55)));
        }
        assert!(!limiter.check_at("fresh", now + Duration::from_secs(55)));
    }

    #[test]
    fn sweep_on_empty_map_is_a_no_op() {
        let limiter = RateLimiter::new(5, WINDOW);
        limiter.sweep(Instant::now());
        assert!(limiter.is_empty());
    }
}
