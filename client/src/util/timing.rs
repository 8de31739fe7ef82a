//! Debounce and throttle bookkeeping.
//!
//! Time is passed in by the caller (milliseconds), so the browser bindings
//! in `bridge` and `viewport` supply `performance.now()`-style clocks while
//! tests use plain numbers.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

/// Runs the first call, then ignores calls until `limit_ms` has elapsed.
#[derive(Clone, Debug)]
pub struct Throttle {
    limit_ms: f64,
    blocked_until: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(limit_ms: f64) -> Self {
        Self { limit_ms, blocked_until: None }
    }

    /// Whether a call at `now_ms` should run.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        if self.blocked_until.is_some_and(|until| now_ms < until) {
            return false;
        }
        self.blocked_until = Some(now_ms + self.limit_ms);
        true
    }
}

/// Fires once, `wait_ms` after the most recent call.
///
/// Each call returns a ticket; the scheduled timer fires only if its ticket
/// is still the latest when it elapses.
#[derive(Clone, Debug)]
pub struct Debounce {
    wait_ms: u32,
    latest: u64,
}

impl Debounce {
    #[must_use]
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms, latest: 0 }
    }

    #[must_use]
    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Register a call and return the ticket its timer must present.
    pub fn call(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    #[must_use]
    pub fn should_fire(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}
