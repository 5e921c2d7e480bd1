use std::time::Duration;

use tracing::warn;

/// Fixed thresholds for one throttle window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleLimits {
    pub max_words: usize,
    pub max_requests: usize,
    pub pause: Duration,
}

impl Default for ThrottleLimits {
    fn default() -> Self {
        Self {
            max_words: 30_000,
            max_requests: 30,
            pause: Duration::from_secs(60),
        }
    }
}

/// Open-loop, fixed-delay throttle. Partial windows are discarded on reset.
#[derive(Debug)]
pub struct Throttle {
    limits: ThrottleLimits,
    words_used: usize,
    requests_made: usize,
    pauses: usize,
}

impl Throttle {
    pub fn new(limits: ThrottleLimits) -> Self {
        Self {
            limits,
            words_used: 0,
            requests_made: 0,
            pauses: 0,
        }
    }

    pub fn words_used(&self) -> usize {
        self.words_used
    }

    pub fn requests_made(&self) -> usize {
        self.requests_made
    }

    /// Number of pauses taken so far.
    pub fn pauses(&self) -> usize {
        self.pauses
    }

    pub fn would_exceed(&self, words: usize) -> bool {
        self.words_used.saturating_add(words) > self.limits.max_words
            || self.requests_made >= self.limits.max_requests
    }

    /// Call before each request of `words` words; sleeps and resets when a limit is hit.
    pub async fn acquire(&mut self, words: usize) {
        if self.would_exceed(words) {
            warn!(
                words_used = self.words_used,
                requests_made = self.requests_made,
                "Rate limit reached. Waiting for {} seconds...",
                self.limits.pause.as_secs()
            );
            tokio::time::sleep(self.limits.pause).await;
            self.words_used = 0;
            self.requests_made = 0;
            self.pauses += 1;
        }
    }

    /// Call after each request completes.
    pub fn record(&mut self, words: usize) {
        self.words_used = self.words_used.saturating_add(words);
        self.requests_made += 1;
    }
}
