//! Retry policy for outbound calls.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{error, warn};

use pagehook_config::{BackoffKind, RetrySettings};

/// Delay curve between attempts.
#[derive(Debug, Clone, PartialEq)]
pub enum Backoff {
    /// Retry immediately.
    None,
    /// Constant delay.
    Fixed(Duration),
    /// `step * attempt`, capped at `max`.
    Linear { step: Duration, max: Duration },
    /// `base * multiplier^(attempt - 1)`, capped at `max`.
    Exponential {
        base: Duration,
        multiplier: f64,
        max: Duration,
    },
}

/// How many times to try an operation and how long to wait in between.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Values below 1 are treated as 1.
    pub max_attempts: u32,
    pub backoff: Backoff,
    /// Add up to ±10% random jitter to each delay.
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed_count(3)
    }
}

impl RetryPolicy {
    /// Single attempt, no retry.
    pub fn none() -> Self {
        Self::fixed_count(1)
    }

    /// `max_attempts` immediate attempts with no delay.
    pub fn fixed_count(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            backoff: Backoff::None,
            jitter: false,
        }
    }

    /// Build a policy from configuration.
    pub fn from_settings(max_attempts: u32, settings: &RetrySettings) -> Self {
        let base = Duration::from_millis(settings.base_delay_ms);
        let max = Duration::from_millis(settings.max_delay_ms);
        let backoff = match settings.backoff {
            BackoffKind::None => Backoff::None,
            BackoffKind::Fixed => Backoff::Fixed(base),
            BackoffKind::Linear => Backoff::Linear { step: base, max },
            BackoffKind::Exponential => Backoff::Exponential {
                base,
                multiplier: 2.0,
                max,
            },
        };
        Self {
            max_attempts,
            backoff,
            jitter: settings.jitter,
        }
    }

    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Effective number of attempts.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay to wait after the given failed attempt (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let attempt = attempt.max(1);
        let delay = match &self.backoff {
            Backoff::None => return Duration::ZERO,
            Backoff::Fixed(delay) => *delay,
            Backoff::Linear { step, max } => step.saturating_mul(attempt).min(*max),
            Backoff::Exponential {
                base,
                multiplier,
                max,
            } => {
                let millis = base.as_millis() as f64 * multiplier.powi(attempt as i32 - 1);
                Duration::from_millis(millis.min(max.as_millis() as f64) as u64)
            }
        };

        if self.jitter {
            let millis = delay.as_millis() as f64;
            Duration::from_millis((millis + rand_jitter(millis * 0.1)).max(0.0) as u64)
        } else {
            delay
        }
    }

    /// Run `operation` until it succeeds or attempts are exhausted.
    ///
    /// Every failure is retried. The error from the final attempt is
    /// returned unchanged.
    pub async fn run<F, Fut, T, E>(&self, label: &str, operation: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.run_if(label, |_| true, operation).await
    }

    /// Like [`run`](Self::run), but stops early when `should_retry` rejects
    /// an error.
    pub async fn run_if<F, Fut, T, E, P>(
        &self,
        label: &str,
        should_retry: P,
        mut operation: F,
    ) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
        P: Fn(&E) -> bool,
    {
        let attempts = self.attempts();
        let mut attempt = 1;

        loop {
            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt >= attempts || !should_retry(&e) => {
                    error!("{} failed after {} attempts: {}", label, attempt, e);
                    return Err(e);
                }
                Err(e) => {
                    let delay = self.delay_after(attempt);
                    warn!(
                        "{} attempt {}/{} failed: {}, retrying in {:?}",
                        label, attempt, attempts, e, delay
                    );
                    if !delay.is_zero() {
                        sleep(delay).await;
                    }
                    attempt += 1;
                }
            }
        }
    }
}

/// Simple jitter in `[-max, max]` using system time.
fn rand_jitter(max: f64) -> f64 {
    use std::time::SystemTime;
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    (nanos as f64 / 1_000_000_000f64) * max * 2.0 - max
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
