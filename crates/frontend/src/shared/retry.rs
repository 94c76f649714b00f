//! Fixed-delay retry for idempotent-enough requests

use async_trait::async_trait;
use std::future::Future;

/// How many times to try and how long to wait between failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one
    pub max_attempts: u32,
    /// Pause after each failed attempt, constant across attempts
    pub delay_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay_ms: 1000,
        }
    }
}

/// Source of the pause between attempts
#[async_trait(?Send)]
pub trait Delay {
    async fn wait(&self, ms: u32);
}

/// Browser timer delay
pub struct TimerDelay;

#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn wait(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

/// All attempts failed
#[derive(Debug, Clone, PartialEq)]
pub struct Exhausted<E> {
    pub attempts: u32,
    pub last: E,
}

/// Run `operation` until it succeeds or `policy.max_attempts` is reached.
///
/// Every error is treated as retryable. The closure receives the 1-based
/// attempt number.
pub async fn retry_fixed<T, E, F, Fut>(
    policy: RetryPolicy,
    delay: &dyn Delay,
    operation_name: &str,
    mut operation: F,
) -> Result<T, Exhausted<E>>
where
    E: std::fmt::Display,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation(attempt).await {
            Ok(value) => {
                if attempt > 1 {
                    log::info!("{} succeeded on attempt {}", operation_name, attempt);
                }
                return Ok(value);
            }
            Err(e) if attempt < max_attempts => {
                log::warn!(
                    "{} failed (attempt {}/{}): {}; retrying in {} ms",
                    operation_name,
                    attempt,
                    max_attempts,
                    e,
                    policy.delay_ms
                );
                delay.wait(policy.delay_ms).await;
                attempt += 1;
            }
            Err(e) => {
                log::error!(
                    "{} failed after {} attempts: {}",
                    operation_name,
                    attempt,
                    e
                );
                return Err(Exhausted { attempts: attempt, last: e });
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingDelay;
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_first_success_does_not_wait() {
        let delay = RecordingDelay::default();
        let result: Result<u32, Exhausted<String>> =
            block_on(retry_fixed(RetryPolicy::default(), &delay, "op", |_| async {
                Ok(5)
            }));
        assert_eq!(result, Ok(5));
        assert!(delay.waits.borrow().is_empty());
    }

    #[test]
    fn test_gives_up_after_max_attempts_with_fixed_delay() {
        let delay = RecordingDelay::default();
        let mut calls = 0;
        let result: Result<(), Exhausted<String>> =
            block_on(retry_fixed(RetryPolicy::default(), &delay, "op", |n| {
                calls += 1;
                async move { Err(format!("boom {}", n)) }
            }));
        assert_eq!(calls, 3);
        assert_eq!(
            result,
            Err(Exhausted {
                attempts: 3,
                last: "boom 3".to_string()
            })
        );
        assert_eq!(*delay.waits.borrow(), vec![1000, 1000]);
    }

    #[test]
    fn test_zero_attempts_still_tries_once() {
        let delay = RecordingDelay::default();
        let policy = RetryPolicy {
            max_attempts: 0,
            delay_ms: 10,
        };
        let mut calls = 0;
        let _ = block_on(retry_fixed(policy, &delay, "op", |_| {
            calls += 1;
            async { Err::<(), _>("no") }
        }));
        assert_eq!(calls, 1);
    }
}
