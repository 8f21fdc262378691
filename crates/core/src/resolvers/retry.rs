//! Bounded, immediate retry.

use log::info;
use std::fmt::Display;
use std::future::Future;

/// Run `operation` up to `max_attempts` times, stopping at the first success.
///
/// Attempts are sequential and never overlap. There is no delay between
/// them. When every attempt fails, the last failure is returned unchanged.
/// A budget of zero is treated as one attempt.
pub async fn retry_with_attempts<T, E, F, Fut>(max_attempts: u32, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut remaining = max_attempts.max(1);
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if remaining > 1 => {
                remaining -= 1;
                info!(
                    "Retrying external call after '{}', attempts left: {}",
                    e, remaining
                );
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails `failures` times, then answers with the attempt number.
    async fn flaky(calls: &AtomicU32, failures: u32) -> Result<u32, String> {
        let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
        if attempt <= failures {
            Err(format!("failure {}", attempt))
        } else {
            Ok(attempt)
        }
    }

    #[tokio::test]
    async fn first_success_needs_one_call() {
        let calls = AtomicU32::new(0);
        let result = retry_with_attempts(3, || flaky(&calls, 0)).await;
        assert_eq!(result, Ok(1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn recovers_within_budget() {
        let calls = AtomicU32::new(0);
        let result = retry_with_attempts(3, || flaky(&calls, 2)).await;
        assert_eq!(result, Ok(3));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhausted_budget_returns_last_failure() {
        let calls = AtomicU32::new(0);
        let result = retry_with_attempts(3, || flaky(&calls, 10)).await;
        assert_eq!(result, Err("failure 3".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn zero_budget_still_tries_once() {
        let calls = AtomicU32::new(0);
        let result = retry_with_attempts(0, || flaky(&calls, 10)).await;
        assert_eq!(result, Err("failure 1".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
