//! Retry with exponential backoff for embedding-provider calls.
//!
//! Delays are deterministic (no jitter): `base_delay * multiplier^(n-1)`,
//! capped at `max_delay`.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// Configuration for retry behavior. Durations (de)serialize as milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of retry attempts after the first try.
    pub max_retries: u32,
    /// Initial delay between retries.
    #[serde(with = "millis")]
    pub base_delay: Duration,
    /// Upper bound for any single delay.
    #[serde(with = "millis")]
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(4),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    pub fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Delay before retry number `attempt` (0 means the first try, no delay).
    pub fn calculate_delay(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }
        let exponential =
            self.base_delay.as_millis() as f64 * self.backoff_multiplier.powi((attempt - 1) as i32);
        let delay_ms = exponential.min(self.max_delay.as_millis() as f64) as u64;
        Duration::from_millis(delay_ms)
    }
}

/// Outcome of [`execute_with_retry_async`].
#[derive(Debug, Clone)]
pub struct RetryResult<T, E> {
    /// Final success value or the last error seen.
    pub result: Result<T, E>,
    /// Number of attempts made (1 = first try succeeded).
    pub attempts: u32,
    pub total_duration: Duration,
}

impl<T, E> RetryResult<T, E> {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }

    pub fn into_result(self) -> Result<T, E> {
        self.result
    }
}

/// Runs `operation` until it succeeds, `should_retry` rejects the error, or
/// `config.max_retries` retries have been spent.
///
/// # Example
/// ```
/// use semantic::retry::{execute_with_retry_async, RetryConfig};
/// use std::time::Duration;
///
/// # #[tokio::main] async fn main() {
/// let config = RetryConfig::default().with_base_delay(Duration::from_millis(1));
/// let outcome = execute_with_retry_async(&config, |_: &String| true, |attempt| async move {
///     if attempt == 0 { Err("transient".to_string()) } else { Ok("done") }
/// })
/// .await;
/// assert_eq!(outcome.attempts, 2);
/// # }
/// ```
pub async fn execute_with_retry_async<T, E, F, Fut, R>(
    config: &RetryConfig,
    should_retry: R,
    mut operation: F,
) -> RetryResult<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    R: Fn(&E) -> bool,
{
    let start = Instant::now();
    let mut attempt = 0u32;

    loop {
        match operation(attempt).await {
            Ok(value) => {
                return RetryResult {
                    result: Ok(value),
                    attempts: attempt + 1,
                    total_duration: start.elapsed(),
                };
            }
            Err(err) if attempt < config.max_retries && should_retry(&err) => {
                attempt += 1;
                let delay = config.calculate_delay(attempt);
                if !delay.is_zero() {
                    sleep(delay).await;
                }
            }
            Err(err) => {
                return RetryResult {
                    result: Err(err),
                    attempts: attempt + 1,
                    total_duration: start.elapsed(),
                };
            }
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn fast() -> RetryConfig {
        RetryConfig::default().with_base_delay(Duration::from_millis(1))
    }

    #[test]
    fn test_retry_config_default() {
        let config = RetryConfig::default();
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.base_delay, Duration::from_millis(250));
        assert_eq!(config.max_delay, Duration::from_secs(4));
    }

    #[test]
    fn test_calculate_delay_no_delay_on_first_attempt() {
        assert_eq!(RetryConfig::default().calculate_delay(0), Duration::ZERO);
    }

    #[test]
    fn test_calculate_delay_exponential() {
        let config = RetryConfig::default()
            .with_base_delay(Duration::from_millis(100))
            .with_backoff_multiplier(2.0);

        assert_eq!(config.calculate_delay(1), Duration::from_millis(100));
        assert_eq!(config.calculate_delay(2), Duration::from_millis(200));
        assert_eq!(config.calculate_delay(3), Duration::from_millis(400));
    }

    #[test]
    fn test_calculate_delay_respects_max() {
        let config = RetryConfig::default()
            .with_base_delay(Duration::from_secs(1))
            .with_max_delay(Duration::from_millis(500))
            .with_backoff_multiplier(10.0);
        assert_eq!(config.calculate_delay(3), Duration::from_millis(500));
    }

    #[test]
    fn test_serde_uses_milliseconds() {
        let json = serde_json::to_value(RetryConfig::default()).unwrap();
        assert_eq!(json["base_delay"], 250);
        assert_eq!(json["max_delay"], 4000);

        let parsed: RetryConfig =
            serde_json::from_value(serde_json::json!({"max_retries": 0, "base_delay": 5})).unwrap();
        assert_eq!(parsed.max_retries, 0);
        assert_eq!(parsed.base_delay, Duration::from_millis(5));
        assert_eq!(parsed.max_delay, Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_success_first_try() {
        let outcome =
            execute_with_retry_async(&fast(), |_: &String| true, |_| async { Ok::<_, String>(7) })
                .await;
        assert!(outcome.succeeded());
        assert_eq!(outcome.attempts, 1);
        assert_eq!(outcome.into_result().unwrap(), 7);
    }

    #[tokio::test]
    async fn test_eventual_success() {
        let calls = Cell::new(0u32);
        let outcome = execute_with_retry_async(&fast(), |_: &String| true, |_| {
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move {
                if n < 3 {
                    Err("transient".to_string())
                } else {
                    Ok("ok")
                }
            }
        })
        .await;
        assert!(outcome.succeeded());
        assert_eq!(outcome.attempts, 3);
    }

    #[tokio::test]
    async fn test_exhaustion_returns_last_error() {
        let outcome: RetryResult<(), String> = execute_with_retry_async(
            &fast(),
            |_| true,
            |attempt| async move { Err(format!("fail {attempt}")) },
        )
        .await;
        assert!(!outcome.succeeded());
        assert_eq!(outcome.attempts, 3);
        assert_eq!(outcome.into_result().unwrap_err(), "fail 2");
    }

    #[tokio::test]
    async fn test_non_retryable_error_stops_immediately() {
        let outcome: RetryResult<(), String> = execute_with_retry_async(
            &fast(),
            |err: &String| err != "fatal",
            |_| async { Err("fatal".to_string()) },
        )
        .await;
        assert_eq!(outcome.attempts, 1);
    }
}
