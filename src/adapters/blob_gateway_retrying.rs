//! Retry wrapper for blob gateway operations.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::domain::{AppError, StorageConfig};
use crate::ports::BlobGateway;

const DEFAULT_MAX_DELAY_MS: u64 = 30_000;
const MAX_LOG_ERROR_CHARS: usize = 512;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay_ms: u64,
    max_delay_ms: u64,
}

impl RetryPolicy {
    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay_ms: config.retry_delay_ms.max(1),
            max_delay_ms: DEFAULT_MAX_DELAY_MS.max(config.retry_delay_ms),
        }
    }

    fn delay_for_retry(&self, failed_attempt: u32) -> Duration {
        // attempt=1 -> base, attempt=2 -> base*2, attempt=3 -> base*4, capped.
        let exponent = failed_attempt.saturating_sub(1).min(6);
        let multiplier = 1_u64 << exponent;
        let backoff_ms = self.base_delay_ms.saturating_mul(multiplier).min(self.max_delay_ms);
        let jitter_ms = compute_jitter_ms(backoff_ms);
        Duration::from_millis(backoff_ms.saturating_add(jitter_ms).min(self.max_delay_ms))
    }
}

/// Gateway decorator that repeats transient failures.
pub struct RetryingBlobGateway {
    inner: Box<dyn BlobGateway>,
    policy: RetryPolicy,
}

impl RetryingBlobGateway {
    pub fn new(inner: Box<dyn BlobGateway>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    fn with_retry<T>(
        &self,
        operation: &str,
        call: impl Fn(&dyn BlobGateway) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut attempt = 1;
        loop {
            match call(self.inner.as_ref()) {
                Ok(value) => return Ok(value),
                Err(error) => {
                    if !error.is_transient() || attempt >= self.policy.max_attempts {
                        return Err(error);
                    }

                    let delay = self.policy.delay_for_retry(attempt);
                    warn!(
                        operation,
                        attempt,
                        max_attempts = self.policy.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %format_error_for_log(&error),
                        "blob storage call failed, retrying"
                    );
                    thread::sleep(delay);
                    attempt += 1;
                }
            }
        }
    }
}

impl BlobGateway for RetryingBlobGateway {
    fn ensure_container(&self) -> Result<(), AppError> {
        self.with_retry("ensure_container", |gateway| gateway.ensure_container())
    }

    fn list_object_names(&self, prefix: &str) -> Result<Vec<String>, AppError> {
        self.with_retry("list_object_names", |gateway| gateway.list_object_names(prefix))
    }

    fn upload(&self, name: &str, bytes: &[u8], overwrite: bool) -> Result<(), AppError> {
        self.with_retry("upload", |gateway| gateway.upload(name, bytes, overwrite))
    }

    fn download(&self, name: &str) -> Result<Vec<u8>, AppError> {
        self.with_retry("download", |gateway| gateway.download(name))
    }
}

fn compute_jitter_ms(backoff_ms: u64) -> u64 {
    let jitter_cap = backoff_ms / 4; // 25% jitter upper bound
    if jitter_cap == 0 {
        return 0;
    }

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.subsec_nanos() as u64)
        .unwrap_or(0);

    nanos % jitter_cap
}

fn format_error_for_log(error: &AppError) -> String {
    let input = error.to_string();
    let mut output = String::new();

    for (count, ch) in input.chars().enumerate() {
        if count >= MAX_LOG_ERROR_CHARS {
            break;
        }
        output.push(if ch.is_control() { ' ' } else { ch });
    }

    let mut compact = output.split_whitespace().collect::<Vec<_>>().join(" ");
    if input.chars().count() > MAX_LOG_ERROR_CHARS {
        compact.push_str(" [truncated]");
    }
    compact
}
