//! Exponential backoff for connection retries.

use std::time::Duration;

/// Delay before the first retry.
pub const BASE_DELAY_MS: u64 = 5_000;

/// Ceiling applied to the exponential growth.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Calculate the delay before retry number `attempt` (1-based):
/// `min(base * 2^(attempt-1), max)`.
pub fn retry_delay(attempt: u32, base_ms: u64, max_ms: u64) -> Duration {
    if attempt == 0 {
        return Duration::from_millis(0);
    }

    let exponential_base = 2u64.saturating_pow(attempt - 1);
    let delay_ms = base_ms.saturating_mul(exponential_base);
    Duration::from_millis(delay_ms.min(max_ms))
}
