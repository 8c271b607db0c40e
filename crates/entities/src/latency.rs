//! Artificial delay standing in for a remote round trip.

use std::time::Duration;

/// Sleeps for `delay`, skipping the timer entirely when it is zero.
pub async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_waits_out_the_delay() {
        let start = tokio::time::Instant::now();
        simulate_latency(Duration::from_millis(800)).await;
        assert_eq!(start.elapsed(), Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_returns_immediately() {
        let start = tokio::time::Instant::now();
        simulate_latency(Duration::ZERO).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
