use std::time::Duration;

/// Artificial delay applied at the start of every use-case call so the dashboard
/// behaves like it talks to a remote API. Zero disables it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkLatency {
    base: Duration,
}

impl NetworkLatency {
    pub fn new(base: Duration) -> Self {
        Self { base }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub async fn pause(&self) {
        sleep_for(self.base).await;
    }

    /// Payments take twice as long as ordinary calls.
    pub async fn pause_for_payment(&self) {
        sleep_for(self.base * 2).await;
    }
}

async fn sleep_for(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn payment_pause_is_double_the_base_delay() {
        let latency = NetworkLatency::from_millis(500);

        let started = tokio::time::Instant::now();
        latency.pause().await;
        assert!(started.elapsed() >= Duration::from_millis(500));

        let started = tokio::time::Instant::now();
        latency.pause_for_payment().await;
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn zero_latency_returns_immediately() {
        NetworkLatency::none().pause_for_payment().await;
    }
}
