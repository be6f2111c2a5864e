//! Injectable delay source for simulated generation latency
//!
//! The mock introduces real wall-clock delay by default so calling code can
//! exercise timeout and incremental-consumption logic. Tests swap in
//! [`NoLatency`] to run the same paths without the cost.

use async_trait::async_trait;
use std::time::Duration;

/// Source of simulated latency
#[async_trait]
pub trait Latency: Send + Sync + std::fmt::Debug {
    /// Wait for the given duration
    async fn delay(&self, duration: Duration);
}

/// Real wall-clock delays via the tokio timer (default)
#[derive(Debug, Clone, Default)]
pub struct TokioLatency;

#[async_trait]
impl Latency for TokioLatency {
    async fn delay(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Zero-cost delays for tests
#[derive(Debug, Clone, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn delay(&self, _duration: Duration) {}
}
