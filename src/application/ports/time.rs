// src/application/ports/time.rs
use async_trait::async_trait;
use std::time::Duration;

/// Injectable delay dependency so tests can stand in for real time.
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn delay(&self, duration: Duration);
}
