// src/infrastructure/time.rs
use crate::application::ports::time::Scheduler;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Default, Clone)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn delay(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
