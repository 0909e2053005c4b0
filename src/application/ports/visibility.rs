// src/application/ports/visibility.rs
use std::sync::Arc;

pub type VisibilityCallback = Arc<dyn Fn() + Send + Sync>;

/// Viewport-visibility observation supplied by the rendering environment.
/// Subscribing registers interest in the disclosure sentinel entering view.
pub trait VisibilityObserver: Send + Sync {
    fn subscribe(&self, on_visible: VisibilityCallback) -> SubscriptionHandle;
}

/// Scoped subscription: released explicitly or on drop, so a stale callback
/// cannot fire against superseded state.
pub struct SubscriptionHandle {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl SubscriptionHandle {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.run_release();
    }
}
