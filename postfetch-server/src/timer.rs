use std::time::Duration;

use postfetch_engine::timer::{Callback, Timer};
use tokio::runtime::{Handle, TryCurrentError};

/// [`Timer`] that sleeps on a Tokio runtime, one spawned task per callback.
#[derive(Debug, Clone)]
pub struct TokioTimer {
    handle: Handle,
}

impl TokioTimer {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Binds to the runtime the caller is running on.
    pub fn current() -> Result<Self, TryCurrentError> {
        Handle::try_current().map(Self::new)
    }
}

impl Timer for TokioTimer {
    fn schedule(&self, delay: Duration, callback: Callback) {
        tracing::trace!(?delay, "scheduling callback");
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
    }
}
