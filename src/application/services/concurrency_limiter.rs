use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;

/// Bounds how many inference runs execute at once. Waiters are admitted in FIFO order;
/// a slot is released when the submitted future finishes, whatever its result.
#[derive(Debug, Clone)]
pub struct ConcurrencyLimiter {
    permits: Arc<Semaphore>,
    capacity: usize,
}

impl ConcurrencyLimiter {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            permits: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Queued and future submissions fail with [`LimiterClosed`]; running tasks finish.
    pub fn close(&self) {
        self.permits.close();
    }

    pub fn is_closed(&self) -> bool {
        self.permits.is_closed()
    }

    pub async fn submit<F, T>(&self, task: F) -> Result<T, LimiterClosed>
    where
        F: Future<Output = T>,
    {
        let _permit = self.permits.acquire().await.map_err(|_| LimiterClosed)?;
        tracing::debug!(
            available = self.permits.available_permits(),
            capacity = self.capacity,
            "Inference slot acquired"
        );
        Ok(task.await)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("concurrency limiter is closed")]
pub struct LimiterClosed;
