use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::AbortHandle;

/// Single-shot timer that is re-armed on every activity.
///
/// At most one pending expiry exists; arming again aborts the previous one.
#[derive(Debug, Default)]
pub(super) struct IdleTimer {
    generation: AtomicU64,
    pending: Mutex<Option<(u64, AbortHandle)>>,
}

impl IdleTimer {
    /// Run `on_expiry` after `timeout` unless cancelled or re-armed first.
    pub(super) fn arm<F>(self: &Arc<Self>, timeout: Duration, on_expiry: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("No async runtime available, idle timer not armed");
            return;
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let timer = Arc::clone(self);
        // Held across spawn so the task cannot observe a stale slot.
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        let task = runtime.spawn(async move {
            tokio::time::sleep(timeout).await;
            // Detach before running so a cancel() issued by the expiry
            // handler itself cannot abort this task mid-way.
            if timer.release(generation) {
                on_expiry.await;
            }
        });

        if let Some((_, previous)) = pending.replace((generation, task.abort_handle())) {
            previous.abort();
        }
        tracing::trace!("Idle timer armed for {:?} (generation {})", timeout, generation);
    }

    pub(super) fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((generation, handle)) = pending.take() {
            handle.abort();
            tracing::trace!("Idle timer cancelled (generation {})", generation);
        }
    }

    pub(super) fn is_armed(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn release(&self, generation: u64) -> bool {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        match pending.as_ref() {
            Some((current, _)) if *current == generation => {
                pending.take();
                true
            }
            _ => false,
        }
    }
}
