use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredState {
    Armed,
    Fired,
    Cancelled,
}

/// A callback scheduled on the tokio runtime that can be cancelled before it fires.
///
/// Firing and cancelling take the same lock, so once [`DeferredAction::cancel`]
/// returns the callback is either finished or will never run.
pub struct DeferredAction {
    gate: Arc<Mutex<DeferredState>>,
    handle: JoinHandle<()>,
}

fn lock(gate: &Mutex<DeferredState>) -> MutexGuard<'_, DeferredState> {
    gate.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl DeferredAction {
    pub fn arm<F>(delay: Duration, action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let gate = Arc::new(Mutex::new(DeferredState::Armed));
        let task_gate = Arc::clone(&gate);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = lock(&task_gate);
            if *state == DeferredState::Armed {
                action();
                *state = DeferredState::Fired;
            }
        });

        Self { gate, handle }
    }

    pub fn state(&self) -> DeferredState {
        *lock(&self.gate)
    }

    /// Returns `true` if the action had already fired.
    pub fn cancel(self) -> bool {
        self.disarm()
    }

    fn disarm(&self) -> bool {
        let fired = {
            let mut state = lock(&self.gate);
            match *state {
                DeferredState::Fired => true,
                _ => {
                    *state = DeferredState::Cancelled;
                    false
                }
            }
        };
        self.handle.abort();
        fired
    }
}

// Dropping the handle disarms the action too; a forgotten timer never fires.
impl Drop for DeferredAction {
    fn drop(&mut self) {
        self.disarm();
    }
}
