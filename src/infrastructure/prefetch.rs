//! One-shot cancellable timer used for background prefetch scheduling.

use gloo_timers::callback::Timeout;

/// Cancellation handle for a scheduled prefetch.
///
/// Each handle owns its own timer; there is no shared timer state.
/// Dropping the handle also cancels the callback, so the consuming view
/// keeps it alive (and cancels it explicitly on teardown) or calls
/// `forget` to let the timer run unsupervised.
pub struct PrefetchHandle {
    timeout: Timeout,
}

impl PrefetchHandle {
    /// Prevent the callback from running if the delay has not yet
    /// elapsed.
    pub fn cancel(self) {
        self.timeout.cancel();
    }

    /// Detach: the callback fires even after the handle is gone.
    pub fn forget(self) {
        self.timeout.forget();
    }
}

/// Schedule `f` to run once, no earlier than `delay_ms` from now.
pub fn schedule_prefetch<F>(delay_ms: u32, f: F) -> PrefetchHandle
where
    F: FnOnce() + 'static,
{
    PrefetchHandle { timeout: Timeout::new(delay_ms, f) }
}
