pub mod load_collection;
pub mod load_content;

pub use load_collection::*;
pub use load_content::*;

use crate::infrastructure::prefetch::{PrefetchHandle, schedule_prefetch};
use crate::perceived::PerceivedPerformance;

/// Gate and schedule a background prefetch for the current data set.
///
/// Returns `None` when the controller's options or an empty data set
/// rule the prefetch out; otherwise the caller owns the handle and is
/// responsible for canceling it when the view goes away or the inputs
/// change before the delay elapses.
pub fn schedule_background_prefetch<T, F>(
    controller: &PerceivedPerformance<T>,
    data_len: usize,
    f: F,
) -> Option<PrefetchHandle>
where
    T: Clone,
    F: FnOnce() + 'static,
{
    if !controller.wants_prefetch(data_len) {
        return None;
    }
    Some(schedule_prefetch(controller.options().prefetch_delay_ms, f))
}
