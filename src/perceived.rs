//! Perceived-performance controller for list-valued views.
//!
//! Smooths over loading-state flicker: while a refresh is in flight the
//! last successful list stays on screen instead of an empty loading
//! flash. The controller is host-agnostic - the consuming view feeds it
//! `(data, loading)` observations together with a clock reading, and
//! reads the derived display state back. It performs no I/O and never
//! fails.

/// Window over which `transition_progress` ramps from 0 to 1.
pub const TRANSITION_WINDOW_MS: f64 = 300.0;

/// Behaviour switches for one monitored view.
#[derive(Clone, Debug, PartialEq)]
pub struct PerceivedOptions {
    pub optimistic_updates: bool,
    pub background_prefetch: bool,
    pub prefetch_delay_ms: u32,
}

impl Default for PerceivedOptions {
    fn default() -> Self {
        Self { optimistic_updates: true, background_prefetch: true, prefetch_delay_ms: 1_000 }
    }
}

/// Transition state for one list-valued view.
///
/// Owned by the consuming view for its lifetime; each instance holds its
/// own transition state exclusively, nothing is shared across views.
#[derive(Clone, Debug)]
pub struct PerceivedPerformance<T: Clone> {
    options: PerceivedOptions,
    previous_data: Vec<T>,
    is_transitioning: bool,
    transition_start_ms: f64,
    was_loading: bool,
}

impl<T: Clone> PerceivedPerformance<T> {
    pub fn new(options: PerceivedOptions) -> Self {
        Self {
            options,
            previous_data: Vec::new(),
            is_transitioning: false,
            transition_start_ms: 0.0,
            was_loading: false,
        }
    }

    /// Apply one `(data, loading)` observation.
    ///
    /// Observations are applied in the order received; there is no
    /// coalescing beyond what the last observed pair dictates. Entering
    /// `loading` with non-empty data (and optimistic updates on)
    /// snapshots the data and opens a transition; leaving `loading`
    /// closes it.
    pub fn observe(&mut self, data: &[T], loading: bool, now_ms: f64) {
        if loading && !self.was_loading {
            if self.options.optimistic_updates && !data.is_empty() {
                self.previous_data = data.to_vec();
                self.is_transitioning = true;
                self.transition_start_ms = now_ms;
            }
        } else if !loading {
            self.is_transitioning = false;
            self.transition_start_ms = 0.0;
        }
        self.was_loading = loading;
    }

    /// The list to render: the previous snapshot while a refresh is in
    /// flight (and the snapshot is non-empty), the live data otherwise.
    pub fn display_data<'a>(&'a self, live: &'a [T]) -> &'a [T] {
        if self.is_transitioning && !self.previous_data.is_empty() {
            &self.previous_data
        } else {
            live
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    /// Clock reading at which the current transition opened; 0 when idle.
    pub fn transition_start_ms(&self) -> f64 {
        self.transition_start_ms
    }

    /// Normalized [0, 1] ramp over the transition window, capped at 1.
    /// Presentation timing only; gates nothing else.
    pub fn transition_progress(&self, now_ms: f64) -> f64 {
        if !self.is_transitioning {
            return 0.0;
        }
        ((now_ms - self.transition_start_ms) / TRANSITION_WINDOW_MS).min(1.0)
    }

    /// Whether a background prefetch should be scheduled for the current
    /// data set.
    pub fn wants_prefetch(&self, data_len: usize) -> bool {
        self.options.background_prefetch && data_len > 0
    }

    pub fn options(&self) -> &PerceivedOptions {
        &self.options
    }

    /// One observed view of the monitored list.
    pub fn snapshot(&self, live: &[T], now_ms: f64) -> PerceivedSnapshot<T> {
        PerceivedSnapshot {
            display_data: self.display_data(live).to_vec(),
            previous_data: self.previous_data.clone(),
            is_transitioning: self.is_transitioning,
            transition_start_ms: self.transition_start_ms,
            transition_progress: self.transition_progress(now_ms),
        }
    }
}

impl<T: Clone> Default for PerceivedPerformance<T> {
    fn default() -> Self {
        Self::new(PerceivedOptions::default())
    }
}

/// Point-in-time view of a monitored list, for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct PerceivedSnapshot<T> {
    pub display_data: Vec<T>,
    pub previous_data: Vec<T>,
    pub is_transitioning: bool,
    pub transition_start_ms: f64,
    pub transition_progress: f64,
}
