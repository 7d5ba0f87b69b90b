use craft_storefront_wasm::perceived::{PerceivedOptions, PerceivedPerformance};

#[test]
fn snapshot_reflects_the_transition_state() {
    let data = ["a", "b"];
    let mut ctrl = PerceivedPerformance::new(PerceivedOptions::default());

    ctrl.observe(&data, true, 1_000.0);
    let snapshot = ctrl.snapshot(&[], 1_150.0);

    assert!(snapshot.is_transitioning);
    assert_eq!(snapshot.display_data, vec!["a", "b"]);
    assert_eq!(snapshot.previous_data, vec!["a", "b"]);
    assert_eq!(snapshot.transition_start_ms, 1_000.0);
    assert_eq!(snapshot.transition_progress, 0.5);
}

#[test]
fn idle_snapshot_shows_live_data() {
    let data = ["a"];
    let ctrl = PerceivedPerformance::<&str>::new(PerceivedOptions::default());

    let snapshot = ctrl.snapshot(&data, 9_999.0);

    assert!(!snapshot.is_transitioning);
    assert_eq!(snapshot.display_data, vec!["a"]);
    assert_eq!(snapshot.transition_start_ms, 0.0);
    assert_eq!(snapshot.transition_progress, 0.0);
}

#[test]
fn prefetch_gating_follows_options_and_data() {
    let enabled = PerceivedPerformance::<&str>::new(PerceivedOptions::default());
    assert!(enabled.wants_prefetch(3));
    assert!(!enabled.wants_prefetch(0));
    assert_eq!(enabled.options().prefetch_delay_ms, 1_000);

    let disabled = PerceivedPerformance::<&str>::new(PerceivedOptions {
        optimistic_updates: true,
        background_prefetch: false,
        prefetch_delay_ms: 1_000,
    });
    assert!(!disabled.wants_prefetch(3));
}
