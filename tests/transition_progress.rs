use craft_storefront_wasm::perceived::{
    PerceivedOptions, PerceivedPerformance, TRANSITION_WINDOW_MS,
};

#[test]
fn progress_ramps_over_the_window() {
    let data = ["a"];
    let mut ctrl = PerceivedPerformance::new(PerceivedOptions::default());

    ctrl.observe(&data, true, 1_000.0);

    assert_eq!(ctrl.transition_progress(1_000.0), 0.0);
    assert_eq!(ctrl.transition_progress(1_150.0), 0.5);
    assert_eq!(ctrl.transition_progress(1_000.0 + TRANSITION_WINDOW_MS), 1.0);
}

#[test]
fn progress_is_capped_at_one() {
    let data = ["a"];
    let mut ctrl = PerceivedPerformance::new(PerceivedOptions::default());

    ctrl.observe(&data, true, 1_000.0);

    assert_eq!(ctrl.transition_progress(1_400.0), 1.0);
    assert_eq!(ctrl.transition_progress(2_700.0), 1.0);
}

#[test]
fn progress_is_zero_outside_a_transition() {
    let data = ["a"];
    let mut ctrl = PerceivedPerformance::<&str>::new(PerceivedOptions::default());

    assert_eq!(ctrl.transition_progress(5_000.0), 0.0);

    ctrl.observe(&data, true, 1_000.0);
    ctrl.observe(&data, false, 1_200.0);

    assert_eq!(ctrl.transition_progress(1_250.0), 0.0);
}
