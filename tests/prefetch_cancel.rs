#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use craft_storefront_wasm::infrastructure::prefetch::schedule_prefetch;
use gloo_timers::future::sleep;
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test(async)]
async fn canceled_prefetch_never_fires() {
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();

    let handle = schedule_prefetch(10, move || flag.set(true));
    handle.cancel();

    sleep(Duration::from_millis(50)).await;
    assert!(!fired.get());
}

#[wasm_bindgen_test(async)]
async fn prefetch_fires_once_after_the_delay() {
    let fired = Rc::new(Cell::new(0_u32));
    let counter = fired.clone();

    let handle = schedule_prefetch(10, move || counter.set(counter.get() + 1));
    handle.forget();
    assert_eq!(fired.get(), 0);

    sleep(Duration::from_millis(50)).await;
    assert_eq!(fired.get(), 1);

    sleep(Duration::from_millis(50)).await;
    assert_eq!(fired.get(), 1);
}
