use craft_storefront_wasm::domain::cart::entities::{Cart, CartLine, LineId};
use craft_storefront_wasm::domain::cart::services::TotalsCache;
use craft_storefront_wasm::domain::catalog::value_objects::{Amount, CurrencyCode};

fn line(id: &str, quantity: i64, actual: f64) -> CartLine {
    CartLine {
        id: LineId::from(id),
        quantity,
        unit_actual_price: Amount::from(actual),
        unit_compare_at_price: None,
        currency: CurrencyCode::from("INR"),
        merchandise_title: format!("Item {id}"),
    }
}

#[test]
fn same_revision_yields_identical_summaries() {
    let snapshot =
        Cart { id: "cart-1".to_string(), lines: vec![line("line-1", 2, 120.0)], revision: 7 };
    let mut cache = TotalsCache::new();

    let first = cache.summarize(Some(&snapshot)).unwrap();
    let second = cache.summarize(Some(&snapshot)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn cache_is_keyed_on_revision_not_content() {
    let mut snapshot =
        Cart { id: "cart-1".to_string(), lines: vec![line("line-1", 1, 100.0)], revision: 1 };
    let mut cache = TotalsCache::new();

    let before = cache.summarize(Some(&snapshot)).unwrap();
    assert_eq!(before.lines.len(), 1);

    // Content changes without a revision bump are not observed; the
    // epoch is the invalidation signal.
    snapshot.lines.push(line("line-2", 1, 50.0));
    let stale = cache.summarize(Some(&snapshot)).unwrap();
    assert_eq!(stale.lines.len(), 1);
    assert_eq!(stale, before);

    snapshot.revision = 2;
    let fresh = cache.summarize(Some(&snapshot)).unwrap();
    assert_eq!(fresh.lines.len(), 2);
    assert!((fresh.totals.subtotal_actual_price.value() - 150.0).abs() < f64::EPSILON);
}

#[test]
fn invalidate_forces_recomputation() {
    let mut snapshot =
        Cart { id: "cart-1".to_string(), lines: vec![line("line-1", 1, 100.0)], revision: 1 };
    let mut cache = TotalsCache::new();

    cache.summarize(Some(&snapshot)).unwrap();
    snapshot.lines.push(line("line-2", 1, 25.0));

    cache.invalidate();
    let fresh = cache.summarize(Some(&snapshot)).unwrap();
    assert_eq!(fresh.lines.len(), 2);
}

#[test]
fn absent_cart_is_cached_too() {
    let mut cache = TotalsCache::new();

    let first = cache.summarize(None).unwrap();
    let second = cache.summarize(None).unwrap();

    assert_eq!(first, second);
    assert!(first.lines.is_empty());
}

#[test]
fn different_cart_id_misses_the_cache() {
    let a = Cart { id: "cart-a".to_string(), lines: vec![line("line-1", 1, 10.0)], revision: 1 };
    let b = Cart { id: "cart-b".to_string(), lines: vec![line("line-1", 3, 10.0)], revision: 1 };
    let mut cache = TotalsCache::new();

    cache.summarize(Some(&a)).unwrap();
    let summary_b = cache.summarize(Some(&b)).unwrap();

    assert!((summary_b.totals.subtotal_actual_price.value() - 30.0).abs() < f64::EPSILON);
}
