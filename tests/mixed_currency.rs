use craft_storefront_wasm::domain::cart::entities::{Cart, CartLine, LineId};
use craft_storefront_wasm::domain::cart::services::{CartAggregator, TotalsCache};
use craft_storefront_wasm::domain::catalog::value_objects::{Amount, CurrencyCode};
use craft_storefront_wasm::domain::errors::ValidationError;

fn line(id: &str, actual: f64, currency: &str) -> CartLine {
    CartLine {
        id: LineId::from(id),
        quantity: 1,
        unit_actual_price: Amount::from(actual),
        unit_compare_at_price: None,
        currency: CurrencyCode::from(currency),
        merchandise_title: format!("Item {id}"),
    }
}

#[test]
fn mixed_currencies_are_rejected() {
    let snapshot = Cart {
        id: "cart-1".to_string(),
        lines: vec![line("line-inr", 500.0, "INR"), line("line-usd", 6.0, "USD")],
        revision: 1,
    };

    let error = CartAggregator::summarize(Some(&snapshot)).unwrap_err();
    assert_eq!(
        error,
        ValidationError::MixedCurrencies { first: "INR".to_string(), second: "USD".to_string() }
    );
}

#[test]
fn uniform_currency_passes() {
    let snapshot = Cart {
        id: "cart-1".to_string(),
        lines: vec![line("line-a", 500.0, "INR"), line("line-b", 250.0, "inr")],
        revision: 1,
    };

    let summary = CartAggregator::summarize(Some(&snapshot)).unwrap();
    assert_eq!(summary.totals.currency_code.value(), "INR");
}

#[test]
fn validation_failures_are_not_cached() {
    let mut snapshot = Cart {
        id: "cart-1".to_string(),
        lines: vec![line("line-inr", 500.0, "INR"), line("line-usd", 6.0, "USD")],
        revision: 1,
    };
    let mut cache = TotalsCache::new();

    assert!(cache.summarize(Some(&snapshot)).is_err());

    // Once the backend sends a coherent cart at a new revision, the
    // cache serves it normally.
    snapshot.lines.pop();
    snapshot.revision = 2;
    let summary = cache.summarize(Some(&snapshot)).unwrap();
    assert_eq!(summary.lines.len(), 1);
    assert_eq!(summary.totals.currency_code.value(), "INR");
}
