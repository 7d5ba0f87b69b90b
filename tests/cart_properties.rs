use craft_storefront_wasm::domain::cart::entities::{Cart, CartLine, LineId};
use craft_storefront_wasm::domain::cart::services::CartAggregator;
use craft_storefront_wasm::domain::catalog::value_objects::{Amount, CurrencyCode};
use quickcheck_macros::quickcheck;

/// Build a single-currency cart from integer paise to keep the inputs
/// well-formed decimals.
fn cart_from(entries: &[(u8, u32, Option<u32>)]) -> Cart {
    let lines = entries
        .iter()
        .enumerate()
        .map(|(index, (quantity, actual_paise, compare_at_paise))| CartLine {
            id: LineId::from(format!("line-{index}").as_str()),
            quantity: *quantity as i64,
            unit_actual_price: Amount::from(*actual_paise as f64 / 100.0),
            unit_compare_at_price: compare_at_paise.map(|paise| Amount::from(paise as f64 / 100.0)),
            currency: CurrencyCode::from("INR"),
            merchandise_title: format!("Item {index}"),
        })
        .collect();
    Cart { id: "cart-prop".to_string(), lines, revision: 1 }
}

#[quickcheck]
fn discount_is_always_the_subtotal_difference(entries: Vec<(u8, u32, Option<u32>)>) -> bool {
    let totals = CartAggregator::summarize(Some(&cart_from(&entries))).unwrap().totals;
    totals.total_discount.value()
        == totals.subtotal_list_price.value() - totals.subtotal_actual_price.value()
}

#[quickcheck]
fn no_compare_at_means_no_discount(entries: Vec<(u8, u32)>) -> bool {
    let entries: Vec<(u8, u32, Option<u32>)> =
        entries.into_iter().map(|(quantity, paise)| (quantity, paise, None)).collect();
    let totals = CartAggregator::summarize(Some(&cart_from(&entries))).unwrap().totals;
    totals.total_discount.value() == 0.0
}

#[quickcheck]
fn aggregation_is_deterministic(entries: Vec<(u8, u32, Option<u32>)>) -> bool {
    let snapshot = cart_from(&entries);
    let first = CartAggregator::summarize(Some(&snapshot)).unwrap();
    let second = CartAggregator::summarize(Some(&snapshot)).unwrap();
    first == second
}

#[quickcheck]
fn line_count_is_preserved(entries: Vec<(u8, u32, Option<u32>)>) -> bool {
    let snapshot = cart_from(&entries);
    let summary = CartAggregator::summarize(Some(&snapshot)).unwrap();
    summary.lines.len() == snapshot.lines.len()
}
