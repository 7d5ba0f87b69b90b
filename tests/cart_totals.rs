use craft_storefront_wasm::domain::cart::entities::{Cart, CartLine, LineId};
use craft_storefront_wasm::domain::cart::services::CartAggregator;
use craft_storefront_wasm::domain::catalog::value_objects::{Amount, CurrencyCode};

fn line(id: &str, quantity: i64, actual: f64, compare_at: Option<f64>, currency: &str) -> CartLine {
    CartLine {
        id: LineId::from(id),
        quantity,
        unit_actual_price: Amount::from(actual),
        unit_compare_at_price: compare_at.map(Amount::from),
        currency: CurrencyCode::from(currency),
        merchandise_title: format!("Item {id}"),
    }
}

fn cart(id: &str, revision: u64, lines: Vec<CartLine>) -> Cart {
    Cart { id: id.to_string(), lines, revision }
}

#[test]
fn absent_cart_summarizes_to_zero() {
    let summary = CartAggregator::summarize(None).unwrap();

    assert!(summary.lines.is_empty());
    assert!((summary.totals.subtotal_list_price.value() - 0.0).abs() < f64::EPSILON);
    assert!((summary.totals.subtotal_actual_price.value() - 0.0).abs() < f64::EPSILON);
    assert!((summary.totals.total_discount.value() - 0.0).abs() < f64::EPSILON);
    assert_eq!(summary.totals.currency_code.value(), "INR");
}

#[test]
fn empty_cart_summarizes_to_zero() {
    let empty = cart("cart-empty", 1, Vec::new());
    let summary = CartAggregator::summarize(Some(&empty)).unwrap();

    assert!(summary.lines.is_empty());
    assert!((summary.totals.total_discount.value() - 0.0).abs() < f64::EPSILON);
    assert_eq!(summary.totals.currency_code.value(), "INR");
}

#[test]
fn discounted_line_totals() {
    let snapshot = cart("cart-1", 1, vec![line("line-1", 2, 100.0, Some(150.0), "INR")]);
    let summary = CartAggregator::summarize(Some(&snapshot)).unwrap();

    assert!((summary.totals.subtotal_list_price.value() - 300.0).abs() < f64::EPSILON);
    assert!((summary.totals.subtotal_actual_price.value() - 200.0).abs() < f64::EPSILON);
    assert!((summary.totals.total_discount.value() - 100.0).abs() < f64::EPSILON);
    assert_eq!(summary.totals.currency_code.value(), "INR");
    assert_eq!(summary.lines.len(), 1);
}

#[test]
fn mixed_discounted_and_full_price_lines() {
    let snapshot = cart(
        "cart-2",
        1,
        vec![
            line("line-a", 1, 50.0, None, "INR"),
            line("line-b", 3, 20.0, Some(30.0), "INR"),
        ],
    );
    let summary = CartAggregator::summarize(Some(&snapshot)).unwrap();

    assert!((summary.totals.subtotal_list_price.value() - 140.0).abs() < f64::EPSILON);
    assert!((summary.totals.subtotal_actual_price.value() - 110.0).abs() < f64::EPSILON);
    assert!((summary.totals.total_discount.value() - 30.0).abs() < f64::EPSILON);
}

#[test]
fn line_without_compare_at_contributes_equally() {
    let snapshot = cart("cart-3", 1, vec![line("line-1", 4, 75.0, None, "INR")]);
    let summary = CartAggregator::summarize(Some(&snapshot)).unwrap();

    assert!(
        (summary.totals.subtotal_list_price.value()
            - summary.totals.subtotal_actual_price.value())
        .abs()
            < f64::EPSILON
    );
    assert!((summary.totals.total_discount.value() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn zero_and_negative_quantities_propagate() {
    let snapshot = cart(
        "cart-4",
        1,
        vec![
            line("line-zero", 0, 40.0, Some(60.0), "INR"),
            line("line-negative", -1, 10.0, None, "INR"),
        ],
    );
    let summary = CartAggregator::summarize(Some(&snapshot)).unwrap();

    // quantity is not validated here; it flows straight into the sums
    assert!((summary.totals.subtotal_actual_price.value() - -10.0).abs() < f64::EPSILON);
    assert!((summary.totals.subtotal_list_price.value() - -10.0).abs() < f64::EPSILON);
}

#[test]
fn discount_is_the_subtotal_difference() {
    let snapshot = cart(
        "cart-5",
        1,
        vec![
            line("line-a", 2, 199.0, Some(249.0), "INR"),
            line("line-b", 1, 450.0, None, "INR"),
            line("line-c", 5, 80.0, Some(95.0), "INR"),
        ],
    );
    let totals = CartAggregator::summarize(Some(&snapshot)).unwrap().totals;

    assert_eq!(
        totals.total_discount.value(),
        totals.subtotal_list_price.value() - totals.subtotal_actual_price.value()
    );
}
