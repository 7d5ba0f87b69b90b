pub use crate::domain::catalog::value_objects::{Amount, CurrencyCode};
use derive_more::{Deref, DerefMut, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Value Object - line identifier, unique within one cart snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash, From, Into, Deref, DerefMut, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct LineId(String);

impl LineId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LineId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Domain entity - one product-variant-and-quantity entry in the cart.
///
/// Quantity is accepted as-is; the API contract says positive, but zero
/// and negative values propagate into the sums rather than being
/// rejected here. A present compare-at price shares the line's currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: LineId,
    pub quantity: i64,
    pub unit_actual_price: Amount,
    pub unit_compare_at_price: Option<Amount>,
    pub currency: CurrencyCode,
    pub merchandise_title: String,
}

impl CartLine {
    /// Line contribution at the pre-discount reference price. Lines
    /// without a compare-at price fall back to the actual price.
    pub fn line_list_price(&self) -> f64 {
        self.unit_compare_at_price.unwrap_or(self.unit_actual_price).value()
            * self.quantity as f64
    }

    /// Line contribution at the current sale price.
    pub fn line_actual_price(&self) -> f64 {
        self.unit_actual_price.value() * self.quantity as f64
    }
}

/// Domain entity - cart snapshot.
///
/// `revision` is a content epoch owned by whoever holds the snapshot:
/// every refresh or mutation installs a higher revision, and totals
/// memoization is keyed on it (never on reference identity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: String,
    pub lines: Vec<CartLine>,
    pub revision: u64,
}

impl Cart {
    pub fn new(id: String) -> Self {
        Self { id, lines: Vec::new(), revision: 0 }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

/// Derived display totals. Recomputed from the cart snapshot, never
/// mutated in place; `total_discount` equals
/// `subtotal_list_price - subtotal_actual_price` by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal_list_price: Amount,
    pub subtotal_actual_price: Amount,
    pub total_discount: Amount,
    pub currency_code: CurrencyCode,
}

impl CartTotals {
    pub fn zero() -> Self {
        Self {
            subtotal_list_price: Amount::zero(),
            subtotal_actual_price: Amount::zero(),
            total_discount: Amount::zero(),
            currency_code: CurrencyCode::default(),
        }
    }

    pub fn has_discount(&self) -> bool {
        self.total_discount.value() > 0.0
    }
}

/// Totals plus the flattened line list they were computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    pub totals: CartTotals,
    pub lines: Vec<CartLine>,
}

impl CartSummary {
    /// What an absent cart summarizes to.
    pub fn empty() -> Self {
        Self { totals: CartTotals::zero(), lines: Vec::new() }
    }
}

impl Default for CartSummary {
    fn default() -> Self {
        Self::empty()
    }
}
