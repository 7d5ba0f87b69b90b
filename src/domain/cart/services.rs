use crate::domain::cart::entities::{Cart, CartSummary, CartTotals};
use crate::domain::catalog::value_objects::{Amount, CurrencyCode};
use crate::domain::errors::ValidationError;

/// Domain service deriving display totals from a cart snapshot.
///
/// Pure function of its input: no side effects, no internal state. The
/// only rejected input is a cart mixing currencies across lines; every
/// other cart, including an absent one, produces a summary.
pub struct CartAggregator;

impl CartAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Currency uniformity check. Empty carts pass and report no
    /// currency; the caller falls back to the storefront default.
    pub fn cart_currency(cart: &Cart) -> Result<Option<CurrencyCode>, ValidationError> {
        let mut seen: Option<&CurrencyCode> = None;
        for line in &cart.lines {
            match seen {
                None => seen = Some(&line.currency),
                Some(code) if *code != line.currency => {
                    return Err(ValidationError::MixedCurrencies {
                        first: code.value().to_string(),
                        second: line.currency.value().to_string(),
                    });
                }
                Some(_) => {}
            }
        }
        Ok(seen.cloned())
    }

    /// Derive totals and the flattened line list.
    ///
    /// An absent cart yields zero totals, the default currency and an
    /// empty line list. Summation is plain floating-point accumulation
    /// over the string-decoded amounts; NaN from malformed upstream data
    /// propagates through.
    pub fn summarize(cart: Option<&Cart>) -> Result<CartSummary, ValidationError> {
        let Some(cart) = cart else {
            return Ok(CartSummary::empty());
        };

        let currency = Self::cart_currency(cart)?.unwrap_or_default();

        let mut subtotal_list = 0.0_f64;
        let mut subtotal_actual = 0.0_f64;
        for line in &cart.lines {
            subtotal_list += line.line_list_price();
            subtotal_actual += line.line_actual_price();
        }

        Ok(CartSummary {
            totals: CartTotals {
                subtotal_list_price: Amount::from(subtotal_list),
                subtotal_actual_price: Amount::from(subtotal_actual),
                total_discount: Amount::from(subtotal_list - subtotal_actual),
                currency_code: currency,
            },
            lines: cart.lines.clone(),
        })
    }
}

impl Default for CartAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Revision-keyed memo for cart summaries.
///
/// Instance-owned. Invalidation is explicit: the key is the cart's
/// `(id, revision)` epoch, so two calls at the same revision return the
/// same cached summary without recomputation, and a revision bump
/// forces a fresh derivation. Validation failures are not cached.
pub struct TotalsCache {
    key: Option<(String, u64)>,
    cached: Option<CartSummary>,
}

impl TotalsCache {
    pub fn new() -> Self {
        Self { key: None, cached: None }
    }

    pub fn summarize(&mut self, cart: Option<&Cart>) -> Result<CartSummary, ValidationError> {
        let key = cart.map(|c| (c.id.clone(), c.revision));
        if self.key == key {
            if let Some(hit) = &self.cached {
                return Ok(hit.clone());
            }
        }

        let summary = CartAggregator::summarize(cart)?;
        self.key = key;
        self.cached = Some(summary.clone());
        Ok(summary)
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.cached = None;
    }
}

impl Default for TotalsCache {
    fn default() -> Self {
        Self::new()
    }
}
