use derive_more::{Constructor, Deref, DerefMut, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - decimal money amount.
///
/// The commerce API encodes money as decimal strings; amounts are parsed
/// into `f64` and accumulated with floating-point arithmetic. A malformed
/// string parses to NaN and flows into derived totals, so upstream data
/// problems surface as a visibly broken total instead of disappearing.
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct Amount(f64);

impl Amount {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Parse the API's decimal-string encoding.
    pub fn parse_decimal(raw: &str) -> Self {
        Self(raw.trim().parse::<f64>().unwrap_or(f64::NAN))
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - ISO 4217 currency code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, DerefMut, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: String) -> Result<Self, String> {
        if code.is_empty() {
            return Err("Currency code cannot be empty".to_string());
        }
        Ok(Self(code.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CurrencyCode {
    fn from(value: &str) -> Self {
        Self(value.to_uppercase())
    }
}

impl Default for CurrencyCode {
    /// The brand sells from India; INR is the storefront's home currency.
    fn default() -> Self {
        Self("INR".to_string())
    }
}

/// Value Object - amount plus currency, as it appears on API price fields
#[derive(Debug, Clone, PartialEq, Constructor, Serialize, Deserialize)]
pub struct Money {
    pub amount: Amount,
    pub currency: CurrencyCode,
}

impl Money {
    pub fn zero(currency: CurrencyCode) -> Self {
        Self { amount: Amount::zero(), currency }
    }

    pub fn value(&self) -> f64 {
        self.amount.value()
    }
}

/// Value Object - URL slug identifying a product or collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, DerefMut, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Handle(String);

impl Handle {
    pub fn new(handle: String) -> Result<Self, String> {
        if handle.is_empty() {
            return Err("Handle cannot be empty".to_string());
        }
        Ok(Self(handle.to_lowercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Handle {
    fn from(value: &str) -> Self {
        Self(value.to_lowercase())
    }
}

/// Value Object - sort keys accepted by the product connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum ProductSort {
    #[strum(serialize = "FEATURED")]
    #[serde(rename = "FEATURED")]
    Featured,

    #[strum(serialize = "PRICE_ASC")]
    #[serde(rename = "PRICE_ASC")]
    PriceAscending,

    #[strum(serialize = "PRICE_DESC")]
    #[serde(rename = "PRICE_DESC")]
    PriceDescending,

    #[strum(serialize = "NEWEST")]
    #[serde(rename = "NEWEST")]
    Newest,
}

impl ProductSort {
    pub fn to_query_str(&self) -> &str {
        self.as_ref()
    }
}
