pub use super::value_objects::{Amount, CurrencyCode, Handle, Money};
use serde::{Deserialize, Serialize};

/// Domain entity - product image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    pub alt_text: String,
}

impl ProductImage {
    pub fn new(url: String, alt_text: String) -> Self {
        Self { url, alt_text }
    }
}

/// Domain entity - purchasable product variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: String,
    pub title: String,
    pub price: Money,
    pub compare_at_price: Option<Money>,
    pub available: bool,
}

impl ProductVariant {
    pub fn is_discounted(&self) -> bool {
        self.compare_at_price
            .as_ref()
            .map(|compare_at| compare_at.value() > self.price.value())
            .unwrap_or(false)
    }

    /// Per-unit saving against the compare-at reference price.
    pub fn discount_amount(&self) -> Amount {
        match &self.compare_at_price {
            Some(compare_at) => Amount::from(compare_at.value() - self.price.value()),
            None => Amount::zero(),
        }
    }
}

/// Domain entity - Product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub handle: Handle,
    pub title: String,
    pub description: String,
    pub images: Vec<ProductImage>,
    pub variants: Vec<ProductVariant>,
    pub tags: Vec<String>,
}

impl Product {
    pub fn featured_image(&self) -> Option<&ProductImage> {
        self.images.first()
    }

    /// Cheapest variant price, used on collection cards.
    pub fn min_price(&self) -> Option<&Money> {
        self.variants
            .iter()
            .map(|v| &v.price)
            .min_by(|a, b| a.value().partial_cmp(&b.value()).unwrap_or(std::cmp::Ordering::Equal))
    }

    pub fn is_discounted(&self) -> bool {
        self.variants.iter().any(|v| v.is_discounted())
    }

    pub fn is_available(&self) -> bool {
        self.variants.iter().any(|v| v.available)
    }
}

/// Domain entity - curated collection of products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub handle: Handle,
    pub title: String,
    pub products: Vec<Product>,
}

impl Collection {
    pub fn new(handle: Handle, title: String) -> Self {
        Self { handle, title, products: Vec::new() }
    }

    pub fn count(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn discounted_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_discounted())
    }
}
