//! Wire-shape DTOs for the commerce GraphQL API and their conversions
//! into domain types. Money arrives string-encoded; malformed amounts
//! become NaN on conversion rather than dropping the line.

use serde::{Deserialize, Serialize};

use crate::domain::cart::entities::{Cart, CartLine, LineId};
use crate::domain::catalog::entities::{Collection, Product, ProductImage, ProductVariant};
use crate::domain::catalog::value_objects::{Amount, CurrencyCode, Handle, Money};

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<D> {
    pub data: Option<D>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Paginated connection wrapper (`edges` / `node`)
#[derive(Debug, Deserialize)]
pub struct Connection<N> {
    pub edges: Vec<Edge<N>>,
}

#[derive(Debug, Deserialize)]
pub struct Edge<N> {
    pub node: N,
}

impl<N> Connection<N> {
    pub fn into_nodes(self) -> Vec<N> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

/// DTO for string-encoded money
#[derive(Debug, Clone, Deserialize)]
pub struct MoneyDto {
    pub amount: String,
    #[serde(rename = "currencyCode")]
    pub currency_code: String,
}

impl MoneyDto {
    pub fn to_domain(&self) -> Money {
        Money::new(
            Amount::parse_decimal(&self.amount),
            CurrencyCode::from(self.currency_code.as_str()),
        )
    }
}

// ---- cart ----

#[derive(Debug, Deserialize)]
pub struct CartData {
    pub cart: Option<CartDto>,
}

#[derive(Debug, Deserialize)]
pub struct CartCreateData {
    #[serde(rename = "cartCreate")]
    pub cart_create: CartPayloadDto,
}

#[derive(Debug, Deserialize)]
pub struct CartLinesAddData {
    #[serde(rename = "cartLinesAdd")]
    pub payload: CartPayloadDto,
}

#[derive(Debug, Deserialize)]
pub struct CartLinesUpdateData {
    #[serde(rename = "cartLinesUpdate")]
    pub payload: CartPayloadDto,
}

#[derive(Debug, Deserialize)]
pub struct CartLinesRemoveData {
    #[serde(rename = "cartLinesRemove")]
    pub payload: CartPayloadDto,
}

/// Mutation payload: the updated cart (absent when the mutation failed
/// server-side)
#[derive(Debug, Deserialize)]
pub struct CartPayloadDto {
    pub cart: Option<CartDto>,
}

#[derive(Debug, Deserialize)]
pub struct CartDto {
    pub id: String,
    pub lines: Connection<CartLineDto>,
}

#[derive(Debug, Deserialize)]
pub struct CartLineDto {
    pub id: String,
    pub quantity: i64,
    pub merchandise: MerchandiseDto,
    pub cost: LineCostDto,
}

#[derive(Debug, Deserialize)]
pub struct MerchandiseDto {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct LineCostDto {
    #[serde(rename = "amountPerQuantity")]
    pub amount_per_quantity: MoneyDto,
    #[serde(rename = "compareAtAmountPerQuantity")]
    pub compare_at_amount_per_quantity: Option<MoneyDto>,
}

impl CartDto {
    /// Convert into the domain snapshot. The revision epoch belongs to
    /// whoever installs the snapshot, so it starts at 0 here.
    pub fn to_domain(self) -> Cart {
        let lines = self
            .lines
            .into_nodes()
            .into_iter()
            .map(|line| line.to_domain())
            .collect();
        Cart { id: self.id, lines, revision: 0 }
    }
}

impl CartLineDto {
    pub fn to_domain(self) -> CartLine {
        let unit = self.cost.amount_per_quantity.to_domain();
        CartLine {
            id: LineId::from(self.id.as_str()),
            quantity: self.quantity,
            unit_actual_price: unit.amount,
            unit_compare_at_price: self
                .cost
                .compare_at_amount_per_quantity
                .as_ref()
                .map(|money| Amount::parse_decimal(&money.amount)),
            currency: unit.currency,
            merchandise_title: self.merchandise.title,
        }
    }
}

// ---- catalog ----

#[derive(Debug, Deserialize)]
pub struct CollectionData {
    pub collection: Option<CollectionDto>,
}

#[derive(Debug, Deserialize)]
pub struct CollectionDto {
    pub handle: String,
    pub title: String,
    pub products: Connection<ProductDto>,
}

#[derive(Debug, Deserialize)]
pub struct ProductDto {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub images: Connection<ImageDto>,
    pub variants: Connection<VariantDto>,
}

#[derive(Debug, Deserialize)]
pub struct ImageDto {
    pub url: String,
    #[serde(rename = "altText", default)]
    pub alt_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VariantDto {
    pub id: String,
    pub title: String,
    #[serde(rename = "availableForSale")]
    pub available_for_sale: bool,
    pub price: MoneyDto,
    #[serde(rename = "compareAtPrice")]
    pub compare_at_price: Option<MoneyDto>,
}

impl CollectionDto {
    pub fn to_domain(self) -> Collection {
        Collection {
            handle: Handle::from(self.handle.as_str()),
            title: self.title,
            products: self
                .products
                .into_nodes()
                .into_iter()
                .map(|product| product.to_domain())
                .collect(),
        }
    }
}

impl ProductDto {
    pub fn to_domain(self) -> Product {
        Product {
            id: self.id,
            handle: Handle::from(self.handle.as_str()),
            title: self.title,
            description: self.description,
            images: self
                .images
                .into_nodes()
                .into_iter()
                .map(|image| ProductImage::new(image.url, image.alt_text.unwrap_or_default()))
                .collect(),
            variants: self
                .variants
                .into_nodes()
                .into_iter()
                .map(|variant| variant.to_domain())
                .collect(),
            tags: self.tags,
        }
    }
}

impl VariantDto {
    pub fn to_domain(self) -> ProductVariant {
        ProductVariant {
            id: self.id,
            title: self.title,
            price: self.price.to_domain(),
            compare_at_price: self.compare_at_price.as_ref().map(MoneyDto::to_domain),
            available: self.available_for_sale,
        }
    }
}
