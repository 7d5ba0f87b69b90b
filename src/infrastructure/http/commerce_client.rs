use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::domain::cart::entities::Cart;
use crate::domain::catalog::entities::Collection;
use crate::domain::catalog::value_objects::{Handle, ProductSort};
use crate::domain::errors::NetworkError;
use crate::domain::logging::{LogComponent, get_logger};

use super::dto::{
    CartCreateData, CartData, CartLinesAddData, CartLinesRemoveData, CartLinesUpdateData,
    CartPayloadDto, CollectionData, GraphQlRequest, GraphQlResponse,
};

const CART_QUERY: &str = r#"
query CartQuery($cartId: ID!) {
  cart(id: $cartId) {
    id
    lines(first: 100) { edges { node {
      id
      quantity
      merchandise { title }
      cost {
        amountPerQuantity { amount currencyCode }
        compareAtAmountPerQuantity { amount currencyCode }
      }
    } } }
  }
}
"#;

const CART_CREATE_MUTATION: &str = r#"
mutation CartCreate {
  cartCreate {
    cart {
      id
      lines(first: 100) { edges { node {
        id
        quantity
        merchandise { title }
        cost {
          amountPerQuantity { amount currencyCode }
          compareAtAmountPerQuantity { amount currencyCode }
        }
      } } }
    }
  }
}
"#;

const CART_LINES_ADD_MUTATION: &str = r#"
mutation CartLinesAdd($cartId: ID!, $lines: [CartLineInput!]!) {
  cartLinesAdd(cartId: $cartId, lines: $lines) {
    cart {
      id
      lines(first: 100) { edges { node {
        id
        quantity
        merchandise { title }
        cost {
          amountPerQuantity { amount currencyCode }
          compareAtAmountPerQuantity { amount currencyCode }
        }
      } } }
    }
  }
}
"#;

const CART_LINES_UPDATE_MUTATION: &str = r#"
mutation CartLinesUpdate($cartId: ID!, $lines: [CartLineUpdateInput!]!) {
  cartLinesUpdate(cartId: $cartId, lines: $lines) {
    cart {
      id
      lines(first: 100) { edges { node {
        id
        quantity
        merchandise { title }
        cost {
          amountPerQuantity { amount currencyCode }
          compareAtAmountPerQuantity { amount currencyCode }
        }
      } } }
    }
  }
}
"#;

const CART_LINES_REMOVE_MUTATION: &str = r#"
mutation CartLinesRemove($cartId: ID!, $lineIds: [ID!]!) {
  cartLinesRemove(cartId: $cartId, lineIds: $lineIds) {
    cart {
      id
      lines(first: 100) { edges { node {
        id
        quantity
        merchandise { title }
        cost {
          amountPerQuantity { amount currencyCode }
          compareAtAmountPerQuantity { amount currencyCode }
        }
      } } }
    }
  }
}
"#;

const COLLECTION_QUERY: &str = r#"
query CollectionQuery($handle: String!, $sortKey: ProductSortKey!, $first: Int!) {
  collection(handle: $handle) {
    handle
    title
    products(first: $first, sortKey: $sortKey) {
      edges {
        node {
          id
          handle
          title
          description
          tags
          images(first: 4) { edges { node { url altText } } }
          variants(first: 20) { edges { node {
            id
            title
            availableForSale
            price { amount currencyCode }
            compareAtPrice { amount currencyCode }
          } } }
        }
      }
    }
  }
}
"#;

/// Storefront API endpoint coordinates.
#[derive(Clone, Debug)]
pub struct CommerceConfig {
    pub shop_base: String,
    pub api_version: String,
    pub access_token: String,
}

impl Default for CommerceConfig {
    fn default() -> Self {
        Self {
            shop_base: "https://shop.kalakosa.example".to_string(),
            api_version: "2024-07".to_string(),
            access_token: String::new(),
        }
    }
}

/// GraphQL client for the headless commerce backend. Read queries for
/// cart and catalog, mutations for the cart line operations; it owns no
/// state beyond its endpoint coordinates.
#[derive(Clone)]
pub struct CommerceClient {
    config: CommerceConfig,
}

impl CommerceClient {
    pub fn new(config: CommerceConfig) -> Self {
        Self { config }
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}/api/{}/graphql.json", self.config.shop_base, self.config.api_version)
    }

    async fn execute<D: DeserializeOwned>(
        &self,
        query: &'static str,
        variables: serde_json::Value,
    ) -> Result<D, NetworkError> {
        let body = GraphQlRequest { query, variables };
        let response = Request::post(&self.endpoint_url())
            .header("X-Storefront-Access-Token", &self.config.access_token)
            .json(&body)
            .map_err(|e| NetworkError::HttpRequestFailed(format!("{e:?}")))?
            .send()
            .await
            .map_err(|e| NetworkError::HttpRequestFailed(format!("{e:?}")))?;

        if !response.ok() {
            return Err(NetworkError::UnexpectedStatus(response.status()));
        }

        let parsed: GraphQlResponse<D> = response
            .json()
            .await
            .map_err(|e| NetworkError::DecodeFailed(format!("{e:?}")))?;

        if let Some(errors) = parsed.errors {
            if !errors.is_empty() {
                let joined =
                    errors.into_iter().map(|e| e.message).collect::<Vec<_>>().join("; ");
                return Err(NetworkError::GraphQl(joined));
            }
        }

        parsed
            .data
            .ok_or_else(|| NetworkError::DecodeFailed("missing data payload".to_string()))
    }

    fn cart_from_payload(payload: CartPayloadDto) -> Result<Cart, NetworkError> {
        payload
            .cart
            .map(|dto| dto.to_domain())
            .ok_or_else(|| NetworkError::GraphQl("mutation returned no cart".to_string()))
    }

    /// Fetch a cart snapshot; `None` when the backend no longer knows
    /// the id (expired or checked out).
    pub async fn fetch_cart(&self, cart_id: &str) -> Result<Option<Cart>, NetworkError> {
        get_logger().info(
            LogComponent::Infrastructure("CommerceAPI"),
            &format!("🛒 Fetching cart {cart_id}"),
        );
        let data: CartData = self.execute(CART_QUERY, json!({ "cartId": cart_id })).await?;
        Ok(data.cart.map(|dto| dto.to_domain()))
    }

    pub async fn create_cart(&self) -> Result<Cart, NetworkError> {
        get_logger().info(LogComponent::Infrastructure("CommerceAPI"), "🆕 Creating cart");
        let data: CartCreateData = self.execute(CART_CREATE_MUTATION, json!({})).await?;
        Self::cart_from_payload(data.cart_create)
    }

    pub async fn add_line(
        &self,
        cart_id: &str,
        variant_id: &str,
        quantity: i64,
    ) -> Result<Cart, NetworkError> {
        let variables = json!({
            "cartId": cart_id,
            "lines": [{ "merchandiseId": variant_id, "quantity": quantity }],
        });
        let data: CartLinesAddData = self.execute(CART_LINES_ADD_MUTATION, variables).await?;
        Self::cart_from_payload(data.payload)
    }

    pub async fn update_line(
        &self,
        cart_id: &str,
        line_id: &str,
        quantity: i64,
    ) -> Result<Cart, NetworkError> {
        let variables = json!({
            "cartId": cart_id,
            "lines": [{ "id": line_id, "quantity": quantity }],
        });
        let data: CartLinesUpdateData =
            self.execute(CART_LINES_UPDATE_MUTATION, variables).await?;
        Self::cart_from_payload(data.payload)
    }

    pub async fn remove_line(&self, cart_id: &str, line_id: &str) -> Result<Cart, NetworkError> {
        let variables = json!({ "cartId": cart_id, "lineIds": [line_id] });
        let data: CartLinesRemoveData =
            self.execute(CART_LINES_REMOVE_MUTATION, variables).await?;
        Self::cart_from_payload(data.payload)
    }

    /// Fetch a collection's products.
    pub async fn fetch_collection(
        &self,
        handle: &Handle,
        sort: ProductSort,
        first: u32,
    ) -> Result<Collection, NetworkError> {
        get_logger().info(
            LogComponent::Infrastructure("CommerceAPI"),
            &format!("📦 Fetching collection '{}' ({} products)", handle.value(), first),
        );
        let variables = json!({
            "handle": handle.value(),
            "sortKey": sort.to_query_str(),
            "first": first,
        });
        let data: CollectionData = self.execute(COLLECTION_QUERY, variables).await?;
        data.collection
            .map(|dto| dto.to_domain())
            .ok_or_else(|| {
                NetworkError::GraphQl(format!("unknown collection '{}'", handle.value()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_includes_api_version() {
        let client = CommerceClient::new(CommerceConfig {
            shop_base: "https://shop.kalakosa.example".to_string(),
            api_version: "2024-07".to_string(),
            access_token: String::new(),
        });
        assert_eq!(
            client.endpoint_url(),
            "https://shop.kalakosa.example/api/2024-07/graphql.json"
        );
    }

    #[test]
    fn collection_variables_use_sort_key_strings() {
        let variables = serde_json::json!({
            "handle": Handle::from("Wall-Decor").value(),
            "sortKey": ProductSort::PriceDescending.to_query_str(),
            "first": 12,
        });
        assert_eq!(variables["handle"], "wall-decor");
        assert_eq!(variables["sortKey"], "PRICE_DESC");
    }
}
