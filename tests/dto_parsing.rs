use craft_storefront_wasm::domain::cart::services::CartAggregator;
use craft_storefront_wasm::infrastructure::http::dto::{CartDto, CollectionDto};

const CART_JSON: &str = r#"
{
  "id": "gid://shop/Cart/abc123",
  "lines": {
    "edges": [
      {
        "node": {
          "id": "gid://shop/CartLine/1",
          "quantity": 2,
          "merchandise": { "title": "Hand-painted diya" },
          "cost": {
            "amountPerQuantity": { "amount": "100.00", "currencyCode": "INR" },
            "compareAtAmountPerQuantity": { "amount": "150.00", "currencyCode": "INR" }
          }
        }
      },
      {
        "node": {
          "id": "gid://shop/CartLine/2",
          "quantity": 1,
          "merchandise": { "title": "Jute table runner" },
          "cost": {
            "amountPerQuantity": { "amount": "450.00", "currencyCode": "INR" },
            "compareAtAmountPerQuantity": null
          }
        }
      }
    ]
  }
}
"#;

#[test]
fn cart_payload_converts_and_aggregates() {
    let dto: CartDto = serde_json::from_str(CART_JSON).unwrap();
    let cart = dto.to_domain();

    assert_eq!(cart.id, "gid://shop/Cart/abc123");
    assert_eq!(cart.line_count(), 2);
    assert_eq!(cart.revision, 0);
    assert!(cart.lines[1].unit_compare_at_price.is_none());

    let totals = CartAggregator::summarize(Some(&cart)).unwrap().totals;
    assert!((totals.subtotal_list_price.value() - 750.0).abs() < f64::EPSILON);
    assert!((totals.subtotal_actual_price.value() - 650.0).abs() < f64::EPSILON);
    assert!((totals.total_discount.value() - 100.0).abs() < f64::EPSILON);
    assert_eq!(totals.currency_code.value(), "INR");
}

#[test]
fn malformed_money_strings_surface_as_nan_totals() {
    let broken = CART_JSON.replace("\"450.00\"", "\"not-a-price\"");
    let dto: CartDto = serde_json::from_str(&broken).unwrap();
    let cart = dto.to_domain();

    // The aggregator does not validate upstream money strings; the
    // breakage is visible in the total instead of being masked.
    let totals = CartAggregator::summarize(Some(&cart)).unwrap().totals;
    assert!(totals.subtotal_actual_price.is_nan());
}

const COLLECTION_JSON: &str = r#"
{
  "handle": "wall-decor",
  "title": "Wall Decor",
  "products": {
    "edges": [
      {
        "node": {
          "id": "gid://shop/Product/1",
          "handle": "mirror-work-hanging",
          "title": "Mirror-work wall hanging",
          "description": "Handstitched in Kutch.",
          "tags": ["wall", "handloom"],
          "images": {
            "edges": [
              { "node": { "url": "https://cdn.kalakosa.example/hanging.jpg", "altText": null } }
            ]
          },
          "variants": {
            "edges": [
              {
                "node": {
                  "id": "gid://shop/Variant/11",
                  "title": "Default",
                  "availableForSale": true,
                  "price": { "amount": "1299.00", "currencyCode": "INR" },
                  "compareAtPrice": { "amount": "1599.00", "currencyCode": "INR" }
                }
              }
            ]
          }
        }
      }
    ]
  }
}
"#;

#[test]
fn collection_payload_converts_to_domain() {
    let dto: CollectionDto = serde_json::from_str(COLLECTION_JSON).unwrap();
    let collection = dto.to_domain();

    assert_eq!(collection.handle.value(), "wall-decor");
    assert_eq!(collection.count(), 1);

    let product = &collection.products[0];
    assert_eq!(product.featured_image().unwrap().alt_text, "");
    assert!(product.is_discounted());
    assert!(product.is_available());
    assert!((product.min_price().unwrap().value() - 1299.0).abs() < f64::EPSILON);
    assert_eq!(collection.discounted_products().count(), 1);
}
