use wasm_bindgen::prelude::*;

use crate::domain::catalog::value_objects::{Handle, ProductSort};
use crate::domain::logging::{ConsoleLogger, LogComponent, get_logger, init_logger};
use crate::infrastructure::http::{CommerceClient, CommerceConfig};

pub mod app;
pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod perceived;
pub mod presentation;
pub mod route_utils;

/// Initialize the storefront runtime: panic hook and structured logging.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    init_logger(Box::new(ConsoleLogger::new_development()));

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Storefront runtime initialized",
    );
}

/// Connectivity smoke check against the commerce API, callable from the
/// host page console.
#[wasm_bindgen]
pub async fn smoke_test_catalog() -> Result<(), JsValue> {
    let client = CommerceClient::new(CommerceConfig::default());
    match client
        .fetch_collection(&Handle::from("featured"), ProductSort::Featured, 8)
        .await
    {
        Ok(collection) => {
            get_logger().info(
                LogComponent::Infrastructure("SmokeTest"),
                &format!(
                    "✅ Collection '{}' reachable: {} product(s)",
                    collection.title,
                    collection.count()
                ),
            );
            Ok(())
        }
        Err(e) => {
            get_logger().error(
                LogComponent::Infrastructure("SmokeTest"),
                &format!("❌ Catalog unreachable: {e}"),
            );
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}
