use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::logging::{LogComponent, get_logger};

/// Mount the storefront into the host page body.
#[wasm_bindgen]
pub fn mount_storefront() {
    get_logger().info(LogComponent::Presentation("Mount"), "🛍️ Mounting storefront UI");
    leptos::mount_to_body(|| leptos::view! { <App/> });
}
