//! Cart-id persistence in the browser's local storage.
//!
//! The cart itself lives in the commerce backend; the only thing worth
//! remembering between visits is which cart belongs to this browser.

use crate::domain::logging::LogComponent;
use crate::log_warn;
use gloo::storage::{LocalStorage, Storage};

const CART_ID_KEY: &str = "storefront.cart_id";

/// Load the persisted cart id. Any read failure means "no cart yet".
pub fn load_cart_id() -> Option<String> {
    LocalStorage::get(CART_ID_KEY).ok()
}

pub fn store_cart_id(cart_id: &str) {
    if let Err(e) = LocalStorage::set(CART_ID_KEY, cart_id) {
        log_warn!(
            LogComponent::Infrastructure("Storage"),
            "⚠️ Failed to persist cart id: {e:?}"
        );
    }
}

pub fn clear_cart_id() {
    LocalStorage::delete(CART_ID_KEY);
}
