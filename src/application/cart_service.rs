use std::rc::Rc;

use leptos::SignalSet;

use crate::domain::cart::entities::{Cart, CartSummary};
use crate::domain::cart::services::TotalsCache;
use crate::domain::errors::{AppError, ApplicationError, InfrastructureError};
use crate::domain::events::{CartEvent, EventDispatcher, InMemoryEventDispatcher};
use crate::domain::logging::{LogComponent, get_logger};
use crate::global_state::{cart_line_count_signal, cart_summary_signal};
use crate::infrastructure::http::CommerceClient;
use crate::infrastructure::storage;

/// Use case: keep the cart snapshot, its revision epoch, and the derived
/// totals in sync with the commerce backend.
///
/// Every snapshot installed here gets the next revision of a
/// service-owned epoch counter; the totals cache is keyed on that epoch,
/// so a repeat publish at an unchanged revision is served from the memo.
/// The dispatcher is shared with the UI shell, which subscribes before
/// handing it over.
pub struct CartService {
    client: CommerceClient,
    totals: TotalsCache,
    cart: Option<Cart>,
    revision_counter: u64,
    dispatcher: Rc<InMemoryEventDispatcher>,
}

impl CartService {
    pub fn new(client: CommerceClient, dispatcher: Rc<InMemoryEventDispatcher>) -> Self {
        Self {
            client,
            totals: TotalsCache::new(),
            cart: None,
            revision_counter: 0,
            dispatcher,
        }
    }

    /// Restore the persisted cart, or create a fresh one when there is
    /// nothing to restore (first visit, expired id, checked-out cart).
    pub async fn initialize(&mut self) -> Result<(), AppError> {
        match storage::load_cart_id() {
            Some(cart_id) => {
                get_logger().info(
                    LogComponent::Application("CartService"),
                    &format!("🛒 Restoring cart {cart_id}"),
                );
                match self.client.fetch_cart(&cart_id).await {
                    Ok(Some(cart)) => {
                        self.install_cart(cart);
                        Ok(())
                    }
                    Ok(None) => {
                        get_logger().info(
                            LogComponent::Application("CartService"),
                            "🧹 Persisted cart is gone; starting over",
                        );
                        storage::clear_cart_id();
                        self.create_fresh_cart().await
                    }
                    Err(e) => Err(InfrastructureError::Network(e).into()),
                }
            }
            None => self.create_fresh_cart().await,
        }
    }

    async fn create_fresh_cart(&mut self) -> Result<(), AppError> {
        let cart = self
            .client
            .create_cart()
            .await
            .map_err(InfrastructureError::Network)?;
        storage::store_cart_id(&cart.id);
        self.install_cart(cart);
        Ok(())
    }

    pub async fn add_line(&mut self, variant_id: &str, quantity: i64) -> Result<(), AppError> {
        let cart_id = self.require_cart_id()?;
        match self.client.add_line(&cart_id, variant_id, quantity).await {
            Ok(cart) => {
                self.install_cart(cart);
                Ok(())
            }
            Err(e) => Err(self.mutation_failed(&cart_id, e)),
        }
    }

    pub async fn update_line(&mut self, line_id: &str, quantity: i64) -> Result<(), AppError> {
        let cart_id = self.require_cart_id()?;
        match self.client.update_line(&cart_id, line_id, quantity).await {
            Ok(cart) => {
                self.install_cart(cart);
                Ok(())
            }
            Err(e) => Err(self.mutation_failed(&cart_id, e)),
        }
    }

    pub async fn remove_line(&mut self, line_id: &str) -> Result<(), AppError> {
        let cart_id = self.require_cart_id()?;
        match self.client.remove_line(&cart_id, line_id).await {
            Ok(cart) => {
                self.install_cart(cart);
                Ok(())
            }
            Err(e) => Err(self.mutation_failed(&cart_id, e)),
        }
    }

    /// Current summary, through the revision-keyed cache.
    pub fn summary(&mut self) -> CartSummary {
        match self.totals.summarize(self.cart.as_ref()) {
            Ok(summary) => summary,
            Err(_) => CartSummary::empty(),
        }
    }

    fn require_cart_id(&self) -> Result<String, AppError> {
        self.cart
            .as_ref()
            .map(|cart| cart.id.clone())
            .ok_or_else(|| {
                ApplicationError::CartUnavailable("cart not initialized yet".to_string()).into()
            })
    }

    fn next_revision(&mut self) -> u64 {
        self.revision_counter += 1;
        self.revision_counter
    }

    fn install_cart(&mut self, mut cart: Cart) {
        cart.revision = self.next_revision();
        self.cart = Some(cart);
        self.publish();
    }

    fn mutation_failed(
        &self,
        cart_id: &str,
        error: crate::domain::errors::NetworkError,
    ) -> AppError {
        get_logger().error(
            LogComponent::Application("CartService"),
            &format!("❌ Cart mutation failed: {error}"),
        );
        self.dispatcher.publish_cart_event(CartEvent::CartMutationFailed {
            cart_id: cart_id.to_string(),
            reason: error.to_string(),
        });
        InfrastructureError::Network(error).into()
    }

    /// Re-derive totals and push them into the global signals.
    fn publish(&mut self) {
        let cart_id = self
            .cart
            .as_ref()
            .map(|cart| cart.id.clone())
            .unwrap_or_default();

        match self.totals.summarize(self.cart.as_ref()) {
            Ok(summary) => {
                get_logger().info(
                    LogComponent::Application("CartService"),
                    &format!(
                        "✅ Cart {} aggregated: {} lines, {} {:.2} after discounts",
                        cart_id,
                        summary.lines.len(),
                        summary.totals.currency_code,
                        summary.totals.subtotal_actual_price.value()
                    ),
                );
                self.dispatcher.publish_cart_event(CartEvent::CartRefreshed {
                    cart_id,
                    line_count: summary.lines.len(),
                });
                cart_line_count_signal().set(summary.lines.len());
                cart_summary_signal().set(summary);
            }
            Err(e) => {
                // Refuse to display mislabeled totals; show the empty
                // summary until the backend sends a coherent cart.
                get_logger().error(
                    LogComponent::Application("CartService"),
                    &format!("❌ Cart {} rejected: {e}", cart_id),
                );
                self.dispatcher.publish_cart_event(CartEvent::CartValidationFailed {
                    cart_id,
                    reason: e.to_string(),
                });
                cart_line_count_signal().set(0);
                cart_summary_signal().set(CartSummary::empty());
            }
        }
    }
}
