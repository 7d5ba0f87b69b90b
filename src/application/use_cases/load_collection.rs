use futures::future::{AbortHandle, Abortable};
use wasm_bindgen_futures::spawn_local;

use crate::domain::catalog::entities::Collection;
use crate::domain::catalog::value_objects::{Handle, ProductSort};
use crate::domain::errors::NetworkError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::http::CommerceClient;

/// Use case: fetch a collection's products for the grid.
///
/// Selecting a new collection supersedes any fetch still in flight; the
/// superseded future is aborted and never touches the loading flag or
/// the result callback.
pub struct LoadCollectionUseCase {
    client: CommerceClient,
    page_size: u32,
    in_flight: Option<AbortHandle>,
}

impl LoadCollectionUseCase {
    pub fn new(client: CommerceClient, page_size: u32) -> Self {
        Self { client, page_size, in_flight: None }
    }

    pub fn load<L, D>(&mut self, handle: Handle, sort: ProductSort, on_loading: L, on_done: D)
    where
        L: Fn(bool) + 'static,
        D: FnOnce(Result<Collection, NetworkError>) + 'static,
    {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }
        let (abort_handle, abort_registration) = AbortHandle::new_pair();
        self.in_flight = Some(abort_handle);

        get_logger().info(
            LogComponent::Application("LoadCollection"),
            &format!("🔄 Loading collection '{}'", handle.value()),
        );

        let client = self.client.clone();
        let page_size = self.page_size;
        on_loading(true);
        spawn_local(async move {
            let fetch = client.fetch_collection(&handle, sort, page_size);
            match Abortable::new(fetch, abort_registration).await {
                Ok(result) => {
                    on_loading(false);
                    on_done(result);
                }
                Err(_aborted) => {
                    // Superseded by a newer selection; that fetch now
                    // owns the loading flag.
                    get_logger().debug(
                        LogComponent::Application("LoadCollection"),
                        &format!("⏭️ Fetch for '{}' superseded", handle.value()),
                    );
                }
            }
        });
    }

    /// Abort whatever is in flight (view teardown).
    pub fn cancel(&mut self) {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }
    }
}
