use crate::domain::cart::entities::CartSummary;
use crate::domain::catalog::value_objects::Handle;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub cart_summary: RwSignal<CartSummary>,
    pub cart_open: RwSignal<bool>,
    pub cart_line_count: RwSignal<usize>,
    pub cart_busy: RwSignal<bool>,
    pub products_loading: RwSignal<bool>,
    pub active_collection: RwSignal<Handle>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        cart_summary: create_rw_signal(CartSummary::empty()),
        cart_open: create_rw_signal(false),
        cart_line_count: create_rw_signal(0),
        cart_busy: create_rw_signal(false),
        products_loading: create_rw_signal(false),
        active_collection: create_rw_signal(Handle::from("featured")),
    })
}

crate::global_signals! {
    pub cart_summary_signal => cart_summary: CartSummary,
    pub cart_open_signal => cart_open: bool,
    pub cart_line_count_signal => cart_line_count: usize,
    pub cart_busy_signal => cart_busy: bool,
    pub products_loading_signal => products_loading: bool,
    pub active_collection_signal => active_collection: Handle,
}
