use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    application::{
        cart_service::CartService,
        use_cases::{LoadCollectionUseCase, LoadContentUseCase, schedule_background_prefetch},
    },
    domain::{
        catalog::{entities::Product, value_objects::ProductSort},
        content::{HeroBanner, NavLink, fallback_nav},
        events::{CartEvent, ContentEvent, EventDispatcher, InMemoryEventDispatcher},
        logging::{LogComponent, get_logger},
    },
    global_state::{
        active_collection_signal, cart_busy_signal, cart_line_count_signal, cart_open_signal,
        cart_summary_signal, products_loading_signal,
    },
    infrastructure::{
        http::{CmsClient, CmsConfig, CommerceClient, CommerceConfig},
        images,
        prefetch::PrefetchHandle,
    },
    perceived::{PerceivedOptions, PerceivedPerformance},
    route_utils,
};

// On-page activity feed fed by domain events
thread_local! {
    static ACTIVITY_FEED: RwSignal<Vec<String>> = create_rw_signal(Vec::new());
}

/// Append one line to the activity feed (capped at 50 entries).
pub fn push_activity(line: String) {
    ACTIVITY_FEED.with(|feed| {
        feed.update(|lines| {
            lines.push(line);
            while lines.len() > 50 {
                lines.remove(0);
            }
        });
    });
}

/// Monotonic-ish clock for transition timing.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// 🛍️ Root storefront component
#[component]
pub fn App() -> impl IntoView {
    let (hero, set_hero) = create_signal(HeroBanner::default());
    let (nav_links, set_nav_links) = create_signal(fallback_nav());

    // The UI subscribes to domain events before the services start
    // publishing through the shared dispatcher
    let mut dispatcher = InMemoryEventDispatcher::new();
    dispatcher.subscribe_to_cart_events(|event| match event {
        CartEvent::CartRefreshed { line_count, .. } => {
            push_activity(format!("🛒 Cart updated: {line_count} line(s)"));
        }
        CartEvent::CartMutationFailed { reason, .. } => {
            push_activity(format!("❌ Cart change failed: {reason}"));
        }
        CartEvent::CartValidationFailed { reason, .. } => {
            push_activity(format!("⚠️ Cart rejected: {reason}"));
        }
    });
    dispatcher.subscribe_to_content_events(|event| match event {
        ContentEvent::CollectionLoaded { handle, product_count } => {
            push_activity(format!("📦 '{}' loaded: {product_count} product(s)", handle.value()));
        }
        ContentEvent::CollectionLoadFailed { handle, reason } => {
            push_activity(format!("❌ '{}' failed to load: {reason}", handle.value()));
        }
        ContentEvent::ContentLoaded { nav_link_count } => {
            push_activity(format!("🧭 Navigation loaded: {nav_link_count} link(s)"));
        }
    });
    let dispatcher = Rc::new(dispatcher);
    provide_context(dispatcher.clone());

    // One cart service instance shared by every cart control
    let cart_service = Rc::new(RefCell::new(CartService::new(
        CommerceClient::new(CommerceConfig::default()),
        dispatcher.clone(),
    )));
    provide_context(cart_service.clone());

    // Restore or create the cart once on mount
    {
        let cart_service = cart_service.clone();
        spawn_local(async move {
            cart_busy_signal().set(true);
            let result = cart_service.borrow_mut().initialize().await;
            cart_busy_signal().set(false);
            if let Err(e) = result {
                get_logger().error(
                    LogComponent::Presentation("App"),
                    &format!("❌ Cart initialization failed: {e}"),
                );
            }
        });
    }

    // Marketing content from the CMS
    {
        let dispatcher = dispatcher.clone();
        spawn_local(async move {
            let content = LoadContentUseCase::new(CmsClient::new(CmsConfig::default()));
            let (loaded_hero, loaded_nav) = content.load().await;
            dispatcher.publish_content_event(ContentEvent::ContentLoaded {
                nav_link_count: loaded_nav.len(),
            });
            set_hero.set(loaded_hero);
            set_nav_links.set(loaded_nav);
        });
    }

    view! {
        <style>
            {r#"
            .storefront-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #faf6f0;
                min-height: 100vh;
                color: #2d2420;
            }

            .navbar {
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 16px 32px;
                background: #fffdf9;
                border-bottom: 1px solid #e8ddd0;
                position: sticky;
                top: 0;
            }

            .brand {
                font-size: 22px;
                font-weight: 700;
                letter-spacing: 1px;
                color: #8c4a2f;
                text-decoration: none;
            }

            .nav-links { display: flex; gap: 24px; }
            .nav-link { color: #2d2420; text-decoration: none; font-size: 14px; }
            .nav-link:hover { color: #8c4a2f; }

            .cart-toggle {
                border: 1px solid #8c4a2f;
                background: transparent;
                border-radius: 18px;
                padding: 6px 14px;
                cursor: pointer;
                font-size: 14px;
            }

            .hero {
                padding: 72px 32px;
                text-align: center;
                background-size: cover;
                background-position: center;
                background-color: #efe2d2;
            }
            .hero-heading { font-size: 36px; margin: 0 0 12px; }
            .hero-subheading { font-size: 16px; color: #5c4f45; margin: 0 0 20px; }
            .hero-cta {
                display: inline-block;
                background: #8c4a2f;
                color: #fffdf9;
                padding: 10px 22px;
                border-radius: 4px;
                text-decoration: none;
            }

            .breadcrumbs { padding: 14px 32px; font-size: 13px; }
            .crumb { color: #5c4f45; text-decoration: none; }
            .crumb:not(:last-child)::after { content: ' / '; color: #b7a999; }

            .collection-picker { padding: 0 32px 8px; display: flex; gap: 10px; }
            .collection-chip {
                border: 1px solid #d8c9b8;
                background: #fffdf9;
                border-radius: 16px;
                padding: 5px 14px;
                font-size: 13px;
                cursor: pointer;
            }
            .collection-chip.active { background: #8c4a2f; color: #fffdf9; border-color: #8c4a2f; }

            .storefront-main { display: flex; gap: 24px; padding: 16px 32px 48px; }

            .product-grid {
                flex: 1;
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                gap: 20px;
                transition: opacity 120ms linear;
            }

            .product-card {
                background: #fffdf9;
                border: 1px solid #e8ddd0;
                border-radius: 8px;
                padding: 12px;
                display: flex;
                flex-direction: column;
                gap: 8px;
            }
            .lazy-image { width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: 6px; }
            .product-title { font-size: 15px; margin: 0; }
            .product-price { font-size: 14px; color: #5c4f45; margin: 0; }
            .discount-badge {
                margin-left: 8px;
                background: #b3472c;
                color: #fffdf9;
                font-size: 11px;
                padding: 2px 6px;
                border-radius: 3px;
            }
            .add-to-cart {
                margin-top: auto;
                background: #2d2420;
                color: #fffdf9;
                border: none;
                border-radius: 4px;
                padding: 8px 0;
                cursor: pointer;
            }
            .add-to-cart:disabled { opacity: 0.5; cursor: default; }

            .cart-panel {
                width: 320px;
                background: #fffdf9;
                border: 1px solid #e8ddd0;
                border-radius: 8px;
                padding: 16px;
                align-self: flex-start;
            }
            .cart-heading { margin: 0 0 12px; font-size: 18px; }
            .cart-line {
                display: flex;
                justify-content: space-between;
                align-items: center;
                gap: 8px;
                padding: 6px 0;
                border-bottom: 1px dashed #e8ddd0;
                font-size: 13px;
            }
            .qty-button {
                border: 1px solid #d8c9b8;
                background: #fffdf9;
                border-radius: 4px;
                width: 22px;
                cursor: pointer;
            }
            .cart-totals { margin-top: 12px; font-size: 14px; }
            .totals-row { display: flex; justify-content: space-between; padding: 3px 0; }
            .totals-row.savings { color: #2f7d4f; }
            .totals-row.grand { font-weight: 700; }
            .checkout {
                width: 100%;
                margin-top: 12px;
                background: #8c4a2f;
                color: #fffdf9;
                border: none;
                border-radius: 4px;
                padding: 10px 0;
                cursor: pointer;
            }

            .activity-feed {
                padding: 12px 32px 24px;
                font-family: ui-monospace, monospace;
                font-size: 12px;
                color: #7a6a5c;
            }
            "#}
        </style>
        <div class="storefront-app">
            <Navbar links=nav_links/>
            <HeroSection hero=hero/>
            <Breadcrumbs/>
            <CollectionPicker/>
            <main class="storefront-main">
                <ProductGrid/>
                <CartPanel/>
            </main>
            <ActivityFeed/>
        </div>
    }
}

/// Site header: CMS-driven navigation plus the cart toggle
#[component]
fn Navbar(links: ReadSignal<Vec<NavLink>>) -> impl IntoView {
    let line_count = cart_line_count_signal();
    let cart_open = cart_open_signal();

    view! {
        <header class="navbar">
            <a class="brand" href="/">"KalaKosa"</a>
            <nav class="nav-links">
                {move || {
                    links
                        .get()
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a class="nav-link" href=link.href.clone()>{link.label.clone()}</a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
            <button
                class="cart-toggle"
                on:click=move |_| cart_open.update(|open| *open = !*open)
            >
                {"🛍️ "}
                {move || line_count.get().to_string()}
            </button>
        </header>
    }
}

#[component]
fn HeroSection(hero: ReadSignal<HeroBanner>) -> impl IntoView {
    view! {
        <section
            class="hero"
            style:background-image=move || {
                let url = hero.with(|h| h.image_url.clone());
                if url.is_empty() {
                    "none".to_string()
                } else {
                    format!("url({})", images::optimized_url(&url, 1600))
                }
            }
        >
            <h1 class="hero-heading">{move || hero.with(|h| h.heading.clone())}</h1>
            <p class="hero-subheading">{move || hero.with(|h| h.subheading.clone())}</p>
            {move || {
                hero.with(|h| {
                    h.has_cta().then(|| {
                        view! {
                            <a class="hero-cta" href=h.cta_href.clone()>{h.cta_label.clone()}</a>
                        }
                    })
                })
            }}
        </section>
    }
}

/// Trail derived from the active collection path
#[component]
fn Breadcrumbs() -> impl IntoView {
    let active = active_collection_signal();

    view! {
        <nav class="breadcrumbs">
            {move || {
                let path = format!("/collections/{}", active.get().value());
                route_utils::breadcrumb_trail(&path)
                    .into_iter()
                    .map(|crumb| {
                        view! {
                            <a class="crumb" href=crumb.href.clone()>{crumb.label.clone()}</a>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

const COLLECTIONS: [&str; 3] = ["featured", "wall-decor", "textiles"];

/// Collection chips; switching aborts any fetch still in flight
#[component]
fn CollectionPicker() -> impl IntoView {
    let active = active_collection_signal();

    view! {
        <div class="collection-picker">
            {COLLECTIONS
                .iter()
                .map(|handle| {
                    let handle = *handle;
                    view! {
                        <button
                            class="collection-chip"
                            class:active=move || active.get().value() == handle
                            on:click=move |_| active.set(handle.into())
                        >
                            {route_utils::humanize_slug(handle)}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Lazy-loading product image with CDN-optimized src/srcset
#[component]
fn LazyImage(#[prop(into)] src: String, #[prop(into)] alt: String) -> impl IntoView {
    let optimized = images::optimized_url(&src, 720);
    let srcset = images::srcset(&src, &images::PRODUCT_IMAGE_WIDTHS);

    view! {
        <img
            class="lazy-image"
            src=optimized
            srcset=srcset
            sizes="(max-width: 720px) 100vw, 720px"
            alt=alt
            loading="lazy"
            decoding="async"
        />
    }
}

/// 🧱 Product grid with optimistic display during refreshes
#[component]
fn ProductGrid() -> impl IntoView {
    let (products, set_products) = create_signal(Vec::<Product>::new());
    let (display, set_display) = create_signal(Vec::<Product>::new());
    let (progress, set_progress) = create_signal(0.0_f64);
    let loading = products_loading_signal();
    let active = active_collection_signal();

    let controller = Rc::new(RefCell::new(PerceivedPerformance::<Product>::new(
        PerceivedOptions::default(),
    )));
    let loader = Rc::new(RefCell::new(LoadCollectionUseCase::new(
        CommerceClient::new(CommerceConfig::default()),
        12,
    )));
    let prefetch_slot: Rc<RefCell<Option<PrefetchHandle>>> = Rc::new(RefCell::new(None));

    // Feed (data, loading) observations to the controller in arrival order
    {
        let controller = controller.clone();
        create_effect(move |_| {
            let live = products.get();
            let is_loading = loading.get();
            let mut ctrl = controller.borrow_mut();
            ctrl.observe(&live, is_loading, now_ms());
            set_display.set(ctrl.display_data(&live).to_vec());
            set_progress.set(ctrl.transition_progress(now_ms()));
        });
    }

    // Fetch on every collection switch; the superseded fetch is aborted
    {
        let loader = loader.clone();
        let dispatcher = use_context::<Rc<InMemoryEventDispatcher>>();
        create_effect(move |_| {
            let handle = active.get();
            let dispatcher = dispatcher.clone();
            loader.borrow_mut().load(
                handle.clone(),
                ProductSort::Featured,
                |is_loading| products_loading_signal().set(is_loading),
                move |result| match result {
                    Ok(collection) => {
                        if let Some(dispatcher) = &dispatcher {
                            dispatcher.publish_content_event(ContentEvent::CollectionLoaded {
                                handle,
                                product_count: collection.count(),
                            });
                        }
                        set_products.set(collection.products);
                    }
                    Err(e) => {
                        get_logger().error(
                            LogComponent::Presentation("ProductGrid"),
                            &format!("❌ Collection load failed: {e}"),
                        );
                        if let Some(dispatcher) = &dispatcher {
                            dispatcher.publish_content_event(ContentEvent::CollectionLoadFailed {
                                handle,
                                reason: e.to_string(),
                            });
                        }
                    }
                },
            );
        });
    }

    // Warm the larger next page in the background once data settles;
    // a stale timer is canceled before a new one is armed
    {
        let controller = controller.clone();
        let prefetch_slot = prefetch_slot.clone();
        create_effect(move |_| {
            let count = products.with(|list| list.len());
            if let Some(stale) = prefetch_slot.borrow_mut().take() {
                stale.cancel();
            }
            let next = schedule_background_prefetch(&controller.borrow(), count, move || {
                let client = CommerceClient::new(CommerceConfig::default());
                let handle = active_collection_signal().get_untracked();
                spawn_local(async move {
                    if client
                        .fetch_collection(&handle, ProductSort::Featured, 24)
                        .await
                        .is_ok()
                    {
                        get_logger().debug(
                            LogComponent::Presentation("ProductGrid"),
                            "🔥 Prefetched next collection page",
                        );
                    }
                });
            });
            *prefetch_slot.borrow_mut() = next;
        });
    }

    on_cleanup({
        let prefetch_slot = prefetch_slot.clone();
        let loader = loader.clone();
        move || {
            if let Some(handle) = prefetch_slot.borrow_mut().take() {
                handle.cancel();
            }
            loader.borrow_mut().cancel();
        }
    });

    view! {
        <section
            class="product-grid"
            style:opacity=move || {
                if loading.get() {
                    format!("{:.2}", 0.65 + 0.35 * progress.get())
                } else {
                    "1".to_string()
                }
            }
        >
            {move || {
                display
                    .get()
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product/> })
                    .collect_view()
            }}
        </section>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let image = product.featured_image().cloned();
    let price_label = product
        .min_price()
        .map(|money| format!("{} {:.2}", money.currency, money.value()))
        .unwrap_or_else(|| "Price on request".to_string());
    let discounted = product.is_discounted();
    let first_variant = product.variants.first().map(|variant| variant.id.clone());
    let cart_service = use_context::<Rc<RefCell<CartService>>>();

    let add_to_cart = move |_| {
        let (Some(service), Some(variant_id)) = (cart_service.clone(), first_variant.clone())
        else {
            return;
        };
        cart_busy_signal().set(true);
        spawn_local(async move {
            let result = service.borrow_mut().add_line(&variant_id, 1).await;
            cart_busy_signal().set(false);
            if result.is_ok() {
                cart_open_signal().set(true);
            }
        });
    };

    view! {
        <article class="product-card">
            {image.map(|img| view! { <LazyImage src=img.url alt=img.alt_text/> })}
            <h3 class="product-title">{product.title.clone()}</h3>
            <p class="product-price">
                {price_label}
                {discounted.then(|| view! { <span class="discount-badge">"SALE"</span> })}
            </p>
            <button
                class="add-to-cart"
                disabled=move || cart_busy_signal().get()
                on:click=add_to_cart
            >
                "Add to cart"
            </button>
        </article>
    }
}

/// 🛒 Basket panel rendering the derived totals
#[component]
fn CartPanel() -> impl IntoView {
    let summary = cart_summary_signal();
    let open = cart_open_signal();
    let busy = cart_busy_signal();
    let cart_service = use_context::<Rc<RefCell<CartService>>>();

    let change_quantity = move |line_id: String, quantity: i64| {
        let Some(service) = cart_service.clone() else {
            return;
        };
        cart_busy_signal().set(true);
        spawn_local(async move {
            let result = if quantity <= 0 {
                service.borrow_mut().remove_line(&line_id).await
            } else {
                service.borrow_mut().update_line(&line_id, quantity).await
            };
            cart_busy_signal().set(false);
            if let Err(e) = result {
                get_logger().error(
                    LogComponent::Presentation("CartPanel"),
                    &format!("❌ Quantity change failed: {e}"),
                );
            }
        });
    };

    view! {
        <aside
            class="cart-panel"
            style:display=move || if open.get() { "block" } else { "none" }
        >
            <h2 class="cart-heading">"Your basket"</h2>
            <div class="cart-lines">
                {move || {
                    let change = change_quantity.clone();
                    summary
                        .get()
                        .lines
                        .into_iter()
                        .map(move |line| {
                            let decrement = change.clone();
                            let increment = change.clone();
                            let id_down = line.id.value().to_string();
                            let id_up = line.id.value().to_string();
                            let quantity = line.quantity;
                            view! {
                                <div class="cart-line">
                                    <span class="line-title">{line.merchandise_title.clone()}</span>
                                    <span class="line-quantity">
                                        <button
                                            class="qty-button"
                                            on:click=move |_| decrement(id_down.clone(), quantity - 1)
                                        >
                                            "-"
                                        </button>
                                        {quantity.to_string()}
                                        <button
                                            class="qty-button"
                                            on:click=move |_| increment(id_up.clone(), quantity + 1)
                                        >
                                            "+"
                                        </button>
                                    </span>
                                    <span class="line-price">
                                        {format!("{} {:.2}", line.currency, line.line_actual_price())}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="cart-totals">
                <div class="totals-row">
                    <span>"Subtotal (list)"</span>
                    <span>
                        {move || {
                            summary.with(|s| {
                                format!(
                                    "{} {:.2}",
                                    s.totals.currency_code,
                                    s.totals.subtotal_list_price.value()
                                )
                            })
                        }}
                    </span>
                </div>
                <div
                    class="totals-row savings"
                    style:display=move || {
                        if summary.with(|s| s.totals.has_discount()) { "flex" } else { "none" }
                    }
                >
                    <span>"You save"</span>
                    <span>
                        {move || {
                            summary.with(|s| {
                                format!(
                                    "{} {:.2}",
                                    s.totals.currency_code,
                                    s.totals.total_discount.value()
                                )
                            })
                        }}
                    </span>
                </div>
                <div class="totals-row grand">
                    <span>"Subtotal"</span>
                    <span>
                        {move || {
                            summary.with(|s| {
                                format!(
                                    "{} {:.2}",
                                    s.totals.currency_code,
                                    s.totals.subtotal_actual_price.value()
                                )
                            })
                        }}
                    </span>
                </div>
            </div>
            <button class="checkout" disabled=move || busy.get()>"Checkout"</button>
        </aside>
    }
}

/// Recent domain events, newest first
#[component]
fn ActivityFeed() -> impl IntoView {
    let feed = ACTIVITY_FEED.with(|signal| *signal);

    view! {
        <footer class="activity-feed">
            {move || {
                feed.get()
                    .into_iter()
                    .rev()
                    .take(8)
                    .map(|line| view! { <div class="activity-line">{line}</div> })
                    .collect_view()
            }}
        </footer>
    }
}
