//! QuickBite Frontend App
//!
//! Main application component with three-column layout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::cart::Cart;
use crate::commands;
use crate::components::{CartPanel, ProductList, RestaurantList};
use crate::context::AppContext;
use crate::favorites::{EntityKey, FavoriteCache};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    let cache = FavoriteCache::new();
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide shared state to all children
    provide_context(store);
    provide_context(cache.clone());
    provide_context(RwSignal::new(Cart::new()));
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    // Load restaurants on mount and on reload
    let restaurant_cache = cache.clone();
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading restaurants, trigger={}", trigger).into());
        let cache = restaurant_cache.clone();
        spawn_local(async move {
            match commands::list_restaurants().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} restaurants", loaded.len()).into());
                    for r in &loaded {
                        cache.sync_from_server(EntityKey::Restaurant(r.id), r.is_liked);
                    }
                    store.restaurants().set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] list_restaurants failed: {}", e).into());
                }
            }
        });
    });

    // Load the menu when the selection changes or a reload is triggered
    let product_cache = cache.clone();
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let Some(restaurant_id) = store.selected_restaurant().get() else {
            store.products().set(Vec::new());
            return;
        };
        let cache = product_cache.clone();
        spawn_local(async move {
            match commands::list_products(restaurant_id).await {
                Ok(loaded) => {
                    for p in &loaded {
                        cache.sync_from_server(EntityKey::Product(p.id), p.is_liked);
                    }
                    store.products().set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] list_products failed: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            // Left: Restaurants
            <RestaurantList />

            // Center: Menu of the selected restaurant
            <main class="main-content">
                <h1>"QuickBite"</h1>
                <ProductList />
            </main>

            // Right: Cart
            <CartPanel />
        </div>
    }
}
