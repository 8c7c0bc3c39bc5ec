//! Product List Component
//!
//! Menu of the selected restaurant, with like toggles and add-to-cart.

use leptos::prelude::*;
use leptos_optimistic::{make_on_toggle, use_liveness};

use crate::cart::{format_cents, use_cart};
use crate::commands;
use crate::components::FavoriteButton;
use crate::favorites::{use_favorite_cache, EntityKey};
use crate::store::{store_selected_restaurant, use_app_store, AppStateStoreFields};

/// Menu view for the selected restaurant
#[component]
pub fn ProductList() -> impl IntoView {
    let store = use_app_store();
    let cache = use_favorite_cache();
    let cart = use_cart();
    let live = use_liveness();

    let products = store.products();
    let selected = store.selected_restaurant();

    let heading = move || match store_selected_restaurant(&store) {
        Some(r) => r.name,
        None => "Menu".to_string(),
    };

    view! {
        <div class="menu-view">
            <h2>{heading}</h2>

            <Show
                when=move || selected.get().is_some()
                fallback=|| view! { <p class="menu-empty">"Pick a restaurant to see its menu"</p> }
            >
                {
                    let cache = cache.clone();
                    let live = live.clone();
                    view! {
                        <For
                            each=move || products.get()
                            key=|p| p.id
                            children=move |p| {
                                let id = p.id;
                                let sigs = cache.signals(EntityKey::Product(id), p.is_liked);
                                let toggle = make_on_toggle(sigs.clone(), live.clone(), move || async move {
                                    commands::toggle_product_like(id).await.map(|s| s.is_liked)
                                });
                                let product = p.clone();

                                view! {
                                    <div class="product-row">
                                        <span class="product-name">{p.name.clone()}</span>
                                        <span class="product-price">{format_cents(p.price_cents)}</span>
                                        <FavoriteButton sigs=sigs on_toggle=Callback::new(move |_| toggle()) />
                                        <button
                                            class="add-to-cart-btn"
                                            on:click=move |_| cart.update(|c| c.add(&product))
                                        >
                                            "+"
                                        </button>
                                    </div>
                                }
                            }
                        />
                    }
                }
            </Show>
        </div>
    }
}
