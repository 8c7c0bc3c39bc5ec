//! Restaurant List Component
//!
//! Left column: all restaurants with favorite toggles and selection.

use leptos::prelude::*;
use leptos_optimistic::{make_on_toggle, use_liveness};

use crate::commands;
use crate::components::FavoriteButton;
use crate::context::AppContext;
use crate::favorites::{use_favorite_cache, EntityKey};
use crate::store::{store_select_restaurant, use_app_store, AppStateStoreFields};

/// Restaurant list with favorite toggles
#[component]
pub fn RestaurantList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let cache = use_favorite_cache();
    let live = use_liveness();

    let restaurants = store.restaurants();
    let selected = store.selected_restaurant();

    view! {
        <div class="restaurant-column">
            <div class="column-header">
                <h2>"Restaurants"</h2>
                <button class="refresh-btn" on:click=move |_| ctx.reload()>"↻"</button>
            </div>

            <For
                each=move || restaurants.get()
                key=|r| r.id
                children=move |r| {
                    let id = r.id;
                    let sigs = cache.signals(EntityKey::Restaurant(id), r.is_liked);
                    let toggle = make_on_toggle(sigs.clone(), live.clone(), move || async move {
                        commands::toggle_restaurant_favorite(id).await.map(|s| s.is_liked)
                    });
                    let row_class = move || {
                        if selected.get() == Some(id) {
                            "restaurant-row selected"
                        } else {
                            "restaurant-row"
                        }
                    };

                    view! {
                        <div class=row_class on:click=move |_| store_select_restaurant(&store, id)>
                            <div class="restaurant-info">
                                <span class="restaurant-name">{r.name.clone()}</span>
                                <span class="restaurant-meta">
                                    {format!("{} · {:.1} ★ · {} min", r.cuisine, r.rating, r.delivery_minutes)}
                                </span>
                            </div>
                            <FavoriteButton sigs=sigs on_toggle=Callback::new(move |_| toggle()) />
                        </div>
                    }
                }
            />

            <p class="restaurant-count">
                {move || format!("{} restaurants", restaurants.get().len())}
            </p>
        </div>
    }
}
