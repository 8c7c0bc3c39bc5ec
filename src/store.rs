//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Product, Restaurant};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All restaurants
    pub restaurants: Vec<Restaurant>,
    /// Menu of the currently selected restaurant
    pub products: Vec<Product>,
    /// Currently selected restaurant ID
    pub selected_restaurant: Option<u32>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Select a restaurant; the menu load follows the selection
pub fn store_select_restaurant(store: &AppStore, id: u32) {
    store.selected_restaurant().set(Some(id));
}

/// Resolve the selected restaurant from the loaded list
pub fn store_selected_restaurant(store: &AppStore) -> Option<Restaurant> {
    let id = store.selected_restaurant().get()?;
    store.restaurants().get().into_iter().find(|r| r.id == id)
}
