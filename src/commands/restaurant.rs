//! Restaurant Commands
//!
//! Frontend bindings for restaurant-related backend commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::invoke;
use crate::models::{LikeStatus, Restaurant};

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

pub async fn list_restaurants() -> Result<Vec<Restaurant>, String> {
    let result = invoke("list_restaurants", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Toggle the favorite flag for a restaurant. The reply carries the
/// authoritative value, which may disagree with the local guess.
pub async fn toggle_restaurant_favorite(id: u32) -> Result<LikeStatus, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("toggle_restaurant_favorite", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
