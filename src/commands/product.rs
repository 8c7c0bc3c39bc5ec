//! Product Commands
//!
//! Frontend bindings for product-related backend commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::invoke;
use crate::models::{LikeStatus, Product};

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct RestaurantIdArgs {
    #[serde(rename = "restaurantId")]
    restaurant_id: u32,
}

pub async fn list_products(restaurant_id: u32) -> Result<Vec<Product>, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&RestaurantIdArgs { restaurant_id }).map_err(|e| e.to_string())?;
    let result = invoke("list_products", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Toggle the like flag for a product. The reply carries the authoritative
/// value, which may disagree with the local guess.
pub async fn toggle_product_like(id: u32) -> Result<LikeStatus, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("toggle_product_like", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
