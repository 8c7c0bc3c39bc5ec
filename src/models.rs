//! Frontend Models
//!
//! Data structures matching backend entities. The backend speaks camelCase
//! on the wire.

use serde::{Deserialize, Serialize};

/// Restaurant data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    pub cuisine: String,
    pub rating: f32,
    pub delivery_minutes: u32,
    pub is_liked: bool,
}

/// Product data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub restaurant_id: u32,
    pub name: String,
    pub price_cents: u32,
    pub is_liked: bool,
}

/// Reply shape of the favorite/like toggle commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    pub is_liked: bool,
}
