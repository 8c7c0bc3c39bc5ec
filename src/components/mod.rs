//! UI Components
//!
//! Reusable Leptos components.

mod cart_panel;
mod favorite_button;
mod product_list;
mod restaurant_list;

pub use cart_panel::CartPanel;
pub use favorite_button::FavoriteButton;
pub use product_list::ProductList;
pub use restaurant_list::RestaurantList;
