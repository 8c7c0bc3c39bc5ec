//! Cart Panel Component
//!
//! Right column: cart line items with quantity controls and the subtotal.

use leptos::prelude::*;

use crate::cart::{format_cents, use_cart};

/// Cart contents and subtotal
#[component]
pub fn CartPanel() -> impl IntoView {
    let cart = use_cart();

    view! {
        <div class="cart-column">
            <h2>"Cart"</h2>

            <Show
                when=move || !cart.get().is_empty()
                fallback=|| view! { <p class="cart-empty">"Cart is empty"</p> }
            >
                <For
                    each=move || cart.get().lines().to_vec()
                    // Quantity is part of the key so the row re-renders on change
                    key=|line| (line.product_id, line.quantity)
                    children=move |line| {
                        let id = line.product_id;

                        view! {
                            <div class="cart-line">
                                <span class="cart-line-name">{line.name.clone()}</span>
                                <span class="cart-line-qty">{format!("x{}", line.quantity)}</span>
                                <span class="cart-line-total">{format_cents(line.total_cents())}</span>
                                <button
                                    class="qty-btn"
                                    on:click=move |_| cart.update(|c| c.remove_one(id))
                                >
                                    "-"
                                </button>
                                <button
                                    class="qty-btn"
                                    on:click=move |_| cart.update(|c| c.add_one(id))
                                >
                                    "+"
                                </button>
                            </div>
                        }
                    }
                />

                <p class="cart-subtotal">
                    {move || format!("Subtotal: {}", format_cents(cart.get().subtotal_cents()))}
                </p>
            </Show>
        </div>
    }
}
