//! Favorite Button Component
//!
//! Heart toggle shared by restaurant favoriting and product liking.

use leptos::prelude::*;
use leptos_optimistic::ToggleSignals;

/// Heart toggle for a likeable entity
///
/// Reads the displayed flag through subscription and stays disabled while a
/// toggle is in flight, so a second intent on the same entity cannot overlap
/// the first.
#[component]
pub fn FavoriteButton(
    sigs: ToggleSignals,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let flag = sigs.flag.clone();
    let glyph_flag = sigs.flag.clone();
    let in_flight = sigs.in_flight.clone();

    view! {
        <button
            class=move || if flag.get() { "favorite-btn liked" } else { "favorite-btn" }
            disabled=move || in_flight.get()
            on:click=move |ev| {
                ev.stop_propagation();
                on_toggle.run(());
            }
        >
            {move || if glyph_flag.get() { "♥" } else { "♡" }}
        </button>
    }
}
