//! Favorite State Cache
//!
//! Single keyed mapping from entity id to favorite toggle state, owned by
//! the data layer. Presentational components read through signal
//! subscription instead of holding per-list-item shadow copies, so a cached
//! list and an individually toggled row cannot diverge.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use leptos::prelude::*;
use leptos_optimistic::{create_toggle_signals, ToggleSignals};

/// Stable identity of a likeable entity across both lists
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKey {
    Restaurant(u32),
    Product(u32),
}

/// Keyed favorite state shared by every reader of an entity.
///
/// The map itself is never tracked; readers subscribe to the per-entity
/// signals inside it.
#[derive(Clone, Default)]
pub struct FavoriteCache {
    entries: ArcRwSignal<HashMap<EntityKey, ToggleSignals>>,
}

impl FavoriteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-insert the signals for an entity, seeding the flag from the
    /// last known server value on first use
    pub fn signals(&self, key: EntityKey, server_value: bool) -> ToggleSignals {
        self.entries
            .write_untracked()
            .entry(key)
            .or_insert_with(|| create_toggle_signals(server_value))
            .clone()
    }

    /// Refresh an entry from a list reload. An in-flight entry keeps its
    /// optimistic value; its own settlement reconciles it.
    pub fn sync_from_server(&self, key: EntityKey, server_value: bool) {
        match self.entries.write_untracked().entry(key) {
            Entry::Occupied(entry) => {
                let sigs = entry.get();
                if !sigs.in_flight.get_untracked() {
                    sigs.flag.set(server_value);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(create_toggle_signals(server_value));
            }
        }
    }
}

/// Get the favorite cache from context
pub fn use_favorite_cache() -> FavoriteCache {
    expect_context::<FavoriteCache>()
}
