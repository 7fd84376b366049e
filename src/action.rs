//! Actions: user intents and async results

use serde::{Deserialize, Serialize};

use crate::filter::FilterKey;
use crate::record::{OwnedFlag, PokemonRecord};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[action(infer_categories)]
pub enum Action {
    /// Startup: load the catalog with the initial filters
    Init,

    // ===== Catalog category =====
    /// Intent: refetch the catalog with the current filters
    CatalogFetch,

    /// Result: catalog response for request `seq`
    CatalogDidLoad {
        seq: u64,
        records: Vec<PokemonRecord>,
    },

    /// Result: catalog request `seq` failed
    CatalogDidError { seq: u64, error: String },

    // ===== Filter category =====
    /// Set a filter to an explicit value
    FilterChange(FilterKey, String),

    /// Advance a filter to its next option
    FilterCycle(FilterKey),

    /// Remove a filter from the query
    FilterClear(FilterKey),

    // ===== Ownership category =====
    /// Intent: flip one ownership flag on a card
    OwnershipToggle { name: String, flag: OwnedFlag },

    /// Result: server accepted the update
    OwnershipDidUpdate { name: String, flag: OwnedFlag },

    /// Result: update failed; the local flip stays until the next refresh
    OwnershipDidError {
        name: String,
        flag: OwnedFlag,
        error: String,
    },

    // ===== Selection category =====
    /// Move the selection to a card index
    SelectionSet(usize),

    /// Exit the application
    Quit,
}
