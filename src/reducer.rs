//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::catalog::Catalog;
use crate::effect::Effect;
use crate::filter::FilterState;
use crate::state::AppState;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init | Action::CatalogFetch => DispatchResult::changed_with(begin_fetch(state)),

        // ===== Catalog actions =====
        Action::CatalogDidLoad { seq, records } => {
            if seq < state.fetch_seq {
                tracing::debug!(seq, latest = state.fetch_seq, "dropping stale catalog");
                return DispatchResult::unchanged();
            }
            let count = records.len();
            state.catalog = DataResource::Loaded(Catalog::new(records));
            state.is_refreshing = false;
            state.selected = state.selected.min(count.saturating_sub(1));
            DispatchResult::changed()
        }

        Action::CatalogDidError { seq, error } => {
            if seq < state.fetch_seq {
                tracing::debug!(seq, latest = state.fetch_seq, %error, "dropping stale error");
                return DispatchResult::unchanged();
            }
            state.is_refreshing = false;
            if state.catalog.is_loading() {
                state.catalog = DataResource::Empty;
            }
            DispatchResult::changed()
        }

        // ===== Filter actions =====
        Action::FilterChange(key, value) => {
            let filters = state.filters.with(key, value);
            apply_filters(state, filters)
        }

        Action::FilterCycle(key) => {
            let filters = state.filters.cycle(key);
            apply_filters(state, filters)
        }

        Action::FilterClear(key) => {
            if state.filters.get(key).is_none() {
                return DispatchResult::unchanged();
            }
            let filters = state.filters.without(key);
            apply_filters(state, filters)
        }

        // ===== Ownership actions =====
        Action::OwnershipToggle { name, flag } => {
            let DataResource::Loaded(catalog) = &mut state.catalog else {
                return DispatchResult::unchanged();
            };
            let Some(update) = catalog.toggle(&name, flag) else {
                return DispatchResult::unchanged();
            };
            state.update_seq += 1;
            state.pending_updates += 1;
            DispatchResult::changed_with(Effect::UpdateOwnership {
                endpoint: state.endpoint.clone(),
                update,
                seq: state.update_seq,
            })
        }

        Action::OwnershipDidUpdate { .. } => {
            state.pending_updates = state.pending_updates.saturating_sub(1);
            DispatchResult::changed_with(begin_fetch(state))
        }

        Action::OwnershipDidError { name, flag, error } => {
            tracing::info!(%name, flag = flag.key(), %error, "keeping unsynced toggle");
            state.pending_updates = state.pending_updates.saturating_sub(1);
            DispatchResult::changed()
        }

        // ===== Selection actions =====
        Action::SelectionSet(index) => {
            let count = state.record_count();
            if index < count && index != state.selected {
                state.selected = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn apply_filters(state: &mut AppState, filters: FilterState) -> DispatchResult<Effect> {
    state.filters = filters;
    state.selected = 0;
    DispatchResult::changed_with(begin_fetch(state))
}

fn begin_fetch(state: &mut AppState) -> Effect {
    state.fetch_seq += 1;
    if state.catalog.is_loaded() {
        state.is_refreshing = true;
    } else {
        state.catalog = DataResource::Loading;
    }
    Effect::FetchCatalog {
        endpoint: state.endpoint.clone(),
        filters: state.filters.clone(),
        seq: state.fetch_seq,
    }
}
