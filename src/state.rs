//! Application state - single source of truth

use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;
use tui_dispatch_debug::debug::{ron_string, DebugSection, DebugState};

use crate::api::Endpoint;
use crate::catalog::Catalog;
use crate::filter::{FilterKey, FilterState};
use crate::view::{self, CatalogView, DEFAULT_SPRITE_BASE};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub endpoint: Endpoint,
    pub sprite_base: String,
    pub filters: FilterState,

    /// Catalog lifecycle: Empty → Loading → Loaded
    pub catalog: DataResource<Catalog>,
    /// A refetch is in flight while an older catalog stays on screen
    pub is_refreshing: bool,

    /// Sequence number of the most recently issued catalog request
    pub fetch_seq: u64,
    /// Sequence number of the most recently issued ownership update
    pub update_seq: u64,
    /// Updates sent and not yet answered
    pub pending_updates: usize,

    pub selected: usize,
}

impl AppState {
    pub fn new(endpoint: Endpoint, filters: FilterState) -> Self {
        Self {
            endpoint,
            sprite_base: DEFAULT_SPRITE_BASE.to_string(),
            filters,
            catalog: DataResource::Empty,
            is_refreshing: false,
            fetch_seq: 0,
            update_seq: 0,
            pending_updates: 0,
            selected: 0,
        }
    }

    pub fn with_sprite_base(mut self, sprite_base: impl Into<String>) -> Self {
        self.sprite_base = sprite_base.into();
        self
    }

    /// Cards for the current catalog, `None` until the first load.
    pub fn view(&self) -> Option<CatalogView> {
        self.catalog
            .data()
            .map(|catalog| view::project(catalog.records(), &self.sprite_base))
    }

    pub fn record_count(&self) -> usize {
        self.catalog.data().map(Catalog::len).unwrap_or(0)
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.catalog
            .data()
            .and_then(|catalog| catalog.records().get(self.selected))
            .map(|record| record.name.as_str())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Endpoint::default(), FilterState::new())
    }
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        vec![
            DebugSection::new("Server")
                .entry("base_url", ron_string(&self.endpoint.base_url))
                .entry("user", ron_string(&self.endpoint.username)),
            DebugSection::new("Filters")
                .entry("gen", ron_string(&self.filters.get(FilterKey::Gen)))
                .entry("cat", ron_string(&self.filters.get(FilterKey::Cat)))
                .entry("own", ron_string(&self.filters.get(FilterKey::Own)))
                .entry("query", ron_string(&self.filters.query_string())),
            DebugSection::new("Catalog")
                .entry("records", ron_string(&self.record_count()))
                .entry("loading", ron_string(&self.catalog.is_loading()))
                .entry("refreshing", ron_string(&self.is_refreshing))
                .entry("selected", ron_string(&self.selected_name())),
            DebugSection::new("Requests")
                .entry("fetch_seq", ron_string(&self.fetch_seq))
                .entry("update_seq", ron_string(&self.update_seq))
                .entry("pending_updates", ron_string(&self.pending_updates)),
        ]
    }
}
