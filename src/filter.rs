//! Catalog query filters

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterKey {
    Gen,
    Cat,
    Own,
}

const GEN_OPTIONS: &[&str] = &["all", "1", "2", "3", "4", "5", "6", "7", "8"];
const CAT_OPTIONS: &[&str] = &["all", "shiny", "lucky", "alolan", "regional", "legendary"];
const OWN_OPTIONS: &[&str] = &["all", "owned", "notowned"];

impl FilterKey {
    pub const ALL: [FilterKey; 3] = [FilterKey::Gen, FilterKey::Cat, FilterKey::Own];

    /// Query parameter name.
    pub fn param(self) -> &'static str {
        match self {
            FilterKey::Gen => "gen",
            FilterKey::Cat => "cat",
            FilterKey::Own => "own",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterKey::Gen => "Generation",
            FilterKey::Cat => "Category",
            FilterKey::Own => "Owned",
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            FilterKey::Gen => GEN_OPTIONS,
            FilterKey::Cat => CAT_OPTIONS,
            FilterKey::Own => OWN_OPTIONS,
        }
    }

    /// Value the server assumes when the parameter is omitted.
    pub fn server_default(self) -> &'static str {
        match self {
            FilterKey::Gen => "1",
            FilterKey::Cat => "all",
            FilterKey::Own => "all",
        }
    }
}

/// Filter selectors in the order they were first set.
///
/// Values are immutable: every change produces a new `FilterState`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    entries: Vec<(FilterKey, String)>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Current value, falling back to what the server would use.
    pub fn effective(&self, key: FilterKey) -> &str {
        self.get(key).unwrap_or_else(|| key.server_default())
    }

    /// Set `key`, keeping its original position if it was already set.
    pub fn with(&self, key: FilterKey, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }
        Self { entries }
    }

    pub fn without(&self, key: FilterKey) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| *k != key)
                .cloned()
                .collect(),
        }
    }

    /// Advance `key` to the next option, wrapping around.
    pub fn cycle(&self, key: FilterKey) -> Self {
        let options = key.options();
        let current = self.effective(key);
        let next = options
            .iter()
            .position(|opt| *opt == current)
            .map(|idx| options[(idx + 1) % options.len()])
            .unwrap_or(options[0]);
        self.with(key, next)
    }

    /// `?gen=1&own=owned`, or an empty string when nothing is set.
    pub fn query_string(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let pairs: Vec<String> = self
            .entries
            .iter()
            .map(|(k, v)| format!("{}={}", k.param(), urlencoding::encode(v)))
            .collect();
        format!("?{}", pairs.join("&"))
    }
}
