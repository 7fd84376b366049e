//! In-memory ownership model for the records currently on screen

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::record::{OwnedFlag, PokemonRecord};

/// Records from the last accepted catalog response, keyed by `name`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    records: Vec<PokemonRecord>,
}

/// Sparse partial update sent after a toggle.
///
/// Serializes to `{"name", "dex", "<flag key>", "owned"}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnershipUpdate {
    pub name: String,
    pub dex: u32,
    pub flag: OwnedFlag,
    pub value: bool,
    pub owned: bool,
}

impl Serialize for OwnershipUpdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("dex", &self.dex)?;
        map.serialize_entry(self.flag.key(), &self.value)?;
        map.serialize_entry("owned", &self.owned)?;
        map.end()
    }
}

impl Catalog {
    pub fn new(records: Vec<PokemonRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PokemonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&PokemonRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Flip `flag` on `name` and build the update for the server.
    ///
    /// The flip is provisional until the next accepted catalog response.
    pub fn toggle(&mut self, name: &str, flag: OwnedFlag) -> Option<OwnershipUpdate> {
        let record = self.records.iter_mut().find(|r| r.name == name)?;
        let value = !record.is_owned(flag);
        record.set_owned(flag, value);
        Some(OwnershipUpdate {
            name: record.name.clone(),
            dex: record.dex,
            flag,
            value,
            owned: record.owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn pikachu() -> PokemonRecord {
        PokemonRecord {
            name: "Pikachu".into(),
            dex: 25,
            shiny: true,
            male: true,
            female: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_toggle_shiny_on_unowned_record() {
        let mut catalog = Catalog::new(vec![pikachu()]);
        let update = catalog.toggle("Pikachu", OwnedFlag::Shiny).unwrap();

        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"name": "Pikachu", "dex": 25, "shinyowned": true, "owned": true})
        );
        assert!(catalog.get("Pikachu").unwrap().shinyowned);
    }

    #[test]
    fn test_toggle_off_recomputes_owned_from_other_flags() {
        let mut catalog = Catalog::new(vec![PokemonRecord {
            shinyowned: true,
            maleowned: true,
            ..pikachu()
        }]);

        let update = catalog.toggle("Pikachu", OwnedFlag::Shiny).unwrap();
        assert!(!update.value);
        assert!(update.owned, "male is still owned");

        let update = catalog.toggle("Pikachu", OwnedFlag::Male).unwrap();
        assert!(!update.value);
        assert!(!update.owned);
    }

    #[test]
    fn test_lucky_toggle_leaves_owned_false() {
        let mut catalog = Catalog::new(vec![pikachu()]);
        let update = catalog.toggle("Pikachu", OwnedFlag::Lucky).unwrap();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"name": "Pikachu", "dex": 25, "luckyowned": true, "owned": false})
        );
    }

    #[test]
    fn test_double_toggle_restores_value() {
        let mut catalog = Catalog::new(vec![pikachu()]);
        let first = catalog.toggle("Pikachu", OwnedFlag::Female).unwrap();
        let second = catalog.toggle("Pikachu", OwnedFlag::Female).unwrap();

        assert!(first.value);
        assert!(!second.value);
        assert!(!catalog.get("Pikachu").unwrap().femaleowned);
    }

    #[test]
    fn test_toggle_unknown_name() {
        let mut catalog = Catalog::new(vec![pikachu()]);
        assert!(catalog.toggle("Mew", OwnedFlag::Shiny).is_none());
    }

    #[test]
    fn test_toggle_targets_name_not_dex() {
        let alolan = PokemonRecord {
            name: "Alolan Raichu".into(),
            dex: 26,
            ..Default::default()
        };
        let raichu = PokemonRecord {
            name: "Raichu".into(),
            dex: 26,
            ..Default::default()
        };
        let mut catalog = Catalog::new(vec![raichu, alolan]);

        catalog.toggle("Alolan Raichu", OwnedFlag::Alolan);
        assert!(!catalog.get("Raichu").unwrap().alolanowned);
        assert!(catalog.get("Alolan Raichu").unwrap().alolanowned);
    }
}
