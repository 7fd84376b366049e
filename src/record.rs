//! Catalog records as served by the tracker API

use serde::{Deserialize, Serialize};

/// One species/form entry from `GET /api/{user}/pokemon/get`.
///
/// The `shiny`/`male`/... booleans say whether that variant exists for the
/// species; the `*owned` booleans say whether the user has marked it owned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonRecord {
    pub name: String,
    pub dex: u32,

    pub shiny: bool,
    pub male: bool,
    pub female: bool,
    pub ungendered: bool,
    pub alolan: bool,

    pub regional: bool,
    pub legendary: bool,

    pub shinyowned: bool,
    pub maleowned: bool,
    pub femaleowned: bool,
    pub ungenderedowned: bool,
    pub alolanowned: bool,
    pub regionalowned: bool,
    pub luckyowned: bool,
}

/// Ownership keys accepted by `PUT /api/{user}/pokemon/update`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OwnedFlag {
    Shiny,
    Male,
    Female,
    Ungendered,
    Alolan,
    Regional,
    Lucky,
}

impl OwnedFlag {
    pub const ALL: [OwnedFlag; 7] = [
        OwnedFlag::Male,
        OwnedFlag::Female,
        OwnedFlag::Ungendered,
        OwnedFlag::Shiny,
        OwnedFlag::Alolan,
        OwnedFlag::Regional,
        OwnedFlag::Lucky,
    ];

    /// Field name on the wire.
    pub fn key(self) -> &'static str {
        match self {
            OwnedFlag::Shiny => "shinyowned",
            OwnedFlag::Male => "maleowned",
            OwnedFlag::Female => "femaleowned",
            OwnedFlag::Ungendered => "ungenderedowned",
            OwnedFlag::Alolan => "alolanowned",
            OwnedFlag::Regional => "regionalowned",
            OwnedFlag::Lucky => "luckyowned",
        }
    }

    /// Lucky is tracked but does not make a species count as owned.
    pub fn counts_toward_owned(self) -> bool {
        !matches!(self, OwnedFlag::Lucky)
    }
}

/// A rendered ownership control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Male,
    Female,
    Ungendered,
    Shiny,
    Alolan,
    Lucky,
}

impl Variant {
    pub fn flag(self) -> OwnedFlag {
        match self {
            Variant::Male => OwnedFlag::Male,
            Variant::Female => OwnedFlag::Female,
            Variant::Ungendered => OwnedFlag::Ungendered,
            Variant::Shiny => OwnedFlag::Shiny,
            Variant::Alolan => OwnedFlag::Alolan,
            Variant::Lucky => OwnedFlag::Lucky,
        }
    }

    /// Filled glyph when owned, outline otherwise.
    pub fn glyph(self, owned: bool) -> &'static str {
        match (self, owned) {
            (Variant::Male, _) => "♂",
            (Variant::Female, _) => "♀",
            (Variant::Ungendered, true) => "●",
            (Variant::Ungendered, false) => "○",
            (Variant::Shiny, true) => "★",
            (Variant::Shiny, false) => "☆",
            (Variant::Alolan, true) => "◆",
            (Variant::Alolan, false) => "◇",
            (Variant::Lucky, true) => "■",
            (Variant::Lucky, false) => "□",
        }
    }
}

impl PokemonRecord {
    pub fn is_owned(&self, flag: OwnedFlag) -> bool {
        match flag {
            OwnedFlag::Shiny => self.shinyowned,
            OwnedFlag::Male => self.maleowned,
            OwnedFlag::Female => self.femaleowned,
            OwnedFlag::Ungendered => self.ungenderedowned,
            OwnedFlag::Alolan => self.alolanowned,
            OwnedFlag::Regional => self.regionalowned,
            OwnedFlag::Lucky => self.luckyowned,
        }
    }

    pub fn set_owned(&mut self, flag: OwnedFlag, value: bool) {
        let slot = match flag {
            OwnedFlag::Shiny => &mut self.shinyowned,
            OwnedFlag::Male => &mut self.maleowned,
            OwnedFlag::Female => &mut self.femaleowned,
            OwnedFlag::Ungendered => &mut self.ungenderedowned,
            OwnedFlag::Alolan => &mut self.alolanowned,
            OwnedFlag::Regional => &mut self.regionalowned,
            OwnedFlag::Lucky => &mut self.luckyowned,
        };
        *slot = value;
    }

    /// Whether the variant exists for this species. Lucky always does.
    pub fn has_variant(&self, variant: Variant) -> bool {
        match variant {
            Variant::Male => self.male,
            Variant::Female => self.female,
            Variant::Ungendered => self.ungendered,
            Variant::Shiny => self.shiny,
            Variant::Alolan => self.alolan,
            Variant::Lucky => true,
        }
    }

    /// Aggregate owned flag: any owned variant except lucky.
    pub fn owned(&self) -> bool {
        OwnedFlag::ALL
            .iter()
            .filter(|flag| flag.counts_toward_owned())
            .any(|flag| self.is_owned(*flag))
    }

    /// Every flag currently marked owned, lucky included.
    pub fn owned_flags(&self) -> Vec<OwnedFlag> {
        OwnedFlag::ALL
            .iter()
            .copied()
            .filter(|flag| self.is_owned(*flag))
            .collect()
    }
}
