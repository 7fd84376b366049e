//! Projection of catalog records into card views
//!
//! The screen never reads ownership back from what it drew: every frame is
//! rebuilt from the records through [`project`].

use crate::record::{OwnedFlag, PokemonRecord, Variant};

pub const NO_RESULTS_MESSAGE: &str = "Unfortunately no Pokémon match your criteria. \
Please select a different option from the filters above.";

pub const DEFAULT_SPRITE_BASE: &str = "https://s3-eu-west-1.amazonaws.com/dex-static-img";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogView {
    Empty { message: &'static str },
    Cards(Vec<CardView>),
}

impl CatalogView {
    pub fn cards(&self) -> &[CardView] {
        match self {
            CatalogView::Empty { .. } => &[],
            CatalogView::Cards(cards) => cards,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub dex_label: String,
    pub sprite_url: String,
    /// Aggregate owned flag, so lucky alone leaves the card unowned.
    pub owned: bool,
    pub markers: Vec<OwnedFlag>,
    pub legendary: bool,
    pub regional: bool,
    /// Gender controls followed by shiny, alolan and lucky.
    pub options: Vec<OptionControl>,
    /// The ungendered control takes one slot where male/female take two.
    pub gender_spacer: bool,
}

impl CardView {
    pub fn control(&self, variant: Variant) -> Option<&OptionControl> {
        self.options.iter().find(|opt| opt.variant == variant)
    }

    /// Only existing variants respond to input.
    pub fn is_interactive(&self, variant: Variant) -> bool {
        self.control(variant).is_some_and(|opt| opt.interactive)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionControl {
    pub variant: Variant,
    pub interactive: bool,
    pub owned: bool,
}

impl OptionControl {
    fn for_record(record: &PokemonRecord, variant: Variant) -> Self {
        Self {
            variant,
            interactive: record.has_variant(variant),
            owned: record.is_owned(variant.flag()),
        }
    }

    pub fn glyph(&self) -> &'static str {
        self.variant.glyph(self.owned)
    }
}

pub fn project(records: &[PokemonRecord], sprite_base: &str) -> CatalogView {
    if records.is_empty() {
        return CatalogView::Empty {
            message: NO_RESULTS_MESSAGE,
        };
    }
    CatalogView::Cards(
        records
            .iter()
            .map(|record| card_view(record, sprite_base))
            .collect(),
    )
}

pub fn card_view(record: &PokemonRecord, sprite_base: &str) -> CardView {
    let mut options = gender_cluster(record);
    options.extend(
        [Variant::Shiny, Variant::Alolan, Variant::Lucky]
            .into_iter()
            .map(|variant| OptionControl::for_record(record, variant)),
    );

    CardView {
        name: record.name.clone(),
        dex_label: dex_label(record.dex),
        sprite_url: sprite_url(sprite_base, record.dex),
        owned: record.owned(),
        markers: record.owned_flags(),
        legendary: record.legendary,
        regional: record.regional,
        options,
        gender_spacer: record.ungendered,
    }
}

/// Either the single ungendered control or the male/female pair.
pub fn gender_cluster(record: &PokemonRecord) -> Vec<OptionControl> {
    if record.ungendered {
        vec![OptionControl::for_record(record, Variant::Ungendered)]
    } else {
        vec![
            OptionControl::for_record(record, Variant::Male),
            OptionControl::for_record(record, Variant::Female),
        ]
    }
}

pub fn dex_label(dex: u32) -> String {
    format!("#{:03}", dex)
}

pub fn sprite_url(base: &str, dex: u32) -> String {
    format!("{}/{}.png", base.trim_end_matches('/'), dex)
}
