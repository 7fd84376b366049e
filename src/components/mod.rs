pub mod collection_screen;
pub mod filter_bar;
pub mod pokemon_card;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use collection_screen::{CollectionScreen, CollectionScreenProps};
pub use filter_bar::{FilterBar, FilterBarProps};
pub use pokemon_card::{PokemonCard, PokemonCardProps, CARD_HEIGHT, CARD_WIDTH};
