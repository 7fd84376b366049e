//! dextrack - Pokémon collection tracker TUI
//!
//! The binary wires these modules into a tui-dispatch runtime; the library
//! exposes them for testing.

pub mod action;
pub mod api;
pub mod catalog;
pub mod components;
pub mod effect;
pub mod error;
pub mod filter;
pub mod logging;
pub mod record;
pub mod reducer;
pub mod state;
pub mod view;
