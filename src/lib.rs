//! Klondike solitaire core: cards and piles, the move rules, and the
//! pointer-driven interaction loop. Drawing, input, image loading and time
//! come from the host through small traits.

pub mod config;
pub mod deck;
pub mod engine;
pub mod game;
pub mod headless;
