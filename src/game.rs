//! Cards, piles and the rules that decide which drops are legal.

mod foundation;
mod geometry;
mod multi;
mod pile;
mod setup;
mod stack;
mod tableau;
mod talon;
mod types;

pub use foundation::{FoundationPile, FoundationTally};
pub use geometry::{Point, Positionable, Rect};
pub use multi::MultiPile;
pub use pile::{Contact, DoubleClickEffect, Pile, PileRules, ReleaseEffect};
pub use setup::{full_deck, random_seed, seeded_deck, shuffled_deck};
pub use stack::{CardStack, Stacking};
pub use tableau::TableauPile;
pub use talon::{TalonPile, DISCARD_LANE, DRAW_LANE};
pub use types::{Card, CardColor, PileError, PileId, Suit};

pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawResult {
    DrewFromStock,
    RecycledWaste,
    NoOp,
}

pub fn rank_label(rank: u8) -> &'static str {
    match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => "?",
    }
}

#[cfg(test)]
mod tests;
