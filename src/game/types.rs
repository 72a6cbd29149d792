use std::fmt;

use thiserror::Error;

use super::geometry::{Point, Positionable, Rect};
use super::rank_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    pub fn color(self) -> CardColor {
        if self.is_red() {
            CardColor::Red
        } else {
            CardColor::Black
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        }
    }

    pub fn image_letter(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardColor {
    Red,
    Black,
}

/// Handle to a card stack in the board's pile table.
///
/// `pile` indexes the board's piles; `lane` selects the sub-pile of a
/// multi-pile and is 0 for single-stack piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PileId {
    pub pile: usize,
    pub lane: usize,
}

impl PileId {
    pub const fn new(pile: usize, lane: usize) -> Self {
        Self { pile, lane }
    }

    pub const fn single(pile: usize) -> Self {
        Self { pile, lane: 0 }
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.pile, self.lane)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PileError {
    #[error("cannot take {requested} cards from a pile holding {available}")]
    TakeOutOfRange { requested: usize, available: usize },
    #[error("pile move is already holding cards")]
    AlreadyHolding,
    #[error("no pile with id {0}")]
    UnknownPile(PileId),
    #[error("picked up cards do not belong to any pile")]
    Orphaned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
    pub face_up: bool,
    pub rect: Rect,
    pub pile: Option<PileId>,
}

impl Card {
    pub fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
            rect: Rect::default(),
            pile: None,
        }
    }

    pub fn sized(mut self, width: i32, height: i32) -> Self {
        self.rect.w = width;
        self.rect.h = height;
        self
    }

    pub fn face_down(mut self) -> Self {
        self.face_up = false;
        self
    }

    pub fn label(&self) -> String {
        format!("{}{}", rank_label(self.rank), self.suit.short())
    }

    /// Asset name of the face image, e.g. `07h` or `13s`.
    pub fn image_name(&self) -> String {
        format!("{:02}{}", self.rank, self.suit.image_letter())
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn color_matches(&self, other: &Card) -> bool {
        self.color() == other.color()
    }
}

impl Positionable for Card {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        self.rect.translate(dx, dy);
    }

    fn set_position(&mut self, origin: Point) {
        self.rect = self.rect.moved_to(origin);
    }
}
