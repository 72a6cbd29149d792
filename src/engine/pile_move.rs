use crate::deck::{DeckImages, Renderer};
use crate::game::{Card, PileError, PileId, Positionable};

use super::board::Board;

// Either both the cards and the source are set, or neither is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PileMove {
    cards: Vec<Card>,
    source: Option<PileId>,
}

impl PileMove {
    pub fn has_cards(&self) -> bool {
        !self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn source(&self) -> Option<PileId> {
        self.source
    }

    /// The pile `cards` would be returned to: the pile of the bottom card.
    pub fn source_for(&self, cards: &[Card]) -> Result<Option<PileId>, PileError> {
        if self.has_cards() || self.source.is_some() {
            return Err(PileError::AlreadyHolding);
        }
        match cards.first() {
            Some(first) => first.pile.map(Some).ok_or(PileError::Orphaned),
            None => Ok(None),
        }
    }

    pub fn pick_up(&mut self, cards: Vec<Card>) -> Result<(), PileError> {
        let Some(source) = self.source_for(&cards)? else {
            return Ok(());
        };
        log::debug!("picked up {} card(s) from {source}", cards.len());
        self.cards = cards;
        self.source = Some(source);
        Ok(())
    }

    // Legality is the caller's job.
    pub fn commit(&mut self, board: &mut Board, destination: PileId) -> Result<(), PileError> {
        if board.stack(destination).is_none() {
            return Err(PileError::UnknownPile(destination));
        }
        let (cards, _) = self.clear();
        log::debug!("dropped {} card(s) on {destination}", cards.len());
        board.add_cards(destination, cards)
    }

    pub fn cancel(&mut self, board: &mut Board) -> Result<Option<PileId>, PileError> {
        let Some(source) = self.source else {
            return Ok(None);
        };
        if board.stack(source).is_none() {
            return Err(PileError::UnknownPile(source));
        }
        let (cards, _) = self.clear();
        log::debug!("returned {} card(s) to {source}", cards.len());
        board.add_cards(source, cards)?;
        Ok(Some(source))
    }

    fn clear(&mut self) -> (Vec<Card>, Option<PileId>) {
        (std::mem::take(&mut self.cards), self.source.take())
    }

    pub fn discard(&mut self) {
        self.clear();
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        for card in &mut self.cards {
            card.move_by(dx, dy);
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer, images: &DeckImages) {
        for card in &self.cards {
            images.draw_card(renderer, card);
        }
    }
}
