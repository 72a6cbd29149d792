use super::geometry::{Point, Positionable, Rect};
use super::pile::{Contact, PileRules};
use super::stack::{CardStack, Stacking};
use super::types::{Card, PileId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundationPile {
    stack: CardStack,
}

impl FoundationPile {
    pub fn new(id: PileId, name: impl Into<String>, rect: Rect) -> Self {
        Self {
            stack: CardStack::new(id, name, rect, Stacking::Simple),
        }
    }

    pub fn stack(&self) -> &CardStack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut CardStack {
        &mut self.stack
    }
}

impl PileRules for FoundationPile {
    fn valid_add_cards(&self, cards: &[Card], contact: Contact) -> bool {
        let [card] = cards else {
            return false;
        };
        if contact == Contact::Required && !self.stack.collides_with(card) {
            return false;
        }
        match self.stack.top() {
            None => card.rank == 1,
            Some(top) => top.suit == card.suit && card.rank == top.rank + 1,
        }
    }

    fn on_press(&mut self, at: Point) -> Option<Vec<Card>> {
        if !self.stack.has_position(at) || self.stack.is_empty() {
            return None;
        }
        self.stack.take_top(1).ok()
    }
}

/// Cards on all foundation piles. Kept in step by the board on every
/// foundation mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FoundationTally {
    total: usize,
}

impl FoundationTally {
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn added(&mut self, cards: usize) {
        self.total += cards;
    }

    pub fn removed(&mut self, cards: usize) {
        debug_assert!(cards <= self.total, "foundation tally underflow");
        self.total = self.total.saturating_sub(cards);
    }

    pub fn is_complete(&self, deck_size: usize) -> bool {
        self.total == deck_size
    }
}
