use super::geometry::{Point, Positionable, Rect};
use super::pile::{Contact, DoubleClickEffect, PileRules, ReleaseEffect};
use super::stack::{CardStack, Stacking};
use super::types::{Card, PileId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableauPile {
    stack: CardStack,
}

impl TableauPile {
    pub fn new(
        id: PileId,
        name: impl Into<String>,
        rect: Rect,
        init_space: i32,
        add_space: i32,
        mut cards: Vec<Card>,
    ) -> Self {
        let last = cards.len().saturating_sub(1);
        for (idx, card) in cards.iter_mut().enumerate() {
            card.face_up = idx == last;
        }
        let stack = CardStack::new(
            id,
            name,
            rect,
            Stacking::Tiled {
                init_space,
                add_space,
            },
        )
        .with_cards(cards);
        Self { stack }
    }

    pub fn stack(&self) -> &CardStack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut CardStack {
        &mut self.stack
    }
}

impl PileRules for TableauPile {
    fn valid_add_cards(&self, cards: &[Card], _contact: Contact) -> bool {
        let Some(bottom) = cards.first() else {
            return false;
        };
        match self.stack.top() {
            None => bottom.rank == 13 && self.stack.collides_with(bottom),
            Some(top) => {
                top.face_up
                    && !top.color_matches(bottom)
                    && top.rank == bottom.rank + 1
                    && top.collides_with(bottom)
            }
        }
    }

    fn on_press(&mut self, at: Point) -> Option<Vec<Card>> {
        let idx = self.stack.card_index_at(at)?;
        if !self.stack.cards()[idx].face_up {
            return None;
        }
        let amount = self.stack.count() - idx;
        self.stack.take_top(amount).ok()
    }

    fn on_release(&mut self, at: Point) -> ReleaseEffect {
        if !self.stack.top_is_at(at) {
            return ReleaseEffect::Nothing;
        }
        match self.stack.top_mut() {
            Some(card) if !card.face_up => {
                card.face_up = true;
                ReleaseEffect::RevealedTop
            }
            _ => ReleaseEffect::Nothing,
        }
    }

    fn double_click(&mut self, at: Point) -> DoubleClickEffect {
        let Some(idx) = self.stack.card_index_at(at) else {
            return DoubleClickEffect::Nothing;
        };
        if idx + 1 != self.stack.count() || !self.stack.cards()[idx].face_up {
            return DoubleClickEffect::Nothing;
        }
        match self.stack.take_top(1).ok().and_then(|mut top| top.pop()) {
            Some(card) => DoubleClickEffect::Lifted(card),
            None => DoubleClickEffect::Nothing,
        }
    }
}
