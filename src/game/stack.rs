use crate::deck::{DeckImages, Renderer};

use super::geometry::{Point, Positionable, Rect};
use super::types::{Card, PileError, PileId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stacking {
    Simple,
    /// Cards fan downwards. `init_space` follows a face-down card,
    /// `add_space` a face-up one.
    Tiled { init_space: i32, add_space: i32 },
}

// The last card is the top of the pile and is drawn in front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStack {
    id: PileId,
    name: String,
    rect: Rect,
    base_height: i32,
    stacking: Stacking,
    cards: Vec<Card>,
    pub visible: bool,
}

impl CardStack {
    pub fn new(id: PileId, name: impl Into<String>, rect: Rect, stacking: Stacking) -> Self {
        Self {
            id,
            name: name.into(),
            rect,
            base_height: rect.h,
            stacking,
            cards: Vec::new(),
            visible: true,
        }
    }

    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.add_cards(cards);
        self
    }

    pub fn id(&self) -> PileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stacking(&self) -> Stacking {
        self.stacking
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// Removes the last `n` cards, bottom-to-top order preserved.
    pub fn take_top(&mut self, n: usize) -> Result<Vec<Card>, PileError> {
        if n > self.cards.len() {
            return Err(PileError::TakeOutOfRange {
                requested: n,
                available: self.cards.len(),
            });
        }
        let split = self.cards.len() - n;
        let taken = self.cards.split_off(split);
        self.update_area();
        Ok(taken)
    }

    pub fn take_all(&mut self) -> Vec<Card> {
        let taken = std::mem::take(&mut self.cards);
        self.update_area();
        taken
    }

    pub fn add_cards(&mut self, cards: Vec<Card>) {
        for card in cards {
            self.add_single(card);
        }
        self.update_area();
    }

    fn add_single(&mut self, mut card: Card) {
        let origin = match (self.stacking, self.cards.last()) {
            (Stacking::Tiled { init_space, add_space }, Some(last)) => {
                let step = if last.face_up { add_space } else { init_space };
                last.rect.origin().offset(0, step)
            }
            _ => self.rect.origin(),
        };
        card.set_position(origin);
        card.pile = Some(self.id);
        self.cards.push(card);
    }

    pub fn set_all_face_up(&mut self, face_up: bool) {
        for card in &mut self.cards {
            card.face_up = face_up;
        }
    }

    pub fn card_index_at(&self, point: Point) -> Option<usize> {
        if !self.visible {
            return None;
        }
        self.cards.iter().rposition(|card| card.rect.contains(point))
    }

    pub fn top_is_at(&self, point: Point) -> bool {
        self.visible && self.top().is_some_and(|card| card.rect.contains(point))
    }

    fn update_area(&mut self) {
        if !matches!(self.stacking, Stacking::Tiled { .. }) {
            return;
        }
        self.rect.h = match (self.cards.first(), self.cards.last()) {
            (Some(first), Some(last)) => last.rect.bottom() - first.rect.top(),
            _ => self.base_height,
        };
    }

    pub fn draw(&self, renderer: &mut dyn Renderer, images: &DeckImages) {
        if !self.visible {
            return;
        }
        let Some(top) = self.cards.last() else {
            let placeholder = images.placeholder();
            let rect = Rect::at(self.rect.origin(), placeholder.width, placeholder.height);
            images.draw_placeholder(renderer, rect);
            return;
        };
        match self.stacking {
            Stacking::Simple => images.draw_card(renderer, top),
            Stacking::Tiled { .. } => {
                for card in &self.cards {
                    images.draw_card(renderer, card);
                }
            }
        }
    }
}

impl Positionable for CardStack {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        self.rect.translate(dx, dy);
        for card in &mut self.cards {
            card.move_by(dx, dy);
        }
    }

    fn has_position(&self, point: Point) -> bool {
        self.visible && self.rect.contains(point)
    }
}
