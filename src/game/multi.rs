use super::geometry::{Point, Positionable, Rect};
use super::stack::CardStack;

/// A horizontal lane of sub-piles. It owns no cards itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiPile {
    name: String,
    origin: Point,
    space: i32,
    piles: Vec<CardStack>,
}

impl MultiPile {
    pub fn new(name: impl Into<String>, origin: Point, space: i32) -> Self {
        Self {
            name: name.into(),
            origin,
            space,
            piles: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn setup_pile(&mut self, mut pile: CardStack) {
        let displace: i32 = self
            .piles
            .iter()
            .map(|existing| existing.rect().w + self.space)
            .sum();
        pile.set_position(self.origin.offset(displace, 0));
        self.piles.push(pile);
    }

    pub fn piles(&self) -> &[CardStack] {
        &self.piles
    }

    pub fn piles_mut(&mut self) -> &mut [CardStack] {
        &mut self.piles
    }

    pub fn pile(&self, lane: usize) -> Option<&CardStack> {
        self.piles.get(lane)
    }

    pub fn pile_mut(&mut self, lane: usize) -> Option<&mut CardStack> {
        self.piles.get_mut(lane)
    }

    pub fn lane_at(&self, point: Point) -> Option<usize> {
        self.piles.iter().position(|pile| pile.has_position(point))
    }

    pub fn set_visible(&mut self, visible: bool) {
        for pile in &mut self.piles {
            pile.visible = visible;
        }
    }
}

impl Positionable for MultiPile {
    fn rect(&self) -> Rect {
        let Some(first) = self.piles.first() else {
            return Rect::at(self.origin, 0, 0);
        };
        let mut left = first.rect().x;
        let mut top = first.rect().y;
        let mut right = first.rect().right();
        let mut bottom = first.rect().bottom();
        for pile in &self.piles[1..] {
            let rect = pile.rect();
            left = left.min(rect.x);
            top = top.min(rect.y);
            right = right.max(rect.right());
            bottom = bottom.max(rect.bottom());
        }
        Rect::new(left, top, right - left, bottom - top)
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        self.origin = self.origin.offset(dx, dy);
        for pile in &mut self.piles {
            pile.move_by(dx, dy);
        }
    }

    fn position(&self) -> Point {
        self.origin
    }

    fn has_position(&self, point: Point) -> bool {
        self.lane_at(point).is_some()
    }
}
