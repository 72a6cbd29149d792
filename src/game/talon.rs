use super::geometry::{Point, Rect};
use super::multi::MultiPile;
use super::pile::{DoubleClickEffect, PileRules, ReleaseEffect};
use super::stack::{CardStack, Stacking};
use super::types::{Card, PileId};
use super::DrawResult;

pub const DRAW_LANE: usize = 0;
pub const DISCARD_LANE: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalonPile {
    lane: MultiPile,
}

impl TalonPile {
    /// `pile` is the board index of the talon; `base` sizes both sub-piles.
    pub fn new(
        pile: usize,
        name: impl Into<String>,
        origin: Point,
        space: i32,
        base: (i32, i32),
        cards: Vec<Card>,
    ) -> Self {
        let (w, h) = base;
        let mut lane = MultiPile::new(name, origin, space);

        let mut draw = CardStack::new(
            PileId::new(pile, DRAW_LANE),
            "Draw",
            Rect::new(0, 0, w, h),
            Stacking::Simple,
        )
        .with_cards(cards);
        draw.set_all_face_up(false);
        lane.setup_pile(draw);

        lane.setup_pile(CardStack::new(
            PileId::new(pile, DISCARD_LANE),
            "Discard",
            Rect::new(0, 0, w, h),
            Stacking::Simple,
        ));

        Self { lane }
    }

    pub fn lane(&self) -> &MultiPile {
        &self.lane
    }

    pub fn lane_mut(&mut self) -> &mut MultiPile {
        &mut self.lane
    }

    pub fn draw_pile(&self) -> &CardStack {
        &self.lane.piles()[DRAW_LANE]
    }

    pub fn discard_pile(&self) -> &CardStack {
        &self.lane.piles()[DISCARD_LANE]
    }

    fn split_mut(&mut self) -> (&mut CardStack, &mut CardStack) {
        let (draw, discard) = self.lane.piles_mut().split_at_mut(DISCARD_LANE);
        (&mut draw[DRAW_LANE], &mut discard[0])
    }

    pub fn advance(&mut self) -> DrawResult {
        let (draw, discard) = self.split_mut();
        if !draw.is_empty() {
            let mut turned = draw.take_top(1).unwrap_or_default();
            for card in &mut turned {
                card.face_up = true;
                log::debug!("talon: turned {}", card.label());
            }
            discard.add_cards(turned);
            return DrawResult::DrewFromStock;
        }
        if discard.is_empty() {
            return DrawResult::NoOp;
        }
        discard.set_all_face_up(false);
        let mut recycled = discard.take_all();
        recycled.reverse();
        log::debug!("talon: recycled {} discards", recycled.len());
        draw.add_cards(recycled);
        DrawResult::RecycledWaste
    }
}

impl PileRules for TalonPile {
    fn on_press(&mut self, at: Point) -> Option<Vec<Card>> {
        if self.lane.lane_at(at)? != DISCARD_LANE {
            return None;
        }
        let (_, discard) = self.split_mut();
        if discard.is_empty() {
            return None;
        }
        discard.take_top(1).ok()
    }

    fn on_release(&mut self, at: Point) -> ReleaseEffect {
        match self.lane.lane_at(at) {
            Some(DRAW_LANE) => ReleaseEffect::Talon(self.advance()),
            _ => ReleaseEffect::Nothing,
        }
    }

    fn double_click(&mut self, at: Point) -> DoubleClickEffect {
        match self.lane.lane_at(at) {
            Some(DRAW_LANE) => DoubleClickEffect::Talon(self.advance()),
            Some(_) => {
                let (_, discard) = self.split_mut();
                match discard.take_top(1).ok().and_then(|mut top| top.pop()) {
                    Some(card) => DoubleClickEffect::Lifted(card),
                    None => DoubleClickEffect::Nothing,
                }
            }
            None => DoubleClickEffect::Nothing,
        }
    }
}
