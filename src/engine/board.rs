//! Piles are stored in a fixed order: the seven tableau columns, the talon,
//! then the four foundations. That order is also the drop scan order and the
//! back-to-front draw order. Every card movement that can touch a foundation
//! goes through [`Board`] so the foundation tally stays exact.

use rand::Rng;

use crate::config::BoardSettings;
use crate::deck::{DeckImages, Renderer};
use crate::game::{
    Card, CardStack, Contact, DoubleClickEffect, FoundationPile, FoundationTally, Pile, PileError,
    PileId, Point, Positionable, Rect, ReleaseEffect, TableauPile, TalonPile, DECK_SIZE,
};

pub const TABLEAU_COUNT: usize = 7;
pub const FOUNDATION_COUNT: usize = 4;
pub const TALON_INDEX: usize = TABLEAU_COUNT;
pub const FIRST_FOUNDATION: usize = TALON_INDEX + 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    piles: Vec<Pile>,
    tally: FoundationTally,
}

impl Board {
    /// Lays out a shuffled deck: column `n` gets `n` cards, the rest go to
    /// the talon. Foundations sit above the last four columns.
    pub fn deal(deck: Vec<Card>, settings: &BoardSettings, base: (i32, i32)) -> Self {
        let (base_w, base_h) = base;
        let mut cards = deck.into_iter();
        let mut tableau = Vec::with_capacity(TABLEAU_COUNT);
        let mut foundations = Vec::with_capacity(FOUNDATION_COUNT);

        let mut x = settings.margin_space;
        let top_y = settings.margin_space;
        let tableau_y = settings.margin_space + settings.card_height + settings.row_space;
        for col in 0..TABLEAU_COUNT {
            let dealt: Vec<Card> = cards.by_ref().take(col + 1).collect();
            let pile = TableauPile::new(
                PileId::single(col),
                format!("Tableau {}", col + 1),
                Rect::new(x, tableau_y, base_w, base_h),
                settings.tile_init_space,
                settings.tile_add_space,
                dealt,
            );
            if col + FOUNDATION_COUNT >= TABLEAU_COUNT {
                let slot = foundations.len();
                foundations.push(Pile::Foundation(FoundationPile::new(
                    PileId::single(FIRST_FOUNDATION + slot),
                    format!("Foundation {}", slot + 1),
                    Rect::new(x, top_y, base_w, base_h),
                )));
            }
            x += pile.stack().rect().w + settings.start_space;
            tableau.push(Pile::Tableau(pile));
        }

        let talon = TalonPile::new(
            TALON_INDEX,
            "Talon",
            Point::new(settings.margin_space, top_y),
            settings.start_space,
            base,
            cards.collect(),
        );

        let mut piles = tableau;
        piles.push(Pile::Talon(talon));
        piles.extend(foundations);
        log::info!(
            "dealt {} tableau cards, {} to the talon",
            piles[..TABLEAU_COUNT].iter().map(Pile::count).sum::<usize>(),
            piles[TALON_INDEX].count()
        );
        Self::from_piles(piles)
    }

    pub fn from_piles(piles: Vec<Pile>) -> Self {
        let mut tally = FoundationTally::default();
        tally.added(
            piles
                .iter()
                .filter(|pile| pile.is_foundation())
                .map(Pile::count)
                .sum(),
        );
        Self { piles, tally }
    }

    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    pub fn pile(&self, idx: usize) -> Option<&Pile> {
        self.piles.get(idx)
    }

    pub fn pile_mut(&mut self, idx: usize) -> Option<&mut Pile> {
        self.piles.get_mut(idx)
    }

    pub fn stack(&self, id: PileId) -> Option<&CardStack> {
        self.piles.get(id.pile)?.stack(id.lane)
    }

    fn stack_mut(&mut self, id: PileId) -> Result<&mut CardStack, PileError> {
        self.piles
            .get_mut(id.pile)
            .and_then(|pile| pile.stack_mut(id.lane))
            .ok_or(PileError::UnknownPile(id))
    }

    fn is_foundation(&self, idx: usize) -> bool {
        self.piles.get(idx).is_some_and(Pile::is_foundation)
    }

    pub fn foundation_indices(&self) -> Vec<usize> {
        (0..self.piles.len())
            .filter(|&idx| self.is_foundation(idx))
            .collect()
    }

    pub fn foundation_total(&self) -> usize {
        self.tally.total()
    }

    pub fn foundation_card_count(&self) -> usize {
        self.piles
            .iter()
            .filter(|pile| pile.is_foundation())
            .map(Pile::count)
            .sum()
    }

    pub fn is_complete(&self) -> bool {
        self.tally.is_complete(DECK_SIZE)
    }

    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Pile::count).sum()
    }

    pub fn pile_at(&self, point: Point) -> Option<usize> {
        self.piles.iter().position(|pile| pile.has_position(point))
    }

    pub fn add_cards(&mut self, id: PileId, cards: Vec<Card>) -> Result<(), PileError> {
        let amount = cards.len();
        self.stack_mut(id)?.add_cards(cards);
        if self.is_foundation(id.pile) {
            self.tally.added(amount);
        }
        Ok(())
    }

    pub fn take_top(&mut self, id: PileId, n: usize) -> Result<Vec<Card>, PileError> {
        let taken = self.stack_mut(id)?.take_top(n)?;
        if self.is_foundation(id.pile) {
            self.tally.removed(taken.len());
        }
        Ok(taken)
    }

    pub fn press(&mut self, idx: usize, at: Point) -> Option<Vec<Card>> {
        let taken = self.piles.get_mut(idx)?.rules_mut().on_press(at)?;
        if taken.is_empty() {
            return None;
        }
        if self.is_foundation(idx) {
            self.tally.removed(taken.len());
        }
        Some(taken)
    }

    pub fn release(&mut self, idx: usize, at: Point) -> ReleaseEffect {
        match self.piles.get_mut(idx) {
            Some(pile) => pile.rules_mut().on_release(at),
            None => ReleaseEffect::Nothing,
        }
    }

    pub fn double_click(&mut self, idx: usize, at: Point) -> DoubleClickEffect {
        let Some(pile) = self.piles.get_mut(idx) else {
            return DoubleClickEffect::Nothing;
        };
        let effect = pile.rules_mut().double_click(at);
        if matches!(effect, DoubleClickEffect::Lifted(_)) && self.is_foundation(idx) {
            self.tally.removed(1);
        }
        effect
    }

    /// The stack of pile `idx` under `at`; lane 0 unless the pile has lanes.
    pub fn stack_id_at(&self, idx: usize, at: Point) -> PileId {
        let lane = match self.piles.get(idx) {
            Some(Pile::Talon(talon)) => talon.lane().lane_at(at).unwrap_or(0),
            _ => 0,
        };
        PileId::new(idx, lane)
    }

    pub fn accepting_pile(&self, cards: &[Card]) -> Option<usize> {
        self.piles
            .iter()
            .position(|pile| pile.rules().valid_add_cards(cards, Contact::Required))
    }

    // Contact is not required: the card may be anywhere on the board.
    pub fn foundation_for(&self, card: &Card) -> Option<usize> {
        let group = std::slice::from_ref(card);
        self.foundation_indices().into_iter().find(|&idx| {
            self.piles[idx]
                .rules()
                .valid_add_cards(group, Contact::Ignored)
        })
    }

    pub fn jitter<R: Rng + ?Sized>(&mut self, rng: &mut R, amount: i32) {
        if amount <= 0 {
            return;
        }
        for pile in &mut self.piles {
            let dx = rng.gen_range(-amount..=amount);
            let dy = rng.gen_range(-amount..=amount);
            pile.move_by(dx, dy);
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer, images: &DeckImages) {
        for pile in &self.piles {
            pile.draw(renderer, images);
        }
    }
}
