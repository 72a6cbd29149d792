use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::BoardSettings;
use crate::deck::{AssetError, AssetProvider, DeckImages, Renderer};
use crate::game::{
    shuffled_deck, Card, DoubleClickEffect, PileError, PileId, Point, ReleaseEffect, DECK_SIZE,
};

use super::board::Board;
use super::clock::Clock;
use super::double_click::DoubleClick;
use super::input::{InputEvent, InputSource, PointerButton};
use super::pile_move::PileMove;
use super::status_text::elapsed_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    PickedUp { source: PileId, cards: usize },
    Dragged,
    Dropped { target: usize },
    Returned { source: PileId },
    AutoFoundation { foundation: usize },
    DoubleClickMiss,
    Released(ReleaseEffect),
    Reset,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct Game {
    settings: BoardSettings,
    images: DeckImages,
    board: Board,
    held: PileMove,
    clicks: DoubleClick<Option<usize>>,
    rng: StdRng,
    started_at: Duration,
    won: bool,
}

impl Game {
    // The layout follows the size of the loaded faces, not the one in `settings`.
    pub fn new(
        settings: BoardSettings,
        provider: &mut dyn AssetProvider,
        seed: u64,
        now: Duration,
    ) -> Result<Self, AssetError> {
        let images = DeckImages::load(provider, &settings.back_image, &settings.placeholder_image)?;
        let (card_width, card_height) = images.card_size();
        let settings = settings.with_card_size(card_width, card_height);
        let mut rng = StdRng::seed_from_u64(seed);
        let board = deal_board(&settings, &images, &mut rng);
        log::info!("new game with seed {seed}");
        Ok(Self::with_board(settings, images, board, rng, now))
    }

    pub fn with_board(
        settings: BoardSettings,
        images: DeckImages,
        board: Board,
        rng: StdRng,
        now: Duration,
    ) -> Self {
        let clicks = DoubleClick::new(settings.double_click_window);
        let mut game = Self {
            settings,
            images,
            board,
            held: PileMove::default(),
            clicks,
            rng,
            started_at: now,
            won: false,
        };
        game.check_win();
        game
    }

    pub fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    pub fn images(&self) -> &DeckImages {
        &self.images
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn held(&self) -> &PileMove {
        &self.held
    }

    pub fn is_holding(&self) -> bool {
        self.held.has_cards()
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn reset(&mut self, now: Duration) {
        self.held.discard();
        self.clicks.reset();
        self.board = deal_board(&self.settings, &self.images, &mut self.rng);
        self.started_at = now;
        self.won = false;
        log::info!("game reset");
    }

    pub fn handle_event(&mut self, event: InputEvent, now: Duration) -> Result<Transition, PileError> {
        match event {
            InputEvent::Quit => Ok(Transition::Quit),
            InputEvent::Reset => {
                self.reset(now);
                Ok(Transition::Reset)
            }
            InputEvent::Press {
                button: PointerButton::Primary,
                position,
            } => self.press(position, now),
            InputEvent::Release {
                button: PointerButton::Primary,
                position,
            } => self.release(position, now),
            InputEvent::Motion { delta, .. } => Ok(self.drag(delta)),
            InputEvent::Press { .. } | InputEvent::Release { .. } => Ok(Transition::None),
        }
    }

    fn press(&mut self, position: Point, now: Duration) -> Result<Transition, PileError> {
        if self.won {
            return Ok(Transition::None);
        }
        let target = self.board.pile_at(position);
        self.clicks.press(now, target);
        // A press while holding means the matching release was lost.
        if self.held.has_cards() {
            return Ok(Transition::None);
        }
        let Some(idx) = target else {
            return Ok(Transition::None);
        };
        let Some(cards) = self.board.press(idx, position) else {
            return Ok(Transition::None);
        };
        let source = match self.held.source_for(&cards) {
            Ok(Some(source)) => source,
            Ok(None) => return Ok(Transition::None),
            Err(err) => {
                log::warn!("press on pile {idx} failed: {err}; putting the cards back");
                let home = self.board.stack_id_at(idx, position);
                self.board.add_cards(home, cards)?;
                return Err(err);
            }
        };
        let count = cards.len();
        self.held.pick_up(cards)?;
        Ok(Transition::PickedUp {
            source,
            cards: count,
        })
    }

    fn drag(&mut self, (dx, dy): (i32, i32)) -> Transition {
        if self.won || !self.held.has_cards() {
            return Transition::None;
        }
        self.held.move_by(dx, dy);
        Transition::Dragged
    }

    fn release(&mut self, position: Point, now: Duration) -> Result<Transition, PileError> {
        if self.won {
            self.reset(now);
            return Ok(Transition::Reset);
        }
        let double = self.clicks.release(now);
        if self.held.has_cards() {
            let dropped = self.drop_held()?;
            if !double {
                return Ok(dropped);
            }
            return Ok(match self.route_double_click(position)? {
                Transition::None => dropped,
                Transition::DoubleClickMiss if matches!(dropped, Transition::Dropped { .. }) => {
                    dropped
                }
                routed => routed,
            });
        }
        if double {
            return self.route_double_click(position);
        }
        let Some(idx) = self.board.pile_at(position) else {
            return Ok(Transition::None);
        };
        Ok(match self.board.release(idx, position) {
            ReleaseEffect::Nothing => Transition::None,
            effect => Transition::Released(effect),
        })
    }

    fn drop_held(&mut self) -> Result<Transition, PileError> {
        match self.board.accepting_pile(self.held.cards()) {
            Some(target) => {
                self.held.commit(&mut self.board, PileId::single(target))?;
                self.check_win();
                Ok(Transition::Dropped { target })
            }
            None => Ok(match self.held.cancel(&mut self.board)? {
                Some(source) => Transition::Returned { source },
                None => Transition::None,
            }),
        }
    }

    /// Sends the double-clicked card to the first foundation that takes it,
    /// or back to its own pile. On the Draw pile it turns a card instead.
    pub fn route_double_click(&mut self, position: Point) -> Result<Transition, PileError> {
        let Some(idx) = self.board.pile_at(position) else {
            return Ok(Transition::None);
        };
        let card = match self.board.double_click(idx, position) {
            DoubleClickEffect::Nothing => return Ok(Transition::None),
            DoubleClickEffect::Talon(result) => {
                return Ok(Transition::Released(ReleaseEffect::Talon(result)))
            }
            DoubleClickEffect::Lifted(card) => card,
        };
        let home = card.pile.ok_or(PileError::Orphaned)?;
        match self.board.foundation_for(&card) {
            Some(foundation) => {
                log::debug!("double click sent {} to pile {foundation}", card.label());
                self.board.add_cards(PileId::single(foundation), vec![card])?;
                self.check_win();
                Ok(Transition::AutoFoundation { foundation })
            }
            None => {
                log::debug!("double click on {}: no foundation takes it", card.label());
                self.board.add_cards(home, vec![card])?;
                Ok(Transition::DoubleClickMiss)
            }
        }
    }

    fn check_win(&mut self) {
        if !self.won && self.board.is_complete() {
            self.won = true;
            log::info!("all {DECK_SIZE} cards are on the foundations");
        }
    }

    pub fn celebrate(&mut self, now: Duration) {
        if !self.won {
            return;
        }
        self.board.jitter(&mut self.rng, self.settings.win_jitter);
        self.started_at = now;
    }

    pub fn elapsed(&self, now: Duration) -> Duration {
        if self.won {
            return Duration::ZERO;
        }
        now.saturating_sub(self.started_at)
    }

    pub fn draw(&self, renderer: &mut dyn Renderer, now: Duration) {
        renderer.clear();
        self.board.draw(renderer, &self.images);
        self.held.draw(renderer, &self.images);
        let (_, height) = self.settings.board_size();
        renderer.draw_text(&elapsed_label(self.elapsed(now)), Point::new(50, height - 20));
        renderer.present();
    }

    pub fn run_frame(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        clock: &dyn Clock,
    ) -> Result<FrameOutcome, PileError> {
        while let Some(event) = input.poll_event() {
            if self.handle_event(event, clock.elapsed())? == Transition::Quit {
                return Ok(FrameOutcome::Quit);
            }
        }
        let now = clock.elapsed();
        self.celebrate(now);
        self.draw(renderer, now);
        Ok(FrameOutcome::Continue)
    }
}

fn deal_board(settings: &BoardSettings, images: &DeckImages, rng: &mut StdRng) -> Board {
    let (card_width, card_height) = images.card_size();
    let deck: Vec<Card> = shuffled_deck(rng, card_width, card_height);
    let placeholder = images.placeholder();
    Board::deal(deck, settings, (placeholder.width, placeholder.height))
}
