use crate::deck::{DeckImages, Renderer};

use super::foundation::FoundationPile;
use super::geometry::{Point, Positionable, Rect};
use super::stack::CardStack;
use super::talon::TalonPile;
use super::tableau::TableauPile;
use super::types::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Required,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseEffect {
    Nothing,
    RevealedTop,
    Talon(super::DrawResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoubleClickEffect {
    Nothing,
    /// Already removed from the pile; headed for a foundation.
    Lifted(Card),
    Talon(super::DrawResult),
}

pub trait PileRules {
    fn valid_add_cards(&self, _cards: &[Card], _contact: Contact) -> bool {
        false
    }

    // Returned cards have already been removed from the pile.
    fn on_press(&mut self, _at: Point) -> Option<Vec<Card>> {
        None
    }

    fn on_release(&mut self, _at: Point) -> ReleaseEffect {
        ReleaseEffect::Nothing
    }

    fn double_click(&mut self, _at: Point) -> DoubleClickEffect {
        DoubleClickEffect::Nothing
    }
}

impl PileRules for CardStack {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pile {
    Plain(CardStack),
    Tableau(TableauPile),
    Foundation(FoundationPile),
    Talon(TalonPile),
}

impl Pile {
    pub fn name(&self) -> &str {
        match self {
            Pile::Plain(stack) => stack.name(),
            Pile::Tableau(pile) => pile.stack().name(),
            Pile::Foundation(pile) => pile.stack().name(),
            Pile::Talon(pile) => pile.lane().name(),
        }
    }

    pub fn rules(&self) -> &dyn PileRules {
        match self {
            Pile::Plain(stack) => stack,
            Pile::Tableau(pile) => pile,
            Pile::Foundation(pile) => pile,
            Pile::Talon(pile) => pile,
        }
    }

    pub fn rules_mut(&mut self) -> &mut dyn PileRules {
        match self {
            Pile::Plain(stack) => stack,
            Pile::Tableau(pile) => pile,
            Pile::Foundation(pile) => pile,
            Pile::Talon(pile) => pile,
        }
    }

    pub fn is_foundation(&self) -> bool {
        matches!(self, Pile::Foundation(_))
    }

    pub fn stack(&self, lane: usize) -> Option<&CardStack> {
        let single = match self {
            Pile::Plain(stack) => stack,
            Pile::Tableau(pile) => pile.stack(),
            Pile::Foundation(pile) => pile.stack(),
            Pile::Talon(pile) => return pile.lane().pile(lane),
        };
        (lane == 0).then_some(single)
    }

    pub fn stack_mut(&mut self, lane: usize) -> Option<&mut CardStack> {
        let single = match self {
            Pile::Plain(stack) => stack,
            Pile::Tableau(pile) => pile.stack_mut(),
            Pile::Foundation(pile) => pile.stack_mut(),
            Pile::Talon(pile) => return pile.lane_mut().pile_mut(lane),
        };
        (lane == 0).then_some(single)
    }

    pub fn stacks(&self) -> Vec<&CardStack> {
        match self {
            Pile::Talon(pile) => pile.lane().piles().iter().collect(),
            _ => self.stack(0).into_iter().collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.stacks().iter().map(|stack| stack.count()).sum()
    }

    pub fn set_visible(&mut self, visible: bool) {
        match self {
            Pile::Plain(stack) => stack.visible = visible,
            Pile::Tableau(pile) => pile.stack_mut().visible = visible,
            Pile::Foundation(pile) => pile.stack_mut().visible = visible,
            Pile::Talon(pile) => pile.lane_mut().set_visible(visible),
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer, images: &DeckImages) {
        for stack in self.stacks() {
            stack.draw(renderer, images);
        }
    }
}

impl Positionable for Pile {
    fn rect(&self) -> Rect {
        match self {
            Pile::Plain(stack) => stack.rect(),
            Pile::Tableau(pile) => pile.stack().rect(),
            Pile::Foundation(pile) => pile.stack().rect(),
            Pile::Talon(pile) => pile.lane().rect(),
        }
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        match self {
            Pile::Plain(stack) => stack.move_by(dx, dy),
            Pile::Tableau(pile) => pile.stack_mut().move_by(dx, dy),
            Pile::Foundation(pile) => pile.stack_mut().move_by(dx, dy),
            Pile::Talon(pile) => pile.lane_mut().move_by(dx, dy),
        }
    }

    fn has_position(&self, point: Point) -> bool {
        match self {
            Pile::Plain(stack) => stack.has_position(point),
            Pile::Tableau(pile) => pile.stack().has_position(point),
            Pile::Foundation(pile) => pile.stack().has_position(point),
            Pile::Talon(pile) => pile.lane().has_position(point),
        }
    }
}
