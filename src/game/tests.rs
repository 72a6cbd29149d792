use proptest::prelude::*;

use super::*;

const W: i32 = 75;
const H: i32 = 122;

fn card(suit: Suit, rank: u8, face_up: bool) -> Card {
    let card = Card::new(suit, rank).sized(W, H);
    if face_up {
        card
    } else {
        card.face_down()
    }
}

fn simple_stack(cards: Vec<Card>) -> CardStack {
    CardStack::new(PileId::single(0), "Plain", Rect::new(0, 0, W, H), Stacking::Simple)
        .with_cards(cards)
}

fn tableau(cards: Vec<Card>) -> TableauPile {
    TableauPile::new(PileId::single(0), "Tableau 1", Rect::new(0, 0, W, H), 5, 15, cards)
}

fn face_up_tableau(cards: Vec<Card>) -> TableauPile {
    let mut pile = tableau(Vec::new());
    pile.stack_mut().add_cards(cards);
    pile
}

fn talon(cards: Vec<Card>) -> TalonPile {
    TalonPile::new(7, "Talon", Point::new(20, 20), 10, (W, H), cards)
}

fn keys(cards: &[Card]) -> Vec<(Suit, u8)> {
    cards.iter().map(|card| (card.suit, card.rank)).collect()
}

#[test]
fn full_deck_holds_every_card_once() {
    let deck = full_deck(W, H);
    let mut seen = keys(&deck);
    seen.sort_by_key(|&(suit, rank)| (suit as u8, rank));
    seen.dedup();

    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.iter().all(|card| card.face_up && card.pile.is_none()));
}

#[test]
fn seeded_decks_are_deterministic() {
    let deck_a = seeded_deck(42, W, H);
    let deck_b = seeded_deck(42, W, H);
    let deck_c = seeded_deck(43, W, H);

    assert_eq!(deck_a, deck_b);
    assert_ne!(keys(&deck_a), keys(&deck_c));
}

#[test]
fn face_images_use_two_digit_rank_and_suit_letter() {
    assert_eq!(Card::new(Suit::Hearts, 7).image_name(), "07h");
    assert_eq!(Card::new(Suit::Spades, 13).image_name(), "13s");
    assert_eq!(Card::new(Suit::Clubs, 1).image_name(), "01c");
    assert_eq!(Card::new(Suit::Diamonds, 12).label(), "QD");
}

#[test]
fn rect_edges_follow_half_open_rules() {
    let rect = Rect::new(10, 10, 20, 20);

    assert!(rect.contains(Point::new(10, 10)));
    assert!(rect.contains(Point::new(29, 29)));
    assert!(!rect.contains(Point::new(30, 15)));
    assert!(!rect.contains(Point::new(15, 30)));

    assert!(rect.overlaps(&Rect::new(29, 29, 5, 5)));
    assert!(!rect.overlaps(&Rect::new(30, 10, 5, 5)));
    assert!(!rect.overlaps(&Rect::new(15, 15, 0, 5)));
}

#[test]
fn take_top_rejects_more_than_the_pile_holds() {
    let mut stack = simple_stack(vec![card(Suit::Clubs, 1, true), card(Suit::Clubs, 2, true)]);

    let err = stack.take_top(3).unwrap_err();

    assert_eq!(
        err,
        PileError::TakeOutOfRange {
            requested: 3,
            available: 2
        }
    );
    assert_eq!(stack.count(), 2);
}

#[test]
fn take_top_zero_returns_nothing() {
    let mut stack = simple_stack(vec![card(Suit::Clubs, 1, true)]);

    assert!(stack.take_top(0).unwrap().is_empty());
    assert_eq!(stack.count(), 1);
}

#[test]
fn added_cards_point_back_at_their_stack() {
    let id = PileId::new(3, 1);
    let stack = CardStack::new(id, "Lane", Rect::new(5, 5, W, H), Stacking::Simple)
        .with_cards(vec![card(Suit::Hearts, 4, true), card(Suit::Spades, 9, true)]);

    assert!(stack.cards().iter().all(|card| card.pile == Some(id)));
    assert!(stack.cards().iter().all(|card| card.rect.origin() == Point::new(5, 5)));
}

#[test]
fn tiled_stack_fans_by_face_state_and_grows() {
    let mut pile = tableau(vec![
        card(Suit::Clubs, 3, true),
        card(Suit::Hearts, 8, true),
        card(Suit::Spades, 12, true),
    ]);
    let ys: Vec<i32> = pile.stack().cards().iter().map(|card| card.rect.y).collect();

    assert_eq!(ys, vec![0, 5, 10]);
    assert_eq!(pile.stack().rect().h, 10 + H);

    pile.stack_mut()
        .add_cards(vec![card(Suit::Hearts, 11, true), card(Suit::Clubs, 10, true)]);
    let ys: Vec<i32> = pile.stack().cards().iter().map(|card| card.rect.y).collect();

    assert_eq!(ys, vec![0, 5, 10, 25, 40]);
    assert_eq!(pile.stack().rect().h, 40 + H);

    pile.stack_mut().take_all();
    assert_eq!(pile.stack().rect().h, H);
}

#[test]
fn dealt_tableau_shows_only_its_last_card() {
    let pile = tableau(vec![
        card(Suit::Clubs, 3, true),
        card(Suit::Hearts, 8, true),
        card(Suit::Spades, 12, false),
    ]);
    let faces: Vec<bool> = pile.stack().cards().iter().map(|card| card.face_up).collect();

    assert_eq!(faces, vec![false, false, true]);
}

#[test]
fn empty_tableau_takes_only_a_touching_king() {
    let pile = tableau(Vec::new());
    let king = card(Suit::Spades, 13, true);
    let queen = card(Suit::Hearts, 12, true);
    let mut far_king = king.clone();
    far_king.set_position(Point::new(400, 400));

    assert!(pile.valid_add_cards(std::slice::from_ref(&king), Contact::Required));
    assert!(!pile.valid_add_cards(std::slice::from_ref(&queen), Contact::Required));
    assert!(!pile.valid_add_cards(std::slice::from_ref(&far_king), Contact::Required));
    assert!(!pile.valid_add_cards(&[], Contact::Required));
}

#[test]
fn tableau_needs_alternating_colour_and_one_rank_lower() {
    let pile = face_up_tableau(vec![card(Suit::Spades, 9, true)]);
    let fits = card(Suit::Hearts, 8, true);
    let same_colour = card(Suit::Clubs, 8, true);
    let wrong_rank = card(Suit::Diamonds, 7, true);
    let run = vec![card(Suit::Diamonds, 8, true), card(Suit::Clubs, 7, true)];

    assert!(pile.valid_add_cards(std::slice::from_ref(&fits), Contact::Required));
    assert!(!pile.valid_add_cards(std::slice::from_ref(&same_colour), Contact::Required));
    assert!(!pile.valid_add_cards(std::slice::from_ref(&wrong_rank), Contact::Required));
    assert!(pile.valid_add_cards(&run, Contact::Required));
}

#[test]
fn tableau_rejects_drops_on_a_face_down_top() {
    let mut pile = face_up_tableau(vec![card(Suit::Spades, 9, true)]);
    pile.stack_mut().set_all_face_up(false);

    assert!(!pile.valid_add_cards(&[card(Suit::Hearts, 8, true)], Contact::Required));
}

#[test]
fn tableau_press_picks_up_from_clicked_face_up_card() {
    let mut pile = tableau(vec![card(Suit::Clubs, 2, false), card(Suit::Spades, 9, true)]);
    pile.stack_mut()
        .add_cards(vec![card(Suit::Hearts, 8, true), card(Suit::Clubs, 7, true)]);
    // Cards sit at y = 0, 5, 20, 35.

    assert_eq!(pile.on_press(Point::new(10, 2)), None);
    let taken = pile.on_press(Point::new(10, 10)).unwrap();

    assert_eq!(keys(&taken), vec![(Suit::Spades, 9), (Suit::Hearts, 8), (Suit::Clubs, 7)]);
    assert_eq!(pile.stack().count(), 1);
}

#[test]
fn tableau_release_turns_a_face_down_top() {
    let mut pile = face_up_tableau(vec![card(Suit::Clubs, 2, false)]);

    assert_eq!(pile.on_release(Point::new(500, 500)), ReleaseEffect::Nothing);
    assert_eq!(pile.on_release(Point::new(10, 10)), ReleaseEffect::RevealedTop);
    assert!(pile.stack().top().unwrap().face_up);
    assert_eq!(pile.on_release(Point::new(10, 10)), ReleaseEffect::Nothing);
}

#[test]
fn tableau_double_click_only_takes_the_face_up_top() {
    let mut pile = tableau(vec![card(Suit::Clubs, 2, true), card(Suit::Spades, 9, true)]);

    assert_eq!(pile.double_click(Point::new(10, 2)), DoubleClickEffect::Nothing);
    let DoubleClickEffect::Lifted(taken) = pile.double_click(Point::new(10, 20)) else {
        panic!("face-up top should be lifted");
    };

    assert_eq!((taken.suit, taken.rank), (Suit::Spades, 9));
    assert_eq!(pile.stack().count(), 1);
    assert_eq!(pile.double_click(Point::new(10, 20)), DoubleClickEffect::Nothing);
}

#[test]
fn foundation_builds_one_suit_upwards_from_ace() {
    let mut pile = FoundationPile::new(PileId::single(8), "Foundation 1", Rect::new(0, 0, W, H));
    let ace = card(Suit::Hearts, 1, true);
    let two = card(Suit::Hearts, 2, true);

    assert!(!pile.valid_add_cards(std::slice::from_ref(&two), Contact::Required));
    assert!(pile.valid_add_cards(std::slice::from_ref(&ace), Contact::Required));

    pile.stack_mut().add_cards(vec![ace]);

    assert!(pile.valid_add_cards(std::slice::from_ref(&two), Contact::Required));
    assert!(!pile.valid_add_cards(&[card(Suit::Diamonds, 2, true)], Contact::Required));
    assert!(!pile.valid_add_cards(&[card(Suit::Hearts, 3, true)], Contact::Required));
    assert!(!pile.valid_add_cards(&[two.clone(), card(Suit::Hearts, 3, true)], Contact::Ignored));
}

#[test]
fn foundation_contact_can_be_waived() {
    let pile = FoundationPile::new(PileId::single(8), "Foundation 1", Rect::new(0, 0, W, H));
    let mut ace = card(Suit::Clubs, 1, true);
    ace.set_position(Point::new(600, 600));

    assert!(!pile.valid_add_cards(std::slice::from_ref(&ace), Contact::Required));
    assert!(pile.valid_add_cards(std::slice::from_ref(&ace), Contact::Ignored));
}

#[test]
fn foundation_press_hands_out_its_top_card() {
    let mut pile = FoundationPile::new(PileId::single(8), "Foundation 1", Rect::new(0, 0, W, H));

    assert_eq!(pile.on_press(Point::new(5, 5)), None);

    pile.stack_mut()
        .add_cards(vec![card(Suit::Clubs, 1, true), card(Suit::Clubs, 2, true)]);
    let taken = pile.on_press(Point::new(5, 5)).unwrap();

    assert_eq!(keys(&taken), vec![(Suit::Clubs, 2)]);
    assert_eq!(pile.on_press(Point::new(500, 5)), None);
}

#[test]
fn plain_stack_uses_default_rules() {
    let mut stack = simple_stack(vec![card(Suit::Clubs, 5, true)]);

    assert!(!stack.valid_add_cards(&[card(Suit::Hearts, 4, true)], Contact::Ignored));
    assert_eq!(stack.on_press(Point::new(1, 1)), None);
    assert_eq!(stack.on_release(Point::new(1, 1)), ReleaseEffect::Nothing);
    assert_eq!(stack.double_click(Point::new(1, 1)), DoubleClickEffect::Nothing);
}

#[test]
fn talon_lays_draw_and_discard_side_by_side() {
    let pile = talon(vec![card(Suit::Clubs, 5, true)]);

    assert_eq!(pile.draw_pile().rect().origin(), Point::new(20, 20));
    assert_eq!(pile.discard_pile().rect().origin(), Point::new(20 + W + 10, 20));
    assert_eq!(pile.lane().rect(), Rect::new(20, 20, 2 * W + 10, H));
    assert!(!pile.draw_pile().top().unwrap().face_up);
    assert_eq!(pile.draw_pile().id(), PileId::new(7, DRAW_LANE));
    assert_eq!(pile.discard_pile().id(), PileId::new(7, DISCARD_LANE));
}

#[test]
fn talon_advances_through_the_stock_then_redeals() {
    let stock = vec![
        card(Suit::Clubs, 4, false),
        card(Suit::Hearts, 11, false),
        card(Suit::Spades, 1, false),
        card(Suit::Diamonds, 6, false),
    ];
    let original = keys(&stock);
    let mut pile = talon(stock);

    for _ in 0..original.len() {
        assert_eq!(pile.advance(), DrawResult::DrewFromStock);
    }

    let mut reversed = original.clone();
    reversed.reverse();
    assert!(pile.draw_pile().is_empty());
    assert_eq!(keys(pile.discard_pile().cards()), reversed);
    assert!(pile.discard_pile().cards().iter().all(|card| card.face_up));

    assert_eq!(pile.advance(), DrawResult::RecycledWaste);
    assert!(pile.discard_pile().is_empty());
    assert_eq!(keys(pile.draw_pile().cards()), original);
    assert!(pile.draw_pile().cards().iter().all(|card| !card.face_up));
}

#[test]
fn empty_talon_advance_is_a_no_op() {
    let mut pile = talon(Vec::new());

    assert_eq!(pile.advance(), DrawResult::NoOp);
}

#[test]
fn talon_clicks_map_to_lanes() {
    let mut pile = talon(vec![card(Suit::Clubs, 4, false), card(Suit::Hearts, 9, false)]);
    let draw_at = Point::new(30, 30);
    let discard_at = Point::new(20 + W + 20, 30);

    assert_eq!(pile.on_press(discard_at), None);
    assert_eq!(pile.on_press(draw_at), None);
    assert_eq!(
        pile.on_release(draw_at),
        ReleaseEffect::Talon(DrawResult::DrewFromStock)
    );
    assert_eq!(pile.on_release(discard_at), ReleaseEffect::Nothing);

    let picked = pile.on_press(discard_at).unwrap();
    assert_eq!(keys(&picked), vec![(Suit::Hearts, 9)]);

    assert_eq!(
        pile.double_click(draw_at),
        DoubleClickEffect::Talon(DrawResult::DrewFromStock)
    );
    assert_eq!(pile.discard_pile().count(), 1);
    let DoubleClickEffect::Lifted(doubled) = pile.double_click(discard_at) else {
        panic!("discard top should be lifted");
    };
    assert_eq!((doubled.suit, doubled.rank), (Suit::Clubs, 4));
    assert!(!pile.valid_add_cards(&[doubled], Contact::Ignored));
}

#[test]
fn hidden_stacks_are_not_hit() {
    let mut pile = Pile::Plain(simple_stack(vec![card(Suit::Clubs, 5, true)]));

    assert!(pile.has_position(Point::new(3, 3)));
    pile.set_visible(false);
    assert!(!pile.has_position(Point::new(3, 3)));
}

#[test]
fn pile_lanes_resolve_through_the_enum() {
    let pile = Pile::Talon(talon(vec![card(Suit::Clubs, 4, false)]));
    let column = Pile::Tableau(tableau(vec![card(Suit::Clubs, 2, false)]));

    assert_eq!(pile.stacks().len(), 2);
    assert_eq!(pile.stack(DISCARD_LANE).map(CardStack::count), Some(0));
    assert!(pile.stack(2).is_none());
    assert!(column.stack(1).is_none());
    assert_eq!(pile.count(), 1);
    assert_eq!(pile.name(), "Talon");
}

#[test]
fn moving_a_pile_moves_its_cards() {
    let mut pile = Pile::Tableau(tableau(vec![
        card(Suit::Clubs, 2, false),
        card(Suit::Hearts, 3, true),
    ]));

    pile.move_by(4, -2);

    let stack = pile.stack(0).unwrap();
    assert_eq!(stack.rect().origin(), Point::new(4, -2));
    assert_eq!(stack.cards()[1].rect.origin(), Point::new(4, 3));
}

#[test]
fn tally_tracks_adds_and_removes() {
    let mut tally = FoundationTally::default();
    tally.added(51);
    assert!(!tally.is_complete(DECK_SIZE));
    tally.added(1);
    assert!(tally.is_complete(DECK_SIZE));
    tally.removed(2);
    assert_eq!(tally.total(), 50);
}

proptest! {
    #[test]
    fn take_top_splits_the_pile_without_losing_cards(len in 0usize..20, n in 0usize..25) {
        let cards: Vec<Card> = full_deck(W, H).into_iter().take(len).collect();
        let mut stack = simple_stack(cards.clone());

        match stack.take_top(n) {
            Ok(taken) => {
                prop_assert!(n <= len);
                let mut rebuilt = stack.cards().to_vec();
                rebuilt.extend(taken);
                prop_assert_eq!(keys(&rebuilt), keys(&cards));
            }
            Err(err) => {
                prop_assert!(n > len);
                prop_assert_eq!(err, PileError::TakeOutOfRange { requested: n, available: len });
                prop_assert_eq!(stack.count(), len);
            }
        }
    }

    #[test]
    fn add_then_take_restores_the_count(base in 0usize..10, group in 0usize..10) {
        let deck = full_deck(W, H);
        let mut pile = tableau(deck[..base].to_vec());
        let before = pile.stack().count();

        pile.stack_mut().add_cards(deck[base..base + group].to_vec());
        let taken = pile.stack_mut().take_top(group).unwrap();

        prop_assert_eq!(taken.len(), group);
        prop_assert_eq!(pile.stack().count(), before);
    }
}
