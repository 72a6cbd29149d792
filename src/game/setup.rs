use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::*;

pub fn full_deck(card_width: i32, card_height: i32) -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in 1..=13 {
            deck.push(Card::new(suit, rank).sized(card_width, card_height));
        }
    }
    deck
}

pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R, card_width: i32, card_height: i32) -> Vec<Card> {
    let mut deck = full_deck(card_width, card_height);
    deck.shuffle(rng);
    deck
}

pub fn seeded_deck(seed: u64, card_width: i32, card_height: i32) -> Vec<Card> {
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled_deck(&mut rng, card_width, card_height)
}

pub fn random_seed() -> u64 {
    rand::thread_rng().gen()
}
