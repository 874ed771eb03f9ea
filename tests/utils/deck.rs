use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;

use holdem_evaluator::{holdem::Rank, holdem::Suit, Card};

pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for suit in Suit::iter() {
        for rank in Rank::iter() {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Deals `size` distinct cards from a shuffled deck.
pub fn random_hand<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<Card> {
    let mut deck = full_deck();
    deck.shuffle(rng);
    deck.truncate(size);
    deck
}

pub fn shuffled<R: Rng + ?Sized>(rng: &mut R, cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.shuffle(rng);
    cards
}
