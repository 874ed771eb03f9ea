use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;

use super::basic::{Card, CardError, Rank, Suit, Weight, RANK_ORDER};
use super::combination::Combination;

pub const MIN_HAND_SIZE: usize = 5;
pub const MAX_HAND_SIZE: usize = 7;

const ROYAL_RANKS: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];
const WHEEL_RANKS: [Rank; 5] = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];
const RUN_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("Hand '{hand}' has {count} cards, expected between 5 and 7")]
    InvalidHandSize { hand: String, count: usize },
    #[error("Hand '{hand}' contains an invalid card: {source}")]
    InvalidCard { hand: String, source: CardError },
}

impl HandError {
    /// Name of the hand that failed.
    pub fn hand(&self) -> &str {
        match self {
            HandError::InvalidHandSize { hand, .. } => hand,
            HandError::InvalidCard { hand, .. } => hand,
        }
    }
}

/// Classification outcome for one named hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandResult {
    pub hand_name: String,
    pub combination_name: String,
    pub hand_weight: Weight,
    pub combination_weight: i32,
}

impl HandResult {
    fn new(hand_name: &str, combination: Combination, hand_weight: Weight) -> Self {
        Self {
            hand_name: hand_name.to_string(),
            combination_name: combination.name().to_string(),
            hand_weight,
            combination_weight: combination.weight(),
        }
    }
}

/// A named set of 5 to 7 cards in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    name: String,
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Result<Self, HandError> {
        let name = name.into();
        if !(MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&cards.len()) {
            return Err(HandError::InvalidHandSize {
                hand: name,
                count: cards.len(),
            });
        }
        Ok(Self { name, cards })
    }

    /// Builds a hand from card tokens such as `["TH", "JH", ...]`.
    pub fn from_tokens<S: AsRef<str>>(
        name: impl Into<String>,
        tokens: &[S],
    ) -> Result<Self, HandError> {
        let name = name.into();
        let cards = tokens
            .iter()
            .map(|token| Card::from_string(token.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| HandError::InvalidCard {
                hand: name.clone(),
                source,
            })?;
        Self::new(name, cards)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sum of the weights of every card in the hand.
    pub fn weight(&self) -> Weight {
        self.cards.iter().map(Card::weight).sum()
    }

    /// Best combination this hand satisfies.
    pub fn combination(&self) -> Combination {
        let tally = Tally::new(&self.cards);
        PRIORITY_CHAIN
            .iter()
            .find(|(_, matches)| matches(&self.cards, &tally))
            .map(|(combination, _)| *combination)
            .unwrap_or(Combination::HighCard)
    }

    pub fn classify(&self) -> HandResult {
        HandResult::new(&self.name, self.combination(), self.weight())
    }
}

/// Per-rank and per-suit card counts for one hand.
struct Tally {
    ranks: [u8; Rank::COUNT],
    suits: [u8; Suit::COUNT],
}

impl Tally {
    fn new(cards: &[Card]) -> Self {
        let mut ranks = [0; Rank::COUNT];
        let mut suits = [0; Suit::COUNT];
        for card in cards {
            ranks[card.rank.index()] += 1;
            suits[card.suit.index()] += 1;
        }
        Self { ranks, suits }
    }

    fn contains(&self, rank: Rank) -> bool {
        self.ranks[rank.index()] > 0
    }

    /// Number of distinct suits in the hand.
    fn suit_count(&self) -> usize {
        self.suits.iter().filter(|&&count| count > 0).count()
    }

    fn has_rank_count(&self, count: u8) -> bool {
        self.ranks.contains(&count)
    }

    fn ranks_with_count(&self, count: u8) -> usize {
        self.ranks.iter().filter(|&&c| c == count).count()
    }

    /// Suits holding at least five cards, lowest suit code first.
    fn flush_suits(&self) -> impl Iterator<Item = Suit> + '_ {
        Suit::iter().filter(|suit| self.suits[suit.index()] as usize >= RUN_LENGTH)
    }
}

type Rule = fn(&[Card], &Tally) -> bool;

/// Category tests from strongest to weakest. The first match wins and a hand
/// matching none of them is a high card.
const PRIORITY_CHAIN: [(Combination, Rule); 9] = [
    (Combination::RoyalFlush, is_royal_flush),
    (Combination::StraightFlush, is_straight_flush),
    (Combination::FourOfAKind, is_four_of_a_kind),
    (Combination::FullHouse, is_full_house),
    (Combination::Flush, is_flush),
    (Combination::Straight, is_straight),
    (Combination::ThreeOfAKind, is_three_of_a_kind),
    (Combination::TwoPair, is_two_pair),
    (Combination::Pair, is_pair),
];

// Every card shares one suit, so rank presence is enough.
fn is_royal_flush(_cards: &[Card], tally: &Tally) -> bool {
    tally.suit_count() == 1 && ROYAL_RANKS.iter().all(|&rank| tally.contains(rank))
}

fn is_straight_flush(cards: &[Card], tally: &Tally) -> bool {
    tally.flush_suits().any(|suit| {
        let mut weights: Vec<Weight> = cards
            .iter()
            .filter(|card| card.suit == suit)
            .map(Card::weight)
            .collect();
        weights.sort_unstable();

        let mut run = 1;
        for pair in weights.windows(2) {
            if pair[1] - pair[0] == 1 {
                run += 1;
                if run == RUN_LENGTH {
                    return true;
                }
            } else {
                run = 1;
            }
        }
        false
    })
}

fn is_four_of_a_kind(_cards: &[Card], tally: &Tally) -> bool {
    tally.has_rank_count(4)
}

// Two triplets without a pair do not make a full house here.
fn is_full_house(_cards: &[Card], tally: &Tally) -> bool {
    tally.has_rank_count(3) && tally.has_rank_count(2)
}

fn is_flush(_cards: &[Card], tally: &Tally) -> bool {
    tally.flush_suits().next().is_some()
}

fn is_straight(_cards: &[Card], tally: &Tally) -> bool {
    // A-2-3-4-5 seeds the run so the ace counts below the two.
    let mut run = if WHEEL_RANKS.iter().all(|&rank| tally.contains(rank)) {
        1
    } else {
        0
    };

    for rank in RANK_ORDER {
        if tally.contains(rank) {
            run += 1;
            if run == RUN_LENGTH {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

fn is_three_of_a_kind(_cards: &[Card], tally: &Tally) -> bool {
    tally.has_rank_count(3)
}

fn is_two_pair(_cards: &[Card], tally: &Tally) -> bool {
    tally.ranks_with_count(2) >= 2
}

fn is_pair(_cards: &[Card], tally: &Tally) -> bool {
    tally.has_rank_count(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(tokens: &[&str]) -> Vec<Card> {
        tokens.iter().map(|t| Card::from_string(t).unwrap()).collect()
    }

    #[test]
    fn test_tally_counts_ranks_and_suits() {
        let tally = Tally::new(&cards(&["AH", "AC", "AD", "5S", "5H"]));
        assert_eq!(tally.ranks[Rank::Ace.index()], 3);
        assert_eq!(tally.ranks[Rank::Five.index()], 2);
        assert_eq!(tally.suits[Suit::Hearts.index()], 2);
        assert!(tally.has_rank_count(3));
        assert!(!tally.has_rank_count(4));
        assert_eq!(tally.ranks_with_count(2), 1);
        assert_eq!(tally.flush_suits().count(), 0);
        assert_eq!(tally.suit_count(), 4);
    }

    #[test]
    fn test_hand_new_rejects_undersized_hand() {
        let result = Hand::new("short", cards(&["AH", "KH", "QH", "JH"]));
        assert_eq!(
            result,
            Err(HandError::InvalidHandSize {
                hand: "short".to_string(),
                count: 4
            })
        );
        assert!(Hand::new("empty", Vec::new()).is_err());
    }

    #[test]
    fn test_hand_new_rejects_oversized_hand() {
        let result = Hand::new(
            "long",
            cards(&["2H", "3H", "4H", "5H", "6H", "7H", "8H", "9H"]),
        );
        assert!(matches!(
            result,
            Err(HandError::InvalidHandSize { count: 8, .. })
        ));
    }

    #[test]
    fn test_from_tokens_reports_hand_and_token() {
        let err = Hand::from_tokens("h1", &["TH", "JH", "QH", "KH", "1H"]).unwrap_err();
        assert_eq!(err.hand(), "h1");
        assert_eq!(
            err,
            HandError::InvalidCard {
                hand: "h1".to_string(),
                source: CardError::UnknownRank {
                    token: "1H".to_string(),
                    symbol: '1'
                }
            }
        );
    }

    #[test]
    fn test_hand_weight_sums_all_cards() {
        let hand =
            Hand::from_tokens("h", &["2C", "3D", "4H", "5S", "7C", "AH", "AD"]).unwrap();
        assert_eq!(hand.weight(), 2 + 3 + 4 + 5 + 7 + 14 + 14);
        assert_eq!(hand.name(), "h");
    }

    #[test]
    fn test_priority_chain_is_ordered_strongest_first() {
        for pair in PRIORITY_CHAIN.windows(2) {
            assert!(pair[0].0 > pair[1].0);
        }
        assert_eq!(PRIORITY_CHAIN[PRIORITY_CHAIN.len() - 1].0, Combination::Pair);
    }
}
