use std::fmt;
use strum_macros::EnumIter;

/// Poker hand categories, declared from strongest to weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Combination {
    RoyalFlush,
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    Pair,
    HighCard,
}

impl Combination {
    /// Fixed priority of the category, 10 for a royal flush down to 1 for a high card.
    pub fn weight(self) -> i32 {
        match self {
            Combination::RoyalFlush => 10,
            Combination::StraightFlush => 9,
            Combination::FourOfAKind => 8,
            Combination::FullHouse => 7,
            Combination::Flush => 6,
            Combination::Straight => 5,
            Combination::ThreeOfAKind => 4,
            Combination::TwoPair => 3,
            Combination::Pair => 2,
            Combination::HighCard => 1,
        }
    }

    /// Name reported to clients.
    pub fn name(self) -> &'static str {
        match self {
            Combination::RoyalFlush => "Royal Flush",
            Combination::StraightFlush => "Straight Flush",
            Combination::FourOfAKind => "Four of a kind",
            Combination::FullHouse => "Full House",
            Combination::Flush => "Flush",
            Combination::Straight => "Straight",
            Combination::ThreeOfAKind => "Three of a kind",
            Combination::TwoPair => "Two pair",
            Combination::Pair => "Pair",
            Combination::HighCard => "High card",
        }
    }
}

impl PartialOrd for Combination {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Combination {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight().cmp(&other.weight())
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
