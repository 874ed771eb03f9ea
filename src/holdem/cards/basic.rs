use std::fmt;
use strum_macros::EnumIter;
use thiserror::Error;

/// Integer weight of a rank, summed into a hand weight.
pub type Weight = i32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("Card token '{0}' must be exactly two characters")]
    InvalidLength(String),
    #[error("Unknown rank symbol '{symbol}' in card '{token}'")]
    UnknownRank { token: String, symbol: char },
    #[error("Unknown suit symbol '{symbol}' in card '{token}'")]
    UnknownSuit { token: String, symbol: char },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Suit {
    Diamonds = 0,
    Clubs = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const COUNT: usize = 4;

    /// Index into per-suit tally tables.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Suit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'D' => Ok(Suit::Diamonds),
            'C' => Ok(Suit::Clubs),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

/// Rank weights indexed by `Rank as usize`.
pub const RANK_WEIGHTS: [Weight; Rank::COUNT] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];

/// Ascending rank order used by the straight scan.
pub const RANK_ORDER: [Rank; Rank::COUNT] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

impl Rank {
    pub const COUNT: usize = 13;

    /// Index into per-rank tally tables and `RANK_WEIGHTS`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn weight(self) -> Weight {
        RANK_WEIGHTS[self.index()]
    }

    pub fn symbol(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Rank {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(c),
        }
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

/// A single playing card. The weight is always derived from the rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Parses a two character token such as `"TH"`: rank symbol first, suit symbol second.
    pub fn from_string(token: &str) -> Result<Self, CardError> {
        let mut chars = token.chars();
        let (rank_symbol, suit_symbol) = match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => (rank, suit),
            _ => return Err(CardError::InvalidLength(token.to_string())),
        };

        let rank = Rank::try_from(rank_symbol).map_err(|symbol| CardError::UnknownRank {
            token: token.to_string(),
            symbol,
        })?;
        let suit = Suit::try_from(suit_symbol).map_err(|symbol| CardError::UnknownSuit {
            token: token.to_string(),
            symbol,
        })?;

        Ok(Self::new(rank, suit))
    }

    pub fn weight(&self) -> Weight {
        self.rank.weight()
    }
}

impl std::str::FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::from_string(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
