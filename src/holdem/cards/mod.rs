pub mod basic;
pub mod combination;
pub mod hand;


pub use basic::{Card, CardError, Rank, Suit, Weight, RANK_ORDER, RANK_WEIGHTS};
pub use combination::Combination;
pub use hand::{Hand, HandError, HandResult, MAX_HAND_SIZE, MIN_HAND_SIZE};
