// Public API - what other modules can use
pub use cards::{
    Card, CardError, Combination, Hand, HandError, HandResult, Rank, Suit, Weight, MAX_HAND_SIZE,
    MIN_HAND_SIZE,
};
pub use handlers::evaluate_hand;
pub use service::{EvaluationResult, EvaluationService, Hands};
pub use types::EvaluateRequest;

// Internal modules
pub mod cards;
mod handlers;
pub mod service;
mod types;
