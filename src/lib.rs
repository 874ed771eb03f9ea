// Library crate for the poker hands evaluator
// This file exposes the public API for the binary and integration tests

pub mod app;
pub mod config;
pub mod holdem;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use app::build_router;
pub use config::Config;
pub use holdem::{
    Card, Combination, EvaluationResult, EvaluationService, Hand, HandError, HandResult, Hands,
};
pub use shared::{AppError, AppState};
