pub mod deck;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use deck::{random_hand, shuffled};
#[allow(unused_imports)]
pub use setup::{HandsBuilder, TestApp, TestResponse};
