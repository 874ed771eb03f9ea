use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::cards::{MAX_HAND_SIZE, MIN_HAND_SIZE};
use super::service::Hands;

/// Request payload for evaluating hands
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub hands: Hands,
}

impl EvaluateRequest {
    /// Structural checks done before any card is parsed.
    ///
    /// Returns a message per offending field or hand name.
    pub fn validate(&self) -> Result<(), BTreeMap<String, String>> {
        let mut errors = BTreeMap::new();

        if self.hands.is_empty() {
            errors.insert("hands".to_string(), "at least one hand is required".to_string());
        }

        for (name, tokens) in &self.hands {
            if !(MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&tokens.len()) {
                errors.insert(
                    name.clone(),
                    format!(
                        "expected between {} and {} cards, got {}",
                        MIN_HAND_SIZE,
                        MAX_HAND_SIZE,
                        tokens.len()
                    ),
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
