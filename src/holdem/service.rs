use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

use super::cards::{Hand, HandError, HandResult};

/// Raw hands keyed by hand name, each an ordered list of card tokens.
pub type Hands = BTreeMap<String, Vec<String>>;

/// Classification result per hand name.
pub type EvaluationResult = BTreeMap<String, HandResult>;

/// Classifies every hand of a request independently.
///
/// Hands are not compared against each other. One invalid hand fails the
/// whole batch.
#[derive(Debug, Clone, Default)]
pub struct EvaluationService;

impl EvaluationService {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self, hands), fields(hand_count = hands.len()))]
    pub fn evaluate(&self, hands: &Hands) -> Result<EvaluationResult, HandError> {
        let mut results = EvaluationResult::new();

        for (name, tokens) in hands {
            let hand = Hand::from_tokens(name.as_str(), tokens).map_err(|err| {
                warn!(hand_name = %err.hand(), error = %err, "Rejecting hand");
                err
            })?;
            let result = hand.classify();

            debug!(
                hand_name = %result.hand_name,
                combination = %result.combination_name,
                hand_weight = result.hand_weight,
                combination_weight = result.combination_weight,
                "Hand classified"
            );

            results.insert(name.clone(), result);
        }

        info!(hand_count = results.len(), "Hands evaluated");

        Ok(results)
    }
}
