use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{info, instrument, warn};

use super::{service::EvaluationResult, types::EvaluateRequest};
use crate::shared::{AppError, AppState};

/// HTTP handler for classifying poker hands
///
/// POST /evaluate-hand
/// Returns the best combination and weights for every named hand
#[instrument(name = "evaluate_hand", skip(state, payload))]
pub async fn evaluate_hand(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<EvaluationResult>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Could not decode evaluate request");
        AppError::Decode(rejection.body_text())
    })?;

    if let Err(errors) = request.validate() {
        warn!(error_count = errors.len(), "Evaluate request failed validation");
        return Err(AppError::Validation(errors));
    }

    info!(hand_count = request.hands.len(), "Evaluating hands");

    let result = state.evaluation_service.evaluate(&request.hands)?;

    Ok(Json(result))
}
