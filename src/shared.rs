use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use crate::holdem::{EvaluationService, HandError, MAX_HAND_SIZE, MIN_HAND_SIZE};

/// Shared application state containing all dependencies
#[derive(Clone, Default)]
pub struct AppState {
    pub evaluation_service: Arc<EvaluationService>,
}

impl AppState {
    pub fn new(evaluation_service: Arc<EvaluationService>) -> Self {
        Self { evaluation_service }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Request body could not be decoded: {0}")]
    Decode(String),

    #[error("Request failed validation")]
    Validation(BTreeMap<String, String>),

    #[error(transparent)]
    Hand(#[from] HandError),

    #[error("Internal server error")]
    Internal,
}

impl AppError {
    /// Machine readable code carried in the error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Decode(_) => "api.decoder.error",
            AppError::Validation(_) => "failed_validation_request",
            AppError::Hand(_) => "invalid_hand",
            AppError::Internal => "unknown",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Decode(_) | AppError::Validation(_) | AppError::Hand(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn data(&self) -> BTreeMap<String, String> {
        match self {
            AppError::Decode(reason) => BTreeMap::from([("body".to_string(), reason.clone())]),
            AppError::Validation(errors) => errors.clone(),
            AppError::Hand(HandError::InvalidCard { hand, source }) => {
                BTreeMap::from([(hand.clone(), source.to_string())])
            }
            AppError::Hand(HandError::InvalidHandSize { hand, count }) => BTreeMap::from([(
                hand.clone(),
                format!(
                    "expected between {} and {} cards, got {}",
                    MIN_HAND_SIZE, MAX_HAND_SIZE, count
                ),
            )]),
            AppError::Internal => BTreeMap::new(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "data": self.data(),
            }
        }));

        (self.status(), body).into_response()
    }
}
