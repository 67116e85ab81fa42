use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::routing::classifier::{classify, Classification};

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// POST /api/classify
///
/// Previews how a request would be routed without creating it.
pub async fn handle_classify(
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<Classification>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    Ok(Json(classify(&request.title, &request.description)))
}
