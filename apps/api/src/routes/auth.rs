//! Mock login. Any well-formed email is accepted and nothing downstream
//! checks the returned token.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub email: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: LoginUser,
    pub token: Uuid,
}

/// POST /api/auth/login
pub async fn handle_login(Json(req): Json<LoginRequest>) -> Result<Json<LoginResponse>, AppError> {
    let email = req.email.trim();
    let name = match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => local.to_string(),
        _ => return Err(AppError::Validation("email must be an email address".to_string())),
    };
    if req.password.is_empty() {
        warn!("Mock login for {email} without a password");
    }

    Ok(Json(LoginResponse {
        user: LoginUser {
            email: email.to_string(),
            name,
            role: "ADMIN".to_string(),
        },
        token: Uuid::new_v4(),
    }))
}
