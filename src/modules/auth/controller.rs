use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{AuthResponse, LoginRequest, RegisterRequest};
use super::service::AuthService;

/// Login with username/password and receive a JWT token
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    Json(dto): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = AuthService::login(state.users.as_ref(), &state.jwt_config, dto).await?;
    Ok(Json(response))
}

/// Register a new user and receive a JWT token
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = AuthService::register(state.users.as_ref(), &state.jwt_config, dto).await?;
    Ok(Json(response))
}
