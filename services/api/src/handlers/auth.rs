use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::signup::{SignupInput, SignupUseCase};
use crate::usecase::token::{CreateTokenInput, CreateTokenUseCase};

// ── POST /v1/auth/signup ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct SignupResponse {
    pub username: String,
    pub email: String,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiServiceError> {
    let usecase = SignupUseCase {
        users: state.user_repo(),
        codes: state.confirmation_code_repo(),
    };
    usecase
        .execute(SignupInput {
            username: body.username.clone(),
            email: body.email.clone(),
        })
        .await?;
    // 200, not 201: re-signup with the same pair re-issues a code.
    Ok(Json(SignupResponse {
        username: body.username,
        email: body.email,
    }))
}

// ── POST /v1/auth/token ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateTokenRequest {
    pub username: String,
    pub confirmation_code: String,
}

#[derive(Serialize)]
pub struct CreateTokenResponse {
    pub token: String,
}

pub async fn create_token(
    State(state): State<AppState>,
    Json(body): Json<CreateTokenRequest>,
) -> Result<Json<CreateTokenResponse>, ApiServiceError> {
    let usecase = CreateTokenUseCase {
        users: state.user_repo(),
        codes: state.confirmation_code_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let output = usecase
        .execute(CreateTokenInput {
            username: body.username,
            confirmation_code: body.confirmation_code,
        })
        .await?;
    Ok(Json(CreateTokenResponse {
        token: output.access_token,
    }))
}
