use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use critica_domain::role::UserRole;

use crate::auth::Identity;
use crate::error::ApiServiceError;
use crate::handlers::{PageQuery, parse_query};
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, GetMeUseCase, GetUserUseCase,
    ListUsersUseCase, UpdateUserInput, UpdateUserUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserResponse {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub role: UserRole,
}

impl From<crate::domain::types::User> for UserResponse {
    fn from(user: crate::domain::types::User) -> Self {
        Self {
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            bio: user.bio,
            role: user.role,
        }
    }
}

// ── GET /v1/users (admin) ────────────────────────────────────────────────────

pub async fn list_users(
    identity: Identity,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<UserResponse>>, ApiServiceError> {
    if !identity.role.is_admin() {
        return Err(ApiServiceError::Forbidden);
    }
    let query: PageQuery = parse_query(raw_query.as_deref())?;
    let usecase = ListUsersUseCase {
        users: state.user_repo(),
    };
    let users = usecase.execute(query.to_page_request()).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── POST /v1/users (admin) ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub role: Option<UserRole>,
}

pub async fn create_user(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiServiceError> {
    if !identity.role.is_admin() {
        return Err(ApiServiceError::Forbidden);
    }
    let usecase = CreateUserUseCase {
        users: state.user_repo(),
    };
    let user = usecase
        .execute(CreateUserInput {
            username: body.username,
            email: body.email,
            first_name: body.first_name,
            last_name: body.last_name,
            bio: body.bio,
            role: body.role.unwrap_or(UserRole::User),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

// ── GET /v1/users/me ─────────────────────────────────────────────────────────

pub async fn get_me(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiServiceError> {
    let usecase = GetMeUseCase {
        users: state.user_repo(),
    };
    let user = usecase.execute(identity.user_id).await?;
    Ok(Json(UserResponse::from(user)))
}

// ── PATCH /v1/users/me ───────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub role: Option<UserRole>,
}

impl From<UpdateUserRequest> for UpdateUserInput {
    fn from(body: UpdateUserRequest) -> Self {
        Self {
            username: body.username,
            email: body.email,
            first_name: body.first_name,
            last_name: body.last_name,
            bio: body.bio,
            role: body.role,
        }
    }
}

pub async fn update_me(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiServiceError> {
    let me = GetMeUseCase {
        users: state.user_repo(),
    }
    .execute(identity.user_id)
    .await?;

    let usecase = UpdateUserUseCase {
        users: state.user_repo(),
    };
    // A submitted `role` is dropped for non-admin callers; the request still
    // succeeds with the stored role unchanged.
    let user = usecase
        .execute(&me, body.into(), identity.role.is_admin())
        .await?;
    Ok(Json(UserResponse::from(user)))
}

// ── GET /v1/users/{username} (admin) ─────────────────────────────────────────

pub async fn get_user(
    identity: Identity,
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, ApiServiceError> {
    if !identity.role.is_admin() {
        return Err(ApiServiceError::Forbidden);
    }
    let usecase = GetUserUseCase {
        users: state.user_repo(),
    };
    let user = usecase.execute(&username).await?;
    Ok(Json(UserResponse::from(user)))
}

// ── PATCH /v1/users/{username} (admin) ───────────────────────────────────────

pub async fn update_user(
    identity: Identity,
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiServiceError> {
    if !identity.role.is_admin() {
        return Err(ApiServiceError::Forbidden);
    }
    let target = GetUserUseCase {
        users: state.user_repo(),
    }
    .execute(&username)
    .await?;

    let usecase = UpdateUserUseCase {
        users: state.user_repo(),
    };
    let user = usecase.execute(&target, body.into(), true).await?;
    Ok(Json(UserResponse::from(user)))
}

// ── DELETE /v1/users/{username} (admin) ──────────────────────────────────────

pub async fn delete_user(
    identity: Identity,
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<StatusCode, ApiServiceError> {
    if !identity.role.is_admin() {
        return Err(ApiServiceError::Forbidden);
    }
    let usecase = DeleteUserUseCase {
        users: state.user_repo(),
    };
    usecase.execute(&username).await?;
    Ok(StatusCode::NO_CONTENT)
}
