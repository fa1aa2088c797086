use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::Identity;
use crate::domain::types::Comment;
use crate::error::ApiServiceError;
use crate::handlers::{PageQuery, parse_query};
use crate::state::AppState;
use crate::usecase::comment::{
    CreateCommentUseCase, DeleteCommentUseCase, GetCommentUseCase, ListCommentsUseCase,
    UpdateCommentUseCase,
};

#[derive(Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub author: String,
    pub text: String,
    #[serde(serialize_with = "critica_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            author: comment.author_username,
            text: comment.text,
            created_at: comment.created_at,
        }
    }
}

// ── GET /v1/titles/{id}/reviews/{id}/comments ────────────────────────────────

pub async fn list_comments(
    State(state): State<AppState>,
    Path((title_id, review_id)): Path<(Uuid, Uuid)>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<CommentResponse>>, ApiServiceError> {
    let query: PageQuery = parse_query(raw_query.as_deref())?;
    let usecase = ListCommentsUseCase {
        titles: state.title_repo(),
        reviews: state.review_repo(),
        comments: state.comment_repo(),
    };
    let comments = usecase
        .execute(title_id, review_id, query.to_page_request())
        .await?;
    Ok(Json(
        comments.into_iter().map(CommentResponse::from).collect(),
    ))
}

// ── GET /v1/titles/{id}/reviews/{id}/comments/{id} ───────────────────────────

pub async fn get_comment(
    State(state): State<AppState>,
    Path((title_id, review_id, comment_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<Json<CommentResponse>, ApiServiceError> {
    let usecase = GetCommentUseCase {
        titles: state.title_repo(),
        reviews: state.review_repo(),
        comments: state.comment_repo(),
    };
    let comment = usecase.execute(title_id, review_id, comment_id).await?;
    Ok(Json(CommentResponse::from(comment)))
}

// ── POST /v1/titles/{id}/reviews/{id}/comments ───────────────────────────────

#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

pub async fn create_comment(
    identity: Identity,
    State(state): State<AppState>,
    Path((title_id, review_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiServiceError> {
    let usecase = CreateCommentUseCase {
        titles: state.title_repo(),
        reviews: state.review_repo(),
        comments: state.comment_repo(),
    };
    let comment = usecase
        .execute(identity, title_id, review_id, body.text)
        .await?;
    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))))
}

// ── PATCH /v1/titles/{id}/reviews/{id}/comments/{id} ─────────────────────────

#[derive(Deserialize)]
pub struct UpdateCommentRequest {
    pub text: String,
}

pub async fn update_comment(
    identity: Identity,
    State(state): State<AppState>,
    Path((title_id, review_id, comment_id)): Path<(Uuid, Uuid, Uuid)>,
    Json(body): Json<UpdateCommentRequest>,
) -> Result<Json<CommentResponse>, ApiServiceError> {
    let usecase = UpdateCommentUseCase {
        titles: state.title_repo(),
        reviews: state.review_repo(),
        comments: state.comment_repo(),
    };
    let comment = usecase
        .execute(identity, title_id, review_id, comment_id, body.text)
        .await?;
    Ok(Json(CommentResponse::from(comment)))
}

// ── DELETE /v1/titles/{id}/reviews/{id}/comments/{id} ────────────────────────

pub async fn delete_comment(
    identity: Identity,
    State(state): State<AppState>,
    Path((title_id, review_id, comment_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<StatusCode, ApiServiceError> {
    let usecase = DeleteCommentUseCase {
        titles: state.title_repo(),
        reviews: state.review_repo(),
        comments: state.comment_repo(),
    };
    usecase
        .execute(identity, title_id, review_id, comment_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
