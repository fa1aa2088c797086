use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use critica_domain::pagination::{PageRequest, Sort};

use crate::auth::Identity;
use crate::domain::types::Review;
use crate::error::ApiServiceError;
use crate::handlers::parse_query;
use crate::state::AppState;
use crate::usecase::review::{
    CreateReviewInput, CreateReviewUseCase, DeleteReviewUseCase, GetReviewUseCase,
    ListReviewsUseCase, UpdateReviewInput, UpdateReviewUseCase,
};

#[derive(Serialize)]
pub struct ReviewResponse {
    pub id: String,
    pub author: String,
    pub text: String,
    pub score: i16,
    #[serde(serialize_with = "critica_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.to_string(),
            author: review.author_username,
            text: review.text,
            score: review.score,
            created_at: review.created_at,
        }
    }
}

// ── GET /v1/titles/{id}/reviews ──────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ReviewListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    /// Creation-time order; newest first unless `sort=asc`.
    #[serde(default)]
    pub sort: Sort,
}

pub async fn list_reviews(
    State(state): State<AppState>,
    Path(title_id): Path<Uuid>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<ReviewResponse>>, ApiServiceError> {
    let query: ReviewListQuery = parse_query(raw_query.as_deref())?;
    let defaults = PageRequest::default();
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(defaults.per_page),
        page: query.page.unwrap_or(defaults.page),
    };
    let usecase = ListReviewsUseCase {
        titles: state.title_repo(),
        reviews: state.review_repo(),
    };
    let reviews = usecase.execute(title_id, query.sort, page).await?;
    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}

// ── GET /v1/titles/{id}/reviews/{id} ─────────────────────────────────────────

pub async fn get_review(
    State(state): State<AppState>,
    Path((title_id, review_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ReviewResponse>, ApiServiceError> {
    let usecase = GetReviewUseCase {
        titles: state.title_repo(),
        reviews: state.review_repo(),
    };
    let review = usecase.execute(title_id, review_id).await?;
    Ok(Json(ReviewResponse::from(review)))
}

// ── POST /v1/titles/{id}/reviews ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub text: String,
    pub score: i16,
}

pub async fn create_review(
    identity: Identity,
    State(state): State<AppState>,
    Path(title_id): Path<Uuid>,
    Json(body): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), ApiServiceError> {
    let usecase = CreateReviewUseCase {
        titles: state.title_repo(),
        reviews: state.review_repo(),
    };
    let review = usecase
        .execute(
            identity,
            CreateReviewInput {
                title_id,
                text: body.text,
                score: body.score,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ReviewResponse::from(review))))
}

// ── PATCH /v1/titles/{id}/reviews/{id} ───────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateReviewRequest {
    pub text: Option<String>,
    pub score: Option<i16>,
}

pub async fn update_review(
    identity: Identity,
    State(state): State<AppState>,
    Path((title_id, review_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<UpdateReviewRequest>,
) -> Result<Json<ReviewResponse>, ApiServiceError> {
    let usecase = UpdateReviewUseCase {
        titles: state.title_repo(),
        reviews: state.review_repo(),
    };
    let review = usecase
        .execute(
            identity,
            title_id,
            review_id,
            UpdateReviewInput {
                text: body.text,
                score: body.score,
            },
        )
        .await?;
    Ok(Json(ReviewResponse::from(review)))
}

// ── DELETE /v1/titles/{id}/reviews/{id} ──────────────────────────────────────

pub async fn delete_review(
    identity: Identity,
    State(state): State<AppState>,
    Path((title_id, review_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiServiceError> {
    let usecase = DeleteReviewUseCase {
        titles: state.title_repo(),
        reviews: state.review_repo(),
    };
    usecase.execute(identity, title_id, review_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
