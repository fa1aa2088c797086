use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::auth::Identity;
use crate::domain::types::Genre;
use crate::error::ApiServiceError;
use crate::handlers::{PageQuery, parse_query};
use crate::state::AppState;
use crate::usecase::genre::{
    CreateGenreInput, CreateGenreUseCase, DeleteGenreUseCase, ListGenresUseCase,
};

#[derive(Serialize)]
pub struct GenreResponse {
    pub name: String,
    pub slug: String,
}

impl From<Genre> for GenreResponse {
    fn from(genre: Genre) -> Self {
        Self {
            name: genre.name,
            slug: genre.slug,
        }
    }
}

// ── GET /v1/genres ───────────────────────────────────────────────────────────

pub async fn list_genres(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<GenreResponse>>, ApiServiceError> {
    let query: PageQuery = parse_query(raw_query.as_deref())?;
    let usecase = ListGenresUseCase {
        genres: state.genre_repo(),
    };
    let genres = usecase.execute(query.to_page_request()).await?;
    Ok(Json(genres.into_iter().map(GenreResponse::from).collect()))
}

// ── POST /v1/genres (admin) ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateGenreRequest {
    pub name: String,
    pub slug: String,
}

pub async fn create_genre(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateGenreRequest>,
) -> Result<(StatusCode, Json<GenreResponse>), ApiServiceError> {
    if !identity.role.is_admin() {
        return Err(ApiServiceError::Forbidden);
    }
    let usecase = CreateGenreUseCase {
        genres: state.genre_repo(),
    };
    let genre = usecase
        .execute(CreateGenreInput {
            name: body.name,
            slug: body.slug,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(GenreResponse::from(genre))))
}

// ── DELETE /v1/genres/{slug} (admin) ─────────────────────────────────────────

pub async fn delete_genre(
    identity: Identity,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<StatusCode, ApiServiceError> {
    if !identity.role.is_admin() {
        return Err(ApiServiceError::Forbidden);
    }
    let usecase = DeleteGenreUseCase {
        genres: state.genre_repo(),
    };
    usecase.execute(&slug).await?;
    Ok(StatusCode::NO_CONTENT)
}
