use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use critica_domain::pagination::PageRequest;

use crate::auth::Identity;
use crate::domain::types::{TitleFilter, TitleWithRating};
use crate::error::ApiServiceError;
use crate::handlers::category::CategoryResponse;
use crate::handlers::genre::GenreResponse;
use crate::handlers::parse_query;
use crate::state::AppState;
use crate::usecase::title::{
    CreateTitleInput, CreateTitleUseCase, DeleteTitleUseCase, GetTitleUseCase, ListTitlesUseCase,
    UpdateTitleInput, UpdateTitleUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// Read shape: computed rating plus nested genre/category objects.
#[derive(Serialize)]
pub struct TitleResponse {
    pub id: String,
    pub name: String,
    pub year: Option<i32>,
    pub rating: Option<i32>,
    pub description: Option<String>,
    pub genre: Vec<GenreResponse>,
    pub category: Option<CategoryResponse>,
}

impl From<TitleWithRating> for TitleResponse {
    fn from(entry: TitleWithRating) -> Self {
        let TitleWithRating { title, rating } = entry;
        Self {
            id: title.id.to_string(),
            name: title.name,
            year: title.year,
            rating,
            description: title.description,
            genre: title.genres.into_iter().map(GenreResponse::from).collect(),
            category: title.category.map(CategoryResponse::from),
        }
    }
}

/// Write shape: genre and category referenced by slug, no rating.
#[derive(Serialize)]
pub struct TitleWriteResponse {
    pub id: String,
    pub name: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub genre: Vec<String>,
    pub category: Option<String>,
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct TitleListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub name: Option<String>,
    pub genre: Option<String>,
    pub category: Option<String>,
    pub year: Option<i32>,
}

// ── GET /v1/titles ───────────────────────────────────────────────────────────

pub async fn list_titles(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<TitleResponse>>, ApiServiceError> {
    let query: TitleListQuery = parse_query(raw_query.as_deref())?;

    let filter = TitleFilter {
        name: query.name,
        genre: query.genre,
        category: query.category,
        year: query.year,
    };
    let defaults = PageRequest::default();
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(defaults.per_page),
        page: query.page.unwrap_or(defaults.page),
    };

    let usecase = ListTitlesUseCase {
        titles: state.title_repo(),
        reviews: state.review_repo(),
    };
    let titles = usecase.execute(&filter, page).await?;
    Ok(Json(titles.into_iter().map(TitleResponse::from).collect()))
}

// ── GET /v1/titles/{id} ──────────────────────────────────────────────────────

pub async fn get_title(
    State(state): State<AppState>,
    Path(title_id): Path<Uuid>,
) -> Result<Json<TitleResponse>, ApiServiceError> {
    let usecase = GetTitleUseCase {
        titles: state.title_repo(),
        reviews: state.review_repo(),
    };
    let title = usecase.execute(title_id).await?;
    Ok(Json(TitleResponse::from(title)))
}

// ── POST /v1/titles (admin) ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateTitleRequest {
    pub name: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    #[serde(default)]
    pub genre: Vec<String>,
    pub category: Option<String>,
}

pub async fn create_title(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateTitleRequest>,
) -> Result<(StatusCode, Json<TitleWriteResponse>), ApiServiceError> {
    if !identity.role.is_admin() {
        return Err(ApiServiceError::Forbidden);
    }
    let usecase = CreateTitleUseCase {
        titles: state.title_repo(),
        categories: state.category_repo(),
        genres: state.genre_repo(),
    };
    let id = usecase
        .execute(CreateTitleInput {
            name: body.name.clone(),
            year: body.year,
            description: body.description.clone(),
            category: body.category.clone(),
            genres: body.genre.clone(),
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(TitleWriteResponse {
            id: id.to_string(),
            name: body.name,
            year: body.year,
            description: body.description,
            genre: body.genre,
            category: body.category,
        }),
    ))
}

// ── PATCH /v1/titles/{id} (admin) ────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateTitleRequest {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub genre: Option<Vec<String>>,
    pub category: Option<String>,
}

pub async fn update_title(
    identity: Identity,
    State(state): State<AppState>,
    Path(title_id): Path<Uuid>,
    Json(body): Json<UpdateTitleRequest>,
) -> Result<Json<TitleWriteResponse>, ApiServiceError> {
    if !identity.role.is_admin() {
        return Err(ApiServiceError::Forbidden);
    }
    let usecase = UpdateTitleUseCase {
        titles: state.title_repo(),
        categories: state.category_repo(),
        genres: state.genre_repo(),
    };
    usecase
        .execute(
            title_id,
            UpdateTitleInput {
                name: body.name,
                year: body.year,
                description: body.description,
                category: body.category,
                genres: body.genre,
            },
        )
        .await?;

    let updated = GetTitleUseCase {
        titles: state.title_repo(),
        reviews: state.review_repo(),
    }
    .execute(title_id)
    .await?;
    let title = updated.title;
    Ok(Json(TitleWriteResponse {
        id: title.id.to_string(),
        name: title.name,
        year: title.year,
        description: title.description,
        genre: title.genres.into_iter().map(|g| g.slug).collect(),
        category: title.category.map(|c| c.slug),
    }))
}

// ── DELETE /v1/titles/{id} (admin) ───────────────────────────────────────────

pub async fn delete_title(
    identity: Identity,
    State(state): State<AppState>,
    Path(title_id): Path<Uuid>,
) -> Result<StatusCode, ApiServiceError> {
    if !identity.role.is_admin() {
        return Err(ApiServiceError::Forbidden);
    }
    let usecase = DeleteTitleUseCase {
        titles: state.title_repo(),
    };
    usecase.execute(title_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
