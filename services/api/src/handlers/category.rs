use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::auth::Identity;
use crate::domain::types::Category;
use crate::error::ApiServiceError;
use crate::handlers::{PageQuery, parse_query};
use crate::state::AppState;
use crate::usecase::category::{
    CreateCategoryInput, CreateCategoryUseCase, DeleteCategoryUseCase, ListCategoriesUseCase,
};

#[derive(Serialize)]
pub struct CategoryResponse {
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            name: category.name,
            slug: category.slug,
        }
    }
}

// ── GET /v1/categories ───────────────────────────────────────────────────────

pub async fn list_categories(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<CategoryResponse>>, ApiServiceError> {
    let query: PageQuery = parse_query(raw_query.as_deref())?;
    let usecase = ListCategoriesUseCase {
        categories: state.category_repo(),
    };
    let categories = usecase.execute(query.to_page_request()).await?;
    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}

// ── POST /v1/categories (admin) ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub slug: String,
}

pub async fn create_category(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiServiceError> {
    if !identity.role.is_admin() {
        return Err(ApiServiceError::Forbidden);
    }
    let usecase = CreateCategoryUseCase {
        categories: state.category_repo(),
    };
    let category = usecase
        .execute(CreateCategoryInput {
            name: body.name,
            slug: body.slug,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}

// ── DELETE /v1/categories/{slug} (admin) ─────────────────────────────────────

pub async fn delete_category(
    identity: Identity,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<StatusCode, ApiServiceError> {
    if !identity.role.is_admin() {
        return Err(ApiServiceError::Forbidden);
    }
    let usecase = DeleteCategoryUseCase {
        categories: state.category_repo(),
    };
    usecase.execute(&slug).await?;
    Ok(StatusCode::NO_CONTENT)
}
