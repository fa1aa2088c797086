use uuid::Uuid;

use critica_domain::pagination::PageRequest;

use crate::domain::repository::CategoryRepository;
use crate::domain::types::{Category, MAX_NAME_LEN, validate_slug};
use crate::error::ApiServiceError;

pub struct ListCategoriesUseCase<R: CategoryRepository> {
    pub categories: R,
}

impl<R: CategoryRepository> ListCategoriesUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Category>, ApiServiceError> {
        self.categories.list(page.clamped()).await
    }
}

pub struct CreateCategoryInput {
    pub name: String,
    pub slug: String,
}

pub struct CreateCategoryUseCase<R: CategoryRepository> {
    pub categories: R,
}

impl<R: CategoryRepository> CreateCategoryUseCase<R> {
    pub async fn execute(&self, input: CreateCategoryInput) -> Result<Category, ApiServiceError> {
        if input.name.is_empty() || input.name.len() > MAX_NAME_LEN {
            return Err(ApiServiceError::MissingData);
        }
        if !validate_slug(&input.slug) {
            return Err(ApiServiceError::InvalidSlug);
        }
        let category = Category {
            id: Uuid::now_v7(),
            name: input.name,
            slug: input.slug,
        };
        self.categories.create(&category).await?;
        Ok(category)
    }
}

pub struct DeleteCategoryUseCase<R: CategoryRepository> {
    pub categories: R,
}

impl<R: CategoryRepository> DeleteCategoryUseCase<R> {
    pub async fn execute(&self, slug: &str) -> Result<(), ApiServiceError> {
        if self.categories.delete_by_slug(slug).await? {
            Ok(())
        } else {
            Err(ApiServiceError::CategoryNotFound)
        }
    }
}
