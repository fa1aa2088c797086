use uuid::Uuid;

use critica_domain::pagination::PageRequest;

use crate::domain::repository::GenreRepository;
use crate::domain::types::{Genre, MAX_NAME_LEN, validate_slug};
use crate::error::ApiServiceError;

pub struct ListGenresUseCase<R: GenreRepository> {
    pub genres: R,
}

impl<R: GenreRepository> ListGenresUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Genre>, ApiServiceError> {
        self.genres.list(page.clamped()).await
    }
}

pub struct CreateGenreInput {
    pub name: String,
    pub slug: String,
}

pub struct CreateGenreUseCase<R: GenreRepository> {
    pub genres: R,
}

impl<R: GenreRepository> CreateGenreUseCase<R> {
    pub async fn execute(&self, input: CreateGenreInput) -> Result<Genre, ApiServiceError> {
        if input.name.is_empty() || input.name.len() > MAX_NAME_LEN {
            return Err(ApiServiceError::MissingData);
        }
        if !validate_slug(&input.slug) {
            return Err(ApiServiceError::InvalidSlug);
        }
        let genre = Genre {
            id: Uuid::now_v7(),
            name: input.name,
            slug: input.slug,
        };
        self.genres.create(&genre).await?;
        Ok(genre)
    }
}

pub struct DeleteGenreUseCase<R: GenreRepository> {
    pub genres: R,
}

impl<R: GenreRepository> DeleteGenreUseCase<R> {
    pub async fn execute(&self, slug: &str) -> Result<(), ApiServiceError> {
        if self.genres.delete_by_slug(slug).await? {
            Ok(())
        } else {
            Err(ApiServiceError::GenreNotFound)
        }
    }
}
