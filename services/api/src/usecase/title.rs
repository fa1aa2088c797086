use chrono::{Datelike, Utc};
use uuid::Uuid;

use critica_domain::pagination::PageRequest;

use crate::domain::repository::{
    CategoryRepository, GenreRepository, ReviewRepository, TitleRepository,
};
use crate::domain::types::{MAX_NAME_LEN, NewTitle, TitleChanges, TitleFilter, TitleWithRating};
use crate::error::ApiServiceError;

/// Integer mean of review scores, truncated toward negative infinity.
/// `None` when there are no reviews — the rating is derived, never stored.
pub fn rating_of(scores: &[i16]) -> Option<i32> {
    if scores.is_empty() {
        return None;
    }
    let sum: i64 = scores.iter().map(|&s| i64::from(s)).sum();
    let count = scores.len() as i64;
    Some(sum.div_euclid(count) as i32)
}

// ── ListTitles ───────────────────────────────────────────────────────────────

pub struct ListTitlesUseCase<T: TitleRepository, R: ReviewRepository> {
    pub titles: T,
    pub reviews: R,
}

impl<T: TitleRepository, R: ReviewRepository> ListTitlesUseCase<T, R> {
    pub async fn execute(
        &self,
        filter: &TitleFilter,
        page: PageRequest,
    ) -> Result<Vec<TitleWithRating>, ApiServiceError> {
        let titles = self.titles.list(filter, page.clamped()).await?;

        let mut out = Vec::with_capacity(titles.len());
        for title in titles {
            let scores = self.reviews.scores_for_title(title.id).await?;
            out.push(TitleWithRating {
                rating: rating_of(&scores),
                title,
            });
        }
        Ok(out)
    }
}

// ── GetTitle ─────────────────────────────────────────────────────────────────

pub struct GetTitleUseCase<T: TitleRepository, R: ReviewRepository> {
    pub titles: T,
    pub reviews: R,
}

impl<T: TitleRepository, R: ReviewRepository> GetTitleUseCase<T, R> {
    pub async fn execute(&self, id: Uuid) -> Result<TitleWithRating, ApiServiceError> {
        let title = self
            .titles
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::TitleNotFound)?;
        let scores = self.reviews.scores_for_title(title.id).await?;
        Ok(TitleWithRating {
            rating: rating_of(&scores),
            title,
        })
    }
}

// ── CreateTitle (admin) ──────────────────────────────────────────────────────

pub struct CreateTitleInput {
    pub name: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub genres: Vec<String>,
}

pub struct CreateTitleUseCase<T, C, G>
where
    T: TitleRepository,
    C: CategoryRepository,
    G: GenreRepository,
{
    pub titles: T,
    pub categories: C,
    pub genres: G,
}

impl<T, C, G> CreateTitleUseCase<T, C, G>
where
    T: TitleRepository,
    C: CategoryRepository,
    G: GenreRepository,
{
    pub async fn execute(&self, input: CreateTitleInput) -> Result<Uuid, ApiServiceError> {
        if input.name.is_empty() || input.name.len() > MAX_NAME_LEN {
            return Err(ApiServiceError::MissingData);
        }
        if let Some(year) = input.year {
            validate_year(year)?;
        }

        let category_id = match input.category {
            Some(ref slug) => Some(resolve_category(&self.categories, slug).await?),
            None => None,
        };
        let genre_ids = resolve_genres(&self.genres, &input.genres).await?;

        let title = NewTitle {
            id: Uuid::now_v7(),
            name: input.name,
            year: input.year,
            description: input.description,
            category_id,
            genre_ids,
        };
        self.titles.create(&title).await?;
        Ok(title.id)
    }
}

// ── UpdateTitle (admin) ──────────────────────────────────────────────────────

#[derive(Default)]
pub struct UpdateTitleInput {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub genres: Option<Vec<String>>,
}

pub struct UpdateTitleUseCase<T, C, G>
where
    T: TitleRepository,
    C: CategoryRepository,
    G: GenreRepository,
{
    pub titles: T,
    pub categories: C,
    pub genres: G,
}

impl<T, C, G> UpdateTitleUseCase<T, C, G>
where
    T: TitleRepository,
    C: CategoryRepository,
    G: GenreRepository,
{
    pub async fn execute(&self, id: Uuid, input: UpdateTitleInput) -> Result<(), ApiServiceError> {
        if !self.titles.exists(id).await? {
            return Err(ApiServiceError::TitleNotFound);
        }
        if let Some(ref name) = input.name {
            if name.is_empty() || name.len() > MAX_NAME_LEN {
                return Err(ApiServiceError::MissingData);
            }
        }
        if let Some(year) = input.year {
            validate_year(year)?;
        }

        let category_id = match input.category {
            Some(ref slug) => Some(resolve_category(&self.categories, slug).await?),
            None => None,
        };
        let genre_ids = match input.genres {
            Some(ref slugs) => Some(resolve_genres(&self.genres, slugs).await?),
            None => None,
        };

        let changes = TitleChanges {
            name: input.name,
            year: input.year,
            description: input.description,
            category_id,
            genre_ids,
        };
        self.titles.update(id, &changes).await
    }
}

// ── DeleteTitle (admin) ──────────────────────────────────────────────────────

pub struct DeleteTitleUseCase<T: TitleRepository> {
    pub titles: T,
}

impl<T: TitleRepository> DeleteTitleUseCase<T> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiServiceError> {
        if self.titles.delete(id).await? {
            Ok(())
        } else {
            Err(ApiServiceError::TitleNotFound)
        }
    }
}

fn validate_year(year: i32) -> Result<(), ApiServiceError> {
    if year > Utc::now().year() {
        return Err(ApiServiceError::MissingData);
    }
    Ok(())
}

async fn resolve_category<C: CategoryRepository>(
    categories: &C,
    slug: &str,
) -> Result<Uuid, ApiServiceError> {
    categories
        .find_by_slug(slug)
        .await?
        .map(|c| c.id)
        .ok_or(ApiServiceError::UnknownCategory)
}

async fn resolve_genres<G: GenreRepository>(
    genres: &G,
    slugs: &[String],
) -> Result<Vec<Uuid>, ApiServiceError> {
    let mut ids = Vec::with_capacity(slugs.len());
    for slug in slugs {
        let genre = genres
            .find_by_slug(slug)
            .await?
            .ok_or(ApiServiceError::UnknownGenre)?;
        ids.push(genre.id);
    }
    Ok(ids)
}
