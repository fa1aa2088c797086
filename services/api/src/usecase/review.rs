use chrono::Utc;
use uuid::Uuid;

use critica_domain::pagination::{PageRequest, Sort};
use critica_domain::role::may_edit_contribution;

use crate::auth::Identity;
use crate::domain::repository::{ReviewRepository, TitleRepository};
use crate::domain::types::{NewReview, Review, validate_score};
use crate::error::ApiServiceError;

// ── ListReviews ──────────────────────────────────────────────────────────────

pub struct ListReviewsUseCase<T: TitleRepository, R: ReviewRepository> {
    pub titles: T,
    pub reviews: R,
}

impl<T: TitleRepository, R: ReviewRepository> ListReviewsUseCase<T, R> {
    pub async fn execute(
        &self,
        title_id: Uuid,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<Review>, ApiServiceError> {
        if !self.titles.exists(title_id).await? {
            return Err(ApiServiceError::TitleNotFound);
        }
        self.reviews
            .list_by_title(title_id, sort, page.clamped())
            .await
    }
}

// ── GetReview ────────────────────────────────────────────────────────────────

pub struct GetReviewUseCase<T: TitleRepository, R: ReviewRepository> {
    pub titles: T,
    pub reviews: R,
}

impl<T: TitleRepository, R: ReviewRepository> GetReviewUseCase<T, R> {
    pub async fn execute(
        &self,
        title_id: Uuid,
        review_id: Uuid,
    ) -> Result<Review, ApiServiceError> {
        if !self.titles.exists(title_id).await? {
            return Err(ApiServiceError::TitleNotFound);
        }
        self.reviews
            .find(title_id, review_id)
            .await?
            .ok_or(ApiServiceError::ReviewNotFound)
    }
}

// ── CreateReview ─────────────────────────────────────────────────────────────

pub struct CreateReviewInput {
    pub title_id: Uuid,
    pub text: String,
    pub score: i16,
}

pub struct CreateReviewUseCase<T: TitleRepository, R: ReviewRepository> {
    pub titles: T,
    pub reviews: R,
}

impl<T: TitleRepository, R: ReviewRepository> CreateReviewUseCase<T, R> {
    pub async fn execute(
        &self,
        identity: Identity,
        input: CreateReviewInput,
    ) -> Result<Review, ApiServiceError> {
        if input.text.is_empty() {
            return Err(ApiServiceError::MissingData);
        }
        if !validate_score(input.score) {
            return Err(ApiServiceError::InvalidScore);
        }
        if !self.titles.exists(input.title_id).await? {
            return Err(ApiServiceError::TitleNotFound);
        }

        // One review per (author, title). The unique index backstops the
        // check under concurrent inserts.
        if self
            .reviews
            .exists_by_author(input.title_id, identity.user_id)
            .await?
        {
            return Err(ApiServiceError::ReviewAlreadyExists);
        }

        let review = NewReview {
            id: Uuid::now_v7(),
            title_id: input.title_id,
            author_id: identity.user_id,
            text: input.text,
            score: input.score,
            created_at: Utc::now(),
        };
        self.reviews.create(&review).await?;

        self.reviews
            .find(input.title_id, review.id)
            .await?
            .ok_or(ApiServiceError::ReviewNotFound)
    }
}

// ── UpdateReview ─────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct UpdateReviewInput {
    pub text: Option<String>,
    pub score: Option<i16>,
}

pub struct UpdateReviewUseCase<T: TitleRepository, R: ReviewRepository> {
    pub titles: T,
    pub reviews: R,
}

impl<T: TitleRepository, R: ReviewRepository> UpdateReviewUseCase<T, R> {
    pub async fn execute(
        &self,
        identity: Identity,
        title_id: Uuid,
        review_id: Uuid,
        input: UpdateReviewInput,
    ) -> Result<Review, ApiServiceError> {
        if let Some(score) = input.score {
            if !validate_score(score) {
                return Err(ApiServiceError::InvalidScore);
            }
        }
        if !self.titles.exists(title_id).await? {
            return Err(ApiServiceError::TitleNotFound);
        }
        let review = self
            .reviews
            .find(title_id, review_id)
            .await?
            .ok_or(ApiServiceError::ReviewNotFound)?;

        if !may_edit_contribution(identity.role, identity.user_id, review.author_id) {
            return Err(ApiServiceError::Forbidden);
        }

        self.reviews
            .update(review.id, input.text.as_deref(), input.score)
            .await?;

        self.reviews
            .find(title_id, review_id)
            .await?
            .ok_or(ApiServiceError::ReviewNotFound)
    }
}

// ── DeleteReview ─────────────────────────────────────────────────────────────

pub struct DeleteReviewUseCase<T: TitleRepository, R: ReviewRepository> {
    pub titles: T,
    pub reviews: R,
}

impl<T: TitleRepository, R: ReviewRepository> DeleteReviewUseCase<T, R> {
    pub async fn execute(
        &self,
        identity: Identity,
        title_id: Uuid,
        review_id: Uuid,
    ) -> Result<(), ApiServiceError> {
        if !self.titles.exists(title_id).await? {
            return Err(ApiServiceError::TitleNotFound);
        }
        let review = self
            .reviews
            .find(title_id, review_id)
            .await?
            .ok_or(ApiServiceError::ReviewNotFound)?;

        if !may_edit_contribution(identity.role, identity.user_id, review.author_id) {
            return Err(ApiServiceError::Forbidden);
        }

        self.reviews.delete(review.id).await?;
        Ok(())
    }
}
