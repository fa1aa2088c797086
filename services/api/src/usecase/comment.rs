use chrono::Utc;
use uuid::Uuid;

use critica_domain::pagination::PageRequest;
use critica_domain::role::may_edit_contribution;

use crate::auth::Identity;
use crate::domain::repository::{CommentRepository, ReviewRepository, TitleRepository};
use crate::domain::types::{Comment, NewComment};
use crate::error::ApiServiceError;

/// Resolves the `/titles/{id}/reviews/{id}` prefix shared by every comment
/// route, failing with the outermost missing resource.
async fn check_parents<T: TitleRepository, R: ReviewRepository>(
    titles: &T,
    reviews: &R,
    title_id: Uuid,
    review_id: Uuid,
) -> Result<(), ApiServiceError> {
    if !titles.exists(title_id).await? {
        return Err(ApiServiceError::TitleNotFound);
    }
    if reviews.find(title_id, review_id).await?.is_none() {
        return Err(ApiServiceError::ReviewNotFound);
    }
    Ok(())
}

// ── ListComments ─────────────────────────────────────────────────────────────

pub struct ListCommentsUseCase<T, R, C>
where
    T: TitleRepository,
    R: ReviewRepository,
    C: CommentRepository,
{
    pub titles: T,
    pub reviews: R,
    pub comments: C,
}

impl<T, R, C> ListCommentsUseCase<T, R, C>
where
    T: TitleRepository,
    R: ReviewRepository,
    C: CommentRepository,
{
    pub async fn execute(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Comment>, ApiServiceError> {
        check_parents(&self.titles, &self.reviews, title_id, review_id).await?;
        self.comments.list_by_review(review_id, page.clamped()).await
    }
}

// ── GetComment ───────────────────────────────────────────────────────────────

pub struct GetCommentUseCase<T, R, C>
where
    T: TitleRepository,
    R: ReviewRepository,
    C: CommentRepository,
{
    pub titles: T,
    pub reviews: R,
    pub comments: C,
}

impl<T, R, C> GetCommentUseCase<T, R, C>
where
    T: TitleRepository,
    R: ReviewRepository,
    C: CommentRepository,
{
    pub async fn execute(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Comment, ApiServiceError> {
        check_parents(&self.titles, &self.reviews, title_id, review_id).await?;
        self.comments
            .find(review_id, comment_id)
            .await?
            .ok_or(ApiServiceError::CommentNotFound)
    }
}

// ── CreateComment ────────────────────────────────────────────────────────────

pub struct CreateCommentUseCase<T, R, C>
where
    T: TitleRepository,
    R: ReviewRepository,
    C: CommentRepository,
{
    pub titles: T,
    pub reviews: R,
    pub comments: C,
}

impl<T, R, C> CreateCommentUseCase<T, R, C>
where
    T: TitleRepository,
    R: ReviewRepository,
    C: CommentRepository,
{
    pub async fn execute(
        &self,
        identity: Identity,
        title_id: Uuid,
        review_id: Uuid,
        text: String,
    ) -> Result<Comment, ApiServiceError> {
        if text.is_empty() {
            return Err(ApiServiceError::MissingData);
        }
        check_parents(&self.titles, &self.reviews, title_id, review_id).await?;

        let comment = NewComment {
            id: Uuid::now_v7(),
            review_id,
            author_id: identity.user_id,
            text,
            created_at: Utc::now(),
        };
        self.comments.create(&comment).await?;

        self.comments
            .find(review_id, comment.id)
            .await?
            .ok_or(ApiServiceError::CommentNotFound)
    }
}

// ── UpdateComment ────────────────────────────────────────────────────────────

pub struct UpdateCommentUseCase<T, R, C>
where
    T: TitleRepository,
    R: ReviewRepository,
    C: CommentRepository,
{
    pub titles: T,
    pub reviews: R,
    pub comments: C,
}

impl<T, R, C> UpdateCommentUseCase<T, R, C>
where
    T: TitleRepository,
    R: ReviewRepository,
    C: CommentRepository,
{
    pub async fn execute(
        &self,
        identity: Identity,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
        text: String,
    ) -> Result<Comment, ApiServiceError> {
        if text.is_empty() {
            return Err(ApiServiceError::MissingData);
        }
        check_parents(&self.titles, &self.reviews, title_id, review_id).await?;

        let comment = self
            .comments
            .find(review_id, comment_id)
            .await?
            .ok_or(ApiServiceError::CommentNotFound)?;

        if !may_edit_contribution(identity.role, identity.user_id, comment.author_id) {
            return Err(ApiServiceError::Forbidden);
        }

        self.comments.update(comment.id, &text).await?;

        self.comments
            .find(review_id, comment_id)
            .await?
            .ok_or(ApiServiceError::CommentNotFound)
    }
}

// ── DeleteComment ────────────────────────────────────────────────────────────

pub struct DeleteCommentUseCase<T, R, C>
where
    T: TitleRepository,
    R: ReviewRepository,
    C: CommentRepository,
{
    pub titles: T,
    pub reviews: R,
    pub comments: C,
}

impl<T, R, C> DeleteCommentUseCase<T, R, C>
where
    T: TitleRepository,
    R: ReviewRepository,
    C: CommentRepository,
{
    pub async fn execute(
        &self,
        identity: Identity,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
    ) -> Result<(), ApiServiceError> {
        check_parents(&self.titles, &self.reviews, title_id, review_id).await?;

        let comment = self
            .comments
            .find(review_id, comment_id)
            .await?
            .ok_or(ApiServiceError::CommentNotFound)?;

        if !may_edit_contribution(identity.role, identity.user_id, comment.author_id) {
            return Err(ApiServiceError::Forbidden);
        }

        self.comments.delete(comment.id).await?;
        Ok(())
    }
}
