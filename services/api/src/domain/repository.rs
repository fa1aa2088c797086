#![allow(async_fn_in_trait)]

use uuid::Uuid;

use critica_domain::pagination::{PageRequest, Sort};

use crate::domain::types::{
    Category, Comment, ConfirmationCode, Genre, NewComment, NewReview, NewTitle, OutboxEvent,
    Review, Title, TitleChanges, TitleFilter, User, UserChanges,
};
use crate::error::ApiServiceError;

/// Repository for accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError>;
    async fn list(&self, page: PageRequest) -> Result<Vec<User>, ApiServiceError>;

    /// Insert a new user. Unique violations on username/email surface as
    /// `UserAlreadyExists`.
    async fn create(&self, user: &User) -> Result<(), ApiServiceError>;

    async fn update(&self, id: Uuid, changes: &UserChanges) -> Result<(), ApiServiceError>;

    /// Delete a user. Returns `true` if a row was deleted.
    async fn delete_by_username(&self, username: &str) -> Result<bool, ApiServiceError>;
}

/// Repository for one-time confirmation codes.
pub trait ConfirmationCodeRepository: Send + Sync {
    /// Count active (unused and unexpired) codes for a user.
    async fn count_active(&self, user_id: Uuid) -> Result<u64, ApiServiceError>;

    /// Insert a new code and an outbox event atomically (same transaction).
    async fn create_with_outbox(
        &self,
        code: &ConfirmationCode,
        event: &OutboxEvent,
    ) -> Result<(), ApiServiceError>;

    /// Find a valid (unused, unexpired) code by user + code string.
    async fn find_valid(
        &self,
        user_id: Uuid,
        code: &str,
    ) -> Result<Option<ConfirmationCode>, ApiServiceError>;

    /// Mark a code as used (sets used_at = now).
    async fn mark_used(&self, id: Uuid) -> Result<(), ApiServiceError>;
}

/// Repository for categories, keyed by slug.
pub trait CategoryRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<Category>, ApiServiceError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, ApiServiceError>;

    /// Insert a category. A slug collision surfaces as `SlugAlreadyExists`.
    async fn create(&self, category: &Category) -> Result<(), ApiServiceError>;

    /// Delete by slug. Returns `true` if a row was deleted. Associated titles
    /// keep existing with a nulled category (FK `SET NULL`).
    async fn delete_by_slug(&self, slug: &str) -> Result<bool, ApiServiceError>;
}

/// Repository for genres, keyed by slug.
pub trait GenreRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<Genre>, ApiServiceError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Genre>, ApiServiceError>;

    /// Insert a genre. A slug collision surfaces as `SlugAlreadyExists`.
    async fn create(&self, genre: &Genre) -> Result<(), ApiServiceError>;

    /// Delete by slug. Returns `true` if a row was deleted.
    async fn delete_by_slug(&self, slug: &str) -> Result<bool, ApiServiceError>;
}

/// Repository for titles with their category/genre associations.
pub trait TitleRepository: Send + Sync {
    async fn list(
        &self,
        filter: &TitleFilter,
        page: PageRequest,
    ) -> Result<Vec<Title>, ApiServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Title>, ApiServiceError>;
    async fn exists(&self, id: Uuid) -> Result<bool, ApiServiceError>;

    /// Insert a title and its genre links atomically.
    async fn create(&self, title: &NewTitle) -> Result<(), ApiServiceError>;

    /// Apply changes; a `genre_ids` change replaces the genre set atomically.
    async fn update(&self, id: Uuid, changes: &TitleChanges) -> Result<(), ApiServiceError>;

    /// Delete a title (reviews and comments cascade). Returns `true` if deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError>;
}

/// Repository for reviews.
pub trait ReviewRepository: Send + Sync {
    /// List a title's reviews ordered by creation time in `sort` direction.
    async fn list_by_title(
        &self,
        title_id: Uuid,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<Review>, ApiServiceError>;

    async fn find(&self, title_id: Uuid, review_id: Uuid)
    -> Result<Option<Review>, ApiServiceError>;

    /// Application-level half of the uniqueness guard; the DB index backstops it.
    async fn exists_by_author(
        &self,
        title_id: Uuid,
        author_id: Uuid,
    ) -> Result<bool, ApiServiceError>;

    /// Read-time score fetch for the rating calculator.
    async fn scores_for_title(&self, title_id: Uuid) -> Result<Vec<i16>, ApiServiceError>;

    /// Insert a review. A duplicate (author, title) pair surfaces as
    /// `ReviewAlreadyExists`.
    async fn create(&self, review: &NewReview) -> Result<(), ApiServiceError>;

    async fn update(
        &self,
        id: Uuid,
        text: Option<&str>,
        score: Option<i16>,
    ) -> Result<(), ApiServiceError>;

    /// Delete a review (comments cascade). Returns `true` if deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError>;
}

/// Repository for comments.
pub trait CommentRepository: Send + Sync {
    async fn list_by_review(
        &self,
        review_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Comment>, ApiServiceError>;

    async fn find(
        &self,
        review_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<Comment>, ApiServiceError>;

    async fn create(&self, comment: &NewComment) -> Result<(), ApiServiceError>;

    async fn update(&self, id: Uuid, text: &str) -> Result<(), ApiServiceError>;

    /// Delete a comment. Returns `true` if deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError>;
}
