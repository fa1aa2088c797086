use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait,
    sea_query::{Expr, SimpleExpr, extension::postgres::PgExpr},
};
use uuid::Uuid;

use critica_api_schema::{
    categories, comments, confirmation_codes, genres, outbox_events, reviews, title_genres,
    titles, users,
};
use critica_domain::pagination::{PageRequest, Sort};
use critica_domain::role::UserRole;

use crate::domain::repository::{
    CategoryRepository, CommentRepository, ConfirmationCodeRepository, GenreRepository,
    ReviewRepository, TitleRepository, UserRepository,
};
use crate::domain::types::{
    Category, Comment, ConfirmationCode, Genre, NewComment, NewReview, NewTitle, OutboxEvent,
    Review, Title, TitleChanges, TitleFilter, User, UserChanges,
};
use crate::error::ApiServiceError;

// Offset math in u64: `page` is client-controlled and only clamped to ≥ 1.
fn page_offset(page: PageRequest) -> (u64, u64) {
    let PageRequest { per_page, page } = page;
    (per_page as u64, (page as u64 - 1) * per_page as u64)
}

/// Maps a unique-constraint violation to a domain error; everything else is
/// an internal error. The DB indexes backstop the usecase-level pre-checks
/// under concurrent writes.
fn map_unique_violation(
    err: sea_orm::DbErr,
    on_conflict: ApiServiceError,
    context: &'static str,
) -> ApiServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => on_conflict,
        _ => ApiServiceError::Internal(anyhow::Error::new(err).context(context)),
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, ApiServiceError> {
        let (limit, offset) = page_offset(page);
        let models = users::Entity::find()
            .order_by_asc(users::Column::Username)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn create(&self, user: &User) -> Result<(), ApiServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            bio: Set(user.bio.clone()),
            role: Set(user.role.as_u8() as i16),
            is_superuser: Set(user.is_superuser),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_unique_violation(e, ApiServiceError::UserAlreadyExists, "create user"))?;
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: &UserChanges) -> Result<(), ApiServiceError> {
        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref username) = changes.username {
            am.username = Set(username.clone());
        }
        if let Some(ref email) = changes.email {
            am.email = Set(email.clone());
        }
        if let Some(ref first_name) = changes.first_name {
            am.first_name = Set(Some(first_name.clone()));
        }
        if let Some(ref last_name) = changes.last_name {
            am.last_name = Set(Some(last_name.clone()));
        }
        if let Some(ref bio) = changes.bio {
            am.bio = Set(Some(bio.clone()));
        }
        if let Some(role) = changes.role {
            am.role = Set(role.as_u8() as i16);
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db)
            .await
            .map_err(|e| {
                map_unique_violation(e, ApiServiceError::UserAlreadyExists, "update user")
            })?;
        Ok(())
    }

    async fn delete_by_username(&self, username: &str) -> Result<bool, ApiServiceError> {
        let result = users::Entity::delete_many()
            .filter(users::Column::Username.eq(username))
            .exec(&self.db)
            .await
            .context("delete user by username")?;
        Ok(result.rows_affected > 0)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        first_name: model.first_name,
        last_name: model.last_name,
        bio: model.bio,
        // Unknown role values cannot appear: the column is only ever written
        // from UserRole::as_u8.
        role: UserRole::from_u8(model.role as u8).unwrap_or(UserRole::User),
        is_superuser: model.is_superuser,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Confirmation-code repository ─────────────────────────────────────────────

#[derive(Clone)]
pub struct DbConfirmationCodeRepository {
    pub db: DatabaseConnection,
}

impl ConfirmationCodeRepository for DbConfirmationCodeRepository {
    async fn count_active(&self, user_id: Uuid) -> Result<u64, ApiServiceError> {
        let count = confirmation_codes::Entity::find()
            .filter(confirmation_codes::Column::UserId.eq(user_id))
            .filter(confirmation_codes::Column::UsedAt.is_null())
            .filter(confirmation_codes::Column::ExpiresAt.gt(Utc::now()))
            .count(&self.db)
            .await
            .context("count active confirmation codes")?;
        Ok(count)
    }

    async fn create_with_outbox(
        &self,
        code: &ConfirmationCode,
        event: &OutboxEvent,
    ) -> Result<(), ApiServiceError> {
        let txn = self
            .db
            .begin()
            .await
            .context("begin confirmation code transaction")?;

        confirmation_codes::ActiveModel {
            id: Set(code.id),
            user_id: Set(code.user_id),
            code: Set(code.code.clone()),
            expires_at: Set(code.expires_at),
            used_at: Set(code.used_at),
            created_at: Set(code.created_at),
        }
        .insert(&txn)
        .await
        .context("insert confirmation code")?;

        let now = Utc::now();
        outbox_events::ActiveModel {
            id: Set(event.id),
            kind: Set(event.kind.clone()),
            payload: Set(event.payload.clone()),
            idempotency_key: Set(event.idempotency_key.clone()),
            attempts: Set(0),
            last_error: Set(None),
            created_at: Set(now),
            next_attempt_at: Set(now),
            processed_at: Set(None),
            failed_at: Set(None),
        }
        .insert(&txn)
        .await
        .context("insert outbox event")?;

        txn.commit()
            .await
            .context("commit confirmation code transaction")?;
        Ok(())
    }

    async fn find_valid(
        &self,
        user_id: Uuid,
        code: &str,
    ) -> Result<Option<ConfirmationCode>, ApiServiceError> {
        let model = confirmation_codes::Entity::find()
            .filter(confirmation_codes::Column::UserId.eq(user_id))
            .filter(confirmation_codes::Column::Code.eq(code))
            .filter(confirmation_codes::Column::UsedAt.is_null())
            .filter(confirmation_codes::Column::ExpiresAt.gt(Utc::now()))
            .one(&self.db)
            .await
            .context("find valid confirmation code")?;
        Ok(model.map(|m| ConfirmationCode {
            id: m.id,
            user_id: m.user_id,
            code: m.code,
            expires_at: m.expires_at,
            used_at: m.used_at,
            created_at: m.created_at,
        }))
    }

    async fn mark_used(&self, id: Uuid) -> Result<(), ApiServiceError> {
        confirmation_codes::ActiveModel {
            id: Set(id),
            used_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("mark confirmation code used")?;
        Ok(())
    }
}

// ── Category repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCategoryRepository {
    pub db: DatabaseConnection,
}

impl CategoryRepository for DbCategoryRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Category>, ApiServiceError> {
        let (limit, offset) = page_offset(page);
        let models = categories::Entity::find()
            .order_by_asc(categories::Column::Name)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .context("list categories")?;
        Ok(models.into_iter().map(category_from_model).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, ApiServiceError> {
        let model = categories::Entity::find()
            .filter(categories::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .context("find category by slug")?;
        Ok(model.map(category_from_model))
    }

    async fn create(&self, category: &Category) -> Result<(), ApiServiceError> {
        categories::ActiveModel {
            id: Set(category.id),
            name: Set(category.name.clone()),
            slug: Set(category.slug.clone()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            map_unique_violation(e, ApiServiceError::SlugAlreadyExists, "create category")
        })?;
        Ok(())
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<bool, ApiServiceError> {
        let result = categories::Entity::delete_many()
            .filter(categories::Column::Slug.eq(slug))
            .exec(&self.db)
            .await
            .context("delete category by slug")?;
        Ok(result.rows_affected > 0)
    }
}

fn category_from_model(model: categories::Model) -> Category {
    Category {
        id: model.id,
        name: model.name,
        slug: model.slug,
    }
}

// ── Genre repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbGenreRepository {
    pub db: DatabaseConnection,
}

impl GenreRepository for DbGenreRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Genre>, ApiServiceError> {
        let (limit, offset) = page_offset(page);
        let models = genres::Entity::find()
            .order_by_asc(genres::Column::Name)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .context("list genres")?;
        Ok(models.into_iter().map(genre_from_model).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Genre>, ApiServiceError> {
        let model = genres::Entity::find()
            .filter(genres::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .context("find genre by slug")?;
        Ok(model.map(genre_from_model))
    }

    async fn create(&self, genre: &Genre) -> Result<(), ApiServiceError> {
        genres::ActiveModel {
            id: Set(genre.id),
            name: Set(genre.name.clone()),
            slug: Set(genre.slug.clone()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_unique_violation(e, ApiServiceError::SlugAlreadyExists, "create genre"))?;
        Ok(())
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<bool, ApiServiceError> {
        let result = genres::Entity::delete_many()
            .filter(genres::Column::Slug.eq(slug))
            .exec(&self.db)
            .await
            .context("delete genre by slug")?;
        Ok(result.rows_affected > 0)
    }
}

fn genre_from_model(model: genres::Model) -> Genre {
    Genre {
        id: model.id,
        name: model.name,
        slug: model.slug,
    }
}

// ── Title repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTitleRepository {
    pub db: DatabaseConnection,
}

impl DbTitleRepository {
    /// Resolves a title model into the domain shape with its category and
    /// genres attached.
    async fn hydrate(&self, model: titles::Model) -> Result<Title, ApiServiceError> {
        let category = match model.category_id {
            Some(category_id) => categories::Entity::find_by_id(category_id)
                .one(&self.db)
                .await
                .context("find title category")?
                .map(category_from_model),
            None => None,
        };

        let genre_models = model
            .find_related(genres::Entity)
            .order_by_asc(genres::Column::Name)
            .all(&self.db)
            .await
            .context("find title genres")?;

        Ok(Title {
            id: model.id,
            name: model.name,
            year: model.year,
            description: model.description,
            category,
            genres: genre_models.into_iter().map(genre_from_model).collect(),
        })
    }
}

/// Case-insensitive substring match on the title name; LIKE metacharacters
/// in the needle are escaped so they match literally.
fn name_filter(name: &str) -> SimpleExpr {
    let escaped = name
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    Expr::col((titles::Entity, titles::Column::Name)).ilike(format!("%{escaped}%"))
}

impl TitleRepository for DbTitleRepository {
    async fn list(
        &self,
        filter: &TitleFilter,
        page: PageRequest,
    ) -> Result<Vec<Title>, ApiServiceError> {
        let mut query = titles::Entity::find();

        if let Some(ref name) = filter.name {
            query = query.filter(name_filter(name));
        }
        if let Some(year) = filter.year {
            query = query.filter(titles::Column::Year.eq(year));
        }
        if let Some(ref category_slug) = filter.category {
            let Some(category) = categories::Entity::find()
                .filter(categories::Column::Slug.eq(category_slug))
                .one(&self.db)
                .await
                .context("resolve category filter")?
            else {
                return Ok(vec![]);
            };
            query = query.filter(titles::Column::CategoryId.eq(category.id));
        }
        if let Some(ref genre_slug) = filter.genre {
            let Some(genre) = genres::Entity::find()
                .filter(genres::Column::Slug.eq(genre_slug))
                .one(&self.db)
                .await
                .context("resolve genre filter")?
            else {
                return Ok(vec![]);
            };
            let linked: Vec<Uuid> = title_genres::Entity::find()
                .filter(title_genres::Column::GenreId.eq(genre.id))
                .all(&self.db)
                .await
                .context("resolve genre links")?
                .into_iter()
                .map(|link| link.title_id)
                .collect();
            if linked.is_empty() {
                return Ok(vec![]);
            }
            query = query.filter(titles::Column::Id.is_in(linked));
        }

        let (limit, offset) = page_offset(page);
        let models = query
            .order_by_asc(titles::Column::Name)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .context("list titles")?;

        let mut out = Vec::with_capacity(models.len());
        for model in models {
            out.push(self.hydrate(model).await?);
        }
        Ok(out)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Title>, ApiServiceError> {
        let model = titles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find title by id")?;
        match model {
            Some(model) => Ok(Some(self.hydrate(model).await?)),
            None => Ok(None),
        }
    }

    async fn exists(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let count = titles::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("check title exists")?;
        Ok(count > 0)
    }

    async fn create(&self, title: &NewTitle) -> Result<(), ApiServiceError> {
        let txn = self.db.begin().await.context("begin title transaction")?;

        titles::ActiveModel {
            id: Set(title.id),
            name: Set(title.name.clone()),
            year: Set(title.year),
            description: Set(title.description.clone()),
            category_id: Set(title.category_id),
            created_at: Set(Utc::now()),
        }
        .insert(&txn)
        .await
        .context("insert title")?;

        if !title.genre_ids.is_empty() {
            let links = title.genre_ids.iter().map(|&genre_id| {
                title_genres::ActiveModel {
                    title_id: Set(title.id),
                    genre_id: Set(genre_id),
                }
            });
            title_genres::Entity::insert_many(links)
                .exec(&txn)
                .await
                .context("insert title genres")?;
        }

        txn.commit().await.context("commit title transaction")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: &TitleChanges) -> Result<(), ApiServiceError> {
        let txn = self.db.begin().await.context("begin title transaction")?;

        let mut am = titles::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref name) = changes.name {
            am.name = Set(name.clone());
        }
        if let Some(year) = changes.year {
            am.year = Set(Some(year));
        }
        if let Some(ref description) = changes.description {
            am.description = Set(Some(description.clone()));
        }
        if let Some(category_id) = changes.category_id {
            am.category_id = Set(Some(category_id));
        }
        let has_field_changes = changes.name.is_some()
            || changes.year.is_some()
            || changes.description.is_some()
            || changes.category_id.is_some();
        if has_field_changes {
            am.update(&txn).await.context("update title")?;
        }

        // A genre change replaces the whole set.
        if let Some(ref genre_ids) = changes.genre_ids {
            title_genres::Entity::delete_many()
                .filter(title_genres::Column::TitleId.eq(id))
                .exec(&txn)
                .await
                .context("clear title genres")?;
            if !genre_ids.is_empty() {
                let links = genre_ids.iter().map(|&genre_id| {
                    title_genres::ActiveModel {
                        title_id: Set(id),
                        genre_id: Set(genre_id),
                    }
                });
                title_genres::Entity::insert_many(links)
                    .exec(&txn)
                    .await
                    .context("insert title genres")?;
            }
        }

        txn.commit().await.context("commit title transaction")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let result = titles::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete title")?;
        Ok(result.rows_affected > 0)
    }
}

// ── Review repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReviewRepository {
    pub db: DatabaseConnection,
}

impl ReviewRepository for DbReviewRepository {
    async fn list_by_title(
        &self,
        title_id: Uuid,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<Review>, ApiServiceError> {
        let (limit, offset) = page_offset(page);
        let query = reviews::Entity::find()
            .filter(reviews::Column::TitleId.eq(title_id))
            .find_also_related(users::Entity);
        let query = match sort {
            Sort::Desc => query.order_by_desc(reviews::Column::CreatedAt),
            Sort::Asc => query.order_by_asc(reviews::Column::CreatedAt),
        };
        let rows = query
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .context("list reviews")?;
        Ok(rows
            .into_iter()
            .map(|(review, author)| review_from_model(review, author))
            .collect())
    }

    async fn find(
        &self,
        title_id: Uuid,
        review_id: Uuid,
    ) -> Result<Option<Review>, ApiServiceError> {
        let row = reviews::Entity::find_by_id(review_id)
            .filter(reviews::Column::TitleId.eq(title_id))
            .find_also_related(users::Entity)
            .one(&self.db)
            .await
            .context("find review")?;
        Ok(row.map(|(review, author)| review_from_model(review, author)))
    }

    async fn exists_by_author(
        &self,
        title_id: Uuid,
        author_id: Uuid,
    ) -> Result<bool, ApiServiceError> {
        let count = reviews::Entity::find()
            .filter(reviews::Column::TitleId.eq(title_id))
            .filter(reviews::Column::AuthorId.eq(author_id))
            .count(&self.db)
            .await
            .context("check review exists")?;
        Ok(count > 0)
    }

    async fn scores_for_title(&self, title_id: Uuid) -> Result<Vec<i16>, ApiServiceError> {
        let scores = reviews::Entity::find()
            .select_only()
            .column(reviews::Column::Score)
            .filter(reviews::Column::TitleId.eq(title_id))
            .into_tuple::<i16>()
            .all(&self.db)
            .await
            .context("fetch review scores")?;
        Ok(scores)
    }

    async fn create(&self, review: &NewReview) -> Result<(), ApiServiceError> {
        reviews::ActiveModel {
            id: Set(review.id),
            title_id: Set(review.title_id),
            author_id: Set(review.author_id),
            text: Set(review.text.clone()),
            score: Set(review.score),
            created_at: Set(review.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            map_unique_violation(e, ApiServiceError::ReviewAlreadyExists, "create review")
        })?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        text: Option<&str>,
        score: Option<i16>,
    ) -> Result<(), ApiServiceError> {
        let mut am = reviews::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(new_text) = text {
            am.text = Set(new_text.to_owned());
        }
        if let Some(new_score) = score {
            am.score = Set(new_score);
        }
        if text.is_some() || score.is_some() {
            am.update(&self.db).await.context("update review")?;
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let result = reviews::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete review")?;
        Ok(result.rows_affected > 0)
    }
}

fn review_from_model(review: reviews::Model, author: Option<users::Model>) -> Review {
    Review {
        id: review.id,
        title_id: review.title_id,
        author_id: review.author_id,
        author_username: author.map(|a| a.username).unwrap_or_default(),
        text: review.text,
        score: review.score,
        created_at: review.created_at,
    }
}

// ── Comment repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCommentRepository {
    pub db: DatabaseConnection,
}

impl CommentRepository for DbCommentRepository {
    async fn list_by_review(
        &self,
        review_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Comment>, ApiServiceError> {
        let (limit, offset) = page_offset(page);
        let rows = comments::Entity::find()
            .filter(comments::Column::ReviewId.eq(review_id))
            .find_also_related(users::Entity)
            .order_by_asc(comments::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .context("list comments")?;
        Ok(rows
            .into_iter()
            .map(|(comment, author)| comment_from_model(comment, author))
            .collect())
    }

    async fn find(
        &self,
        review_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<Comment>, ApiServiceError> {
        let row = comments::Entity::find_by_id(comment_id)
            .filter(comments::Column::ReviewId.eq(review_id))
            .find_also_related(users::Entity)
            .one(&self.db)
            .await
            .context("find comment")?;
        Ok(row.map(|(comment, author)| comment_from_model(comment, author)))
    }

    async fn create(&self, comment: &NewComment) -> Result<(), ApiServiceError> {
        comments::ActiveModel {
            id: Set(comment.id),
            review_id: Set(comment.review_id),
            author_id: Set(comment.author_id),
            text: Set(comment.text.clone()),
            created_at: Set(comment.created_at),
        }
        .insert(&self.db)
        .await
        .context("create comment")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, text: &str) -> Result<(), ApiServiceError> {
        comments::ActiveModel {
            id: Set(id),
            text: Set(text.to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update comment")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let result = comments::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete comment")?;
        Ok(result.rows_affected > 0)
    }
}

fn comment_from_model(comment: comments::Model, author: Option<users::Model>) -> Comment {
    Comment {
        id: comment.id,
        review_id: comment.review_id,
        author_id: comment.author_id,
        author_username: author.map(|a| a.username).unwrap_or_default(),
        text: comment.text,
        created_at: comment.created_at,
    }
}
