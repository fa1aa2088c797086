use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use critica_api::domain::repository::{
    CategoryRepository, CommentRepository, ConfirmationCodeRepository, GenreRepository,
    ReviewRepository, TitleRepository, UserRepository,
};
use critica_api::domain::types::{
    Category, Comment, ConfirmationCode, Genre, NewComment, NewReview, NewTitle, OutboxEvent,
    Review, Title, TitleChanges, TitleFilter, User, UserChanges,
};
use critica_api::error::ApiServiceError;
use critica_domain::pagination::{PageRequest, Sort};
use critica_domain::role::UserRole;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self, _page: PageRequest) -> Result<Vec<User>, ApiServiceError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create(&self, user: &User) -> Result<(), ApiServiceError> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(ApiServiceError::UserAlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: &UserChanges) -> Result<(), ApiServiceError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            if let Some(ref username) = changes.username {
                user.username = username.clone();
            }
            if let Some(ref email) = changes.email {
                user.email = email.clone();
            }
            if let Some(ref first_name) = changes.first_name {
                user.first_name = Some(first_name.clone());
            }
            if let Some(ref last_name) = changes.last_name {
                user.last_name = Some(last_name.clone());
            }
            if let Some(ref bio) = changes.bio {
                user.bio = Some(bio.clone());
            }
            if let Some(role) = changes.role {
                user.role = role;
            }
            user.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete_by_username(&self, username: &str) -> Result<bool, ApiServiceError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.username != username);
        Ok(users.len() < before)
    }
}

// ── MockCodeRepo ─────────────────────────────────────────────────────────────

pub struct MockCodeRepo {
    pub codes: Arc<Mutex<Vec<ConfirmationCode>>>,
    pub active_count: u64,
}

impl MockCodeRepo {
    pub fn new(codes: Vec<ConfirmationCode>, active_count: u64) -> Self {
        Self {
            codes: Arc::new(Mutex::new(codes)),
            active_count,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![], 0)
    }

    pub fn codes_handle(&self) -> Arc<Mutex<Vec<ConfirmationCode>>> {
        Arc::clone(&self.codes)
    }
}

impl ConfirmationCodeRepository for MockCodeRepo {
    async fn count_active(&self, _user_id: Uuid) -> Result<u64, ApiServiceError> {
        Ok(self.active_count)
    }

    async fn create_with_outbox(
        &self,
        code: &ConfirmationCode,
        _event: &OutboxEvent,
    ) -> Result<(), ApiServiceError> {
        self.codes.lock().unwrap().push(code.clone());
        Ok(())
    }

    async fn find_valid(
        &self,
        user_id: Uuid,
        code: &str,
    ) -> Result<Option<ConfirmationCode>, ApiServiceError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.user_id == user_id && c.code == code && c.is_valid())
            .cloned())
    }

    async fn mark_used(&self, id: Uuid) -> Result<(), ApiServiceError> {
        let mut codes = self.codes.lock().unwrap();
        if let Some(c) = codes.iter_mut().find(|c| c.id == id) {
            c.used_at = Some(Utc::now());
        }
        Ok(())
    }
}

// ── MockCategoryRepo / MockGenreRepo ─────────────────────────────────────────

pub struct MockCategoryRepo {
    pub categories: Arc<Mutex<Vec<Category>>>,
}

impl MockCategoryRepo {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories: Arc::new(Mutex::new(categories)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl CategoryRepository for MockCategoryRepo {
    async fn list(&self, _page: PageRequest) -> Result<Vec<Category>, ApiServiceError> {
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, ApiServiceError> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.slug == slug)
            .cloned())
    }

    async fn create(&self, category: &Category) -> Result<(), ApiServiceError> {
        let mut categories = self.categories.lock().unwrap();
        if categories.iter().any(|c| c.slug == category.slug) {
            return Err(ApiServiceError::SlugAlreadyExists);
        }
        categories.push(category.clone());
        Ok(())
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<bool, ApiServiceError> {
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| c.slug != slug);
        Ok(categories.len() < before)
    }
}

pub struct MockGenreRepo {
    pub genres: Arc<Mutex<Vec<Genre>>>,
}

impl MockGenreRepo {
    pub fn new(genres: Vec<Genre>) -> Self {
        Self {
            genres: Arc::new(Mutex::new(genres)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl GenreRepository for MockGenreRepo {
    async fn list(&self, _page: PageRequest) -> Result<Vec<Genre>, ApiServiceError> {
        Ok(self.genres.lock().unwrap().clone())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Genre>, ApiServiceError> {
        Ok(self
            .genres
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.slug == slug)
            .cloned())
    }

    async fn create(&self, genre: &Genre) -> Result<(), ApiServiceError> {
        let mut genres = self.genres.lock().unwrap();
        if genres.iter().any(|g| g.slug == genre.slug) {
            return Err(ApiServiceError::SlugAlreadyExists);
        }
        genres.push(genre.clone());
        Ok(())
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<bool, ApiServiceError> {
        let mut genres = self.genres.lock().unwrap();
        let before = genres.len();
        genres.retain(|g| g.slug != slug);
        Ok(genres.len() < before)
    }
}

// ── MockTitleRepo ────────────────────────────────────────────────────────────

pub struct MockTitleRepo {
    pub titles: Arc<Mutex<Vec<Title>>>,
}

impl MockTitleRepo {
    pub fn new(titles: Vec<Title>) -> Self {
        Self {
            titles: Arc::new(Mutex::new(titles)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn titles_handle(&self) -> Arc<Mutex<Vec<Title>>> {
        Arc::clone(&self.titles)
    }
}

impl TitleRepository for MockTitleRepo {
    async fn list(
        &self,
        _filter: &TitleFilter,
        _page: PageRequest,
    ) -> Result<Vec<Title>, ApiServiceError> {
        Ok(self.titles.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Title>, ApiServiceError> {
        Ok(self.titles.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        Ok(self.titles.lock().unwrap().iter().any(|t| t.id == id))
    }

    async fn create(&self, title: &NewTitle) -> Result<(), ApiServiceError> {
        // Genre/category resolution is the usecase's job; the mock stores the
        // bare shape.
        self.titles.lock().unwrap().push(Title {
            id: title.id,
            name: title.name.clone(),
            year: title.year,
            description: title.description.clone(),
            category: None,
            genres: vec![],
        });
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: &TitleChanges) -> Result<(), ApiServiceError> {
        let mut titles = self.titles.lock().unwrap();
        if let Some(title) = titles.iter_mut().find(|t| t.id == id) {
            if let Some(ref name) = changes.name {
                title.name = name.clone();
            }
            if let Some(year) = changes.year {
                title.year = Some(year);
            }
            if let Some(ref description) = changes.description {
                title.description = Some(description.clone());
            }
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let mut titles = self.titles.lock().unwrap();
        let before = titles.len();
        titles.retain(|t| t.id != id);
        Ok(titles.len() < before)
    }
}

// ── MockReviewRepo ───────────────────────────────────────────────────────────

pub struct MockReviewRepo {
    pub reviews: Arc<Mutex<Vec<Review>>>,
}

impl MockReviewRepo {
    pub fn new(reviews: Vec<Review>) -> Self {
        Self {
            reviews: Arc::new(Mutex::new(reviews)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn reviews_handle(&self) -> Arc<Mutex<Vec<Review>>> {
        Arc::clone(&self.reviews)
    }
}

impl ReviewRepository for MockReviewRepo {
    async fn list_by_title(
        &self,
        title_id: Uuid,
        sort: Sort,
        _page: PageRequest,
    ) -> Result<Vec<Review>, ApiServiceError> {
        let mut matching: Vec<Review> = self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.title_id == title_id)
            .cloned()
            .collect();
        matching.sort_by_key(|r| r.created_at);
        if sort == Sort::Desc {
            matching.reverse();
        }
        Ok(matching)
    }

    async fn find(
        &self,
        title_id: Uuid,
        review_id: Uuid,
    ) -> Result<Option<Review>, ApiServiceError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.title_id == title_id && r.id == review_id)
            .cloned())
    }

    async fn exists_by_author(
        &self,
        title_id: Uuid,
        author_id: Uuid,
    ) -> Result<bool, ApiServiceError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.title_id == title_id && r.author_id == author_id))
    }

    async fn scores_for_title(&self, title_id: Uuid) -> Result<Vec<i16>, ApiServiceError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.title_id == title_id)
            .map(|r| r.score)
            .collect())
    }

    async fn create(&self, review: &NewReview) -> Result<(), ApiServiceError> {
        let mut reviews = self.reviews.lock().unwrap();
        if reviews
            .iter()
            .any(|r| r.title_id == review.title_id && r.author_id == review.author_id)
        {
            return Err(ApiServiceError::ReviewAlreadyExists);
        }
        reviews.push(Review {
            id: review.id,
            title_id: review.title_id,
            author_id: review.author_id,
            author_username: "tester".to_owned(),
            text: review.text.clone(),
            score: review.score,
            created_at: review.created_at,
        });
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        text: Option<&str>,
        score: Option<i16>,
    ) -> Result<(), ApiServiceError> {
        let mut reviews = self.reviews.lock().unwrap();
        if let Some(review) = reviews.iter_mut().find(|r| r.id == id) {
            if let Some(new_text) = text {
                review.text = new_text.to_owned();
            }
            if let Some(new_score) = score {
                review.score = new_score;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let mut reviews = self.reviews.lock().unwrap();
        let before = reviews.len();
        reviews.retain(|r| r.id != id);
        Ok(reviews.len() < before)
    }
}

// ── MockCommentRepo ──────────────────────────────────────────────────────────

pub struct MockCommentRepo {
    pub comments: Arc<Mutex<Vec<Comment>>>,
}

impl MockCommentRepo {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self {
            comments: Arc::new(Mutex::new(comments)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn comments_handle(&self) -> Arc<Mutex<Vec<Comment>>> {
        Arc::clone(&self.comments)
    }
}

impl CommentRepository for MockCommentRepo {
    async fn list_by_review(
        &self,
        review_id: Uuid,
        _page: PageRequest,
    ) -> Result<Vec<Comment>, ApiServiceError> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.review_id == review_id)
            .cloned()
            .collect())
    }

    async fn find(
        &self,
        review_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<Comment>, ApiServiceError> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.review_id == review_id && c.id == comment_id)
            .cloned())
    }

    async fn create(&self, comment: &NewComment) -> Result<(), ApiServiceError> {
        self.comments.lock().unwrap().push(Comment {
            id: comment.id,
            review_id: comment.review_id,
            author_id: comment.author_id,
            author_username: "tester".to_owned(),
            text: comment.text.clone(),
            created_at: comment.created_at,
        });
        Ok(())
    }

    async fn update(&self, id: Uuid, text: &str) -> Result<(), ApiServiceError> {
        let mut comments = self.comments.lock().unwrap();
        if let Some(comment) = comments.iter_mut().find(|c| c.id == id) {
            comment.text = text.to_owned();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != id);
        Ok(comments.len() < before)
    }
}

// ── Test fixtures ────────────────────────────────────────────────────────────

pub fn test_user(username: &str, role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        first_name: None,
        last_name: None,
        bio: None,
        role,
        is_superuser: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn test_title(name: &str) -> Title {
    Title {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        year: Some(2000),
        description: None,
        category: None,
        genres: vec![],
    }
}

pub fn test_review(title_id: Uuid, author_id: Uuid, score: i16) -> Review {
    Review {
        id: Uuid::new_v4(),
        title_id,
        author_id,
        author_username: "tester".to_owned(),
        text: "solid".to_owned(),
        score,
        created_at: Utc::now(),
    }
}

pub fn test_comment(review_id: Uuid, author_id: Uuid) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        review_id,
        author_id,
        author_username: "tester".to_owned(),
        text: "agreed".to_owned(),
        created_at: Utc::now(),
    }
}

pub fn test_confirmation_code(user_id: Uuid) -> ConfirmationCode {
    ConfirmationCode {
        id: Uuid::new_v4(),
        user_id,
        code: "ABCDEF123456".to_owned(),
        expires_at: Utc::now() + chrono::Duration::seconds(120),
        used_at: None,
        created_at: Utc::now(),
    }
}
