use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use critica_domain::role::UserRole;

/// Account. `role` is the stored role; use [`User::effective_role`] for
/// permission checks so the superuser flag counts as admin.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub role: UserRole,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn effective_role(&self) -> UserRole {
        if self.is_superuser {
            UserRole::Admin
        } else {
            self.role
        }
    }
}

/// Field-level changes for a user update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

/// A title with its nested category and genres resolved. The derived rating
/// is carried separately (see `TitleWithRating`) — it is never stored.
#[derive(Debug, Clone)]
pub struct Title {
    pub id: Uuid,
    pub name: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone)]
pub struct TitleWithRating {
    pub title: Title,
    pub rating: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewTitle {
    pub id: Uuid,
    pub name: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub genre_ids: Vec<Uuid>,
}

/// Field-level changes for a title update. `None` means "leave unchanged";
/// `genre_ids: Some(..)` replaces the whole genre set.
#[derive(Debug, Clone, Default)]
pub struct TitleChanges {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub genre_ids: Option<Vec<Uuid>>,
}

/// Filters for the title list endpoint. Genre and category match by slug,
/// name by case-insensitive substring, year exactly.
#[derive(Debug, Clone, Default)]
pub struct TitleFilter {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub category: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct Review {
    pub id: Uuid,
    pub title_id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub text: String,
    pub score: i16,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub id: Uuid,
    pub title_id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub score: i16,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: Uuid,
    pub review_id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub id: Uuid,
    pub review_id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// One-time confirmation code for passwordless signup.
#[derive(Debug, Clone)]
pub struct ConfirmationCode {
    pub id: Uuid,
    pub user_id: Uuid,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ConfirmationCode {
    pub fn is_valid(&self) -> bool {
        self.used_at.is_none() && self.expires_at > Utc::now()
    }
}

/// Outbox event for async delivery (e.g. confirmation-code email).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboxEvent {
    pub id: Uuid,
    pub kind: String,
    pub payload: serde_json::Value,
    pub idempotency_key: String,
}

/// The reserved profile path segment; never a valid username.
pub const RESERVED_USERNAME: &str = "me";

/// Maximum number of active (unused, unexpired) confirmation codes per user.
pub const MAX_ACTIVE_CODES: u64 = 5;

/// Confirmation code length in characters.
pub const CONFIRMATION_CODE_LEN: usize = 12;

/// Confirmation code time-to-live in seconds.
pub const CONFIRMATION_CODE_TTL_SECS: i64 = 600;

/// Access token lifetime in seconds.
pub const ACCESS_TOKEN_TTL_SECS: u64 = 60 * 60 * 24;

/// Review score bounds (inclusive).
pub const MIN_SCORE: i16 = 1;
pub const MAX_SCORE: i16 = 10;

/// Maximum length of a title, category or genre name, matching the
/// `name` column width in the migrations.
pub const MAX_NAME_LEN: usize = 200;

pub fn validate_score(score: i16) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}

/// Username charset per the signup contract: letters, digits and `@ . + - _`,
/// 1–150 chars. Reservation of "me" is checked separately.
pub fn validate_username(username: &str) -> bool {
    !username.is_empty()
        && username.len() <= 150
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
}

/// Light email shape check; real ownership proof is the confirmation code.
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.len() > 254 {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && domain.contains('.') && !domain.contains('@')
        }
        None => false,
    }
}

/// URL-safe slug: ASCII letters, digits, hyphen and underscore, 1–50 chars.
pub fn validate_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= 50
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
