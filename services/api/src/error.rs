use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("category not found")]
    CategoryNotFound,
    #[error("genre not found")]
    GenreNotFound,
    #[error("title not found")]
    TitleNotFound,
    #[error("review not found")]
    ReviewNotFound,
    #[error("comment not found")]
    CommentNotFound,
    #[error("username is reserved")]
    ReservedUsername,
    #[error("invalid username")]
    InvalidUsername,
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid slug")]
    InvalidSlug,
    #[error("score must be between 1 and 10")]
    InvalidScore,
    #[error("unknown genre slug")]
    UnknownGenre,
    #[error("unknown category slug")]
    UnknownCategory,
    #[error("username or email already taken")]
    UserAlreadyExists,
    #[error("you have already reviewed this title")]
    ReviewAlreadyExists,
    #[error("slug already taken")]
    SlugAlreadyExists,
    #[error("invalid confirmation code")]
    InvalidConfirmationCode,
    #[error("missing data")]
    MissingData,
    #[error("unauthorized")]
    Unauthorized,
    #[error("invalid token")]
    InvalidToken,
    #[error("forbidden")]
    Forbidden,
    #[error("too many confirmation codes")]
    TooManyConfirmationCodes,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::GenreNotFound => "GENRE_NOT_FOUND",
            Self::TitleNotFound => "TITLE_NOT_FOUND",
            Self::ReviewNotFound => "REVIEW_NOT_FOUND",
            Self::CommentNotFound => "COMMENT_NOT_FOUND",
            Self::ReservedUsername => "RESERVED_USERNAME",
            Self::InvalidUsername => "INVALID_USERNAME",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidSlug => "INVALID_SLUG",
            Self::InvalidScore => "INVALID_SCORE",
            Self::UnknownGenre => "UNKNOWN_GENRE",
            Self::UnknownCategory => "UNKNOWN_CATEGORY",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::ReviewAlreadyExists => "REVIEW_ALREADY_EXISTS",
            Self::SlugAlreadyExists => "SLUG_ALREADY_EXISTS",
            Self::InvalidConfirmationCode => "INVALID_CONFIRMATION_CODE",
            Self::MissingData => "MISSING_DATA",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::Forbidden => "FORBIDDEN",
            Self::TooManyConfirmationCodes => "TOO_MANY_CONFIRMATION_CODES",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound
            | Self::CategoryNotFound
            | Self::GenreNotFound
            | Self::TitleNotFound
            | Self::ReviewNotFound
            | Self::CommentNotFound => StatusCode::NOT_FOUND,
            Self::ReservedUsername
            | Self::InvalidUsername
            | Self::InvalidEmail
            | Self::InvalidSlug
            | Self::InvalidScore
            | Self::UnknownGenre
            | Self::UnknownCategory
            | Self::UserAlreadyExists
            | Self::ReviewAlreadyExists
            | Self::SlugAlreadyExists
            | Self::InvalidConfirmationCode
            | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::Unauthorized | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::TooManyConfirmationCodes => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
