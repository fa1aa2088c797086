use chrono::Utc;
use uuid::Uuid;

use critica_domain::pagination::PageRequest;
use critica_domain::role::UserRole;

use crate::domain::repository::UserRepository;
use crate::domain::types::{
    RESERVED_USERNAME, User, UserChanges, validate_email, validate_username,
};
use crate::error::ApiServiceError;

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<User>, ApiServiceError> {
        self.users.list(page.clamped()).await
    }
}

// ── CreateUser (admin) ───────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub role: UserRole,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, ApiServiceError> {
        if input.username == RESERVED_USERNAME {
            return Err(ApiServiceError::ReservedUsername);
        }
        if !validate_username(&input.username) {
            return Err(ApiServiceError::InvalidUsername);
        }
        if !validate_email(&input.email) {
            return Err(ApiServiceError::InvalidEmail);
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            username: input.username,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            bio: input.bio,
            role: input.role,
            is_superuser: false,
            created_at: now,
            updated_at: now,
        };
        self.users.create(&user).await?;
        Ok(user)
    }
}

// ── GetUser (admin, by username) ─────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, username: &str) -> Result<User, ApiServiceError> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or(ApiServiceError::UserNotFound)
    }
}

// ── GetMe ────────────────────────────────────────────────────────────────────

pub struct GetMeUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> GetMeUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, ApiServiceError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub role: Option<UserRole>,
}

pub struct UpdateUserUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    /// `allow_role_change` is true only for admin callers; for everyone else
    /// a submitted `role` is silently dropped and the stored role kept.
    pub async fn execute(
        &self,
        target: &User,
        input: UpdateUserInput,
        allow_role_change: bool,
    ) -> Result<User, ApiServiceError> {
        if let Some(ref username) = input.username {
            if username == RESERVED_USERNAME {
                return Err(ApiServiceError::ReservedUsername);
            }
            if !validate_username(username) {
                return Err(ApiServiceError::InvalidUsername);
            }
        }
        if let Some(ref email) = input.email {
            if !validate_email(email) {
                return Err(ApiServiceError::InvalidEmail);
            }
        }

        let changes = UserChanges {
            username: input.username,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            bio: input.bio,
            role: if allow_role_change { input.role } else { None },
        };
        self.users.update(target.id, &changes).await?;

        self.users
            .find_by_id(target.id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub async fn execute(&self, username: &str) -> Result<(), ApiServiceError> {
        if self.users.delete_by_username(username).await? {
            Ok(())
        } else {
            Err(ApiServiceError::UserNotFound)
        }
    }
}
