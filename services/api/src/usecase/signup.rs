use chrono::{Duration, Utc};
use rand::RngExt;
use serde_json::json;
use uuid::Uuid;

use critica_domain::role::UserRole;

use crate::domain::repository::{ConfirmationCodeRepository, UserRepository};
use crate::domain::types::{
    CONFIRMATION_CODE_LEN, CONFIRMATION_CODE_TTL_SECS, ConfirmationCode, MAX_ACTIVE_CODES,
    OutboxEvent, RESERVED_USERNAME, User, validate_email, validate_username,
};
use crate::error::ApiServiceError;

/// Charset for generating confirmation codes (uppercase alphanumeric).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..CONFIRMATION_CODE_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

pub struct SignupInput {
    pub username: String,
    pub email: String,
}

pub struct SignupUseCase<U, C>
where
    U: UserRepository,
    C: ConfirmationCodeRepository,
{
    pub users: U,
    pub codes: C,
}

impl<U, C> SignupUseCase<U, C>
where
    U: UserRepository,
    C: ConfirmationCodeRepository,
{
    pub async fn execute(&self, input: SignupInput) -> Result<(), ApiServiceError> {
        if input.username == RESERVED_USERNAME {
            return Err(ApiServiceError::ReservedUsername);
        }
        if !validate_username(&input.username) {
            return Err(ApiServiceError::InvalidUsername);
        }
        if !validate_email(&input.email) {
            return Err(ApiServiceError::InvalidEmail);
        }

        // An exact (username, email) re-match re-issues a code instead of
        // failing; any partial collision is a duplicate-account error.
        let user = match self.users.find_by_username(&input.username).await? {
            Some(existing) if existing.email == input.email => existing,
            Some(_) => return Err(ApiServiceError::UserAlreadyExists),
            None => {
                if self.users.find_by_email(&input.email).await?.is_some() {
                    return Err(ApiServiceError::UserAlreadyExists);
                }
                let now = Utc::now();
                let user = User {
                    id: Uuid::now_v7(),
                    username: input.username.clone(),
                    email: input.email.clone(),
                    first_name: None,
                    last_name: None,
                    bio: None,
                    role: UserRole::User,
                    is_superuser: false,
                    created_at: now,
                    updated_at: now,
                };
                self.users.create(&user).await?;
                user
            }
        };

        let active = self.codes.count_active(user.id).await?;
        if active >= MAX_ACTIVE_CODES {
            return Err(ApiServiceError::TooManyConfirmationCodes);
        }

        let code_str = generate_code();
        let now = Utc::now();
        let code = ConfirmationCode {
            id: Uuid::new_v4(),
            user_id: user.id,
            code: code_str.clone(),
            expires_at: now + Duration::seconds(CONFIRMATION_CODE_TTL_SECS),
            used_at: None,
            created_at: now,
        };

        // Code + outbox event land in the same transaction; the email relay
        // drains the outbox out-of-band.
        let event = OutboxEvent {
            id: Uuid::new_v4(),
            kind: "confirmation_code_created".to_owned(),
            payload: json!({
                "email": user.email,
                "username": user.username,
                "code": code_str,
            }),
            idempotency_key: format!("confirmation_code_created:{}", code.id),
        };

        self.codes.create_with_outbox(&code, &event).await?;
        Ok(())
    }
}
