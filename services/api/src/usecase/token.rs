use crate::auth::issue_access_token;
use crate::domain::repository::{ConfirmationCodeRepository, UserRepository};
use crate::error::ApiServiceError;

// ── CreateToken (confirmation-code exchange) ─────────────────────────────────

pub struct CreateTokenInput {
    pub username: String,
    pub confirmation_code: String,
}

#[derive(Debug)]
pub struct CreateTokenOutput {
    pub access_token: String,
    pub access_token_exp: u64,
}

pub struct CreateTokenUseCase<U: UserRepository, C: ConfirmationCodeRepository> {
    pub users: U,
    pub codes: C,
    pub jwt_secret: String,
}

impl<U: UserRepository, C: ConfirmationCodeRepository> CreateTokenUseCase<U, C> {
    pub async fn execute(
        &self,
        input: CreateTokenInput,
    ) -> Result<CreateTokenOutput, ApiServiceError> {
        // Unknown username is a lookup failure (404), a wrong code a
        // validation failure (400).
        let user = self
            .users
            .find_by_username(&input.username)
            .await?
            .ok_or(ApiServiceError::UserNotFound)?;

        let code = self
            .codes
            .find_valid(user.id, &input.confirmation_code)
            .await?
            .ok_or(ApiServiceError::InvalidConfirmationCode)?;

        self.codes.mark_used(code.id).await?;

        let (access_token, access_token_exp) =
            issue_access_token(user.id, user.effective_role(), &self.jwt_secret)?;

        Ok(CreateTokenOutput {
            access_token,
            access_token_exp,
        })
    }
}
