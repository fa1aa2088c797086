//! Bearer-token authentication: JWT issue/validate, the request middleware
//! that resolves the caller, and the `Identity` extractor handlers use.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use critica_domain::role::UserRole;

use crate::domain::types::ACCESS_TOKEN_TTL_SECS;
use crate::error::ApiServiceError;
use crate::state::AppState;

/// JWT claims for access tokens. `role` carries the effective role —
/// superusers are issued admin claims.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub role: u8,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

pub fn issue_access_token(
    user_id: Uuid,
    role: UserRole,
    secret: &str,
) -> Result<(String, u64), ApiServiceError> {
    let exp = now_secs() + ACCESS_TOKEN_TTL_SECS;
    let claims = TokenClaims {
        sub: user_id.to_string(),
        role: role.as_u8(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiServiceError::Internal(e.into()))?;
    Ok((token, exp))
}

/// Validate a token (signature + expiry) and return its claims.
pub fn validate_access_token(token: &str, secret: &str) -> Result<TokenClaims, ApiServiceError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| ApiServiceError::InvalidToken)?;

    Ok(data.claims)
}

/// The authenticated caller, stored in request extensions by [`auth_middleware`].
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: UserRole,
}

/// Validate the bearer token (when one is sent) and stash the caller's
/// identity in the request extensions. Anonymous requests pass through —
/// protected handlers reject them via the [`Identity`] extractor.
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiServiceError> {
    if let Some(TypedHeader(authorization)) = bearer {
        let claims = validate_access_token(authorization.token(), &state.jwt_secret)?;
        let user_id = claims
            .sub
            .parse::<Uuid>()
            .map_err(|_| ApiServiceError::InvalidToken)?;
        let role = UserRole::from_u8(claims.role).ok_or(ApiServiceError::InvalidToken)?;
        req.extensions_mut().insert(Identity { user_id, role });
    }
    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiServiceError;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = parts.extensions.get::<Identity>().copied();
        async move { identity.ok_or(ApiServiceError::Unauthorized) }
    }
}
