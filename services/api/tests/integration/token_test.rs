use chrono::{Duration, Utc};

use critica_api::auth::validate_access_token;
use critica_api::error::ApiServiceError;
use critica_api::usecase::token::{CreateTokenInput, CreateTokenUseCase};
use critica_domain::role::UserRole;

use crate::helpers::{
    MockCodeRepo, MockUserRepo, TEST_JWT_SECRET, test_confirmation_code, test_user,
};

#[tokio::test]
async fn should_exchange_valid_code_for_jwt() {
    let user = test_user("alice", UserRole::User);
    let code = test_confirmation_code(user.id);

    let codes = MockCodeRepo::new(vec![code.clone()], 1);
    let codes_handle = codes.codes_handle();

    let uc = CreateTokenUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        codes,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let output = uc
        .execute(CreateTokenInput {
            username: user.username.clone(),
            confirmation_code: code.code.clone(),
        })
        .await
        .unwrap();

    let claims = validate_access_token(&output.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.role, UserRole::User.as_u8());
    assert_eq!(claims.exp, output.access_token_exp);

    // The code is single-use.
    let codes = codes_handle.lock().unwrap();
    assert!(codes[0].used_at.is_some());
}

#[tokio::test]
async fn should_fold_superuser_into_admin_claim() {
    let mut user = test_user("root", UserRole::User);
    user.is_superuser = true;
    let code = test_confirmation_code(user.id);

    let uc = CreateTokenUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        codes: MockCodeRepo::new(vec![code.clone()], 1),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let output = uc
        .execute(CreateTokenInput {
            username: user.username,
            confirmation_code: code.code,
        })
        .await
        .unwrap();

    let claims = validate_access_token(&output.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.role, UserRole::Admin.as_u8());
}

#[tokio::test]
async fn should_return_not_found_for_unknown_username() {
    let uc = CreateTokenUseCase {
        users: MockUserRepo::empty(),
        codes: MockCodeRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = uc
        .execute(CreateTokenInput {
            username: "nobody".to_owned(),
            confirmation_code: "ABCDEF123456".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_reject_wrong_code() {
    let user = test_user("alice", UserRole::User);
    let code = test_confirmation_code(user.id);

    let uc = CreateTokenUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        codes: MockCodeRepo::new(vec![code], 1),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = uc
        .execute(CreateTokenInput {
            username: user.username,
            confirmation_code: "WRONGCODE999".to_owned(),
        })
        .await;
    assert!(matches!(
        result,
        Err(ApiServiceError::InvalidConfirmationCode)
    ));
}

#[tokio::test]
async fn should_reject_expired_code() {
    let user = test_user("alice", UserRole::User);
    let mut code = test_confirmation_code(user.id);
    code.expires_at = Utc::now() - Duration::seconds(1);

    let uc = CreateTokenUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        codes: MockCodeRepo::new(vec![code.clone()], 0),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = uc
        .execute(CreateTokenInput {
            username: user.username,
            confirmation_code: code.code,
        })
        .await;
    assert!(matches!(
        result,
        Err(ApiServiceError::InvalidConfirmationCode)
    ));
}

#[tokio::test]
async fn should_reject_already_used_code() {
    let user = test_user("alice", UserRole::User);
    let mut code = test_confirmation_code(user.id);
    code.used_at = Some(Utc::now());

    let uc = CreateTokenUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        codes: MockCodeRepo::new(vec![code.clone()], 0),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = uc
        .execute(CreateTokenInput {
            username: user.username,
            confirmation_code: code.code,
        })
        .await;
    assert!(matches!(
        result,
        Err(ApiServiceError::InvalidConfirmationCode)
    ));
}
