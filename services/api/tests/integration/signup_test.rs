use critica_api::error::ApiServiceError;
use critica_api::usecase::signup::{SignupInput, SignupUseCase};
use critica_domain::role::UserRole;

use crate::helpers::{MockCodeRepo, MockUserRepo, test_user};

#[tokio::test]
async fn should_create_user_and_code_on_signup() {
    let users = MockUserRepo::empty();
    let users_handle = users.users_handle();
    let codes = MockCodeRepo::empty();
    let codes_handle = codes.codes_handle();

    let uc = SignupUseCase { users, codes };
    uc.execute(SignupInput {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
    })
    .await
    .unwrap();

    let users = users_handle.lock().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "alice");
    assert_eq!(users[0].role, UserRole::User);
    assert!(!users[0].is_superuser);

    let codes = codes_handle.lock().unwrap();
    assert_eq!(codes.len(), 1);
    assert_eq!(codes[0].user_id, users[0].id);
    assert_eq!(codes[0].code.len(), 12);
    assert!(codes[0].used_at.is_none());
    assert!(codes[0].expires_at > chrono::Utc::now());
}

#[tokio::test]
async fn should_reissue_code_when_same_pair_signs_up_again() {
    let existing = test_user("alice", UserRole::User);
    let users = MockUserRepo::new(vec![existing.clone()]);
    let users_handle = users.users_handle();
    let codes = MockCodeRepo::empty();
    let codes_handle = codes.codes_handle();

    let uc = SignupUseCase { users, codes };
    uc.execute(SignupInput {
        username: existing.username.clone(),
        email: existing.email.clone(),
    })
    .await
    .unwrap();

    // No second account, a fresh code for the existing one.
    assert_eq!(users_handle.lock().unwrap().len(), 1);
    let codes = codes_handle.lock().unwrap();
    assert_eq!(codes.len(), 1);
    assert_eq!(codes[0].user_id, existing.id);
}

#[tokio::test]
async fn should_reject_taken_username_with_different_email() {
    let existing = test_user("alice", UserRole::User);
    let uc = SignupUseCase {
        users: MockUserRepo::new(vec![existing]),
        codes: MockCodeRepo::empty(),
    };

    let result = uc
        .execute(SignupInput {
            username: "alice".to_owned(),
            email: "other@example.com".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiServiceError::UserAlreadyExists)));
}

#[tokio::test]
async fn should_reject_taken_email_with_different_username() {
    let existing = test_user("alice", UserRole::User);
    let email = existing.email.clone();
    let uc = SignupUseCase {
        users: MockUserRepo::new(vec![existing]),
        codes: MockCodeRepo::empty(),
    };

    let result = uc
        .execute(SignupInput {
            username: "bob".to_owned(),
            email,
        })
        .await;
    assert!(matches!(result, Err(ApiServiceError::UserAlreadyExists)));
}

#[tokio::test]
async fn should_reject_reserved_username_me() {
    let uc = SignupUseCase {
        users: MockUserRepo::empty(),
        codes: MockCodeRepo::empty(),
    };

    let result = uc
        .execute(SignupInput {
            username: "me".to_owned(),
            email: "me@example.com".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiServiceError::ReservedUsername)));
}

#[tokio::test]
async fn should_reject_invalid_username_charset() {
    let uc = SignupUseCase {
        users: MockUserRepo::empty(),
        codes: MockCodeRepo::empty(),
    };

    let result = uc
        .execute(SignupInput {
            username: "has space".to_owned(),
            email: "x@example.com".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiServiceError::InvalidUsername)));
}

#[tokio::test]
async fn should_reject_malformed_email() {
    let uc = SignupUseCase {
        users: MockUserRepo::empty(),
        codes: MockCodeRepo::empty(),
    };

    let result = uc
        .execute(SignupInput {
            username: "alice".to_owned(),
            email: "not-an-email".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiServiceError::InvalidEmail)));
}

#[tokio::test]
async fn should_cap_active_codes_at_five() {
    let existing = test_user("alice", UserRole::User);
    let uc = SignupUseCase {
        users: MockUserRepo::new(vec![existing.clone()]),
        codes: MockCodeRepo::new(vec![], 5),
    };

    let result = uc
        .execute(SignupInput {
            username: existing.username,
            email: existing.email,
        })
        .await;
    assert!(matches!(
        result,
        Err(ApiServiceError::TooManyConfirmationCodes)
    ));
}
