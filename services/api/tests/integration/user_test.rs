use critica_api::error::ApiServiceError;
use critica_api::usecase::user::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, UpdateUserInput, UpdateUserUseCase,
};
use critica_domain::role::UserRole;

use crate::helpers::{MockUserRepo, test_user};

#[tokio::test]
async fn should_ignore_role_change_for_non_admin_caller() {
    let me = test_user("alice", UserRole::User);
    let repo = MockUserRepo::new(vec![me.clone()]);

    let uc = UpdateUserUseCase { users: repo };
    let updated = uc
        .execute(
            &me,
            UpdateUserInput {
                bio: Some("hi".to_owned()),
                role: Some(UserRole::Admin),
                ..Default::default()
            },
            false,
        )
        .await
        .unwrap();

    // The request succeeds, the submitted role is dropped.
    assert_eq!(updated.role, UserRole::User);
    assert_eq!(updated.bio.as_deref(), Some("hi"));
}

#[tokio::test]
async fn should_apply_role_change_for_admin_caller() {
    let target = test_user("bob", UserRole::User);
    let repo = MockUserRepo::new(vec![target.clone()]);

    let uc = UpdateUserUseCase { users: repo };
    let updated = uc
        .execute(
            &target,
            UpdateUserInput {
                role: Some(UserRole::Moderator),
                ..Default::default()
            },
            true,
        )
        .await
        .unwrap();

    assert_eq!(updated.role, UserRole::Moderator);
}

#[tokio::test]
async fn should_reject_update_to_reserved_username() {
    let me = test_user("alice", UserRole::User);
    let repo = MockUserRepo::new(vec![me.clone()]);

    let uc = UpdateUserUseCase { users: repo };
    let result = uc
        .execute(
            &me,
            UpdateUserInput {
                username: Some("me".to_owned()),
                ..Default::default()
            },
            false,
        )
        .await;
    assert!(matches!(result, Err(ApiServiceError::ReservedUsername)));
}

#[tokio::test]
async fn should_create_user_with_requested_role() {
    let repo = MockUserRepo::empty();
    let handle = repo.users_handle();

    let uc = CreateUserUseCase { users: repo };
    let user = uc
        .execute(CreateUserInput {
            username: "mod".to_owned(),
            email: "mod@example.com".to_owned(),
            first_name: None,
            last_name: None,
            bio: None,
            role: UserRole::Moderator,
        })
        .await
        .unwrap();

    assert_eq!(user.role, UserRole::Moderator);
    assert_eq!(handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_creating_reserved_username() {
    let uc = CreateUserUseCase {
        users: MockUserRepo::empty(),
    };
    let result = uc
        .execute(CreateUserInput {
            username: "me".to_owned(),
            email: "me@example.com".to_owned(),
            first_name: None,
            last_name: None,
            bio: None,
            role: UserRole::User,
        })
        .await;
    assert!(matches!(result, Err(ApiServiceError::ReservedUsername)));
}

#[tokio::test]
async fn should_reject_duplicate_user_on_create() {
    let existing = test_user("alice", UserRole::User);
    let uc = CreateUserUseCase {
        users: MockUserRepo::new(vec![existing]),
    };
    let result = uc
        .execute(CreateUserInput {
            username: "alice".to_owned(),
            email: "new@example.com".to_owned(),
            first_name: None,
            last_name: None,
            bio: None,
            role: UserRole::User,
        })
        .await;
    assert!(matches!(result, Err(ApiServiceError::UserAlreadyExists)));
}

#[tokio::test]
async fn should_return_not_found_when_deleting_unknown_user() {
    let uc = DeleteUserUseCase {
        users: MockUserRepo::empty(),
    };
    let result = uc.execute("ghost").await;
    assert!(matches!(result, Err(ApiServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_delete_existing_user() {
    let existing = test_user("alice", UserRole::User);
    let repo = MockUserRepo::new(vec![existing]);
    let handle = repo.users_handle();

    let uc = DeleteUserUseCase { users: repo };
    uc.execute("alice").await.unwrap();
    assert!(handle.lock().unwrap().is_empty());
}
