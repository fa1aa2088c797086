use critica_api::error::ApiServiceError;
use critica_api::usecase::category::{
    CreateCategoryInput, CreateCategoryUseCase, DeleteCategoryUseCase,
};
use critica_api::usecase::genre::{CreateGenreInput, CreateGenreUseCase};

use crate::helpers::{MockCategoryRepo, MockGenreRepo};

#[tokio::test]
async fn should_create_category_with_valid_slug() {
    let uc = CreateCategoryUseCase {
        categories: MockCategoryRepo::empty(),
    };
    let category = uc
        .execute(CreateCategoryInput {
            name: "Movies".to_owned(),
            slug: "movies".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(category.slug, "movies");
}

#[tokio::test]
async fn should_reject_malformed_slug() {
    let uc = CreateCategoryUseCase {
        categories: MockCategoryRepo::empty(),
    };
    let result = uc
        .execute(CreateCategoryInput {
            name: "Movies".to_owned(),
            slug: "has space".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiServiceError::InvalidSlug)));
}

#[tokio::test]
async fn should_accept_category_name_at_column_width_and_reject_longer() {
    let uc = CreateCategoryUseCase {
        categories: MockCategoryRepo::empty(),
    };
    let ok = uc
        .execute(CreateCategoryInput {
            name: "n".repeat(200),
            slug: "long".to_owned(),
        })
        .await;
    assert!(ok.is_ok());

    let result = uc
        .execute(CreateCategoryInput {
            name: "n".repeat(201),
            slug: "longer".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiServiceError::MissingData)));
}

#[tokio::test]
async fn should_accept_genre_name_at_column_width_and_reject_longer() {
    let uc = CreateGenreUseCase {
        genres: MockGenreRepo::empty(),
    };
    let ok = uc
        .execute(CreateGenreInput {
            name: "n".repeat(200),
            slug: "long".to_owned(),
        })
        .await;
    assert!(ok.is_ok());

    let result = uc
        .execute(CreateGenreInput {
            name: "n".repeat(201),
            slug: "longer".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiServiceError::MissingData)));
}

#[tokio::test]
async fn should_return_not_found_when_deleting_unknown_category() {
    let uc = DeleteCategoryUseCase {
        categories: MockCategoryRepo::empty(),
    };
    let result = uc.execute("ghost").await;
    assert!(matches!(result, Err(ApiServiceError::CategoryNotFound)));
}
