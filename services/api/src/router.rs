use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use critica_core::health::{healthz, readyz};
use critica_core::middleware::request_id_layer;

use crate::auth::auth_middleware;
use crate::handlers::{
    auth::{create_token, signup},
    category::{create_category, delete_category, list_categories},
    comment::{create_comment, delete_comment, get_comment, list_comments, update_comment},
    genre::{create_genre, delete_genre, list_genres},
    review::{create_review, delete_review, get_review, list_reviews, update_review},
    title::{create_title, delete_title, get_title, list_titles, update_title},
    user::{create_user, delete_user, get_me, get_user, list_users, update_me, update_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let v1 = Router::new()
        // Auth
        .route("/auth/signup", post(signup))
        .route("/auth/token", post(create_token))
        // Users
        .route("/users", get(list_users))
        .route("/users", post(create_user))
        // `/users/me` before `/users/{username}`: "me" is a reserved username.
        .route("/users/me", get(get_me))
        .route("/users/me", patch(update_me))
        .route("/users/{username}", get(get_user))
        .route("/users/{username}", patch(update_user))
        .route("/users/{username}", delete(delete_user))
        // Categories
        .route("/categories", get(list_categories))
        .route("/categories", post(create_category))
        .route("/categories/{slug}", delete(delete_category))
        // Genres
        .route("/genres", get(list_genres))
        .route("/genres", post(create_genre))
        .route("/genres/{slug}", delete(delete_genre))
        // Titles
        .route("/titles", get(list_titles))
        .route("/titles", post(create_title))
        .route("/titles/{title_id}", get(get_title))
        .route("/titles/{title_id}", patch(update_title))
        .route("/titles/{title_id}", delete(delete_title))
        // Reviews
        .route("/titles/{title_id}/reviews", get(list_reviews))
        .route("/titles/{title_id}/reviews", post(create_review))
        .route("/titles/{title_id}/reviews/{review_id}", get(get_review))
        .route("/titles/{title_id}/reviews/{review_id}", patch(update_review))
        .route(
            "/titles/{title_id}/reviews/{review_id}",
            delete(delete_review),
        )
        // Comments
        .route(
            "/titles/{title_id}/reviews/{review_id}/comments",
            get(list_comments),
        )
        .route(
            "/titles/{title_id}/reviews/{review_id}/comments",
            post(create_comment),
        )
        .route(
            "/titles/{title_id}/reviews/{review_id}/comments/{comment_id}",
            get(get_comment),
        )
        .route(
            "/titles/{title_id}/reviews/{review_id}/comments/{comment_id}",
            patch(update_comment),
        )
        .route(
            "/titles/{title_id}/reviews/{review_id}/comments/{comment_id}",
            delete(delete_comment),
        );

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .nest("/v1", v1)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
