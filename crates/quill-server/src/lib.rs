//! Quill server - axum HTTP surface over `quill-core`
//!
//! Handlers stay thin: they deserialize, call the auth service, and map the
//! result to a response. All business logic lives in the core crate.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/auth/register", post(routes::auth::register))
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/logout", post(routes::auth::logout))
        .route("/users", get(routes::users::list))
        .route(
            "/users/:id",
            get(routes::users::get_by_id)
                .put(routes::users::update)
                .delete(routes::users::delete),
        )
        .with_state(state)
}
