pub mod error;
pub mod rest_api;
pub mod service;
pub mod state;

use state::AppState;

/// All REST endpoints, to be nested under `/api`
pub fn api_router() -> axum::Router<AppState> {
    axum::Router::new()
        .nest("/snippets", rest_api::snippet::router())
        .nest("/languages", rest_api::language::router())
}
