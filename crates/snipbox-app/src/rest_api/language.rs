use axum::{response::IntoResponse, routing::get, Json};
use http::StatusCode;
use snipbox_types::language::LANGUAGES;

use crate::state::AppState;

#[cfg_attr(feature = "openapi",  utoipa::path(get, path = "", tag = "Language", operation_id = "listLanguages",
    responses((status = StatusCode::OK, description = "Suggested snippet languages", body = Vec<String>))))]
pub async fn list() -> impl IntoResponse {
    (StatusCode::OK, Json(LANGUAGES))
}

#[cfg(feature = "openapi")]
pub fn api_docs() -> utoipa::openapi::OpenApi {
    #[derive(utoipa::OpenApi)]
    #[openapi(paths(list))]
    struct ModuleDocs;

    use utoipa::OpenApi as _;
    ModuleDocs::openapi()
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new().route("/", get(list))
}
