use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json,
};
use axum_extra::extract::WithRejection;
use http::{header, StatusCode};
use serde::Serialize;
use snipbox_types::SnippetPayload;

#[cfg(feature = "openapi")]
use snipbox_dal::snippet::Snippet;

use crate::{
    error::{ApiError, ApiResult},
    service::SnippetService,
    state::AppState,
};

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeleteResponse {
    pub success: bool,
}

#[cfg_attr(feature = "openapi",  utoipa::path(get, path = "", tag = "Snippet", operation_id = "listSnippets",
    responses((status = StatusCode::OK, description = "All snippets, newest first", body = Vec<Snippet>))))]
pub async fn list(service: SnippetService) -> ApiResult<impl IntoResponse> {
    let snippets = service.list_snippets().await?;
    Ok((StatusCode::OK, Json(snippets)))
}

#[cfg_attr(feature = "openapi",  utoipa::path(get, path = "/{id}", tag = "Snippet", operation_id = "getSnippet",
    params(("id" = String, Path, description = "Snippet id")),
    responses((status = StatusCode::OK, description = "Get one", body = Snippet),
        (status = StatusCode::NOT_FOUND, description = "Unknown id", body = crate::error::ErrorBody))))]
pub async fn get_one(
    Path(id): Path<String>,
    service: SnippetService,
) -> ApiResult<impl IntoResponse> {
    let snippet = service.get_snippet(&id).await?;
    Ok((StatusCode::OK, Json(snippet)))
}

#[cfg_attr(feature = "openapi",  utoipa::path(post, path = "", tag = "Snippet", operation_id = "createSnippet",
    request_body = SnippetPayload,
    responses((status = StatusCode::CREATED, description = "Created snippet", body = Snippet),
        (status = StatusCode::BAD_REQUEST, description = "Invalid payload", body = crate::error::ErrorBody))))]
pub async fn create(
    State(state): State<AppState>,
    service: SnippetService,
    WithRejection(Json(payload), _): WithRejection<Json<SnippetPayload>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let snippet = service.create_snippet(payload).await?;
    let location = state.build_url(&format!("api/snippets/{}", snippet.id))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location.to_string())],
        Json(snippet),
    ))
}

#[cfg_attr(feature = "openapi",  utoipa::path(put, path = "/{id}", tag = "Snippet", operation_id = "updateSnippet",
    params(("id" = String, Path, description = "Snippet id")),
    request_body = SnippetPayload,
    responses((status = StatusCode::OK, description = "Updated snippet", body = Snippet),
        (status = StatusCode::BAD_REQUEST, description = "Invalid payload", body = crate::error::ErrorBody),
        (status = StatusCode::NOT_FOUND, description = "Unknown id", body = crate::error::ErrorBody))))]
pub async fn update(
    Path(id): Path<String>,
    service: SnippetService,
    WithRejection(Json(payload), _): WithRejection<Json<SnippetPayload>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let snippet = service.update_snippet(&id, payload).await?;
    Ok((StatusCode::OK, Json(snippet)))
}

#[cfg_attr(feature = "openapi",  utoipa::path(delete, path = "/{id}", tag = "Snippet", operation_id = "deleteSnippet",
    params(("id" = String, Path, description = "Snippet id")),
    responses((status = StatusCode::OK, description = "Deleted, also when it did not exist", body = DeleteResponse))))]
pub async fn delete(
    Path(id): Path<String>,
    service: SnippetService,
) -> ApiResult<impl IntoResponse> {
    service.delete_snippet(&id).await?;
    Ok((StatusCode::OK, Json(DeleteResponse { success: true })))
}

#[cfg(feature = "openapi")]
pub fn api_docs() -> utoipa::openapi::OpenApi {
    #[derive(utoipa::OpenApi)]
    #[openapi(paths(list, get_one, create, update, delete))]
    struct ModuleDocs;

    use utoipa::OpenApi as _;
    ModuleDocs::openapi()
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_one).put(update).delete(delete))
}
