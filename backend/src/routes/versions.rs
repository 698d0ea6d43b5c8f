use crate::{db, error::AppError, models::*, services::Pagination};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use super::documents::AppState;

/// `GET /documents/{docs_id}/versions` — 문서의 전체 버전 이력 (페이지 단위)
pub async fn list_document_versions(
    State(state): State<AppState>,
    Path(docs_id): Path<String>,
    Query(query): Query<ListVersionsQuery>,
) -> Result<Json<Value>, AppError> {
    tracing::debug!(%docs_id, ?query, "GetAllVersions");
    let pagination = Pagination::new(query.page, query.limit);
    let versions = db::list_versions(&state.pool, &docs_id, &query.author_id, pagination)
        .await
        .inspect_err(|e| tracing::error!(error = %e, %docs_id, ?query, "GetAllVersions"))?;

    Ok(Json(json!({
        "versions": versions,
        "page": pagination.page(),
        "limit": pagination.limit(),
    })))
}

/// `POST /documents/{docs_id}/restore` — 과거 버전을 새 버전으로 되살립니다.
pub async fn restore_version(
    State(state): State<AppState>,
    Path(docs_id): Path<String>,
    Json(req): Json<RestoreVersionRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::debug!(%docs_id, ?req, "RestoreVersion");
    let version = db::restore_version(&state.pool, &docs_id, &req)
        .await
        .inspect_err(|e| tracing::error!(error = %e, %docs_id, ?req, "RestoreVersion"))?;
    Ok(Json(MessageResponse::with_version(
        format!("Document restored successfully as version {}", version),
        version,
    )))
}
