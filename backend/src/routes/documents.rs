//! # 문서(Document) 라우트 핸들러
//!
//! 문서 생성/수정/삭제와 현재 버전 조회를 처리하는 HTTP 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//! - `POST   /api/v1/documents`                  → 새 문서 생성 (버전 1)
//! - `GET    /api/v1/documents?author_id=..`     → 볼 수 있는 문서 목록 (페이지)
//! - `DELETE /api/v1/documents?author_id=..&title=..` → 문서 소프트 삭제
//! - `GET    /api/v1/documents/search?..`        → 그룹+제목 검색
//! - `GET    /api/v1/documents/{docs_id}`        → 현재 버전 조회
//! - `PUT    /api/v1/documents/{docs_id}`        → 문서 수정 (새 버전 생성)
//!
//! ## 로깅
//! 모든 핸들러는 작업 이름과 요청 내용을 debug 로그로 남기고,
//! 실패하면 같은 정보를 error 로그로 남긴 뒤 에러를 그대로 반환합니다.
//! 재시도는 하지 않습니다.

use crate::{
    db,            // 데이터베이스 접근 계층
    error::AppError,
    models::*,     // 데이터 모델 구조체들
    services::Pagination,
};
use axum::{
    extract::{Path, Query, State}, // Axum Extractor: 요청에서 데이터 추출
    Json,                           // JSON 요청/응답 래퍼
};
use serde_json::{json, Value};
use sqlx::SqlitePool; // SQLite 연결 풀 타입

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 연결 풀은 `main`에서 한 번 만들어 여기에 주입합니다 (전역 변수 없음).
/// SqlitePool은 내부적으로 Arc를 사용하므로 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀
    pub pool: SqlitePool,
}

/// `POST /documents` — 새 문서를 생성합니다.
///
/// 요청: `{ "title": "...", "author_id": "..." }`
/// 응답: 생성된 버전 1 (`DocumentVersion`)
pub async fn create_document(
    State(state): State<AppState>,
    Json(req): Json<CreateDocumentRequest>,
) -> Result<Json<DocumentVersion>, AppError> {
    tracing::debug!(?req, "CreateDocument");
    let document = db::create_document(&state.pool, &req)
        .await
        .inspect_err(|e| tracing::error!(error = %e, ?req, "CreateDocument"))?;
    tracing::debug!(docs_id = %document.docs_id, version = document.version, "CreateDocument");
    Ok(Json(document))
}

/// `GET /documents/{docs_id}` — 현재 버전을 조회합니다.
///
/// 작성자나 협업자가 아니면 문서가 없는 것과 같은 404를 반환합니다.
pub async fn get_document(
    State(state): State<AppState>,
    Path(docs_id): Path<String>,
    Query(query): Query<GetDocumentQuery>,
) -> Result<Json<DocumentVersion>, AppError> {
    tracing::debug!(%docs_id, ?query, "GetDocument");
    let document = db::get_document(&state.pool, &docs_id, &query.author_id)
        .await
        .inspect_err(|e| tracing::error!(error = %e, %docs_id, ?query, "GetDocument"))?;
    Ok(Json(document))
}

/// `GET /documents` — 사용자가 볼 수 있는 현재 버전 목록을 조회합니다.
///
/// 응답: `{ "documents": [...], "page": 1, "limit": 10 }`
pub async fn list_documents(
    State(state): State<AppState>,
    Query(query): Query<ListDocumentsQuery>,
) -> Result<Json<Value>, AppError> {
    tracing::debug!(?query, "GetAllDocuments");
    let pagination = Pagination::new(query.page, query.limit);
    let documents = db::list_documents(
        &state.pool,
        &query.author_id,
        query.docs_id.as_deref(),
        pagination,
    )
    .await
    .inspect_err(|e| tracing::error!(error = %e, ?query, "GetAllDocuments"))?;

    Ok(Json(json!({
        "documents": documents,
        "page": pagination.page(),
        "limit": pagination.limit(),
    })))
}

/// `GET /documents/search` — 그룹과 제목이 일치하는 현재 버전을 검색합니다.
pub async fn search_documents(
    State(state): State<AppState>,
    Query(query): Query<SearchDocumentQuery>,
) -> Result<Json<Value>, AppError> {
    tracing::debug!(?query, "SearchDocument");
    let documents =
        db::search_documents(&state.pool, &query.docs_id, &query.title, &query.author_id)
            .await
            .inspect_err(|e| tracing::error!(error = %e, ?query, "SearchDocument"))?;
    Ok(Json(json!({ "documents": documents })))
}

/// `PUT /documents/{docs_id}` — 문서를 수정합니다.
///
/// 기존 버전을 덮어쓰지 않고 `버전 + 1`의 새 버전을 만듭니다.
/// 응답: `{ "message": "Document updated successfully with version 2", "version": 2 }`
pub async fn update_document(
    State(state): State<AppState>,
    Path(docs_id): Path<String>,
    Json(req): Json<UpdateDocumentRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::debug!(%docs_id, ?req, "UpdateDocument");
    let version = db::update_document(&state.pool, &docs_id, &req)
        .await
        .inspect_err(|e| tracing::error!(error = %e, %docs_id, ?req, "UpdateDocument"))?;
    Ok(Json(MessageResponse::with_version(
        format!("Document updated successfully with version {}", version),
        version,
    )))
}

/// `DELETE /documents?author_id=..&title=..` — 문서를 소프트 삭제합니다.
///
/// 이력은 남고 현재 버전만 사라집니다.
pub async fn delete_document(
    State(state): State<AppState>,
    Query(query): Query<DeleteDocumentQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::debug!(?query, "DeleteDocument");
    db::delete_document(&state.pool, &query.author_id, &query.title)
        .await
        .inspect_err(|e| tracing::error!(error = %e, ?query, "DeleteDocument"))?;
    Ok(Json(MessageResponse::new("Document deleted successfully")))
}
