//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! 각 핸들러는 저장소 연산 하나에 대응합니다.
//!
//! 각 하위 모듈:
//! - `documents`: 문서 생성/수정/삭제/조회/검색 (CreateDocument, UpdateDocument, ...)
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `share`: 문서 공유 (ShareDocument)
//! - `versions`: 버전 이력과 복원 (GetAllVersions, RestoreVersion)

pub mod documents;
pub mod health;
pub mod share;
pub mod versions;

use axum::{
    routing::{get, post},
    Router,
};

pub use documents::*;
pub use health::*;
pub use share::*;
pub use versions::*;

/// `/api/v1` 아래에 붙일 API 라우터를 만듭니다.
///
/// 경로 파라미터는 axum 0.8 문법(`{docs_id}`)을 사용합니다.
/// `/documents/search`는 `/documents/{docs_id}`보다 구체적인 경로이므로 우선 매칭됩니다.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/documents",
            get(list_documents).post(create_document).delete(delete_document),
        )
        .route("/documents/search", get(search_documents))
        .route(
            "/documents/{docs_id}",
            get(get_document).put(update_document),
        )
        .route("/documents/{docs_id}/share", post(share_document))
        .route("/documents/{docs_id}/versions", get(list_document_versions))
        .route("/documents/{docs_id}/restore", post(restore_version))
        .route("/health", get(health_check))
        .with_state(state)
}
