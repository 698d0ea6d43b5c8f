//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `AppError::from_write`: 쓰기 쿼리의 유니크 제약 위반을 의미 있는 에러로 변환
//! - `IntoResponse` 구현: 에러를 HTTP 응답으로 자동 변환

use axum::{
    http::StatusCode,                     // HTTP 상태 코드 (400, 404, 409, 500 등)
    response::{IntoResponse, Response},   // Axum의 응답 변환 트레이트
    Json,                                 // JSON 응답 래퍼
};
use serde_json::json; // json! 매크로: JSON 객체를 간편하게 생성
use thiserror::Error; // thiserror: 커스텀 에러 타입을 쉽게 만들어주는 매크로 크레이트

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 각 에러 variant는 적절한 HTTP 상태 코드와 메시지로 변환됩니다.
/// "찾을 수 없음"(NotFound)과 "작업 실패"(Internal/Database)는
/// 클라이언트가 구분할 수 있도록 서로 다른 코드로 응답합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 필수 필드 누락 (HTTP 400)
    /// 예: 빈 author_id, 빈 title, 빈 docs_id, 복원 시 version 0
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// 조건에 맞는(또는 볼 수 있는) 활성 문서가 없음 (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// (author_id, title) 유니크 제약 위반 (HTTP 409)
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// 동시 수정 충돌. 클라이언트가 다시 시도할 수 있습니다. (HTTP 409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),

    /// 데이터베이스 오류 (HTTP 500)
    /// #[from]: sqlx 함수에서 `?`를 쓰면 자동으로 AppError::Database로 변환됩니다.
    /// 스키마와 맞지 않는 행(디코딩 실패)도 여기로 들어옵니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// 새 버전을 쓰는 쿼리의 에러를 변환합니다.
    ///
    /// SQLite는 유니크 제약 위반 시 `UNIQUE constraint failed: 테이블.컬럼, ...`
    /// 형태의 메시지를 돌려줍니다.
    /// - (author_id, title) 인덱스 위반 → `AlreadyExists` (같은 제목의 활성 문서가 이미 있음)
    /// - 그 외 head/버전 번호 인덱스 위반 → `Conflict` (동시 수정과 경합)
    pub fn from_write(err: sqlx::Error, title: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                if db_err.message().contains("title") {
                    return AppError::AlreadyExists(format!("title '{}' is already taken", title));
                }
                return AppError::Conflict(
                    "document was modified concurrently, retry the request".to_string(),
                );
            }
        }
        AppError::Database(err)
    }
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 내부 에러(Database, Internal)는 실제 에러 내용을 로그에만 기록하고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다.
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidArgument(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_argument", msg.clone())
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::AlreadyExists(ref msg) => {
                (StatusCode::CONFLICT, "already_exists", msg.clone())
            }
            AppError::Conflict(ref msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                // "작업 실패" 메시지의 첫 문장만 노출합니다 (예: "Document deletion failed")
                let public = msg.split(':').next().unwrap_or("An internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    public.to_string(),
                )
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "A database error occurred".to_string(),
                )
            }
        };

        // 결과: { "error": { "code": "not_found", "message": "..." } }
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
