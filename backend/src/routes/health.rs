//! # 헬스체크(Health Check) 핸들러
//!
//! 서버와 데이터베이스 연결이 정상인지 확인하는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! - `GET /api/v1/health` → `{ "status": "ok", "database": "ok" }`
//!
//! 데이터베이스에 `SELECT 1`을 보내 풀에서 연결을 빌릴 수 있는지도 확인합니다.
//! 실패하면 `status`가 `"degraded"`가 되고 HTTP 503을 반환합니다.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use super::documents::AppState;

/// `GET /health` — 서버 상태를 확인합니다.
///
/// 반환 타입 `(StatusCode, Json<Value>)`: 튜플도 Axum이 HTTP 응답으로 변환해 줍니다.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "database": "ok" })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "database": "unavailable" })),
            )
        }
    }
}
