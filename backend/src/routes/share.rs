//! # 문서 공유 라우트 핸들러
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | POST | /api/v1/documents/{docs_id}/share | 사용자에게 권한 부여 |
//!
//! ## 사용 예시
//! ```text
//! POST /api/v1/documents/0190.../share
//! { "title": "회의록", "user_id": "bob", "permissions": "read" }
//! ```

use crate::{db, error::AppError, models::*, routes::documents::AppState};
use axum::{
    extract::{Path, State},
    Json,
};

/// 문서를 공유합니다.
///
/// 같은 요청을 다시 보내도 성공합니다 ("이미 공유됨" 에러가 없음).
pub async fn share_document(
    State(state): State<AppState>,
    Path(docs_id): Path<String>,
    Json(req): Json<ShareDocumentRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::debug!(%docs_id, ?req, "ShareDocument");
    db::share_document(&state.pool, &docs_id, &req)
        .await
        .inspect_err(|e| tracing::error!(error = %e, %docs_id, ?req, "ShareDocument"))?;
    Ok(Json(MessageResponse::new("Document shared successfully!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::documents::create_document;

    #[tokio::test]
    async fn sharing_twice_succeeds() {
        let state = AppState {
            pool: db::test_pool().await,
        };
        let Json(doc) = create_document(
            State(state.clone()),
            Json(CreateDocumentRequest {
                title: "T".to_string(),
                author_id: "A".to_string(),
            }),
        )
        .await
        .unwrap();

        for _ in 0..2 {
            let Json(res) = share_document(
                State(state.clone()),
                Path(doc.docs_id.clone()),
                Json(ShareDocumentRequest {
                    title: "T".to_string(),
                    user_id: "u1".to_string(),
                    permissions: "read".to_string(),
                }),
            )
            .await
            .unwrap();
            assert_eq!(res.message, "Document shared successfully!");
        }
    }
}
