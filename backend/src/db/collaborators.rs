//! # 협업 원장(Collaboration Ledger) 쿼리 모듈
//!
//! 문서 공유는 현재 버전(head)의 협업자 권한에 `{user_id: permission}` 하나를 병합하는 작업입니다.
//!
//! ## 테이블 구조
//! - `document_collaborators`: (version_id, user_id) 기본키, permission
//!
//! 권한은 키 단위로 저장되므로 공유는 한 문장짜리 upsert입니다.
//! 읽고-병합하고-다시 쓰는 과정이 없어서 동시에 들어온 공유끼리 서로의 변경을 덮어쓰지 않습니다.

use super::Timestamp;
use crate::error::AppError;
use crate::models::ShareDocumentRequest;
use sqlx::SqlitePool;

/// 문서를 다른 사용자와 공유합니다.
///
/// `docs_id`와 제목이 일치하는 head에 권한을 추가합니다.
/// - 처음 받는 사용자 → 새 키 추가
/// - 이미 권한이 있는 사용자 → 권한 값만 덮어쓰기
/// - 다른 협업자 → 변경 없음
///
/// 같은 요청을 여러 번 보내도 결과가 같습니다 (멱등).
///
/// # 에러
/// - 빈 필드: `InvalidArgument`
/// - 일치하는 head 없음: `NotFound`
/// - 저장소 오류: `Internal`
pub async fn share_document(
    pool: &SqlitePool,
    docs_id: &str,
    req: &ShareDocumentRequest,
) -> Result<(), AppError> {
    // 제목과 사용자 ID는 생성/수정과 같은 규칙으로 앞뒤 공백을 지웁니다.
    let title = req.title.trim();
    let user_id = req.user_id.trim();
    let required = [
        ("docs_id", docs_id),
        ("title", title),
        ("user_id", user_id),
        ("permissions", req.permissions.as_str()),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(AppError::InvalidArgument(format!("{} is required", field)));
    }

    // head의 id를 같은 문장 안에서 찾으므로, 동시에 수정이 일어나도
    // 권한은 항상 그 순간의 head에 기록됩니다.
    // (SELECT에 WHERE가 있어야 SQLite가 ON CONFLICT를 upsert 절로 해석합니다.)
    let result = sqlx::query(
        r#"
        INSERT INTO document_collaborators (version_id, user_id, permission, granted_at)
        SELECT v.id, ?, ?, ?
        FROM document_versions v
        WHERE v.docs_id = ? AND v.title = ? AND v.deleted_at = 0
        ON CONFLICT (version_id, user_id) DO UPDATE SET permission = excluded.permission
        "#,
    )
    .bind(user_id)
    .bind(&req.permissions)
    .bind(Timestamp::now().stamp)
    .bind(docs_id)
    .bind(title)
    .execute(pool)
    .await
    .map_err(|e| AppError::Internal(format!("error while updating document: {}", e)))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "document '{}' with title '{}' not found",
            docs_id, title
        )));
    }

    Ok(())
}
