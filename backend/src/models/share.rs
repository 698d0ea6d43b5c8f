//! # 문서 공유 모델
//!
//! `POST /api/v1/documents/{docs_id}/share` 요청 본문을 정의합니다.

use serde::Deserialize;

/// 문서 공유 요청
///
/// `user_id`에게 `permissions` 권한을 부여합니다.
/// 이미 권한이 있으면 새 값으로 덮어쓰고, 다른 협업자의 권한은 건드리지 않습니다.
#[derive(Debug, Deserialize)]
pub struct ShareDocumentRequest {
    /// 공유할 문서의 현재 제목
    pub title: String,
    /// 권한을 받을 사용자 ID
    pub user_id: String,
    /// 권한 문자열 (예: "read", "write")
    pub permissions: String,
}
