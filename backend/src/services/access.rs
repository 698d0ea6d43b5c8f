//! # 접근 필터(Access Filter)
//!
//! 사용자가 어떤 문서 버전을 볼 수 있는지 판단합니다.
//!
//! 규칙은 하나입니다:
//! - 조회하는 사용자가 작성자(`author_id`)이거나
//! - 해당 버전의 협업자 목록(`collaborators`)에 키로 들어 있으면 볼 수 있습니다.
//!
//! 검색/목록 결과의 모든 행에 이 규칙을 적용하고,
//! 통과하지 못한 행은 에러 없이 조용히 빠집니다.

use crate::models::DocumentVersion;

/// `caller`가 `document`를 볼 수 있는지 확인합니다.
///
/// 빈 사용자 ID는 아무것도 볼 수 없습니다.
pub fn can_view(caller: &str, document: &DocumentVersion) -> bool {
    if caller.is_empty() {
        return false;
    }
    document.author_id == caller || document.collaborators.contains_key(caller)
}

/// `caller`가 볼 수 있는 행만 남깁니다. 순서는 유지됩니다.
///
/// `into_iter().filter().collect()`: 소유권을 넘겨받아 조건에 맞는 요소만 새 Vec으로 모읍니다.
pub fn visible_to(caller: &str, documents: Vec<DocumentVersion>) -> Vec<DocumentVersion> {
    documents
        .into_iter()
        .filter(|doc| can_view(caller, doc))
        .collect()
}
