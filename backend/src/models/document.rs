//! # 문서 버전 모델 정의
//!
//! 문서 하나는 여러 개의 불변 버전(`DocumentVersion`)으로 표현됩니다.
//! 같은 문서의 버전들은 `docs_id`(문서 그룹 ID)를 공유하며,
//! 그중 `deleted_at == 0`인 버전 하나가 현재 버전(head)입니다.
//!
//! ## 구조체 역할
//! - `DocumentVersion`: `document_versions` 테이블의 한 행 (응답용)
//! - `CreateDocumentRequest`, `UpdateDocumentRequest`: 생성/수정 요청 본문
//! - `DeleteDocumentQuery`, `GetDocumentQuery`, `SearchDocumentQuery`,
//!   `ListDocumentsQuery`: URL 쿼리 파라미터
//! - `MessageResponse`: 사람이 읽을 수 있는 확인 메시지 응답

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use std::collections::BTreeMap;

/// 사용자 ID → 권한 문자열(예: "read", "write") 매핑
///
/// BTreeMap을 쓰면 키가 정렬되어 JSON 출력 순서가 항상 같습니다.
pub type Collaborators = BTreeMap<String, String>;

/// 문서의 불변 스냅샷 하나 — DB의 `document_versions` 테이블 한 행에 대응합니다.
///
/// `collaborators`는 별도 테이블(`document_collaborators`)에 저장되며,
/// 조회 쿼리에서 `json_group_object`로 모아 JSON 텍스트 컬럼으로 읽어옵니다.
/// `Json<T>`는 그 텍스트를 타입이 있는 맵으로 디코딩합니다.
/// 스키마와 맞지 않는 행은 디코딩 단계에서 에러가 됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DocumentVersion {
    /// 버전 고유 식별자 (UUIDv7)
    pub id: String,
    /// 문서 그룹 ID. 한 문서의 모든 버전에서 동일합니다.
    pub docs_id: String,
    pub title: String,
    pub content: String,
    /// 소유자 ID. 그룹 안에서 바뀌지 않습니다.
    pub author_id: String,
    pub collaborators: Json<Collaborators>,
    /// 1부터 시작해 1씩 증가하는 버전 번호
    pub version: i64,
    /// 첫 버전 생성 시각 (이후 버전으로 그대로 복사됨)
    pub created_at: String,
    /// 이 행이 쓰인 시각
    pub updated_at: String,
    /// 0이면 현재 버전(head), 0이 아니면 대체/삭제된 시각(유닉스 밀리초)
    pub deleted_at: i64,
}

impl DocumentVersion {
    /// 현재 버전(head)인지 확인합니다. 테스트에서 불변식을 확인할 때 씁니다.
    #[cfg(test)]
    pub fn is_head(&self) -> bool {
        self.deleted_at == 0
    }
}

/// 문서 생성 요청 — `POST /api/v1/documents`의 요청 본문
#[derive(Debug, Deserialize)]
pub struct CreateDocumentRequest {
    pub title: String,
    pub author_id: String,
}

/// 문서 수정 요청 — `PUT /api/v1/documents/{docs_id}`의 요청 본문
///
/// 수정은 기존 버전을 바꾸지 않고 새 버전을 추가합니다.
/// `expected_version`을 보내면 head가 그 버전일 때만 수정합니다 (낙관적 동시성 제어).
#[derive(Debug, Deserialize)]
pub struct UpdateDocumentRequest {
    pub author_id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub expected_version: Option<i64>,
}

/// 문서 삭제 — `DELETE /api/v1/documents?author_id=..&title=..`
#[derive(Debug, Deserialize)]
pub struct DeleteDocumentQuery {
    pub author_id: String,
    pub title: String,
}

/// 단일 문서 조회 — `GET /api/v1/documents/{docs_id}?author_id=..`
#[derive(Debug, Deserialize)]
pub struct GetDocumentQuery {
    pub author_id: String,
}

/// 문서 검색 — `GET /api/v1/documents/search?docs_id=..&title=..&author_id=..`
#[derive(Debug, Deserialize)]
pub struct SearchDocumentQuery {
    pub docs_id: String,
    pub title: String,
    /// 조회하는 사용자 ID (소유자 또는 협업자)
    pub author_id: String,
}

/// 문서 목록 조회 — `GET /api/v1/documents?author_id=..&docs_id=..&page=..&limit=..`
#[derive(Debug, Deserialize)]
pub struct ListDocumentsQuery {
    pub author_id: String,
    /// 지정하면 해당 문서 그룹으로 범위를 좁힙니다.
    pub docs_id: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// 확인 메시지 응답. 새 버전이 만들어진 경우 버전 번호를 함께 담습니다.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            version: None,
        }
    }

    pub fn with_version(message: impl Into<String>, version: i64) -> Self {
        Self {
            message: message.into(),
            version: Some(version),
        }
    }
}
