use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListVersionsQuery {
    pub author_id: String,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// `POST /documents/{docs_id}/restore` 요청 본문.
/// `title`과 `version`은 되살릴 과거 버전을 가리킵니다.
#[derive(Debug, Deserialize)]
pub struct RestoreVersionRequest {
    pub author_id: String,
    pub title: String,
    #[serde(default)]
    pub version: i64,
}
