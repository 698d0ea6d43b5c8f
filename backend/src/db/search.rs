//! # 검색과 목록 조회(Query Layer) 모듈
//!
//! 현재 버전(head)들을 찾아 접근 필터를 적용한 뒤 돌려줍니다.
//!
//! ## 처리 순서
//! 1. SQL로 후보 행을 결정적인 순서로 가져옵니다
//! 2. `services::access`로 볼 수 없는 행을 조용히 걸러냅니다
//! 3. 남은 행에 페이지네이션을 적용합니다
//!
//! 보이는 행이 하나도 없으면 `NotFound`를 돌려줍니다.
//! 보이는 행은 있지만 요청한 페이지가 범위를 벗어나면 빈 목록을 돌려줍니다.

use super::VERSION_COLUMNS;
use crate::error::AppError;
use crate::models::DocumentVersion;
use crate::services::{access, Pagination};
use sqlx::SqlitePool;

/// 문서 그룹과 제목으로 현재 버전을 검색합니다.
///
/// ## SQL 쿼리 설명
/// ```sql
/// WHERE v.docs_id = ? AND v.title = ?   -- 그룹과 제목이 일치하고
///   AND v.deleted_at = 0                -- 삭제/대체되지 않은 행만
/// ```
///
/// # 에러
/// - 빈 docs_id/title/author_id: `InvalidArgument`
/// - 조건에 맞고 볼 수 있는 행 없음: `NotFound`
pub async fn search_documents(
    pool: &SqlitePool,
    docs_id: &str,
    title: &str,
    caller: &str,
) -> Result<Vec<DocumentVersion>, AppError> {
    // 생성/수정과 같은 규칙으로 앞뒤 공백을 지운 값으로 찾습니다.
    let title = title.trim();
    let caller = caller.trim();
    if docs_id.is_empty() {
        return Err(AppError::InvalidArgument("docs_id is required".to_string()));
    }
    if title.is_empty() {
        return Err(AppError::InvalidArgument("title is required".to_string()));
    }
    if caller.is_empty() {
        return Err(AppError::InvalidArgument("author_id is required".to_string()));
    }

    let sql = format!(
        r#"
        SELECT {VERSION_COLUMNS}
        FROM document_versions v
        WHERE v.docs_id = ? AND v.title = ? AND v.deleted_at = 0
        ORDER BY v.version
        "#
    );
    let rows = sqlx::query_as::<_, DocumentVersion>(&sql)
        .bind(docs_id)
        .bind(title)
        .fetch_all(pool)
        .await?;

    let documents = access::visible_to(caller, rows);
    if documents.is_empty() {
        return Err(AppError::NotFound(format!(
            "no documents found for authorId '{}'",
            caller
        )));
    }

    Ok(documents)
}

/// 사용자가 볼 수 있는 현재 버전 목록을 페이지 단위로 조회합니다.
///
/// `docs_id`를 주면 그 문서 그룹으로 범위를 좁힙니다.
/// 정렬 순서는 `created_at`(첫 버전 생성 시각), 같으면 `docs_id`입니다.
///
/// 작성자/협업자 조건을 SQL에도 넣어 전체 head를 훑지 않게 하지만,
/// 최종 판단은 언제나 `access::visible_to`가 합니다.
pub async fn list_documents(
    pool: &SqlitePool,
    caller: &str,
    docs_id: Option<&str>,
    pagination: Pagination,
) -> Result<Vec<DocumentVersion>, AppError> {
    let caller = caller.trim();
    if caller.is_empty() {
        return Err(AppError::InvalidArgument("author_id is required".to_string()));
    }
    // 빈 문자열은 "지정하지 않음"으로 취급합니다.
    let docs_id = docs_id.filter(|id| !id.is_empty());

    let sql = format!(
        r#"
        SELECT {VERSION_COLUMNS}
        FROM document_versions v
        WHERE v.deleted_at = 0
          AND (?1 IS NULL OR v.docs_id = ?1)
          AND (v.author_id = ?2 OR EXISTS (
              SELECT 1 FROM document_collaborators c
              WHERE c.version_id = v.id AND c.user_id = ?2
          ))
        ORDER BY v.created_at, v.docs_id
        "#
    );
    let rows = sqlx::query_as::<_, DocumentVersion>(&sql)
        .bind(docs_id)
        .bind(caller)
        .fetch_all(pool)
        .await?;

    let documents = access::visible_to(caller, rows);
    if documents.is_empty() {
        return Err(AppError::NotFound(match docs_id {
            Some(id) => format!(
                "no documents found for docsId '{}' with the given authorId or in collaborators",
                id
            ),
            None => format!("no documents found for authorId '{}'", caller),
        }));
    }

    Ok(pagination.apply(documents))
}
