use super::documents::{carry_collaborators, insert_head, NewHead};
use super::{Timestamp, VERSION_COLUMNS};
use crate::error::AppError;
use crate::models::*;
use crate::services::{access, Pagination};
use sqlx::SqlitePool;

/// 문서 그룹의 전체 이력(대체된 버전 포함)을 버전 번호 오름차순으로 조회합니다.
///
/// 접근 필터는 행마다 그 버전의 협업자 목록으로 판단하고, 페이지는 필터 이후에 자릅니다.
pub async fn list_versions(
    pool: &SqlitePool,
    docs_id: &str,
    caller: &str,
    pagination: Pagination,
) -> Result<Vec<DocumentVersion>, AppError> {
    let caller = caller.trim();
    if docs_id.is_empty() {
        return Err(AppError::InvalidArgument("docs_id is required".to_string()));
    }
    if caller.is_empty() {
        return Err(AppError::InvalidArgument("author_id is required".to_string()));
    }

    let sql = format!(
        "SELECT {VERSION_COLUMNS} FROM document_versions v WHERE v.docs_id = ? ORDER BY v.version ASC"
    );
    let rows = sqlx::query_as::<_, DocumentVersion>(&sql)
        .bind(docs_id)
        .fetch_all(pool)
        .await?;

    let visible = access::visible_to(caller, rows);
    if visible.is_empty() {
        return Err(AppError::NotFound(format!(
            "no versions found for docsId '{}' with the given authorId or in collaborators",
            docs_id
        )));
    }

    Ok(pagination.apply(visible))
}

/// 과거의 특정 버전 하나를 찾습니다.
pub async fn find_version(
    pool: &SqlitePool,
    docs_id: &str,
    author_id: &str,
    title: &str,
    version: i64,
) -> Result<Option<DocumentVersion>, AppError> {
    let sql = format!(
        r#"
        SELECT {VERSION_COLUMNS}
        FROM document_versions v
        WHERE v.docs_id = ? AND v.author_id = ? AND v.title = ? AND v.version = ?
        "#
    );
    let doc = sqlx::query_as::<_, DocumentVersion>(&sql)
        .bind(docs_id)
        .bind(author_id)
        .bind(title)
        .bind(version)
        .fetch_optional(pool)
        .await?;

    Ok(doc)
}

/// 과거 버전의 제목/내용을 새 head로 복원합니다.
///
/// 기존 행을 덮어쓰지 않고 항상 `MAX(version) + 1`의 새 버전을 만듭니다.
/// 현재 head가 있으면 소프트 삭제하고 그 협업자 권한을 이어받습니다.
/// 삭제되어 head가 없는 문서라면 복원된 버전의 협업자 권한으로 되살립니다.
///
/// # 반환값
/// 새로 만들어진 버전 번호
pub async fn restore_version(
    pool: &SqlitePool,
    docs_id: &str,
    req: &RestoreVersionRequest,
) -> Result<i64, AppError> {
    let author_id = req.author_id.trim();
    let title = req.title.trim();
    if author_id.is_empty() {
        return Err(AppError::InvalidArgument("author_id is required".to_string()));
    }
    if title.is_empty() {
        return Err(AppError::InvalidArgument("title is required".to_string()));
    }
    if req.version == 0 {
        return Err(AppError::InvalidArgument("version is required".to_string()));
    }
    if docs_id.is_empty() {
        return Err(AppError::InvalidArgument("docs_id is required".to_string()));
    }

    // 과거 버전은 불변이므로 트랜잭션 전에 읽습니다.
    let source = find_version(pool, docs_id, author_id, title, req.version)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "document with docsId '{}' and title '{}' not found",
                docs_id, title
            ))
        })?;

    let now = Timestamp::now();
    let mut tx = pool.begin().await?;

    // 첫 문장이 쓰기여야 수정과 같은 방식으로 직렬화됩니다.
    let replaced: Option<String> = sqlx::query_scalar(
        "UPDATE document_versions SET deleted_at = ? WHERE docs_id = ? AND deleted_at = 0 RETURNING id",
    )
    .bind(now.millis)
    .bind(docs_id)
    .fetch_optional(&mut *tx)
    .await?;

    let latest: i64 =
        sqlx::query_scalar("SELECT MAX(version) FROM document_versions WHERE docs_id = ?")
            .bind(docs_id)
            .fetch_one(&mut *tx)
            .await?;
    let new_version = latest + 1;
    let new_id = uuid::Uuid::now_v7().to_string();

    insert_head(
        &mut *tx,
        &NewHead {
            id: &new_id,
            docs_id,
            title: &source.title,
            content: &source.content,
            author_id: &source.author_id,
            version: new_version,
            created_at: &source.created_at,
            updated_at: &now.stamp,
        },
    )
    .await
    .map_err(|e| AppError::from_write(e, &source.title))?;

    let carried_from = replaced.as_deref().unwrap_or(source.id.as_str());
    carry_collaborators(&mut *tx, carried_from, &new_id).await?;

    tx.commit().await?;

    Ok(new_version)
}
