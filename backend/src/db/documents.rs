//! # 버전 저장소(Version Store) 쿼리 모듈
//!
//! `document_versions` 테이블에 대한 쓰기는 모두 이 모듈(과 `versions` 모듈의 복원)을 거칩니다.
//! 한 번 쓰인 행의 제목/내용은 바뀌지 않고, `deleted_at`만 0에서 시각으로 바뀝니다.
//!
//! ## 불변식
//! - 한 문서 그룹(`docs_id`)에는 `deleted_at = 0`인 행(head)이 최대 하나
//! - 버전 번호는 그룹 안에서 1부터 빈틈없이 증가하고 재사용되지 않음
//! - `author_id`와 `docs_id`는 그룹 안에서 바뀌지 않음
//!
//! ## 동시성
//! 새 head를 만드는 작업은 하나의 트랜잭션이며, **첫 문장이 기존 head의 조건부
//! 소프트 삭제**(`UPDATE ... WHERE deleted_at = 0 RETURNING ...`)입니다.
//! 첫 문장이 쓰기이므로 SQLite의 쓰기 잠금을 먼저 잡고,
//! 같은 문서에 대한 다른 수정은 잠금이 풀릴 때까지 기다립니다.
//! 따라서 head가 0개이거나 2개인 순간이 생기지 않습니다.

use super::{Timestamp, VERSION_COLUMNS};
use crate::error::AppError;
use crate::models::*;
use crate::services::access;
use sqlx::{SqliteConnection, SqlitePool};

/// 새 head 행에 들어갈 값들
pub(crate) struct NewHead<'a> {
    pub id: &'a str,
    pub docs_id: &'a str,
    pub title: &'a str,
    pub content: &'a str,
    pub author_id: &'a str,
    pub version: i64,
    pub created_at: &'a str,
    pub updated_at: &'a str,
}

/// 트랜잭션 안에서 새 head 행을 삽입합니다.
///
/// `&mut SqliteConnection`을 받으므로 호출하는 쪽에서 `&mut *tx`로 트랜잭션을 넘깁니다.
pub(crate) async fn insert_head(
    conn: &mut SqliteConnection,
    head: &NewHead<'_>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO document_versions
            (id, docs_id, title, content, author_id, version, created_at, updated_at, deleted_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, 0)
        "#,
    )
    .bind(head.id)
    .bind(head.docs_id)
    .bind(head.title)
    .bind(head.content)
    .bind(head.author_id)
    .bind(head.version)
    .bind(head.created_at)
    .bind(head.updated_at)
    .execute(conn)
    .await?;

    Ok(())
}

/// 이전 head의 협업자 권한을 새 head로 복사합니다.
pub(crate) async fn carry_collaborators(
    conn: &mut SqliteConnection,
    from_version_id: &str,
    to_version_id: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO document_collaborators (version_id, user_id, permission, granted_at)
        SELECT ?, user_id, permission, granted_at
        FROM document_collaborators
        WHERE version_id = ?
        "#,
    )
    .bind(to_version_id)
    .bind(from_version_id)
    .execute(conn)
    .await?;

    Ok(())
}

/// 버전 ID로 한 행을 조회합니다 (head 여부와 상관없이).
pub async fn get_version_by_id(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<DocumentVersion>, AppError> {
    let sql = format!("SELECT {VERSION_COLUMNS} FROM document_versions v WHERE v.id = ?");
    let doc = sqlx::query_as::<_, DocumentVersion>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(doc)
}

/// 문서 그룹의 현재 버전(head)을 조회합니다. 접근 필터는 적용하지 않습니다.
pub async fn get_head(
    pool: &SqlitePool,
    docs_id: &str,
) -> Result<Option<DocumentVersion>, AppError> {
    let sql = format!(
        "SELECT {VERSION_COLUMNS} FROM document_versions v WHERE v.docs_id = ? AND v.deleted_at = 0"
    );
    let doc = sqlx::query_as::<_, DocumentVersion>(&sql)
        .bind(docs_id)
        .fetch_optional(pool)
        .await?;

    Ok(doc)
}

/// `caller`가 볼 수 있는 현재 버전을 돌려줍니다.
///
/// head가 없거나 볼 권한이 없으면 둘 다 `NotFound`입니다.
/// (권한 없는 사용자에게 문서의 존재 여부를 알려주지 않습니다.)
pub async fn get_document(
    pool: &SqlitePool,
    docs_id: &str,
    caller: &str,
) -> Result<DocumentVersion, AppError> {
    if docs_id.is_empty() {
        return Err(AppError::InvalidArgument("docs_id is required".to_string()));
    }

    let caller = caller.trim();
    get_head(pool, docs_id)
        .await?
        .filter(|doc| access::can_view(caller, doc))
        .ok_or_else(|| AppError::NotFound(format!("document '{}' not found", docs_id)))
}

/// 새 문서를 생성합니다.
///
/// 같은 작성자가 같은 제목으로 만들었다가 삭제한 문서(head가 없는 그룹)가 있으면
/// 그 그룹을 다시 사용하고 다음 버전 번호로 이어갑니다.
/// 그렇지 않으면 새 `docs_id`를 발급하고 버전 1로 시작합니다.
///
/// # 에러
/// - 빈 제목/작성자: `InvalidArgument`
/// - 같은 작성자에게 같은 제목의 활성 문서가 이미 있음: `AlreadyExists`
pub async fn create_document(
    pool: &SqlitePool,
    req: &CreateDocumentRequest,
) -> Result<DocumentVersion, AppError> {
    let title = req.title.trim();
    let author_id = req.author_id.trim();
    if title.is_empty() {
        return Err(AppError::InvalidArgument("title is required".to_string()));
    }
    if author_id.is_empty() {
        return Err(AppError::InvalidArgument("author_id is required".to_string()));
    }

    // 과거 행은 불변이므로 트랜잭션 밖에서 읽어도 됩니다.
    let reusable: Option<String> = sqlx::query_scalar(
        r#"
        SELECT v.docs_id
        FROM document_versions v
        WHERE v.author_id = ? AND v.title = ?
          AND NOT EXISTS (
              SELECT 1 FROM document_versions h
              WHERE h.docs_id = v.docs_id AND h.deleted_at = 0
          )
        ORDER BY v.created_at DESC, v.version DESC
        LIMIT 1
        "#,
    )
    .bind(author_id)
    .bind(title)
    .fetch_optional(pool)
    .await?;

    let docs_id = reusable.unwrap_or_else(|| uuid::Uuid::now_v7().to_string());
    let id = uuid::Uuid::now_v7().to_string();
    let now = Timestamp::now();

    // 버전 번호와 created_at을 한 문장 안에서 계산하므로 삽입 자체가 원자적입니다.
    // 집계 함수만 있는 SELECT는 행이 없어도 한 행을 돌려주므로 항상 한 행이 삽입됩니다.
    // 그 사이 다른 요청이 같은 그룹/제목에 head를 만들었다면 유니크 인덱스가 막습니다.
    sqlx::query(
        r#"
        INSERT INTO document_versions
            (id, docs_id, title, content, author_id, version, created_at, updated_at, deleted_at)
        SELECT ?1, ?2, ?3, '', ?4,
               COALESCE(MAX(version), 0) + 1,
               COALESCE(MIN(created_at), ?5),
               ?5, 0
        FROM document_versions
        WHERE docs_id = ?2
        "#,
    )
    .bind(&id)
    .bind(&docs_id)
    .bind(title)
    .bind(author_id)
    .bind(&now.stamp)
    .execute(pool)
    .await
    .map_err(|e| AppError::from_write(e, title))?;

    get_version_by_id(pool, &id)
        .await?
        .ok_or_else(|| AppError::Internal("Failed to retrieve created document".to_string()))
}

/// 문서를 수정합니다: 기존 head를 소프트 삭제하고 다음 버전의 새 head를 삽입합니다.
///
/// 새 head는 `docs_id`, `author_id`, `created_at`, 협업자 권한을 이어받습니다.
/// 두 단계는 하나의 트랜잭션으로 실행되며, 어느 단계든 실패하면 함께 롤백됩니다.
///
/// # 반환값
/// 새 버전 번호 (`기존 버전 + 1`)
///
/// # 에러
/// - 빈 author_id/docs_id/title: `InvalidArgument`
/// - 이 작성자의 head가 없음: `NotFound`
/// - `expected_version`이 현재 버전과 다름: `Conflict`
/// - 제목이 같은 작성자의 다른 활성 문서와 겹침: `AlreadyExists`
pub async fn update_document(
    pool: &SqlitePool,
    docs_id: &str,
    req: &UpdateDocumentRequest,
) -> Result<i64, AppError> {
    let author_id = req.author_id.trim();
    let title = req.title.trim();
    if author_id.is_empty() {
        return Err(AppError::InvalidArgument("author_id is required".to_string()));
    }
    if docs_id.is_empty() {
        return Err(AppError::InvalidArgument("docs_id is required".to_string()));
    }
    if title.is_empty() {
        return Err(AppError::InvalidArgument("title is required".to_string()));
    }

    let now = Timestamp::now();
    let mut tx = pool.begin().await?;

    // 조건부 소프트 삭제(compare-and-swap): head를 찾는 것과 대체 표시를 한 문장으로 처리합니다.
    let replaced: Option<(String, i64, String)> = sqlx::query_as(
        r#"
        UPDATE document_versions
        SET deleted_at = ?
        WHERE docs_id = ? AND author_id = ? AND deleted_at = 0
          AND (? IS NULL OR version = ?)
        RETURNING id, version, created_at
        "#,
    )
    .bind(now.millis)
    .bind(docs_id)
    .bind(author_id)
    .bind(req.expected_version)
    .bind(req.expected_version)
    .fetch_optional(&mut *tx)
    .await?;

    let Some((old_id, old_version, created_at)) = replaced else {
        // 아무 행도 바뀌지 않았습니다. head가 아예 없는지, 버전만 다른지 구분합니다.
        let current: Option<i64> = sqlx::query_scalar(
            "SELECT version FROM document_versions WHERE docs_id = ? AND author_id = ? AND deleted_at = 0",
        )
        .bind(docs_id)
        .bind(author_id)
        .fetch_optional(&mut *tx)
        .await?;

        return Err(match (current, req.expected_version) {
            (Some(current), Some(expected)) => AppError::Conflict(format!(
                "document '{}' is at version {}, expected {}",
                docs_id, current, expected
            )),
            _ => AppError::NotFound(format!(
                "document with authorId '{}' and docsId '{}' not found",
                author_id, docs_id
            )),
        });
    };

    let new_version = old_version + 1;
    let new_id = uuid::Uuid::now_v7().to_string();

    insert_head(
        &mut *tx,
        &NewHead {
            id: &new_id,
            docs_id,
            title,
            content: &req.content,
            author_id,
            version: new_version,
            created_at: &created_at,
            updated_at: &now.stamp,
        },
    )
    .await
    .map_err(|e| AppError::from_write(e, title))?;

    carry_collaborators(&mut *tx, &old_id, &new_id).await?;

    tx.commit().await?;

    Ok(new_version)
}

/// 문서를 소프트 삭제합니다: head의 `deleted_at`만 현재 시각으로 바꾸고 새 버전은 만들지 않습니다.
///
/// # 에러
/// - 빈 author_id/title: `InvalidArgument`
/// - 일치하는 활성 문서 없음: `NotFound`
/// - 저장소 오류: `Internal("Document deletion failed: ...")`
///
/// 두 실패는 서로 다른 메시지로 구분됩니다.
pub async fn delete_document(
    pool: &SqlitePool,
    author_id: &str,
    title: &str,
) -> Result<(), AppError> {
    let author_id = author_id.trim();
    let title = title.trim();
    if author_id.is_empty() {
        return Err(AppError::InvalidArgument("author_id is required".to_string()));
    }
    if title.is_empty() {
        return Err(AppError::InvalidArgument("title is required".to_string()));
    }

    let result = sqlx::query(
        "UPDATE document_versions SET deleted_at = ? WHERE author_id = ? AND title = ? AND deleted_at = 0",
    )
    .bind(Timestamp::now().millis)
    .bind(author_id)
    .bind(title)
    .execute(pool)
    .await
    .map_err(|e| AppError::Internal(format!("Document deletion failed: {}", e)))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "document '{}' not found for author '{}'",
            title, author_id
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{
        file_pool, group_rows, restore_version, search_documents, share_document, test_pool,
    };
    use axum::response::IntoResponse;

    fn create_req(title: &str, author: &str) -> CreateDocumentRequest {
        CreateDocumentRequest {
            title: title.to_string(),
            author_id: author.to_string(),
        }
    }

    fn update_req(author: &str, title: &str, content: &str) -> UpdateDocumentRequest {
        UpdateDocumentRequest {
            author_id: author.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            expected_version: None,
        }
    }

    fn head_count(rows: &[(i64, i64)]) -> usize {
        rows.iter().filter(|(_, deleted_at)| *deleted_at == 0).count()
    }

    #[tokio::test]
    async fn create_inserts_empty_head_at_version_one() {
        let pool = test_pool().await;

        let doc = create_document(&pool, &create_req("Plan", "alice")).await.unwrap();
        assert_eq!(doc.version, 1);
        assert_eq!(doc.title, "Plan");
        assert_eq!(doc.author_id, "alice");
        assert!(doc.content.is_empty());
        assert!(doc.collaborators.is_empty());
        assert!(doc.is_head());
        assert_eq!(doc.created_at, doc.updated_at);
    }

    #[tokio::test]
    async fn create_rejects_missing_fields() {
        let pool = test_pool().await;

        let err = create_document(&pool, &create_req("", "alice")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
        let err = create_document(&pool, &create_req("Plan", "  ")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn duplicate_title_for_same_author_already_exists() {
        let pool = test_pool().await;
        create_document(&pool, &create_req("Plan", "alice")).await.unwrap();

        let err = create_document(&pool, &create_req("Plan", "alice")).await.unwrap_err();
        match err {
            AppError::AlreadyExists(msg) => assert!(msg.contains("title 'Plan' is already taken")),
            other => panic!("expected AlreadyExists, got {other:?}"),
        }

        // 다른 작성자는 같은 제목을 쓸 수 있고, 그룹도 따로 받습니다.
        let bob = create_document(&pool, &create_req("Plan", "bob")).await.unwrap();
        let alice = get_head_by_title(&pool, "alice", "Plan").await;
        assert_ne!(bob.docs_id, alice.docs_id);
    }

    #[tokio::test]
    async fn different_titles_get_different_groups() {
        let pool = test_pool().await;
        let a = create_document(&pool, &create_req("A", "alice")).await.unwrap();
        let b = create_document(&pool, &create_req("B", "alice")).await.unwrap();
        assert_ne!(a.docs_id, b.docs_id);
    }

    #[tokio::test]
    async fn update_appends_next_version_and_supersedes_head() {
        let pool = test_pool().await;
        let doc = create_document(&pool, &create_req("T", "A")).await.unwrap();

        let v2 = update_document(&pool, &doc.docs_id, &update_req("A", "T2", "C2"))
            .await
            .unwrap();
        assert_eq!(v2, 2);
        let v3 = update_document(&pool, &doc.docs_id, &update_req("A", "T3", "C3"))
            .await
            .unwrap();
        assert_eq!(v3, 3);

        let rows = group_rows(&pool, &doc.docs_id).await;
        assert_eq!(rows.iter().map(|(v, _)| *v).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(head_count(&rows), 1);
        assert_eq!(rows[2].1, 0);

        let head = get_head(&pool, &doc.docs_id).await.unwrap().unwrap();
        assert_eq!(head.title, "T3");
        assert_eq!(head.content, "C3");
        assert_eq!(head.author_id, "A");
        assert_eq!(head.created_at, doc.created_at);

        // 과거 버전은 그대로 남아 있습니다.
        let first = get_version_by_id(&pool, &doc.id).await.unwrap().unwrap();
        assert_eq!(first.title, "T");
        assert!(!first.is_head());
    }

    #[tokio::test]
    async fn update_requires_author_and_group() {
        let pool = test_pool().await;
        let err = update_document(&pool, "g", &update_req("", "T", "C")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
        let err = update_document(&pool, "", &update_req("A", "T", "C")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn update_by_non_author_is_not_found_and_changes_nothing() {
        let pool = test_pool().await;
        let doc = create_document(&pool, &create_req("T", "A")).await.unwrap();

        let err = update_document(&pool, &doc.docs_id, &update_req("B", "T", "hijack"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let rows = group_rows(&pool, &doc.docs_id).await;
        assert_eq!(rows, vec![(1, 0)]);
    }

    #[tokio::test]
    async fn stale_expected_version_conflicts() {
        let pool = test_pool().await;
        let doc = create_document(&pool, &create_req("T", "A")).await.unwrap();

        let mut req = update_req("A", "T", "first");
        req.expected_version = Some(1);
        assert_eq!(update_document(&pool, &doc.docs_id, &req).await.unwrap(), 2);

        // 같은 기대 버전으로 다시 보내면 이미 버전 2이므로 충돌입니다.
        let mut stale = update_req("A", "T", "second");
        stale.expected_version = Some(1);
        let err = update_document(&pool, &doc.docs_id, &stale).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let rows = group_rows(&pool, &doc.docs_id).await;
        assert_eq!(rows.len(), 2);
        assert_eq!(head_count(&rows), 1);
    }

    #[tokio::test]
    async fn update_into_taken_title_rolls_back() {
        let pool = test_pool().await;
        let a = create_document(&pool, &create_req("A", "alice")).await.unwrap();
        create_document(&pool, &create_req("B", "alice")).await.unwrap();

        let err = update_document(&pool, &a.docs_id, &update_req("alice", "B", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(_)));

        // 소프트 삭제도 함께 롤백되어 head가 그대로 남아 있어야 합니다.
        let head = get_head(&pool, &a.docs_id).await.unwrap().unwrap();
        assert_eq!(head.version, 1);
        assert_eq!(head.title, "A");
    }

    #[tokio::test]
    async fn delete_leaves_group_headless() {
        let pool = test_pool().await;
        let doc = create_document(&pool, &create_req("T", "A")).await.unwrap();
        update_document(&pool, &doc.docs_id, &update_req("A", "T", "body")).await.unwrap();

        delete_document(&pool, "A", "T").await.unwrap();

        let rows = group_rows(&pool, &doc.docs_id).await;
        assert_eq!(rows.len(), 2);
        assert_eq!(head_count(&rows), 0);
        assert!(get_head(&pool, &doc.docs_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_without_match_is_not_found() {
        let pool = test_pool().await;
        create_document(&pool, &create_req("T", "A")).await.unwrap();

        let err = delete_document(&pool, "B", "T").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        delete_document(&pool, "A", "T").await.unwrap();
        let err = delete_document(&pool, "A", "T").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_after_delete_reuses_group_with_next_version() {
        let pool = test_pool().await;
        let first = create_document(&pool, &create_req("T", "A")).await.unwrap();
        update_document(&pool, &first.docs_id, &update_req("A", "T", "old")).await.unwrap();
        delete_document(&pool, "A", "T").await.unwrap();

        let again = create_document(&pool, &create_req("T", "A")).await.unwrap();
        assert_eq!(again.docs_id, first.docs_id);
        assert_eq!(again.version, 3);
        assert_eq!(again.created_at, first.created_at);
        assert!(again.content.is_empty());

        let rows = group_rows(&pool, &first.docs_id).await;
        assert_eq!(rows.iter().map(|(v, _)| *v).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(head_count(&rows), 1);
    }

    #[tokio::test]
    async fn get_document_hides_from_strangers() {
        let pool = test_pool().await;
        let doc = create_document(&pool, &create_req("T", "A")).await.unwrap();

        assert_eq!(get_document(&pool, &doc.docs_id, "A").await.unwrap().id, doc.id);
        let err = get_document(&pool, &doc.docs_id, "B").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn concurrent_updates_keep_one_head_and_distinct_versions() {
        let dir = tempfile::TempDir::new().unwrap();
        let pool = file_pool(&dir).await;
        let doc = create_document(&pool, &create_req("T", "A")).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..8 {
            let pool = pool.clone();
            let docs_id = doc.docs_id.clone();
            handles.push(tokio::spawn(async move {
                update_document(&pool, &docs_id, &update_req("A", "T", &format!("edit {i}"))).await
            }));
        }

        // busy_timeout 안에서 잠금을 기다리므로 모든 수정이 성공해야 합니다.
        let mut versions = Vec::new();
        for handle in handles {
            versions.push(handle.await.unwrap().unwrap());
        }
        versions.sort_unstable();
        assert_eq!(versions, (2..=9).collect::<Vec<i64>>());

        let rows = group_rows(&pool, &doc.docs_id).await;
        assert_eq!(head_count(&rows), 1);
        let numbers: Vec<i64> = rows.iter().map(|(v, _)| *v).collect();
        assert_eq!(numbers, (1..=9).collect::<Vec<i64>>());

        pool.close().await;
    }

    #[tokio::test]
    async fn padded_title_matches_in_every_operation() {
        let pool = test_pool().await;
        let doc = create_document(&pool, &create_req(" T ", " A ")).await.unwrap();
        assert_eq!(doc.title, "T");
        assert_eq!(doc.author_id, "A");

        // 생성할 때 보낸 문자열 그대로 다시 찾고, 공유하고, 삭제할 수 있습니다.
        let found = search_documents(&pool, &doc.docs_id, " T ", " A ").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, doc.id);

        let share = ShareDocumentRequest {
            title: " T ".to_string(),
            user_id: " u1 ".to_string(),
            permissions: "read".to_string(),
        };
        share_document(&pool, &doc.docs_id, &share).await.unwrap();
        let head = get_document(&pool, &doc.docs_id, " u1 ").await.unwrap();
        assert_eq!(head.collaborators["u1"], "read");

        update_document(&pool, &doc.docs_id, &update_req(" A ", " T ", "edit")).await.unwrap();
        let restore = RestoreVersionRequest {
            author_id: " A ".to_string(),
            title: " T ".to_string(),
            version: 1,
        };
        assert_eq!(restore_version(&pool, &doc.docs_id, &restore).await.unwrap(), 3);

        delete_document(&pool, " A ", " T ").await.unwrap();
        assert!(get_head(&pool, &doc.docs_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_storage_failure_is_internal_not_missing() {
        let pool = test_pool().await;
        create_document(&pool, &create_req("T", "A")).await.unwrap();
        pool.close().await;

        let err = delete_document(&pool, "A", "T").await.unwrap_err();
        match &err {
            AppError::Internal(msg) => assert!(msg.starts_with("Document deletion failed: ")),
            other => panic!("expected Internal, got {other:?}"),
        }

        // 응답에는 저장소 오류 내용 없이 작업 실패 문장만 나갑니다.
        let response = err.into_response();
        assert_eq!(response.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "internal_error");
        assert_eq!(body["error"]["message"], "Document deletion failed");
    }

    async fn get_head_by_title(pool: &SqlitePool, author: &str, title: &str) -> DocumentVersion {
        let sql = format!(
            "SELECT {VERSION_COLUMNS} FROM document_versions v WHERE v.author_id = ? AND v.title = ? AND v.deleted_at = 0"
        );
        sqlx::query_as::<_, DocumentVersion>(&sql)
            .bind(author)
            .bind(title)
            .fetch_one(pool)
            .await
            .unwrap()
    }
}
