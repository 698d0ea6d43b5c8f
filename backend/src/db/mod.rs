//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//!
//! 각 하위 모듈:
//! - `documents`: 버전 저장소 — 생성, 수정(새 버전), 소프트 삭제, head 조회
//! - `versions`: 버전 이력 조회와 과거 버전 복원
//! - `collaborators`: 협업자 권한 upsert (공유)
//! - `search`: 검색과 문서 목록 조회

pub mod collaborators;
pub mod documents;
pub mod search;
pub mod versions;

pub use collaborators::*;
pub use documents::*;
pub use search::*;
pub use versions::*;

use crate::config::Config;
use chrono::{SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// `DocumentVersion`으로 읽어올 컬럼 목록.
///
/// `collaborators`는 `document_collaborators`의 행들을 JSON 객체로 모은 값입니다.
/// 모든 조회 쿼리는 `document_versions`를 별칭 `v`로 참조해야 합니다.
pub(crate) const VERSION_COLUMNS: &str = r#"
    v.id, v.docs_id, v.title, v.content, v.author_id,
    COALESCE(
        (SELECT json_group_object(c.user_id, c.permission)
         FROM document_collaborators c
         WHERE c.version_id = v.id),
        '{}'
    ) AS collaborators,
    v.version, v.created_at, v.updated_at, v.deleted_at
"#;

/// 쓰기 시각
///
/// 한 번의 쓰기 작업 안에서는 같은 시각을 씁니다.
/// - `stamp`: `created_at`/`updated_at`용 RFC 3339 문자열 (밀리초, UTC)
/// - `millis`: `deleted_at`용 유닉스 밀리초 (항상 0보다 큼)
pub(crate) struct Timestamp {
    pub stamp: String,
    pub millis: i64,
}

impl Timestamp {
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            stamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            millis: now.timestamp_millis().max(1),
        }
    }
}

/// 연결 풀을 만들고 마이그레이션을 실행합니다.
///
/// 프로세스 시작 시 한 번만 호출하고, 만들어진 풀은 `AppState`로 모든 핸들러에 주입합니다.
/// - WAL 모드: 읽기가 쓰기를 막지 않습니다.
/// - busy_timeout: 다른 연결이 쓰기 잠금을 잡고 있으면 이 시간만큼 기다립니다.
///   같은 문서에 대한 동시 수정은 이 잠금으로 직렬화됩니다.
pub async fn connect(config: &Config) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(config.busy_timeout)
        .foreign_keys(true);

    // 파일 DB라면 상위 디렉토리를 먼저 만듭니다 (":memory:"는 상위 경로가 비어 있음)
    if let Some(parent) = options
        .get_filename()
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        if !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
            tracing::info!("Created database directory: {}", parent.display());
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.busy_timeout)
        .connect_with(options)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// 테스트용 인메모리 DB.
///
/// 인메모리 SQLite는 연결마다 별도의 DB이므로 연결을 하나만 두고 닫히지 않게 합니다.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

/// 여러 연결이 실제로 경합하도록 임시 디렉토리의 파일 DB로 풀을 만듭니다.
#[cfg(test)]
pub(crate) async fn file_pool(dir: &tempfile::TempDir) -> SqlitePool {
    let config = crate::config::Config {
        database_url: format!("sqlite:{}", dir.path().join("race.db").display()),
        host: "127.0.0.1".to_string(),
        port: 0,
        max_connections: 4,
        busy_timeout: std::time::Duration::from_secs(10),
    };
    connect(&config).await.unwrap()
}

/// 테스트에서 그룹의 모든 행을 (version, deleted_at) 순서로 읽어 불변식을 확인합니다.
#[cfg(test)]
pub(crate) async fn group_rows(pool: &SqlitePool, docs_id: &str) -> Vec<(i64, i64)> {
    sqlx::query_as("SELECT version, deleted_at FROM document_versions WHERE docs_id = ? ORDER BY version")
        .bind(docs_id)
        .fetch_all(pool)
        .await
        .unwrap()
}
