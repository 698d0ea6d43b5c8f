//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목 (모두 기본값이 있습니다):
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (기본값: `sqlite:data/docstore.db`)
//! - `HOST`: 서버 바인딩 주소 (기본값: `0.0.0.0`)
//! - `PORT`: 서버 포트 번호 (기본값: `50052`)
//! - `DB_MAX_CONNECTIONS`: 연결 풀 크기 (기본값: `5`)
//! - `DB_BUSY_TIMEOUT_MS`: 잠금 대기/연결 획득 제한 시간 (기본값: `5000`)

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후,
/// 애플리케이션 전체에서 공유됩니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 URL (예: "sqlite:data/docstore.db")
    pub database_url: String,
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    pub port: u16,
    /// 연결 풀이 유지할 최대 연결 수
    pub max_connections: u32,
    /// 쓰기 잠금을 기다리는 최대 시간이자, 풀에서 연결을 빌릴 때의 최대 대기 시간.
    /// 모든 저장소 호출은 이 시간 안에 끝나거나 에러를 돌려줍니다.
    pub busy_timeout: Duration,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 값이 없거나 숫자로 파싱할 수 없으면 기본값을 사용합니다.
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:data/docstore.db".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_or("PORT", 50052),
            max_connections: parse_or("DB_MAX_CONNECTIONS", 5),
            busy_timeout: Duration::from_millis(parse_or("DB_BUSY_TIMEOUT_MS", 5000)),
        }
    }
}

/// 환경변수를 숫자로 파싱하고, 실패하면 기본값을 돌려줍니다.
///
/// 제네릭 `T: FromStr`: "문자열에서 파싱할 수 있는 모든 타입"을 받습니다.
/// (u16 포트, u32 연결 수, u64 밀리초 등)
fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
