//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `document`: 문서 버전(DocumentVersion)과 문서 요청/응답 구조체
//! - `share`: 문서 공유 요청
//! - `version`: 버전 이력 조회/복원 요청
//!
//! `pub use X::*;`로 하위 모듈 항목을 재공개하여
//! `crate::models::DocumentVersion`처럼 짧게 접근할 수 있게 합니다.

pub mod document;
pub mod share;
pub mod version;

pub use document::*;
pub use share::*;
pub use version::*;
