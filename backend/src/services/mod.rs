//! # 서비스 모듈
//!
//! DB에 의존하지 않는 순수 로직을 모아둔 모듈입니다.
//! - `access`: 접근 필터 (소유자/협업자 가시성 판단)
//! - `pagination`: page/limit 해석과 페이지 자르기

pub mod access;
pub mod pagination;

pub use pagination::*;
