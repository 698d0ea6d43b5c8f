//! # 페이지네이션(Pagination)
//!
//! 목록 조회의 `page`/`limit` 파라미터를 해석합니다.
//!
//! - `limit`이 없거나 0이면 10, 최대 100
//! - `page`가 없거나 0이면 1
//! - 건너뛸 행 수 = `(page - 1) * limit`
//!
//! 페이지는 접근 필터를 통과한 행들에 적용됩니다.
//! 그래서 마지막 페이지가 아니라면 항상 `limit`개의 보이는 행이 채워집니다.

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        let limit = match limit {
            None | Some(0) => DEFAULT_LIMIT,
            Some(n) => n.min(MAX_LIMIT),
        };
        let page = match page {
            None | Some(0) => 1,
            Some(n) => n,
        };
        Self { page, limit }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// 앞에서 건너뛸 행 수. 큰 페이지 번호에서도 넘치지 않도록 u64로 계산합니다.
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// 정렬된 행 목록에서 이 페이지에 해당하는 부분만 잘라냅니다.
    pub fn apply<T>(&self, rows: Vec<T>) -> Vec<T> {
        let skip = usize::try_from(self.skip()).unwrap_or(usize::MAX);
        rows.into_iter().skip(skip).take(self.limit as usize).collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}
