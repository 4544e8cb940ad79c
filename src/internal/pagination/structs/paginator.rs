use std::ops::Range;

use tracing::debug;

use super::pagination_error::PaginationError;

/// 每页默认数据条数
pub const DEFAULT_PER_PAGE: u32 = 10;

/// 最小页码
pub const MIN_PAGE: u32 = 1;

/// 分页计数器：记录总页数、每页条数和当前页。
///
/// 总页数为 0 时仍视为有 1 页，当前页始终落在 `[MIN_PAGE, max_page()]` 内。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total_pages: u32,
    per_page: u32,
    current_page: u32,
}

impl Paginator {
    pub fn new(total_pages: u32) -> Self {
        Self {
            total_pages,
            ..Self::default()
        }
    }

    /// 设置每页条数
    pub fn with_per_page(mut self, per_page: u32) -> Result<Self, PaginationError> {
        if per_page == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        self.per_page = per_page;
        Ok(self)
    }

    /// 重新设置总页数，当前页超出新范围时收回到最后一页
    pub fn initial(&mut self, total_pages: u32) {
        self.total_pages = total_pages;
        if self.current_page > self.max_page() {
            debug!(
                from = self.current_page,
                to = self.max_page(),
                "current page clamped after re-init"
            );
            self.current_page = self.max_page();
        }
    }

    /// 跳转到指定页，返回跳转后的页码
    pub fn change_page(&mut self, page: u32) -> Result<u32, PaginationError> {
        let max = self.max_page();
        if !(MIN_PAGE..=max).contains(&page) {
            return Err(PaginationError::PageOutOfRange {
                page,
                min: MIN_PAGE,
                max,
            });
        }
        self.current_page = page;
        Ok(page)
    }

    /// 下一页，已在最后一页时保持不动
    pub fn next_page(&mut self) -> u32 {
        self.current_page = self.current_page.saturating_add(1).min(self.max_page());
        self.current_page
    }

    /// 上一页，已在第一页时保持不动
    pub fn prev_page(&mut self) -> u32 {
        self.current_page = self.current_page.saturating_sub(1).max(MIN_PAGE);
        self.current_page
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// 可跳转的最大页码
    pub fn max_page(&self) -> u32 {
        self.total_pages.max(MIN_PAGE)
    }

    /// 当前页对应的数据下标区间（从 0 开始，左闭右开）
    pub fn item_range(&self) -> Range<u64> {
        let start = u64::from(self.current_page - MIN_PAGE) * u64::from(self.per_page);
        start..start + u64::from(self.per_page)
    }

    /// 根据总条数与每页条数计算总页数（向上取整）
    pub fn page_count(total_items: u64, per_page: u32) -> Result<u32, PaginationError> {
        if per_page == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        let pages = total_items.div_ceil(u64::from(per_page));
        Ok(u32::try_from(pages).unwrap_or(u32::MAX))
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            total_pages: 0,
            per_page: DEFAULT_PER_PAGE,
            current_page: MIN_PAGE,
        }
    }
}
