//! Page window over the filtered list.

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// 1-based.
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: 12,
        }
    }
}

/// Summary of the visible window, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationInfo {
    /// 1-based index of the first visible item; 0 when nothing matches.
    pub start: usize,
    /// 1-based index of the last visible item, clamped to `total`.
    pub end: usize,
    pub total: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PaginationState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.items_per_page.max(1))
    }

    /// Zero-based `[start, end)` of the current page, unclamped.
    pub fn window(&self) -> (usize, usize) {
        let start = self.current_page.saturating_sub(1) * self.items_per_page;
        (start, start + self.items_per_page)
    }

    /// The current page of `items`. Out-of-range pages yield an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.window();
        let start = start.min(items.len());
        let end = end.min(items.len());
        &items[start..end]
    }

    pub fn info(&self, total: usize) -> PaginationInfo {
        let total_pages = self.total_pages(total);
        let start = if total == 0 {
            0
        } else {
            self.window().0 + 1
        };
        PaginationInfo {
            start,
            end: (self.current_page * self.items_per_page).min(total),
            total,
            current_page: self.current_page,
            total_pages,
            has_next_page: self.current_page < total_pages,
            has_prev_page: self.current_page > 1,
        }
    }
}
