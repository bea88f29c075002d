use crate::catalog::{
    derive, filter_and_sort, CatalogView, FilterState, KanjiRecord, PaginationInfo,
    PaginationState,
};
use crate::config::ITEMS_PER_PAGE_OPTIONS;
use crate::ui::mvi::UiState;

/// State of the kanji list view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KanjiListState {
    /// Cleaned collection as fetched. Only replaced by a successful fetch.
    pub records: Vec<KanjiRecord>,
    pub filter: FilterState,
    pub pagination: PaginationState,
    pub is_loading: bool,
    /// Message of the last failed fetch.
    pub error: Option<String>,
    /// Cursor within the visible page.
    pub selected: usize,
    /// True once a fetch has succeeded.
    pub loaded: bool,
    /// Token of the most recent fetch; older responses are dropped.
    pub latest_request: u64,
}

impl UiState for KanjiListState {}

impl KanjiListState {
    pub fn with_items_per_page(items_per_page: usize) -> Self {
        Self {
            pagination: PaginationState::new(items_per_page),
            ..Self::default()
        }
    }

    /// The unfiltered collection.
    pub fn raw(&self) -> &[KanjiRecord] {
        &self.records
    }

    /// Whole filtered and sorted list.
    pub fn filtered(&self) -> Vec<&KanjiRecord> {
        filter_and_sort(&self.records, &self.filter)
    }

    /// Visible page and its summary.
    pub fn view(&self) -> CatalogView<'_> {
        derive(&self.records, &self.filter, &self.pagination)
    }

    pub fn paginated(&self) -> Vec<&KanjiRecord> {
        self.view().page
    }

    pub fn pagination_info(&self) -> PaginationInfo {
        self.view().info
    }

    pub fn total_results(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.total_results())
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.pagination.items_per_page
    }

    pub fn items_per_page_options(&self) -> &'static [usize] {
        &ITEMS_PER_PAGE_OPTIONS
    }

    /// Snapshot of the four filter fields.
    pub fn filter_state(&self) -> FilterState {
        self.filter.clone()
    }

    pub fn has_active_filters(&self) -> bool {
        self.filter.is_active()
    }

    pub fn selected_record(&self) -> Option<&KanjiRecord> {
        self.paginated().get(self.selected).copied()
    }

    /// The list needs a fetch when nothing has loaded and none is in flight.
    pub fn needs_fetch(&self) -> bool {
        !self.loaded && !self.is_loading
    }
}
