use crate::catalog::{FilterPatch, KanjiRecord, SortKey, StrokeRange};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListIntent {
    /// A list fetch was sent with this token.
    FetchStarted { request: u64 },
    FetchSucceeded {
        request: u64,
        records: Vec<KanjiRecord>,
    },
    FetchFailed { request: u64, error: String },

    SetSearchTerm(String),
    /// Empty string clears the grade filter.
    SetGradeFilter(String),
    SetStrokeFilter(Option<StrokeRange>),
    SetSortBy(SortKey),
    ApplyFilters(FilterPatch),
    ClearFilters,

    /// Ignored unless `1 <= page <= total_pages`.
    GoToPage(usize),
    NextPage,
    PrevPage,
    /// Ignored unless the size is one of the offered options.
    SetItemsPerPage(usize),
    ResetPagination,

    /// Move the cursor within the visible page.
    MoveSelection(isize),
}

impl Intent for ListIntent {}
