use crate::catalog::FilterState;
use crate::config::ITEMS_PER_PAGE_OPTIONS;
use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::KanjiListState;
use crate::ui::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = KanjiListState;
    type Intent = ListIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::FetchStarted { request } => {
                state.latest_request = request;
                state.is_loading = true;
                state
            }
            ListIntent::FetchSucceeded { request, records } => {
                if request != state.latest_request {
                    return state;
                }
                state.records = records;
                state.is_loading = false;
                state.error = None;
                state.loaded = true;
                // Keep the page if it still exists in the new collection.
                if state.current_page_out_of_range() {
                    state.reset_page();
                }
                state.clamp_selection();
                state
            }
            ListIntent::FetchFailed { request, error } => {
                if request != state.latest_request {
                    return state;
                }
                state.is_loading = false;
                state.error = Some(error);
                state
            }
            ListIntent::SetSearchTerm(term) => {
                state.filter.search_term = term;
                state.reset_page();
                state
            }
            ListIntent::SetGradeFilter(grade) => {
                state.filter.grade = grade;
                state.reset_page();
                state
            }
            ListIntent::SetStrokeFilter(range) => {
                state.filter.stroke_range = range;
                state.reset_page();
                state
            }
            ListIntent::SetSortBy(key) => {
                state.filter.sort_key = key;
                state.reset_page();
                state
            }
            ListIntent::ApplyFilters(patch) => {
                state.filter.apply(patch);
                state.reset_page();
                state
            }
            ListIntent::ClearFilters => {
                state.filter = FilterState::default();
                state.reset_page();
                state
            }
            ListIntent::GoToPage(page) => {
                if page >= 1 && page <= state.total_pages() {
                    state.pagination.current_page = page;
                    state.selected = 0;
                }
                state
            }
            ListIntent::NextPage => {
                let next = state.pagination.current_page + 1;
                Self::reduce(state, ListIntent::GoToPage(next))
            }
            ListIntent::PrevPage => {
                let prev = state.pagination.current_page.saturating_sub(1);
                Self::reduce(state, ListIntent::GoToPage(prev))
            }
            ListIntent::SetItemsPerPage(items) => {
                if ITEMS_PER_PAGE_OPTIONS.contains(&items) {
                    state.pagination.items_per_page = items;
                    state.reset_page();
                }
                state
            }
            ListIntent::ResetPagination => {
                state.reset_page();
                state
            }
            ListIntent::MoveSelection(delta) => {
                let len = state.paginated().len();
                if len == 0 {
                    state.selected = 0;
                } else {
                    let max = (len - 1) as isize;
                    state.selected = (state.selected as isize + delta).clamp(0, max) as usize;
                }
                state
            }
        }
    }
}

impl KanjiListState {
    fn reset_page(&mut self) {
        self.pagination.current_page = 1;
        self.selected = 0;
    }

    fn current_page_out_of_range(&self) -> bool {
        self.pagination.current_page > self.total_pages().max(1)
    }

    fn clamp_selection(&mut self) {
        let len = self.paginated().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KanjiRecord;

    fn records(n: usize) -> Vec<KanjiRecord> {
        (0..n)
            .map(|i| {
                let mut record = KanjiRecord {
                    grade: Some((i % 6) as u32 + 1),
                    kstroke: (i % 20) as u32 + 1,
                    ..KanjiRecord::default()
                };
                record.kanji.character = format!("k{:02}", i);
                record
            })
            .collect()
    }

    fn loaded(n: usize, items_per_page: usize) -> KanjiListState {
        let state = KanjiListState::with_items_per_page(items_per_page);
        let state = ListReducer::reduce(state, ListIntent::FetchStarted { request: 1 });
        ListReducer::reduce(
            state,
            ListIntent::FetchSucceeded {
                request: 1,
                records: records(n),
            },
        )
    }

    #[test]
    fn next_page_stops_at_last_page() {
        let mut state = loaded(13, 6);
        for _ in 0..5 {
            state = ListReducer::reduce(state, ListIntent::NextPage);
        }
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.paginated().len(), 1);
    }

    #[test]
    fn prev_page_stops_at_first_page() {
        let state = loaded(13, 6);
        let state = ListReducer::reduce(state, ListIntent::PrevPage);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn selection_clamps_to_page() {
        let state = loaded(8, 6);
        let state = ListReducer::reduce(state, ListIntent::MoveSelection(10));
        assert_eq!(state.selected, 5);
        let state = ListReducer::reduce(state, ListIntent::NextPage);
        assert_eq!(state.selected, 0);
        let state = ListReducer::reduce(state, ListIntent::MoveSelection(-3));
        assert_eq!(state.selected, 0);
        let state = ListReducer::reduce(state, ListIntent::MoveSelection(1));
        assert_eq!(state.selected, 1);
        assert_eq!(state.selected_record().map(|r| r.character()), Some("k07"));
    }

    #[test]
    fn refetch_keeps_valid_page() {
        let state = loaded(20, 6);
        let state = ListReducer::reduce(state, ListIntent::GoToPage(3));
        let state = ListReducer::reduce(state, ListIntent::FetchStarted { request: 2 });
        let state = ListReducer::reduce(
            state,
            ListIntent::FetchSucceeded {
                request: 2,
                records: records(20),
            },
        );
        assert_eq!(state.current_page(), 3);

        let state = ListReducer::reduce(state, ListIntent::FetchStarted { request: 3 });
        let state = ListReducer::reduce(
            state,
            ListIntent::FetchSucceeded {
                request: 3,
                records: records(4),
            },
        );
        assert_eq!(state.current_page(), 1);
    }
}
