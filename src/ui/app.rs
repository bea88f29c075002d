use crate::catalog::{KanjiRecord, SortKey, StrokeRange, MAX_GRADE};
use crate::config::{Config, ITEMS_PER_PAGE_OPTIONS};
use crate::router::{Route, Router};
use crate::ui::detail::{DetailIntent, DetailReducer, KanjiDetailState};
use crate::ui::list::{KanjiListState, ListIntent, ListReducer};
use crate::ui::mvi::Reducer;
use crate::ui::worker::{FetchCommand, FetchSender};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    router: Router,
    /// Kanji list view-model (MVI pattern).
    list: KanjiListState,
    /// Kanji detail view-model (MVI pattern).
    detail: KanjiDetailState,
    /// True while keystrokes go to the search box.
    search_editing: bool,
    fetch_sender: Option<FetchSender>,
    last_request: u64,
    tick: u64,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            router: Router::default(),
            list: KanjiListState::with_items_per_page(config.list.items_per_page),
            detail: KanjiDetailState::default(),
            search_editing: false,
            fetch_sender: None,
            last_request: 0,
            tick: 0,
        }
    }

    pub fn set_fetch_sender(&mut self, sender: FetchSender) {
        self.fetch_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn route(&self) -> &Route {
        self.router.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.router.can_go_back()
    }

    pub fn list(&self) -> &KanjiListState {
        &self.list
    }

    pub fn detail(&self) -> &KanjiDetailState {
        &self.detail
    }

    /// True while a fetch for the current route is in flight.
    pub fn is_loading(&self) -> bool {
        match self.route() {
            Route::Home => false,
            Route::KanjiList => self.list.is_loading,
            Route::KanjiDetail { .. } => self.detail.is_loading,
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn navigate(&mut self, route: Route) {
        if self.router.push(route) {
            self.on_route_entered();
        }
    }

    pub fn back(&mut self) {
        if self.router.back() {
            self.on_route_entered();
        }
    }

    /// Open the detail view for the highlighted list entry.
    pub fn open_selected(&mut self) {
        let Some(id) = self
            .list
            .selected_record()
            .map(KanjiRecord::id)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
        else {
            return;
        };
        self.navigate(Route::detail(id));
    }

    /// Fetch whatever the current view shows, even if already loaded.
    pub fn refresh(&mut self) {
        match self.route().clone() {
            Route::Home => {}
            Route::KanjiList => self.fetch_list(),
            Route::KanjiDetail { id } => self.fetch_detail(id),
        }
    }

    fn on_route_entered(&mut self) {
        self.search_editing = false;
        match self.route().clone() {
            Route::Home => {}
            Route::KanjiList => {
                if self.list.needs_fetch() {
                    self.fetch_list();
                }
            }
            Route::KanjiDetail { id } => {
                if !self.detail.is_showing(&id) {
                    self.fetch_detail(id);
                }
            }
        }
    }

    // ========================================================================
    // Fetching
    // ========================================================================

    fn fetch_list(&mut self) {
        let request = self.next_request();
        self.dispatch_list(ListIntent::FetchStarted { request });
        if let Err(error) = self.send_command(FetchCommand::List { request }) {
            self.dispatch_list(ListIntent::FetchFailed { request, error });
        }
    }

    fn fetch_detail(&mut self, id: String) {
        let request = self.next_request();
        self.dispatch_detail(DetailIntent::FetchStarted {
            id: id.clone(),
            request,
        });
        if let Err(error) = self.send_command(FetchCommand::Detail { id, request }) {
            self.dispatch_detail(DetailIntent::FetchFailed { request, error });
        }
    }

    pub fn on_list_fetched(&mut self, request: u64, result: Result<Vec<KanjiRecord>, String>) {
        let intent = match result {
            Ok(records) => ListIntent::FetchSucceeded { request, records },
            Err(error) => ListIntent::FetchFailed { request, error },
        };
        self.dispatch_list(intent);
    }

    pub fn on_detail_fetched(&mut self, request: u64, result: Result<KanjiRecord, String>) {
        let intent = match result {
            Ok(record) => DetailIntent::FetchSucceeded { request, record },
            Err(error) => DetailIntent::FetchFailed { request, error },
        };
        self.dispatch_detail(intent);
    }

    fn next_request(&mut self) -> u64 {
        self.last_request += 1;
        self.last_request
    }

    fn send_command(&mut self, command: FetchCommand) -> Result<(), String> {
        let Some(sender) = &self.fetch_sender else {
            return Err("fetch worker not running".to_string());
        };
        sender.try_send(command).map_err(|err| {
            tracing::warn!(error = %err, "Fetch command not sent");
            format!("fetch worker unavailable: {}", err)
        })
    }

    // ========================================================================
    // List controls (MVI pattern)
    // ========================================================================

    pub fn dispatch_list(&mut self, intent: ListIntent) {
        dispatch_mvi!(self, list, ListReducer, intent);
    }

    pub fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, detail, DetailReducer, intent);
    }

    pub fn is_search_editing(&self) -> bool {
        self.search_editing
    }

    pub fn begin_search(&mut self) {
        self.search_editing = true;
    }

    pub fn end_search(&mut self) {
        self.search_editing = false;
    }

    pub fn push_search_char(&mut self, ch: char) {
        let mut term = self.list.filter.search_term.clone();
        term.push(ch);
        self.dispatch_list(ListIntent::SetSearchTerm(term));
    }

    pub fn pop_search_char(&mut self) {
        let mut term = self.list.filter.search_term.clone();
        if term.pop().is_some() {
            self.dispatch_list(ListIntent::SetSearchTerm(term));
        }
    }

    /// Any grade → 1 → … → 6 → any.
    pub fn cycle_grade(&mut self) {
        let next = match self.list.filter.grade.parse::<u32>() {
            Ok(grade) if grade < MAX_GRADE => (grade + 1).to_string(),
            Ok(_) => String::new(),
            Err(_) => "1".to_string(),
        };
        self.dispatch_list(ListIntent::SetGradeFilter(next));
    }

    /// Any → 1-5 → 6-10 → 11-15 → 16+ → any.
    pub fn cycle_stroke_range(&mut self) {
        let next = match self.list.filter.stroke_range {
            None => Some(StrokeRange::ALL[0]),
            Some(current) => StrokeRange::ALL
                .iter()
                .position(|range| *range == current)
                .and_then(|index| StrokeRange::ALL.get(index + 1))
                .copied(),
        };
        self.dispatch_list(ListIntent::SetStrokeFilter(next));
    }

    pub fn cycle_sort(&mut self) {
        let current = self.list.filter.sort_key;
        let index = SortKey::ALL
            .iter()
            .position(|key| *key == current)
            .unwrap_or(0);
        let next = SortKey::ALL[(index + 1) % SortKey::ALL.len()];
        self.dispatch_list(ListIntent::SetSortBy(next));
    }

    /// Step through the page-size options, stopping at either end.
    pub fn step_items_per_page(&mut self, step: isize) {
        let current = self.list.items_per_page();
        let index = ITEMS_PER_PAGE_OPTIONS
            .iter()
            .position(|size| *size == current)
            .unwrap_or(0) as isize;
        let last = ITEMS_PER_PAGE_OPTIONS.len() as isize - 1;
        let next = ITEMS_PER_PAGE_OPTIONS[(index + step).clamp(0, last) as usize];
        if next != current {
            self.dispatch_list(ListIntent::SetItemsPerPage(next));
        }
    }
}
