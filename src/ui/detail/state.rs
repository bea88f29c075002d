use crate::catalog::KanjiRecord;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct KanjiDetailState {
    /// Identifier of the last requested kanji.
    pub id: Option<String>,
    pub record: Option<KanjiRecord>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub latest_request: u64,
}

impl UiState for KanjiDetailState {}

impl KanjiDetailState {
    /// True when `id` is already shown or being fetched.
    pub fn is_showing(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id) && (self.is_loading || self.record.is_some())
    }
}
