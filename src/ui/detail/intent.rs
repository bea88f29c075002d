use crate::catalog::KanjiRecord;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// A detail fetch for `id` was sent with this token.
    FetchStarted { id: String, request: u64 },
    FetchSucceeded { request: u64, record: KanjiRecord },
    FetchFailed { request: u64, error: String },
}

impl Intent for DetailIntent {}
