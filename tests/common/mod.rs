//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_upstream;

use kanjiview::catalog::KanjiRecord;
use kanjiview::config::ApiConfig;
use kanjiview::ui::list::{KanjiListState, ListIntent, ListReducer};
use kanjiview::ui::mvi::Reducer;

/// Build a record with the fields the list view cares about.
pub fn kanji(character: &str, meaning: &str, grade: u32, strokes: u32) -> KanjiRecord {
    let mut record = KanjiRecord {
        ka_id: format!("ka_{}", character),
        grade: Some(grade),
        kstroke: strokes,
        meaning: meaning.to_string(),
        ..KanjiRecord::default()
    };
    record.kanji.character = character.to_string();
    record.kanji.meaning.english = meaning.to_string();
    record.kanji.strokes.count = strokes;
    record
}

/// `count` distinct records spread over grades 1..=6.
pub fn numbered_records(count: usize) -> Vec<KanjiRecord> {
    (0..count)
        .map(|i| {
            let character = char::from_u32(0x4E00 + i as u32).unwrap_or('?');
            kanji(
                &character.to_string(),
                &format!("meaning {:02}", i),
                (i % 6) as u32 + 1,
                (i % 20) as u32 + 1,
            )
        })
        .collect()
}

/// A list state that has completed one successful fetch.
pub fn loaded_list(records: Vec<KanjiRecord>, items_per_page: usize) -> KanjiListState {
    let state = KanjiListState::with_items_per_page(items_per_page);
    let state = ListReducer::reduce(state, ListIntent::FetchStarted { request: 1 });
    ListReducer::reduce(
        state,
        ListIntent::FetchSucceeded {
            request: 1,
            records,
        },
    )
}

/// API config pointed at a local mock with a fixed key.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        api_key: Some("test-key".to_string()),
        ..ApiConfig::default()
    }
}
