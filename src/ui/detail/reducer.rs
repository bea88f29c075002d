use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::KanjiDetailState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = KanjiDetailState;
    type Intent = DetailIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::FetchStarted { id, request } => {
                // A different kanji must not show the previous one's data.
                if state.id.as_deref() != Some(id.as_str()) {
                    state.record = None;
                    state.error = None;
                }
                state.id = Some(id);
                state.latest_request = request;
                state.is_loading = true;
                state
            }
            DetailIntent::FetchSucceeded { request, record } => {
                if request != state.latest_request {
                    return state;
                }
                state.record = Some(record);
                state.error = None;
                state.is_loading = false;
                state
            }
            DetailIntent::FetchFailed { request, error } => {
                if request != state.latest_request {
                    return state;
                }
                state.error = Some(error);
                state.is_loading = false;
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KanjiRecord;

    fn record(character: &str) -> KanjiRecord {
        let mut record = KanjiRecord::default();
        record.kanji.character = character.to_string();
        record
    }

    #[test]
    fn started_sets_loading_and_id() {
        let state = DetailReducer::reduce(
            KanjiDetailState::default(),
            DetailIntent::FetchStarted {
                id: "水".to_string(),
                request: 1,
            },
        );
        assert!(state.is_loading);
        assert_eq!(state.id.as_deref(), Some("水"));
        assert!(state.is_showing("水"));
        assert!(!state.is_showing("火"));
    }

    #[test]
    fn refetch_same_id_keeps_record_until_outcome() {
        let state = DetailReducer::reduce(
            KanjiDetailState::default(),
            DetailIntent::FetchStarted {
                id: "水".to_string(),
                request: 1,
            },
        );
        let state = DetailReducer::reduce(
            state,
            DetailIntent::FetchSucceeded {
                request: 1,
                record: record("水"),
            },
        );
        let state = DetailReducer::reduce(
            state,
            DetailIntent::FetchStarted {
                id: "水".to_string(),
                request: 2,
            },
        );
        assert!(state.record.is_some());
        assert!(state.is_loading);
    }
}
