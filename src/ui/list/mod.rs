//! Kanji list view-model.
//!
//! Holds the fetched collection with its filter and pagination criteria.
//! The visible page is derived on demand through [`crate::catalog::derive`].

mod intent;
mod reducer;
mod state;

pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::KanjiListState;
