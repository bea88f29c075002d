//! Browse kanji from the Kanji Alive catalog in the terminal.

pub mod api;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod router;
pub mod ui;
