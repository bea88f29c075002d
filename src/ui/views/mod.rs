//! Body renderers, one per route.

pub mod detail;
pub mod home;
pub mod list;
