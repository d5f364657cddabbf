//! Core library for Tweetscope: the tweet data model, active filter state,
//! backend query-parameter building, client-side sorting, date-range
//! arithmetic, and xlsx export.
//!
//! Everything in this crate is pure and synchronous; network access lives in
//! `tweetscope-api` and presentation in the desktop app and CLI.

pub mod dates;
pub mod export;
pub mod query;
pub mod select;
pub mod sort;
pub mod types;
