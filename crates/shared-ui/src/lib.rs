//! Presentational components shared by every page of the app.
//!
//! Each component lives in `components/<name>/` with its own stylesheet,
//! pulled in through `asset!` the first time the component renders.

pub mod components;

pub use components::*;
