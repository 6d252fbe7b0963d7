//! Incremental content search over ripgrep, with a terminal picker.
//!
//! The [`search`] module holds the session controller and its collaborators
//! and has no terminal dependencies; [`ui`] wires it to a ratatui front end.

pub mod app_dirs;
pub mod logging;
pub mod query;
pub mod search;
pub mod ui;

pub use query::{Query, normalize};
pub use search::{SearchSession, SessionConfig};
pub use ui::{SearchOutcome, SearchSelection, UiOptions, run};
