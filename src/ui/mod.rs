//! Full-screen terminal picker driving a [`SearchSession`](crate::search::SearchSession).
//!
//! [`App`] owns the session together with the two collaborators it reports
//! to: [`ResultsPane`] renders the list and [`OutcomeRecorder`] captures what
//! the user accepted. [`run`] pumps terminal events until the user accepts a
//! row or cancels.

mod actions;
mod input;
mod outcome;
mod pane;
mod render;
mod runtime;
mod state;

pub use input::SearchInput;
pub use outcome::{OutcomeRecorder, SearchOutcome, SearchSelection};
pub use pane::ResultsPane;
pub use runtime::run;
pub use state::{App, UiOptions};
