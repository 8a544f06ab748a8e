//! Navigation shell state.
//!
//! Tracks the current location and the sidebar cursor. Which entry is
//! active and which view fills the content area are derived from the
//! location by exact-match lookup in the [`ToolRegistry`](crate::ui::registry::ToolRegistry).

mod intent;
mod reducer;
mod state;

pub use intent::ShellIntent;
pub use reducer::ShellReducer;
pub use state::{ContentView, ShellState};
