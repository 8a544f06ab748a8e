//! Model-View-Intent primitives shared by the navigation shell and the tool
//! forms.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure. Anything with an effect (spawning a generation
//! request, touching the clipboard) happens in [`App`](crate::ui::app::App)
//! around the dispatch.

/// A user action or a completed async call.
pub trait Intent: Send + 'static {}

/// Everything a view needs to render.
///
/// `Default` lets the app move state out of its field during dispatch.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// The only place where state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
