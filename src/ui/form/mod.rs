//! Per-tool form state machine.
//!
//! ```text
//! Idle ──input──→ Editing ──submit──→ Pending ──resolve──→ Resolved
//!                    ↑         └──────(sync tools)──────────→ │
//!                    └──────────────input─────────────────────┘
//! ```
//!
//! One [`FormState`] exists per mounted tool view and is dropped on
//! navigation. Async results carry the token issued at submission and are
//! ignored unless the form is still pending on that token.

mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormPhase, FormState};
