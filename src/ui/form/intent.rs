use crate::tools::Outcome;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    InsertChar(char),
    /// Bracketed paste.
    InsertText(String),
    Backspace,
    Clear,
    /// Switch Base64 direction. Ignored by other tools.
    ToggleMode,
    /// User pressed submit. `token` identifies this submission.
    Submit { token: u64 },
    /// Async call finished.
    Resolve { token: u64, outcome: Outcome },
    /// Spinner tick while pending.
    AnimationTick,
}

impl Intent for FormIntent {}
