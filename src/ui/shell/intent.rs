use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ShellIntent {
    /// Explicit link activation. `index` is the registry position of
    /// `route`, or `None` for the root and unknown routes.
    Navigate { route: String, index: Option<usize> },
    /// Move the sidebar cursor; wraps around `len` entries.
    CursorUp { len: usize },
    CursorDown { len: usize },
}

impl Intent for ShellIntent {}
