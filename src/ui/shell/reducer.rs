use crate::ui::mvi::Reducer;

use super::intent::ShellIntent;
use super::state::ShellState;

pub struct ShellReducer;

impl Reducer for ShellReducer {
    type State = ShellState;
    type Intent = ShellIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ShellIntent::Navigate { route, index } => {
                // Root and unknown routes keep the cursor where it was.
                let cursor = index.unwrap_or(state.cursor());
                ShellState::new(route, cursor)
            }
            ShellIntent::CursorUp { len } => {
                if len == 0 {
                    return state;
                }
                let current = state.cursor().min(len - 1);
                let cursor = if current == 0 { len - 1 } else { current - 1 };
                ShellState::new(state.location().to_string(), cursor)
            }
            ShellIntent::CursorDown { len } => {
                if len == 0 {
                    return state;
                }
                let current = state.cursor().min(len - 1);
                let cursor = if current + 1 >= len { 0 } else { current + 1 };
                ShellState::new(state.location().to_string(), cursor)
            }
        }
    }
}
