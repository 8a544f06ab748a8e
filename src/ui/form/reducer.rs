use crate::error::ToolError;
use crate::tools::{json, Outcome};
use crate::ui::mvi::Reducer;
use crate::ui::registry::ToolKind;

use super::intent::FormIntent;
use super::state::{FormPhase, FormState};

/// Reducer for the tool forms.
///
/// Synchronous tools run inside the reducer since their processing
/// functions are pure. The generation call is spawned by the caller once
/// the state reports `Pending` with the submitted token.
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::InsertChar(c) => edit(state, |input| input.push(c)),
            FormIntent::InsertText(text) => edit(state, |input| input.push_str(&text)),
            FormIntent::Backspace => edit(state, |input| {
                input.pop();
            }),
            FormIntent::Clear => edit(state, String::clear),

            FormIntent::ToggleMode => {
                if state.tool() != ToolKind::Base64Codec || state.is_pending() {
                    return state;
                }
                let phase = editing_phase(state.input());
                FormState::with(
                    state.tool(),
                    state.input().to_string(),
                    state.mode().toggled(),
                    phase,
                )
            }

            FormIntent::Submit { token } => {
                if state.is_pending() {
                    return state;
                }
                let phase = submit(&state, token);
                FormState::with(state.tool(), state.input().to_string(), state.mode(), phase)
            }

            FormIntent::Resolve { token, outcome } => match state.pending_token() {
                Some(pending) if pending == token => FormState::with(
                    state.tool(),
                    state.input().to_string(),
                    state.mode(),
                    FormPhase::Resolved(outcome),
                ),
                // Stale or unexpected result
                _ => state,
            },

            FormIntent::AnimationTick => match state.phase() {
                FormPhase::Pending {
                    token,
                    animation_tick,
                } => {
                    let phase = FormPhase::Pending {
                        token: *token,
                        animation_tick: animation_tick.wrapping_add(1),
                    };
                    FormState::with(state.tool(), state.input().to_string(), state.mode(), phase)
                }
                _ => state,
            },
        }
    }
}

/// Apply an input change. A changed input clears any outcome; while pending
/// the phase is left alone.
fn edit<F: FnOnce(&mut String)>(state: FormState, change: F) -> FormState {
    let mut input = state.input().to_string();
    change(&mut input);
    if input == state.input() {
        return state;
    }
    let phase = if state.is_pending() {
        state.phase().clone()
    } else {
        editing_phase(&input)
    };
    FormState::with(state.tool(), input, state.mode(), phase)
}

fn editing_phase(input: &str) -> FormPhase {
    if input.is_empty() {
        FormPhase::Idle
    } else {
        FormPhase::Editing
    }
}

fn submit(state: &FormState, token: u64) -> FormPhase {
    if state.input().trim().is_empty() {
        let err = ToolError::Validation(state.tool().empty_input_message());
        return FormPhase::Resolved(Err::<String, _>(err).into());
    }

    let outcome: Outcome = match state.tool() {
        ToolKind::TextGenerator => {
            return FormPhase::Pending {
                token,
                animation_tick: 0,
            }
        }
        ToolKind::JsonFormatter => json::format(state.input()),
        ToolKind::Base64Codec => state.mode().apply(state.input()),
    };
    FormPhase::Resolved(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::tools::CodecMode;

    fn reduce_all(state: FormState, intents: Vec<FormIntent>) -> FormState {
        intents.into_iter().fold(state, FormReducer::reduce)
    }

    fn typed(tool: ToolKind, text: &str) -> FormState {
        FormReducer::reduce(FormState::new(tool), FormIntent::InsertText(text.to_string()))
    }

    #[test]
    fn typing_moves_idle_to_editing() {
        let state = FormReducer::reduce(
            FormState::new(ToolKind::JsonFormatter),
            FormIntent::InsertChar('{'),
        );
        assert_eq!(state.phase(), &FormPhase::Editing);
        assert_eq!(state.input(), "{");
    }

    #[test]
    fn deleting_everything_returns_to_idle() {
        let state = reduce_all(
            typed(ToolKind::JsonFormatter, "ab"),
            vec![FormIntent::Backspace, FormIntent::Backspace],
        );
        assert!(state.is_idle());
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let state = FormReducer::reduce(FormState::new(ToolKind::Base64Codec), FormIntent::Backspace);
        assert_eq!(state, FormState::new(ToolKind::Base64Codec));
    }

    #[test]
    fn whitespace_submit_is_validation_failure() {
        let state = FormReducer::reduce(
            typed(ToolKind::TextGenerator, "  \n\t "),
            FormIntent::Submit { token: 1 },
        );
        assert_eq!(
            state.outcome().and_then(Outcome::error_kind),
            Some(ErrorKind::ValidationError)
        );
        assert!(!state.is_pending());
    }

    #[test]
    fn empty_submit_from_idle_is_validation_failure() {
        let state = FormReducer::reduce(
            FormState::new(ToolKind::JsonFormatter),
            FormIntent::Submit { token: 1 },
        );
        assert_eq!(
            state.outcome(),
            Some(&Outcome::failure(
                ErrorKind::ValidationError,
                "Please enter some JSON to format."
            ))
        );
    }

    #[test]
    fn json_submit_resolves_synchronously() {
        let state = FormReducer::reduce(
            typed(ToolKind::JsonFormatter, "[1]"),
            FormIntent::Submit { token: 1 },
        );
        assert_eq!(
            state.outcome(),
            Some(&Outcome::Success("[\n  1\n]".to_string()))
        );
    }

    #[test]
    fn json_submit_reports_parse_error() {
        let state = FormReducer::reduce(
            typed(ToolKind::JsonFormatter, "{invalid"),
            FormIntent::Submit { token: 1 },
        );
        assert_eq!(
            state.outcome().and_then(Outcome::error_kind),
            Some(ErrorKind::ParseError)
        );
    }

    #[test]
    fn base64_submit_uses_mode() {
        let encoded = FormReducer::reduce(
            typed(ToolKind::Base64Codec, "hello"),
            FormIntent::Submit { token: 1 },
        );
        assert_eq!(encoded.outcome().and_then(Outcome::text), Some("aGVsbG8="));

        let decoded = reduce_all(
            typed(ToolKind::Base64Codec, "aGVsbG8="),
            vec![FormIntent::ToggleMode, FormIntent::Submit { token: 2 }],
        );
        assert_eq!(decoded.mode(), CodecMode::Decode);
        assert_eq!(decoded.outcome().and_then(Outcome::text), Some("hello"));
    }

    #[test]
    fn toggle_mode_clears_outcome() {
        let state = reduce_all(
            typed(ToolKind::Base64Codec, "hello"),
            vec![FormIntent::Submit { token: 1 }, FormIntent::ToggleMode],
        );
        assert_eq!(state.phase(), &FormPhase::Editing);
        assert!(state.outcome().is_none());
    }

    #[test]
    fn toggle_mode_ignored_by_other_tools() {
        let state = typed(ToolKind::JsonFormatter, "{}");
        let toggled = FormReducer::reduce(state.clone(), FormIntent::ToggleMode);
        assert_eq!(toggled, state);
    }

    #[test]
    fn generator_submit_goes_pending() {
        let state = FormReducer::reduce(
            typed(ToolKind::TextGenerator, "write a haiku"),
            FormIntent::Submit { token: 5 },
        );
        assert_eq!(state.pending_token(), Some(5));
    }

    #[test]
    fn submit_while_pending_is_noop() {
        let pending = FormReducer::reduce(
            typed(ToolKind::TextGenerator, "prompt"),
            FormIntent::Submit { token: 5 },
        );
        let again = FormReducer::reduce(pending.clone(), FormIntent::Submit { token: 6 });
        assert_eq!(again, pending);
    }

    #[test]
    fn matching_resolve_applies_outcome() {
        let state = reduce_all(
            typed(ToolKind::TextGenerator, "prompt"),
            vec![
                FormIntent::Submit { token: 5 },
                FormIntent::Resolve {
                    token: 5,
                    outcome: Outcome::Success("generated".to_string()),
                },
            ],
        );
        assert_eq!(state.outcome().and_then(Outcome::text), Some("generated"));
    }

    #[test]
    fn stale_resolve_is_discarded() {
        let pending = FormReducer::reduce(
            typed(ToolKind::TextGenerator, "prompt"),
            FormIntent::Submit { token: 5 },
        );
        let state = FormReducer::reduce(
            pending.clone(),
            FormIntent::Resolve {
                token: 4,
                outcome: Outcome::Success("old".to_string()),
            },
        );
        assert_eq!(state, pending);

        let idle = FormState::new(ToolKind::TextGenerator);
        let state = FormReducer::reduce(
            idle.clone(),
            FormIntent::Resolve {
                token: 5,
                outcome: Outcome::Success("late".to_string()),
            },
        );
        assert_eq!(state, idle);
    }

    #[test]
    fn editing_while_pending_stays_pending() {
        let state = reduce_all(
            typed(ToolKind::TextGenerator, "prompt"),
            vec![FormIntent::Submit { token: 5 }, FormIntent::InsertChar('!')],
        );
        assert_eq!(state.pending_token(), Some(5));
        assert_eq!(state.input(), "prompt!");
    }

    #[test]
    fn input_change_after_resolution_returns_to_editing() {
        let state = reduce_all(
            typed(ToolKind::JsonFormatter, "{}"),
            vec![FormIntent::Submit { token: 1 }, FormIntent::InsertChar(' ')],
        );
        assert_eq!(state.phase(), &FormPhase::Editing);
    }

    #[test]
    fn resubmit_after_resolution_runs_again() {
        let state = reduce_all(
            typed(ToolKind::JsonFormatter, "{invalid"),
            vec![
                FormIntent::Submit { token: 1 },
                FormIntent::Clear,
                FormIntent::InsertText("true".to_string()),
                FormIntent::Submit { token: 2 },
            ],
        );
        assert_eq!(state.outcome().and_then(Outcome::text), Some("true"));
    }

    #[test]
    fn animation_tick_only_advances_pending() {
        let pending = FormReducer::reduce(
            typed(ToolKind::TextGenerator, "prompt"),
            FormIntent::Submit { token: 1 },
        );
        let ticked = FormReducer::reduce(pending, FormIntent::AnimationTick);
        assert_eq!(ticked.animation_tick(), 1);

        let idle = FormState::new(ToolKind::TextGenerator);
        assert_eq!(FormReducer::reduce(idle.clone(), FormIntent::AnimationTick), idle);
    }
}
