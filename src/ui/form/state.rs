use crate::tools::{CodecMode, Outcome};
use crate::ui::mvi::UiState;
use crate::ui::registry::ToolKind;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Empty input, no outcome.
    #[default]
    Idle,
    /// Input present, no outcome yet.
    Editing,
    /// Waiting on the generation call issued with `token`.
    Pending { token: u64, animation_tick: u8 },
    Resolved(Outcome),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    tool: ToolKind,
    input: String,
    mode: CodecMode,
    phase: FormPhase,
}

impl UiState for FormState {}

impl FormState {
    /// Fresh form for `tool` in the `Idle` phase.
    pub fn new(tool: ToolKind) -> Self {
        Self {
            tool,
            ..Self::default()
        }
    }

    pub(super) fn with(tool: ToolKind, input: String, mode: CodecMode, phase: FormPhase) -> Self {
        Self {
            tool,
            input,
            mode,
            phase,
        }
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn mode(&self) -> CodecMode {
        self.mode
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, FormPhase::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, FormPhase::Pending { .. })
    }

    /// Token of the in-flight submission.
    pub fn pending_token(&self) -> Option<u64> {
        match self.phase {
            FormPhase::Pending { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn animation_tick(&self) -> u8 {
        match self.phase {
            FormPhase::Pending { animation_tick, .. } => animation_tick,
            _ => 0,
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            FormPhase::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Submit control is disabled while a call is in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_is_idle() {
        let form = FormState::new(ToolKind::JsonFormatter);
        assert!(form.is_idle());
        assert_eq!(form.tool(), ToolKind::JsonFormatter);
        assert_eq!(form.input(), "");
        assert!(form.outcome().is_none());
        assert!(form.can_submit());
    }

    #[test]
    fn pending_accessors() {
        let form = FormState::with(
            ToolKind::TextGenerator,
            "hi".to_string(),
            CodecMode::Encode,
            FormPhase::Pending {
                token: 7,
                animation_tick: 3,
            },
        );
        assert_eq!(form.pending_token(), Some(7));
        assert_eq!(form.animation_tick(), 3);
        assert!(!form.can_submit());
    }
}
