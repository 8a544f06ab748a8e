use crate::error::{ErrorKind, ToolError};

/// Result of a single tool invocation, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Failure { kind: ErrorKind, message: String },
}

pub type GenerationOutcome = Outcome;
pub type FormatOutcome = Outcome;
pub type CodecOutcome = Outcome;

impl Outcome {
    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Outcome::Failure {
            kind,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Text of a successful outcome.
    pub fn text(&self) -> Option<&str> {
        match self {
            Outcome::Success(text) => Some(text),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure { kind, .. } => Some(*kind),
        }
    }
}

impl From<Result<String, ToolError>> for Outcome {
    fn from(result: Result<String, ToolError>) -> Self {
        match result {
            Ok(text) => Outcome::Success(text),
            Err(err) => Outcome::Failure {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_err_keeps_classification() {
        let outcome = Outcome::from(Err(ToolError::MissingCredential));
        assert_eq!(outcome.error_kind(), Some(ErrorKind::ConfigError));
        assert_eq!(outcome.text(), None);
    }

    #[test]
    fn from_ok_is_success() {
        let outcome = Outcome::from(Ok("done".to_string()));
        assert!(outcome.is_success());
        assert_eq!(outcome.text(), Some("done"));
    }
}
