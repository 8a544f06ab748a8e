//! Base64 transcoding over Unicode text.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ToolError;

use super::outcome::CodecOutcome;

/// Direction of the Base64 tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodecMode {
    #[default]
    Encode,
    Decode,
}

impl CodecMode {
    pub fn toggled(self) -> Self {
        match self {
            CodecMode::Encode => CodecMode::Decode,
            CodecMode::Decode => CodecMode::Encode,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CodecMode::Encode => "Encode",
            CodecMode::Decode => "Decode",
        }
    }

    pub fn apply(self, text: &str) -> CodecOutcome {
        match self {
            CodecMode::Encode => encode(text),
            CodecMode::Decode => decode(text),
        }
    }
}

/// Encode the UTF-8 bytes of `text` as standard padded Base64.
pub fn encode(text: &str) -> CodecOutcome {
    CodecOutcome::Success(STANDARD.encode(text.as_bytes()))
}

/// Decode standard Base64 and interpret the bytes as UTF-8.
///
/// ASCII whitespace anywhere in the input is ignored, so wrapped pastes decode.
pub fn decode(text: &str) -> CodecOutcome {
    try_decode(text).into()
}

fn try_decode(text: &str) -> Result<String, ToolError> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD.decode(compact.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}
