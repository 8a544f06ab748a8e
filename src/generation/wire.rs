//! Request and response bodies for the `generateContent` API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content<'a> {
    pub role: &'static str,
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestPart<'a> {
    pub text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    pub fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate, if it has any.
    pub fn text(self) -> Option<String> {
        let parts = self.candidates.into_iter().next()?.content?.parts;
        let texts: Vec<String> = parts.into_iter().filter_map(|part| part.text).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}
