//! Every string the dashboard shows to the user.
//!
//! Widgets and reducers read their text from here, so a translated table can
//! replace this module without touching layout or state code.

use crate::ui::registry::ToolKind;

pub const APP_TITLE: &str = "Developer Toolbox";

pub const WELCOME_TITLE: &str = "Welcome to the Developer Toolbox";
pub const WELCOME_TAGLINE: &str = "A collection of handy tools to simplify everyday tasks.";
pub const WELCOME_HINT: &str = "Pick a tool from the sidebar to get started.";

pub const SIDEBAR_TITLE: &str = " Tools";
pub const INPUT_TITLE: &str = " Input ";
pub const OUTPUT_TITLE: &str = " Output ";
pub const MODE_LABEL: &str = "Mode: ";
pub const MODE_TOGGLE_HINT: &str = "  (Ctrl+T)";

pub const GENERATING: &str = "Generating...";
pub const RESULT_READY: &str = "Done. Ctrl+Y copies the result.";
pub const OUTPUT_COPIED: &str = "Output copied to clipboard";
pub const NOTHING_TO_COPY: &str = "Nothing to copy";

pub const SIDEBAR_HINTS: &str =
    " ↑/↓: Move │ Enter: Open │ 1-3: Jump │ h: Home │ Tab: Form │ q: Quit";
pub const FORM_HINTS: &str =
    " Ctrl+S: Submit │ Ctrl+T: Mode │ Ctrl+Y: Copy │ Ctrl+L: Clear │ Esc: Sidebar │ Ctrl+Q: Quit";

/// Text attached to one tool.
#[derive(Debug)]
pub struct ToolText {
    /// Sidebar entry.
    pub label: &'static str,
    /// Heading of the form.
    pub title: &'static str,
    pub description: &'static str,
    /// Validation message for empty or whitespace-only input.
    pub empty_input: &'static str,
    /// Verb in the submit hint ("Ctrl+S to ...").
    pub action: &'static str,
    pub placeholder: &'static str,
}

static TEXT_GENERATOR: ToolText = ToolText {
    label: "Text Generator",
    title: "Text Generator",
    description: "Type a prompt and let the language model write text for you.",
    empty_input: "Please enter a prompt.",
    action: "generate",
    placeholder: "Example: write a short story about a robot who writes poetry",
};

static JSON_FORMATTER: ToolText = ToolText {
    label: "JSON Formatter",
    title: "JSON Formatter",
    description: "Paste JSON and submit to validate it and see a pretty-printed version.",
    empty_input: "Please enter some JSON to format.",
    action: "format",
    placeholder: r#"{ "name": "John", "age": 30, "isStudent": false }"#,
};

static BASE64_CODEC: ToolText = ToolText {
    label: "Base64 Encoder",
    title: "Base64 Encoder/Decoder",
    description: "Enter text, pick a mode (encode or decode) and submit.",
    empty_input: "Please enter some text to process.",
    action: "encode",
    placeholder: "Hello, world",
};

/// Base64 decode mode swaps in its own verb and sample input.
pub const DECODE_ACTION: &str = "decode";
pub const DECODE_PLACEHOLDER: &str = "SGVsbG8sIHdvcmxk";

pub fn tool_text(kind: ToolKind) -> &'static ToolText {
    match kind {
        ToolKind::TextGenerator => &TEXT_GENERATOR,
        ToolKind::JsonFormatter => &JSON_FORMATTER,
        ToolKind::Base64Codec => &BASE64_CODEC,
    }
}

pub fn submit_hint(action: &str) -> String {
    format!("Ctrl+S to {}", action)
}
