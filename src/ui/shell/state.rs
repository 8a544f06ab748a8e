use crate::ui::mvi::UiState;
use crate::ui::registry::{ToolDescriptor, ToolKind, ToolRegistry, ROOT_ROUTE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    location: String,
    /// Highlighted sidebar row (keyboard focus, not the active route).
    cursor: usize,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            location: ROOT_ROUTE.to_string(),
            cursor: 0,
        }
    }
}

impl UiState for ShellState {}

/// What the content area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentView {
    Welcome,
    Tool(ToolKind),
}

impl ShellState {
    pub(super) fn new(location: String, cursor: usize) -> Self {
        Self { location, cursor }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Descriptor whose route exactly matches the location.
    pub fn active_tool<'a>(&self, registry: &'a ToolRegistry) -> Option<&'a ToolDescriptor> {
        registry.lookup(&self.location)
    }

    pub fn is_active(&self, descriptor: &ToolDescriptor) -> bool {
        descriptor.route == self.location
    }

    pub fn content_view(&self, registry: &ToolRegistry) -> ContentView {
        match self.active_tool(registry) {
            Some(tool) => ContentView::Tool(tool.kind),
            None => ContentView::Welcome,
        }
    }
}
