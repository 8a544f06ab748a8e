//! Static table of navigable tools.

use std::collections::HashMap;
use thiserror::Error;

use crate::ui::messages::tool_text;

/// Path of the welcome view.
pub const ROOT_ROUTE: &str = "/";

/// The closed set of tools the dashboard offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    #[default]
    TextGenerator,
    JsonFormatter,
    Base64Codec,
}

impl ToolKind {
    pub fn title(self) -> &'static str {
        tool_text(self).title
    }

    pub fn description(self) -> &'static str {
        tool_text(self).description
    }

    /// Message shown when submitting empty input.
    pub fn empty_input_message(self) -> &'static str {
        tool_text(self).empty_input
    }
}

/// One navigable entry in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub route: &'static str,
    pub display_name: &'static str,
    pub icon: &'static str,
    pub kind: ToolKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate route '{0}'")]
    DuplicateRoute(&'static str),

    #[error("Route '{0}' is reserved for the welcome view")]
    ReservedRoute(&'static str),
}

/// Ordered, immutable set of tool descriptors with O(1) route lookup.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    by_route: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Build a registry, rejecting duplicate or reserved routes.
    pub fn from_descriptors(tools: Vec<ToolDescriptor>) -> Result<Self, RegistryError> {
        let mut by_route = HashMap::with_capacity(tools.len());
        for (index, tool) in tools.iter().enumerate() {
            if tool.route == ROOT_ROUTE {
                return Err(RegistryError::ReservedRoute(tool.route));
            }
            if by_route.insert(tool.route, index).is_some() {
                return Err(RegistryError::DuplicateRoute(tool.route));
            }
        }
        Ok(Self { tools, by_route })
    }

    /// The three built-in tools in display order.
    pub fn standard() -> Self {
        let tools = vec![
            ToolDescriptor {
                route: "/text-generator",
                display_name: tool_text(ToolKind::TextGenerator).label,
                icon: "✦",
                kind: ToolKind::TextGenerator,
            },
            ToolDescriptor {
                route: "/json-formatter",
                display_name: tool_text(ToolKind::JsonFormatter).label,
                icon: "{}",
                kind: ToolKind::JsonFormatter,
            },
            ToolDescriptor {
                route: "/base64-encoder",
                display_name: tool_text(ToolKind::Base64Codec).label,
                icon: "⇄",
                kind: ToolKind::Base64Codec,
            },
        ];
        Self::from_descriptors(tools).expect("built-in tool routes are unique and not reserved")
    }

    pub fn all_tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Exact-match lookup.
    pub fn lookup(&self, route: &str) -> Option<&ToolDescriptor> {
        self.index_of(route).map(|index| &self.tools[index])
    }

    /// Display position of `route`, if registered.
    pub fn index_of(&self, route: &str) -> Option<usize> {
        self.by_route.get(route).copied()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
