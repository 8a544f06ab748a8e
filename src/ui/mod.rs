pub mod app;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod messages;
pub mod mvi;
pub mod registry;
pub mod render;
pub mod runtime;
pub mod shell;
pub mod sidebar;
pub mod terminal_guard;
pub mod theme;
pub mod welcome;
