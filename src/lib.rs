//! Developer toolbox: a terminal dashboard with text generation,
//! JSON formatting and Base64 transcoding tools.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod generation;
pub mod logging;
pub mod tools;
pub mod ui;
