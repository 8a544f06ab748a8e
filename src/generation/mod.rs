//! Text generation against a `generateContent`-style endpoint.

mod client;
mod wire;

pub use client::{GenerationClient, TextGenerator};
