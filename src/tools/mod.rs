//! Processing functions behind the three tools.
//!
//! All of them return an [`Outcome`]: failures are values, never panics.

pub mod codec;
pub mod json;
mod outcome;

pub use codec::CodecMode;
pub use outcome::{CodecOutcome, FormatOutcome, GenerationOutcome, Outcome};
