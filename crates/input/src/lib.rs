//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameCommand`]. Kept
//! separate from the presentation layer so the runner owns the event loop.

pub mod map;

pub use gridfall_types as types;

pub use map::{handle_key_event, should_quit};
