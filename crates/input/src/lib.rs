//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`tui_snake_types::GameInput`] values the
//! engine understands. There is no held-key repeat machinery here: the
//! engine's one-slot turn buffer is the only input arbitration the game
//! needs, so the mapping layer stays stateless.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
