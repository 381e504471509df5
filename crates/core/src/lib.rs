//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed and input sequence produce identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for game tick processing
//!
//! # Module Structure
//!
//! - [`engine`]: the game engine - snake movement, input buffering, collision
//!   detection, food spawning, scoring, and the frozen/running lifecycle
//! - [`rng`]: seeded LCG for reproducible food placement
//! - [`snapshot`]: per-tick render snapshot consumed by display layers
//!
//! # Game Rules
//!
//! - The snake advances one cell per tick in its current direction.
//! - At most one turn is applied per tick. A second turn request within the
//!   same tick is buffered (one slot, last-write-wins) and applied on the
//!   next tick. A turn that exactly reverses the current direction is never
//!   applied, immediately or from the buffer.
//! - Eating a food cell grows the snake by one, scores one point, and
//!   respawns that food item on a free cell.
//! - Leaving the grid or biting any non-head segment ends the session: the
//!   engine freezes and emits a game-over event. Resume performs a full
//!   reset.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameEngine;
//! use tui_snake_types::{Direction, EngineMode, GameInput};
//!
//! let mut engine = GameEngine::new(12345);
//! assert_eq!(engine.mode(), EngineMode::Frozen);
//!
//! // Resume from the startup menu, then play.
//! engine.handle_input(GameInput::Resume);
//! engine.handle_input(GameInput::Turn(Direction::Down));
//! engine.tick();
//!
//! let snap = engine.snapshot();
//! assert_eq!(snap.snake[0].y, 11);
//! ```

pub mod engine;
pub mod rng;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use engine::{EngineEvent, GameEngine};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
