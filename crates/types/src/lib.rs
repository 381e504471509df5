//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, UI rendering, tests).
//!
//! # Grid
//!
//! The playfield is a square grid of `TILE_COUNT x TILE_COUNT` cells, 0-indexed
//! on both axes. The snake spawns as a single cell at `START_POS` heading
//! `Direction::Right`.
//!
//! # Timing
//!
//! The simulation runs on a fixed timestep: one engine tick every `TICK_MS`
//! milliseconds. There is no variable speed and no per-level gravity; the
//! period is constant for the life of the process.

/// Grid width/height in cells.
pub const TILE_COUNT: i8 = 20;

/// Total cell count, used as capacity bound for fixed-size containers.
pub const GRID_CELLS: usize = (TILE_COUNT as usize) * (TILE_COUNT as usize);

/// Number of food items on the grid at all times.
pub const FOOD_COUNT: usize = 3;

/// Fixed simulation period in milliseconds.
pub const TICK_MS: u64 = 125;

/// Snake spawn cell.
pub const START_POS: Position = Position::new(10, 10);

/// A single grid cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The cell reached by moving `(dx, dy)` from this one.
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Cardinal movement direction (a grid unit vector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit vector `(dx, dy)` for this direction.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// True when `other` is the exact 180-degree reverse of `self`.
    pub fn is_reverse_of(self, other: Direction) -> bool {
        self == other.opposite()
    }
}

/// Engine-facing input alphabet.
///
/// Unrecognized keys are filtered out by the input mapping layer and never
/// reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Request a turn toward the given direction.
    Turn(Direction),
    /// Resume from the frozen state (startup menu or post-game-over).
    Resume,
}

/// Engine run mode.
///
/// The engine starts Frozen and returns to Frozen after game over. Frozen
/// ticks are no-ops; `GameInput::Resume` is the only way back to Running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineMode {
    Frozen,
    Running,
}
