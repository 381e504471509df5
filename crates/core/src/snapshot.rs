use arrayvec::ArrayVec;

use crate::types::{EngineMode, Position, FOOD_COUNT, GRID_CELLS};

/// Per-tick render snapshot.
///
/// Display layers consume this instead of touching the engine. Callers can
/// keep one snapshot alive and refill it every tick via
/// [`GameEngine::snapshot_into`](crate::GameEngine::snapshot_into) to stay
/// allocation-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Snake cells, head first.
    pub snake: ArrayVec<Position, GRID_CELLS>,
    /// Food cells currently on the grid.
    pub food: [Position; FOOD_COUNT],
    pub score: u32,
    pub mode: EngineMode,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.snake.clear();
        self.food = [Position::new(-1, -1); FOOD_COUNT];
        self.score = 0;
        self.mode = EngineMode::Frozen;
    }

    /// True while the simulation is advancing (not waiting on resume).
    pub fn running(&self) -> bool {
        self.mode == EngineMode::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            snake: ArrayVec::new(),
            food: [Position::new(-1, -1); FOOD_COUNT],
            score: 0,
            mode: EngineMode::Frozen,
        };
        s.clear();
        s
    }
}
