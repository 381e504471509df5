//! Game engine module - manages the complete game state
//!
//! This module ties together all core pieces: the snake body, direction
//! handling with a one-slot turn buffer, collision detection, food spawning,
//! scoring, and the frozen/running lifecycle.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{
    Direction, EngineMode, GameInput, Position, FOOD_COUNT, GRID_CELLS, START_POS, TILE_COUNT,
};

/// Off-grid placeholder used while (re)building the food set.
const UNPLACED: Position = Position::new(-1, -1);

/// Lifecycle event emitted by the engine (consumed by the runner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// A play session ended. The engine is already Frozen; the runner is
    /// responsible for persisting the high score and showing the resume
    /// prompt. Game over is a normal transition, not an error.
    GameOver { score: u32 },
}

/// Complete game state.
///
/// The engine owns every piece of mutable simulation state and exposes only
/// [`tick`](Self::tick), [`handle_input`](Self::handle_input),
/// [`reset`](Self::reset) and read-only snapshot accessors. It performs no
/// I/O: rendering, input decoding and persistence live behind the seams in
/// the `term`, `input` and `store` crates.
#[derive(Debug, Clone)]
pub struct GameEngine {
    /// Snake cells, head first. Length >= 1 at all times.
    snake: ArrayVec<Position, GRID_CELLS>,
    direction: Direction,
    /// At most one pending turn, applied on the next tick (last-write-wins).
    buffered: Option<Direction>,
    /// Whether this tick's single turn slot has been used.
    turned_this_tick: bool,
    /// Tail segments owed from food consumption, realized one per advance.
    pending_growth: u32,
    food: [Position; FOOD_COUNT],
    score: u32,
    mode: EngineMode,
    /// Last game-over event (consumed by the runner).
    last_event: Option<EngineEvent>,
    rng: SimpleRng,
    tile_count: i8,
}

impl GameEngine {
    /// Create a new engine with the given RNG seed.
    ///
    /// The engine starts Frozen with the board already laid out (snake at the
    /// spawn cell, food placed), mirroring the startup menu state. Send
    /// [`GameInput::Resume`] to begin playing.
    pub fn new(seed: u32) -> Self {
        let mut engine = Self {
            snake: ArrayVec::new(),
            direction: Direction::Right,
            buffered: None,
            turned_this_tick: false,
            pending_growth: 0,
            food: [UNPLACED; FOOD_COUNT],
            score: 0,
            mode: EngineMode::Frozen,
            last_event: None,
            rng: SimpleRng::new(seed),
            tile_count: TILE_COUNT,
        };
        engine.reset_board();
        engine
    }

    /// Override the grid side length (cells per axis).
    ///
    /// Mainly useful in tests that want a small or nearly-full grid. Re-lays
    /// the board for the new bounds.
    pub fn with_tile_count(mut self, tile_count: i8) -> Self {
        assert!(tile_count > 0, "grid must have at least one cell");
        self.tile_count = tile_count;
        self.reset_board();
        self
    }

    pub fn mode(&self) -> EngineMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    /// Logical snake length: materialized cells plus pending growth.
    ///
    /// Grows by exactly one per consumption event, on the consumption tick.
    /// The owed tail cell materializes on the following advance.
    pub fn len(&self) -> usize {
        self.snake.len() + self.pending_growth as usize
    }

    pub fn is_empty(&self) -> bool {
        false // invariant: length >= 1
    }

    /// Materialized snake cells, head first.
    pub fn snake(&self) -> &[Position] {
        &self.snake
    }

    pub fn food(&self) -> &[Position; FOOD_COUNT] {
        &self.food
    }

    pub fn tile_count(&self) -> i8 {
        self.tile_count
    }

    /// Current RNG state (for restarting a game with the same food sequence).
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    /// Take and clear the last lifecycle event.
    pub fn take_last_event(&mut self) -> Option<EngineEvent> {
        self.last_event.take()
    }

    /// Inject one input event.
    ///
    /// While Frozen, `Resume` performs a full reset and switches to Running;
    /// turns are ignored. While Running, a turn is applied immediately if the
    /// tick's turn slot is free and the turn is not an exact reversal;
    /// otherwise it lands in the one-slot buffer for the next tick.
    pub fn handle_input(&mut self, input: GameInput) {
        if self.mode == EngineMode::Frozen {
            if input == GameInput::Resume {
                self.reset();
            }
            return;
        }

        let GameInput::Turn(candidate) = input else {
            return;
        };

        if !self.turned_this_tick && !candidate.is_reverse_of(self.direction) {
            self.direction = candidate;
            self.turned_this_tick = true;
        } else {
            self.buffered = Some(candidate);
        }
    }

    /// Advance the simulation by one step.
    ///
    /// Returns whether the state changed. Frozen ticks are no-ops; a tick
    /// that ends in a collision freezes the engine and also returns `false`
    /// (there is nothing new to draw inside the board).
    pub fn tick(&mut self) -> bool {
        if self.mode == EngineMode::Frozen {
            return false;
        }

        self.turned_this_tick = false;
        self.advance();

        // The buffer holds at most one deferred turn. A buffered reversal
        // (relative to the direction just moved in) is discarded, never kept
        // for a later tick.
        if let Some(candidate) = self.buffered.take() {
            if !candidate.is_reverse_of(self.direction) {
                self.direction = candidate;
                self.turned_this_tick = true;
            }
        }

        if self.hit_wall() || self.bit_itself() {
            self.last_event = Some(EngineEvent::GameOver { score: self.score });
            self.mode = EngineMode::Frozen;
            return false;
        }

        self.consume_food();
        true
    }

    /// Full state reset: spawn layout, score 0, mode Running.
    pub fn reset(&mut self) {
        self.reset_board();
        self.mode = EngineMode::Running;
    }

    /// Write the current state into a reusable snapshot (allocation-free).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake.clear();
        out.snake.extend(self.snake.iter().copied());
        out.food = self.food;
        out.score = self.score;
        out.mode = self.mode;
    }

    /// Convenience helper that allocates a fresh snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn reset_board(&mut self) {
        self.snake.clear();
        self.snake.push(start_pos(self.tile_count));
        self.direction = Direction::Right;
        self.buffered = None;
        self.turned_this_tick = false;
        self.pending_growth = 0;
        self.score = 0;
        self.spawn_food_set();
    }

    /// Move the head one cell in the current direction.
    ///
    /// The tail is removed unless growth is pending, in which case the snake
    /// keeps its tail and the growth counter is decremented instead.
    fn advance(&mut self) {
        let (dx, dy) = self.direction.delta();
        let head = self.snake[0].offset(dx, dy);

        if self.pending_growth > 0 && !self.snake.is_full() {
            self.pending_growth -= 1;
        } else {
            self.snake.pop();
        }
        self.snake.insert(0, head);
    }

    fn hit_wall(&self) -> bool {
        let head = self.snake[0];
        head.x < 0 || head.y < 0 || head.x >= self.tile_count || head.y >= self.tile_count
    }

    fn bit_itself(&self) -> bool {
        let head = self.snake[0];
        self.snake[1..].contains(&head)
    }

    fn consume_food(&mut self) {
        let head = self.snake[0];
        for i in 0..FOOD_COUNT {
            if self.food[i] == head {
                self.pending_growth += 1;
                self.score += 1;
                // When the grid is completely occupied there is no free cell
                // left; keep the old one (the session cannot continue anyway).
                if let Some(cell) = self.free_cell() {
                    self.food[i] = cell;
                }
            }
        }
    }

    fn spawn_food_set(&mut self) {
        self.food = [UNPLACED; FOOD_COUNT];
        for i in 0..FOOD_COUNT {
            if let Some(cell) = self.free_cell() {
                self.food[i] = cell;
            }
        }
    }

    /// Pick a uniformly random free cell.
    ///
    /// Rejection sampling is bounded at one attempt per grid cell, after
    /// which a row-major scan takes over so a nearly-full grid cannot spin
    /// forever. Returns `None` only when no free cell exists at all.
    fn free_cell(&mut self) -> Option<Position> {
        let side = self.tile_count as u32;

        for _ in 0..side * side {
            let cell = Position::new(
                self.rng.next_range(side) as i8,
                self.rng.next_range(side) as i8,
            );
            if !self.is_occupied(cell) {
                return Some(cell);
            }
        }

        for y in 0..self.tile_count {
            for x in 0..self.tile_count {
                let cell = Position::new(x, y);
                if !self.is_occupied(cell) {
                    return Some(cell);
                }
            }
        }

        None
    }

    fn is_occupied(&self, cell: Position) -> bool {
        self.snake.contains(&cell) || self.food.contains(&cell)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}

fn start_pos(tile_count: i8) -> Position {
    if START_POS.x < tile_count && START_POS.y < tile_count {
        START_POS
    } else {
        // Small test grids: spawn at the center instead.
        Position::new(tile_count / 2, tile_count / 2)
    }
}
