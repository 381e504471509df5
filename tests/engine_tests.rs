//! Engine behavior tests through the public facade API.

use tui_snake::core::{EngineEvent, GameEngine};
use tui_snake::types::{Direction, EngineMode, GameInput, Position, FOOD_COUNT, TILE_COUNT};

#[test]
fn test_engine_starts_frozen_and_resumes() {
    let mut engine = GameEngine::new(12345);
    assert_eq!(engine.mode(), EngineMode::Frozen);

    engine.handle_input(GameInput::Resume);
    assert_eq!(engine.mode(), EngineMode::Running);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.len(), 1);
}

#[test]
fn test_frozen_ticks_leave_state_untouched() {
    let mut engine = GameEngine::new(12345);
    let before = engine.snapshot();

    for _ in 0..100 {
        assert!(!engine.tick());
    }
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_turn_input_applies_within_one_tick() {
    let mut engine = GameEngine::new(1);
    engine.handle_input(GameInput::Resume);
    let start = engine.head();

    engine.handle_input(GameInput::Turn(Direction::Down));
    engine.tick();
    assert_eq!(engine.head(), start.offset(0, 1));
}

#[test]
fn test_reversal_never_applies() {
    let mut engine = GameEngine::new(1);
    engine.handle_input(GameInput::Resume);
    assert_eq!(engine.direction(), Direction::Right);

    engine.handle_input(GameInput::Turn(Direction::Left));
    assert_eq!(engine.direction(), Direction::Right);

    engine.tick();
    // The buffered reversal must be discarded, not deferred.
    assert_eq!(engine.direction(), Direction::Right);
    engine.tick();
    assert_eq!(engine.direction(), Direction::Right);
}

#[test]
fn test_snake_length_is_non_decreasing() {
    let mut engine = GameEngine::new(9);
    engine.handle_input(GameInput::Resume);

    let mut last_len = engine.len();
    while engine.tick() {
        assert!(engine.len() >= last_len);
        assert!(engine.len() - last_len <= 1);
        last_len = engine.len();
    }
}

#[test]
fn test_running_into_the_wall_ends_the_session() {
    let mut engine = GameEngine::new(4);
    engine.handle_input(GameInput::Resume);

    // Heading right from the spawn cell, the wall is at most
    // TILE_COUNT ticks away no matter what food gets eaten en route.
    for _ in 0..TILE_COUNT as usize + 1 {
        engine.tick();
    }

    assert_eq!(engine.mode(), EngineMode::Frozen);
    let event = engine.take_last_event();
    assert_eq!(
        event,
        Some(EngineEvent::GameOver {
            score: engine.score()
        })
    );
    // Events are consumed exactly once.
    assert_eq!(engine.take_last_event(), None);
}

#[test]
fn test_resume_after_game_over_starts_a_fresh_session() {
    let mut engine = GameEngine::new(4);
    engine.handle_input(GameInput::Resume);
    while engine.mode() == EngineMode::Running {
        engine.tick();
    }

    engine.handle_input(GameInput::Resume);
    assert_eq!(engine.mode(), EngineMode::Running);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.len(), 1);
    assert_eq!(engine.direction(), Direction::Right);
}

#[test]
fn test_food_set_is_always_disjoint_and_in_bounds() {
    let mut engine = GameEngine::new(31);
    engine.handle_input(GameInput::Resume);

    loop {
        let food = *engine.food();
        assert_eq!(food.len(), FOOD_COUNT);
        for (i, f) in food.iter().enumerate() {
            assert!(f.x >= 0 && f.x < TILE_COUNT, "food out of bounds: {:?}", f);
            assert!(f.y >= 0 && f.y < TILE_COUNT, "food out of bounds: {:?}", f);
            assert!(!engine.snake().contains(f), "food on snake: {:?}", f);
            for g in &food[i + 1..] {
                assert_ne!(f, g, "overlapping food items");
            }
        }
        if !engine.tick() {
            break;
        }
    }
}

#[test]
fn test_same_seed_same_inputs_same_game() {
    let script: Vec<GameInput> = vec![
        GameInput::Resume,
        GameInput::Turn(Direction::Down),
        GameInput::Turn(Direction::Right),
        GameInput::Turn(Direction::Up),
        GameInput::Turn(Direction::Right),
    ];

    let mut a = GameEngine::new(2026);
    let mut b = GameEngine::new(2026);

    for input in &script {
        a.handle_input(*input);
        b.handle_input(*input);
        for _ in 0..3 {
            a.tick();
            b.tick();
        }
    }

    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_head_accessor_tracks_snake_front() {
    let mut engine = GameEngine::new(1);
    engine.handle_input(GameInput::Resume);
    engine.tick();

    assert_eq!(engine.head(), engine.snake()[0]);
    assert_eq!(engine.head(), Position::new(11, 10));
}
