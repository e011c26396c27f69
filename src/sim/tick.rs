//! Fixed-step simulation tick
//!
//! One call advances the game by exactly one grid step. Wall-clock pacing is
//! the caller's job.

use rand_pcg::Pcg32;

use super::collision::{CollisionResult, check_head};
use super::grid::{self, Cell};
use super::state::{EndReason, GameEvent, GameState, random_cell};

/// Advance the game state by one tick
///
/// Order within a tick: turn, move (with wrap), obstacle, self, apple, lives.
/// A terminal state is left untouched and yields no events.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_terminal() {
        return events;
    }

    state.time_ticks += 1;
    state.direction = state.pending_direction;
    state.snake.slither(state.direction);

    match check_head(&state.snake, &state.obstacles) {
        CollisionResult::Obstacle { cell } => {
            state.lives = state.lives.saturating_sub(1);
            log::debug!(
                "Obstacle hit at ({}, {}), {} lives left",
                cell.x,
                cell.y,
                state.lives
            );
            state.snake.reset(grid::center());
            events.push(GameEvent::ObstacleHit);
        }
        CollisionResult::SelfBody { .. } => {
            events.push(GameEvent::SelfCollision);
            state.finish(EndReason::SelfCollision);
        }
        CollisionResult::Clear => {}
    }

    if state.snake.head() == state.apple {
        state.apple = random_cell(&mut state.rng);
        state.snake.grow();
        state.score += 1;
        events.push(GameEvent::AppleEaten);
    }

    if state.lives == 0 {
        state.finish(EndReason::OutOfLives);
    }

    events
}

/// Place `count` obstacles uniformly at random
///
/// Positions are not checked against each other, the spawn cell or the apple.
pub fn generate_obstacles(rng: &mut Pcg32, count: usize) -> Vec<Cell> {
    (0..count).map(|_| random_cell(rng)).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::sim::grid::Direction;
    use proptest::prelude::*;

    fn direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn cells_stay_on_grid(seed in any::<u64>(), turns in prop::collection::vec(direction(), 0..200)) {
            let mut state = GameState::new(seed);
            for d in turns {
                state.set_direction(d);
                state.advance();
                prop_assert!(state.snake().body().iter().all(|&c| grid::in_bounds(c)));
                prop_assert!(grid::in_bounds(state.apple()));
            }
        }

        #[test]
        fn never_reverses(seed in any::<u64>(), turns in prop::collection::vec(direction(), 1..100)) {
            let mut state = GameState::new(seed);
            for d in turns {
                let before = state.direction();
                state.set_direction(d);
                state.advance();
                if state.is_terminal() {
                    break;
                }
                prop_assert!(!state.direction().is_opposite(before));
            }
        }

        #[test]
        fn terminal_is_absorbing(seed in any::<u64>(), turns in prop::collection::vec(direction(), 0..400)) {
            let mut state = GameState::new(seed);
            let mut was_terminal = false;
            for d in turns {
                state.set_direction(d);
                let events = state.advance();
                if was_terminal {
                    prop_assert!(events.is_empty());
                }
                was_terminal = state.is_terminal();
            }
        }

        #[test]
        fn lives_and_score_bookkeeping(seed in any::<u64>(), turns in prop::collection::vec(direction(), 0..300)) {
            let mut state = GameState::new(seed);
            let mut hits = 0u32;
            let mut apples = 0u32;
            for d in turns {
                state.set_direction(d);
                for event in state.advance() {
                    match event {
                        GameEvent::ObstacleHit => hits += 1,
                        GameEvent::AppleEaten => apples += 1,
                        GameEvent::SelfCollision => {}
                    }
                }
            }
            prop_assert_eq!(u32::from(state.lives()) + hits, u32::from(crate::consts::START_LIVES));
            prop_assert_eq!(state.score(), apples);
            if state.lives() == 0 {
                prop_assert!(state.is_terminal());
            }
        }
    }
}
