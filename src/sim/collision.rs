//! Collision detection on the grid
//!
//! Both checks are linear scans: the snake and obstacle set are small enough
//! that a spatial index would cost more than it saves.

use super::grid::Cell;
use super::state::Snake;

/// What the snake's head ran into this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionResult {
    /// Head is on a free cell (possibly the apple)
    Clear,
    /// Head is on an obstacle cell
    Obstacle { cell: Cell },
    /// Head overlaps the body segment at `index` (index >= 1)
    SelfBody { index: usize },
}

impl CollisionResult {
    #[cfg(test)]
    pub(crate) fn is_clear(&self) -> bool {
        matches!(self, CollisionResult::Clear)
    }
}

/// Check whether `cell` is one of the obstacles
pub fn obstacle_at(cell: Cell, obstacles: &[Cell]) -> bool {
    obstacles.contains(&cell)
}

/// Index of the first body segment (excluding the head) that shares the head's cell
pub fn self_collision_index(snake: &Snake) -> Option<usize> {
    let head = snake.head();
    snake
        .body()
        .iter()
        .skip(1)
        .position(|&segment| segment == head)
        .map(|i| i + 1)
}

/// Classify the head position of `snake` against obstacles, then its own body
///
/// Obstacles are checked first: an obstacle hit resets the snake, so a
/// simultaneous body overlap never gets the chance to end the run.
pub fn check_head(snake: &Snake, obstacles: &[Cell]) -> CollisionResult {
    let head = snake.head();
    if obstacle_at(head, obstacles) {
        return CollisionResult::Obstacle { cell: head };
    }
    match self_collision_index(snake) {
        Some(index) => CollisionResult::SelfBody { index },
        None => CollisionResult::Clear,
    }
}
