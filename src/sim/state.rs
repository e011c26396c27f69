//! Game state and core simulation types
//!
//! Everything the simulation needs between ticks lives in [`GameState`].
//! Collaborators read it through the snapshot accessors and only mutate it
//! through [`GameState::set_direction`] and [`GameState::advance`].

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{self, Cell, Direction};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks advance the simulation
    #[default]
    Running,
    /// Run ended; absorbing
    Terminal,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Head ran into the snake's own body
    SelfCollision,
    /// Last life lost to an obstacle
    OutOfLives,
}

impl EndReason {
    pub fn describe(&self) -> &'static str {
        match self {
            EndReason::SelfCollision => "Self-collision",
            EndReason::OutOfLives => "No lives left",
        }
    }
}

/// Things that happened during one tick, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Head reached the apple; snake grew and the apple moved
    AppleEaten,
    /// Head hit an obstacle; a life was lost and the snake reset
    ObstacleHit,
    /// Head hit the body; the run is over
    SelfCollision,
}

/// The snake, head first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    body: Vec<Cell>,
}

impl Snake {
    /// A one-cell snake at `cell`
    pub fn new(cell: Cell) -> Self {
        Self { body: vec![cell] }
    }

    /// Build a snake from explicit cells (head first); `None` for an empty list
    pub fn from_cells(body: Vec<Cell>) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        Some(Self { body })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// All cells, head first
    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true: a snake always has a head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Shift every segment into its predecessor's cell, then step the head
    pub fn slither(&mut self, direction: Direction) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = grid::step(self.body[0], direction);
    }

    /// Grow by one segment stacked on the tail; it unfolds on the next move
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push(tail);
    }

    /// Truncate to a single cell at `cell`
    pub fn reset(&mut self, cell: Cell) {
        self.body.clear();
        self.body.push(cell);
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub(crate) seed: u64,
    /// Apple and obstacle placement
    pub(crate) rng: Pcg32,
    pub(crate) snake: Snake,
    pub(crate) apple: Cell,
    pub(crate) obstacles: Vec<Cell>,
    /// Apples eaten this run; survives obstacle resets
    pub(crate) score: u32,
    pub(crate) lives: u8,
    /// Direction applied on the last tick
    pub(crate) direction: Direction,
    /// Direction to apply on the next tick
    pub(crate) pending_direction: Direction,
    pub(crate) phase: GamePhase,
    pub(crate) end_reason: Option<EndReason>,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
}

impl GameState {
    /// Create a new game with a random apple and `MAX_OBSTACLES` random obstacles
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let apple = random_cell(&mut rng);
        let obstacles = super::tick::generate_obstacles(&mut rng, MAX_OBSTACLES);
        Self::from_parts(seed, rng, apple, obstacles)
    }

    /// Create a game with a fixed apple and obstacle layout
    ///
    /// The seed still drives every later apple placement.
    pub fn with_layout(seed: u64, apple: Cell, obstacles: Vec<Cell>) -> Self {
        Self::from_parts(seed, Pcg32::seed_from_u64(seed), apple, obstacles)
    }

    fn from_parts(seed: u64, rng: Pcg32, apple: Cell, obstacles: Vec<Cell>) -> Self {
        Self {
            seed,
            rng,
            snake: Snake::new(grid::center()),
            apple,
            obstacles,
            score: 0,
            lives: START_LIVES,
            direction: Direction::default(),
            pending_direction: Direction::default(),
            phase: GamePhase::Running,
            end_reason: None,
            time_ticks: 0,
        }
    }

    /// Queue a turn for the next tick; reversals are ignored
    pub fn set_direction(&mut self, direction: Direction) {
        if self.is_terminal() || direction.is_opposite(self.direction) {
            return;
        }
        self.pending_direction = direction;
    }

    /// Advance one tick and report what happened
    pub fn advance(&mut self) -> Vec<GameEvent> {
        super::tick::tick(self)
    }

    // === Snapshot accessors ===

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake.head()
    }

    pub fn apple(&self) -> Cell {
        self.apple
    }

    pub fn obstacles(&self) -> &[Cell] {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Direction the snake is currently travelling
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == GamePhase::Terminal
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Enter the terminal phase (first reason wins)
    pub(crate) fn finish(&mut self, reason: EndReason) {
        if self.phase == GamePhase::Terminal {
            return;
        }
        log::info!(
            "Game over: {} (score {}, {} ticks)",
            reason.describe(),
            self.score,
            self.time_ticks
        );
        self.phase = GamePhase::Terminal;
        self.end_reason = Some(reason);
    }
}

/// Uniformly random cell on the grid
pub fn random_cell(rng: &mut Pcg32) -> Cell {
    Cell::new(rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_new_game_defaults() {
        let state = GameState::new(12345);
        assert_eq!(state.lives(), START_LIVES);
        assert_eq!(state.score(), 0);
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.head(), grid::center());
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.obstacles().len(), MAX_OBSTACLES);
        assert_eq!(state.phase(), GamePhase::Running);
        assert!(grid::in_bounds(state.apple()));
        assert!(state.obstacles().iter().all(|&c| grid::in_bounds(c)));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::new(777);
        let b = GameState::new(777);
        assert_eq!(a.apple(), b.apple());
        assert_eq!(a.obstacles(), b.obstacles());
    }

    #[test]
    fn test_snake_slither_shifts_body() {
        let mut snake = Snake::from_cells(vec![
            IVec2::new(5, 5),
            IVec2::new(4, 5),
            IVec2::new(3, 5),
        ])
        .unwrap();
        snake.slither(Direction::Down);
        assert_eq!(
            snake.body(),
            &[IVec2::new(5, 6), IVec2::new(5, 5), IVec2::new(4, 5)]
        );
    }

    #[test]
    fn test_snake_grow_duplicates_tail() {
        let mut snake = Snake::from_cells(vec![IVec2::new(5, 5), IVec2::new(4, 5)]).unwrap();
        snake.grow();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.body()[2], IVec2::new(4, 5));

        // The stacked segment unfolds on the next move
        snake.slither(Direction::Right);
        assert_eq!(
            snake.body(),
            &[IVec2::new(6, 5), IVec2::new(5, 5), IVec2::new(4, 5)]
        );
    }

    #[test]
    fn test_empty_snake_rejected() {
        assert!(Snake::from_cells(Vec::new()).is_none());
        let snake = Snake::from_cells(vec![IVec2::new(3, 4)]).unwrap();
        assert_eq!(snake.head(), snake.tail());
    }

    #[test]
    fn test_snake_reset() {
        let mut snake = Snake::from_cells(vec![IVec2::new(1, 1), IVec2::new(1, 2)]).unwrap();
        snake.reset(grid::center());
        assert_eq!(snake.body(), &[grid::center()]);
    }

    #[test]
    fn test_reverse_direction_rejected() {
        let mut state = GameState::with_layout(1, IVec2::new(0, 0), Vec::new());
        state.set_direction(Direction::Left);
        assert_eq!(state.pending_direction, Direction::Right);

        state.set_direction(Direction::Up);
        assert_eq!(state.pending_direction, Direction::Up);
        // Still moving right until the tick applies the turn, so Left stays blocked
        state.set_direction(Direction::Left);
        assert_eq!(state.pending_direction, Direction::Up);
    }

    #[test]
    fn test_finish_keeps_first_reason() {
        let mut state = GameState::with_layout(1, IVec2::new(0, 0), Vec::new());
        state.finish(EndReason::SelfCollision);
        state.finish(EndReason::OutOfLives);
        assert!(state.is_terminal());
        assert_eq!(state.end_reason(), Some(EndReason::SelfCollision));
    }
}
