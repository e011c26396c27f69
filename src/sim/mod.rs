//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One grid step per tick, no wall-clock time
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, check_head};
pub use grid::{Cell, Direction};
pub use state::{EndReason, GameEvent, GamePhase, GameState, Snake};
pub use tick::{generate_obstacles, tick};
