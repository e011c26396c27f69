//! Grid Snake - a Snake game on a wrapping grid with obstacles and lives
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, scoring)
//! - `renderer`: Grid layout, palette and canvas drawing
//! - `audio`: Sound cues for simulation events
//! - `settings`: Player preferences

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Cells per side of the square grid
    pub const GRID_SIZE: i32 = 25;
    /// Pixel size of one cell
    pub const CELL_PIXELS: f32 = 25.0;
    /// Canvas side length in pixels
    pub const SCREEN_SIZE: f32 = GRID_SIZE as f32 * CELL_PIXELS;

    /// Fixed simulation tick (milliseconds of wall time per step)
    pub const TICK_MS: f64 = 100.0;
    /// Maximum ticks to run per frame after a stall
    pub const MAX_TICKS_PER_FRAME: u32 = 4;

    /// Number of obstacles placed at game start
    pub const MAX_OBSTACLES: usize = 10;
    /// Lives at the start of a run
    pub const START_LIVES: u8 = 3;

    /// Border outline thickness in pixels
    pub const BORDER_THICKNESS: f32 = 10.0;
}
