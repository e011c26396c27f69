//! Screen layout for the grid and HUD
//!
//! Converts grid cells to pixel rectangles and formats HUD text. Nothing here
//! touches a drawing API.

use glam::Vec2;

use crate::consts::{BORDER_THICKNESS, CELL_PIXELS, SCREEN_SIZE};
use crate::sim::{Cell, EndReason, GameState};

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[cfg(test)]
    pub(crate) fn max(&self) -> Vec2 {
        self.min + self.size
    }
}

/// Pixel rectangle covered by a grid cell
#[inline]
pub fn cell_rect(cell: Cell) -> Rect {
    Rect::new(cell.as_vec2() * CELL_PIXELS, Vec2::splat(CELL_PIXELS))
}

/// Path for the border outline, centered in a stroke of `BORDER_THICKNESS`
///
/// The stroke covers the outermost `BORDER_THICKNESS` pixels of the screen.
pub fn border_stroke_rect() -> Rect {
    let half = BORDER_THICKNESS / 2.0;
    Rect::new(Vec2::splat(half), Vec2::splat(SCREEN_SIZE - BORDER_THICKNESS))
}

/// A line of HUD text and its anchor point (top edge)
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub text: String,
    pub pos: Vec2,
    /// Anchor `pos` at the text's horizontal center instead of its left edge
    pub centered: bool,
}

/// HUD font size in pixels
pub const HUD_FONT_PX: f32 = 24.0;

/// Score in the top-left corner
pub fn points_text(score: u32) -> HudText {
    HudText {
        text: format!("Points: {}", score),
        pos: Vec2::new(10.0, 10.0),
        centered: false,
    }
}

/// Lives in the top-right corner
pub fn lives_text(lives: u8) -> HudText {
    HudText {
        text: format!("Lives: {}", lives),
        pos: Vec2::new(SCREEN_SIZE - 150.0, 10.0),
        centered: false,
    }
}

/// Centered game-over banner
pub fn game_over_text(reason: EndReason, score: u32) -> HudText {
    HudText {
        text: format!("Game Over! {} - {} points", reason.describe(), score),
        pos: Vec2::new(SCREEN_SIZE / 2.0, SCREEN_SIZE / 2.0),
        centered: true,
    }
}

/// All HUD lines for the current state
pub fn hud(state: &GameState) -> Vec<HudText> {
    let mut lines = vec![points_text(state.score()), lives_text(state.lives())];
    if let Some(reason) = state.end_reason() {
        lines.push(game_over_text(reason, state.score()));
    }
    lines
}
