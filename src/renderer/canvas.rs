//! Canvas 2D drawing of a game snapshot

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::layout::{self, HudText, Rect};
use super::palette::{Color, Palette};
use crate::consts::{BORDER_THICKNESS, SCREEN_SIZE};
use crate::sim::GameState;

/// Draws the grid, entities and HUD onto a canvas
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    palette: Palette,
}

impl CanvasRenderer {
    /// Size the canvas and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, palette: Palette) -> Option<Self> {
        canvas.set_width(SCREEN_SIZE as u32);
        canvas.set_height(SCREEN_SIZE as u32);
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx, palette })
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Render the current frame
    pub fn render(&self, state: &GameState) {
        let size = SCREEN_SIZE as f64;
        self.ctx.set_fill_style_str(&self.palette.background.to_css());
        self.ctx.fill_rect(0.0, 0.0, size, size);

        let border = layout::border_stroke_rect();
        self.ctx.set_stroke_style_str(&self.palette.border.to_css());
        self.ctx.set_line_width(BORDER_THICKNESS as f64);
        self.ctx.stroke_rect(
            border.min.x as f64,
            border.min.y as f64,
            border.size.x as f64,
            border.size.y as f64,
        );

        for &cell in state.snake().body() {
            self.fill(layout::cell_rect(cell), self.palette.snake);
        }
        self.fill(layout::cell_rect(state.apple()), self.palette.apple);
        for &cell in state.obstacles() {
            self.fill(layout::cell_rect(cell), self.palette.obstacle);
        }

        for line in layout::hud(state) {
            self.text(&line);
        }
    }

    fn fill(&self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            rect.min.x as f64,
            rect.min.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn text(&self, line: &HudText) {
        self.ctx
            .set_font(&format!("{}px sans-serif", layout::HUD_FONT_PX));
        self.ctx.set_fill_style_str(&self.palette.text.to_css());
        self.ctx.set_text_baseline("top");
        self.ctx.set_text_align(if line.centered { "center" } else { "left" });
        let _ = self
            .ctx
            .fill_text(&line.text, line.pos.x as f64, line.pos.y as f64);
    }
}
