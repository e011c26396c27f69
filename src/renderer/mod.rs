//! Rendering module
//!
//! The layout and palette are plain data and build on every target; the
//! canvas drawer only exists in the browser build.

pub mod layout;
pub mod palette;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use layout::{HudText, Rect};
pub use palette::{Color, Palette};
