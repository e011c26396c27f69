//! Colors for each kind of thing on screen

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string for canvas fill/stroke styles
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Palette used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub snake: Color,
    pub apple: Color,
    pub obstacle: Color,
    pub border: Color,
    pub text: Color,
}

impl Palette {
    /// Light gray field, light purple snake
    pub const STANDARD: Palette = Palette {
        background: Color::rgb(211, 211, 211),
        snake: Color::rgb(200, 162, 200),
        apple: Color::rgb(0, 255, 0),
        obstacle: Color::rgb(255, 0, 0),
        border: Color::rgb(255, 255, 0),
        text: Color::rgb(255, 255, 255),
    };

    /// Dark field with saturated entities
    pub const HIGH_CONTRAST: Palette = Palette {
        background: Color::rgb(0, 0, 0),
        snake: Color::rgb(255, 255, 255),
        apple: Color::rgb(0, 255, 0),
        obstacle: Color::rgb(255, 0, 0),
        border: Color::rgb(255, 255, 0),
        text: Color::rgb(255, 255, 0),
    };

    pub fn for_settings(settings: &crate::Settings) -> Palette {
        if settings.high_contrast {
            Palette::HIGH_CONTRAST
        } else {
            Palette::STANDARD
        }
    }
}
