//! Colors and text styles used by the node catalog.

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Solid red. Also the color of data-mismatch placeholders.
    pub const RED: Self = Self::rgba(1.0, 0.0, 0.0, 1.0);
    /// Solid green.
    pub const GREEN: Self = Self::rgba(0.0, 1.0, 0.0, 1.0);
    /// Solid blue.
    pub const BLUE: Self = Self::rgba(0.0, 0.0, 1.0, 1.0);
    /// Yellow.
    pub const YELLOW: Self = Self::rgba(1.0, 1.0, 0.0, 1.0);
    /// Orange.
    pub const ORANGE: Self = Self::rgba(1.0, 0.65, 0.0, 1.0);
    /// Mid gray.
    pub const GRAY: Self = Self::rgba(0.5, 0.5, 0.5, 1.0);
    /// Light gray.
    pub const LIGHT_GRAY: Self = Self::rgba(0.75, 0.75, 0.75, 1.0);
    /// Translucent black used behind overlays.
    pub const SHADOW: Self = Self::rgba(0.0, 0.0, 0.0, 0.6);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from 8-bit components.
    #[must_use]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Looks up a named color from the source format.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "TRANSPARENT" => Self::TRANSPARENT,
            "BLACK" => Self::BLACK,
            "WHITE" => Self::WHITE,
            "RED" => Self::RED,
            "GREEN" => Self::GREEN,
            "BLUE" => Self::BLUE,
            "YELLOW" => Self::YELLOW,
            "ORANGE" => Self::ORANGE,
            "GRAY" => Self::GRAY,
            "LIGHT_GRAY" => Self::LIGHT_GRAY,
            "SHADOW" => Self::SHADOW,
            _ => return None,
        })
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Font family requested from the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Font {
    /// Body text.
    #[default]
    Text,
    /// Headings.
    Title,
    /// Symbol / icon font.
    Symbol,
}

impl Font {
    /// Parses a font from its source-format name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "TEXT" => Some(Self::Text),
            "TITLE" => Some(Self::Title),
            "SYMBOL" => Some(Self::Symbol),
            _ => None,
        }
    }
}

/// Everything the renderer needs to draw or measure a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font family.
    pub font: Font,
    /// Point size.
    pub size: f32,
    /// Fill color.
    pub color: Color,
}

impl TextStyle {
    /// Body text of the given size and color.
    #[must_use]
    pub const fn new(size: f32, color: Color) -> Self {
        Self {
            font: Font::Text,
            size,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_rgba8() {
        let color = Color::rgba8(255, 0, 0, 255);
        assert!((color.r - 1.0).abs() < 0.01);
        assert!((color.g - 0.0).abs() < 0.01);
        assert!((color.a - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::from_name("RED"), Some(Color::RED));
        assert_eq!(Color::from_name("red"), None);
    }
}
