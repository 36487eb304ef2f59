//! AutoCAD Color Index (ACI) handling.
//!
//! Layer colors in CAD exchange documents are small integer indices rather
//! than RGB triples. This module wraps the index and converts it to the CSS
//! names and RGB components the raster/vector backends need, covering the
//! classic indices the layer registry uses.

/// A color identified by its AutoCAD Color Index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    index: u8,
}

impl Color {
    pub const RED: Color = Color { index: 1 };
    pub const YELLOW: Color = Color { index: 2 };
    pub const GREEN: Color = Color { index: 3 };
    pub const CYAN: Color = Color { index: 4 };
    pub const BLUE: Color = Color { index: 5 };
    pub const MAGENTA: Color = Color { index: 6 };
    pub const WHITE: Color = Color { index: 7 };
    pub const GRAY: Color = Color { index: 8 };
    pub const LIGHT_GRAY: Color = Color { index: 9 };

    /// Creates a color from a raw ACI index.
    pub fn from_index(index: u8) -> Self {
        Self { index }
    }

    /// Returns the ACI index used in the exchange document layer table.
    pub fn index(self) -> u8 {
        self.index
    }

    /// Returns the CSS color used by the SVG/raster backends.
    ///
    /// Index 7 is "white/black" in CAD convention; on a white drawing sheet
    /// it renders black.
    pub fn css(self) -> &'static str {
        match self.index {
            1 => "red",
            2 => "goldenrod",
            3 => "green",
            4 => "darkcyan",
            5 => "blue",
            6 => "magenta",
            7 => "black",
            8 => "gray",
            9 => "lightgray",
            _ => "black",
        }
    }

    /// Returns the color as normalized RGB components for the PDF backend.
    pub fn rgb(self) -> (f64, f64, f64) {
        match self.index {
            1 => (0.8, 0.0, 0.0),
            2 => (0.72, 0.53, 0.04),
            3 => (0.0, 0.5, 0.0),
            4 => (0.0, 0.55, 0.55),
            5 => (0.0, 0.0, 0.8),
            6 => (0.8, 0.0, 0.8),
            7 => (0.0, 0.0, 0.0),
            8 => (0.5, 0.5, 0.5),
            9 => (0.75, 0.75, 0.75),
            _ => (0.0, 0.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_constants_match_indices() {
        assert_eq!(Color::RED.index(), 1);
        assert_eq!(Color::WHITE.index(), 7);
        assert_eq!(Color::LIGHT_GRAY.index(), 9);
    }

    #[test]
    fn test_css_mapping() {
        assert_eq!(Color::RED.css(), "red");
        // White renders black on a white sheet.
        assert_eq!(Color::WHITE.css(), "black");
        assert_eq!(Color::from_index(200).css(), "black");
    }

    #[test]
    fn test_rgb_is_normalized() {
        for index in 1..=9 {
            let (r, g, b) = Color::from_index(index).rgb();
            assert!((0.0..=1.0).contains(&r));
            assert!((0.0..=1.0).contains(&g));
            assert!((0.0..=1.0).contains(&b));
        }
    }
}
