//! The fixed drawing layer registry.
//!
//! Every primitive in a drawing carries exactly one [`LayerId`]. The registry
//! is closed: layers, their exchange-document names, their ACI colors and
//! their line patterns are fixed at compile time and shared read-only by all
//! backends. The names and color indices form the exchange schema that
//! third-party drafting tools key on, so they must not drift between
//! releases.

use crate::color::Color;

/// Identifies one layer of the fixed registry.
///
/// Variant declaration order is the canonical draw order, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerId {
    /// Foundations, footings and anchorage blocks.
    Foundation,
    /// Hatched fill regions (arch rings, concrete fills).
    Hatching,
    /// Primary structural members: chords, cables, girders, arches.
    Structure,
    /// Deck and roadway surfaces.
    Deck,
    /// Piers, towers and abutments.
    Supports,
    /// Railings and parapets.
    Railings,
    /// Dimension lines, extension ticks and measurement labels.
    Dimensions,
    /// Center lines, joints and other reference marks.
    Annotations,
    /// Titles and specification text.
    Text,
}

impl LayerId {
    /// All layers in canonical draw order.
    pub const ALL: [LayerId; 9] = [
        LayerId::Foundation,
        LayerId::Hatching,
        LayerId::Structure,
        LayerId::Deck,
        LayerId::Supports,
        LayerId::Railings,
        LayerId::Dimensions,
        LayerId::Annotations,
        LayerId::Text,
    ];

    /// Returns the layer name used in exchange documents.
    pub fn name(self) -> &'static str {
        match self {
            Self::Foundation => "FOUNDATION",
            Self::Hatching => "HATCHING",
            Self::Structure => "STRUCTURE",
            Self::Deck => "DECK",
            Self::Supports => "SUPPORTS",
            Self::Railings => "RAILINGS",
            Self::Dimensions => "DIMENSIONS",
            Self::Annotations => "ANNOTATIONS",
            Self::Text => "TEXT",
        }
    }

    /// Returns the style attributes for this layer.
    pub fn style(self) -> LayerStyle {
        match self {
            Self::Foundation => LayerStyle {
                color: Color::YELLOW,
                pattern: LinePattern::Continuous,
                description: "Foundations and anchorages",
            },
            Self::Hatching => LayerStyle {
                color: Color::LIGHT_GRAY,
                pattern: LinePattern::Continuous,
                description: "Material hatching",
            },
            Self::Structure => LayerStyle {
                color: Color::RED,
                pattern: LinePattern::Continuous,
                description: "Primary structural members",
            },
            Self::Deck => LayerStyle {
                color: Color::GREEN,
                pattern: LinePattern::Continuous,
                description: "Deck and roadway",
            },
            Self::Supports => LayerStyle {
                color: Color::BLUE,
                pattern: LinePattern::Continuous,
                description: "Piers, towers and abutments",
            },
            Self::Railings => LayerStyle {
                color: Color::CYAN,
                pattern: LinePattern::Continuous,
                description: "Railings and parapets",
            },
            Self::Dimensions => LayerStyle {
                color: Color::BLUE,
                pattern: LinePattern::Continuous,
                description: "Dimension lines and labels",
            },
            Self::Annotations => LayerStyle {
                color: Color::BLUE,
                pattern: LinePattern::Dashed,
                description: "Center lines and reference marks",
            },
            Self::Text => LayerStyle {
                color: Color::WHITE,
                pattern: LinePattern::Continuous,
                description: "Titles and specifications",
            },
        }
    }
}

/// Style attributes attached to a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerStyle {
    /// ACI color shared by every primitive on the layer.
    pub color: Color,
    /// Line pattern for strokes on the layer.
    pub pattern: LinePattern,
    /// Human-readable layer description.
    pub description: &'static str,
}

/// Line pattern of a layer, mirrored into every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinePattern {
    Continuous,
    Dashed,
}

impl LinePattern {
    /// Returns the exchange-document linetype name.
    pub fn linetype(self) -> &'static str {
        match self {
            Self::Continuous => "CONTINUOUS",
            Self::Dashed => "DASHED",
        }
    }

    /// Returns the SVG dasharray value, or `None` for solid lines.
    pub fn dasharray(self) -> Option<&'static str> {
        match self {
            Self::Continuous => None,
            Self::Dashed => Some("5,5"),
        }
    }
}
