//! Drawing primitives and the layered drawing container.
//!
//! A [`Drawing`] is the unit of interchange between the geometry generators
//! and the output serializers: an ordered mapping from [`LayerId`] to a
//! sequence of [`Primitive`] values. Layer order is fixed to the registry's
//! canonical order at construction, and primitive order within a layer is
//! insertion order — both are preserved by every backend, which matters for
//! overlapping hatches.
//!
//! Curves never appear in closed form: parabolic and sinusoidal profiles are
//! sampled into [`Primitive::ArcCurve`] point lists at generation time.

use indexmap::IndexMap;

use crate::{
    geometry::{Bounds, Point},
    layer::LayerId,
};

/// Horizontal text alignment, mirrored into SVG `text-anchor` and the
/// exchange document's horizontal justification codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Fill pattern of a hatched region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HatchPattern {
    /// Diagonal concrete/masonry hatching (ANSI31).
    Ansi31,
    /// Solid fill.
    Solid,
}

impl HatchPattern {
    /// Returns the exchange-document pattern name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ansi31 => "ANSI31",
            Self::Solid => "SOLID",
        }
    }
}

/// A single drawable element.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Axis-aligned rectangle anchored at its lower-left corner.
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Open or closed sequence of straight segments.
    Polyline { points: Vec<Point>, closed: bool },
    /// A single straight segment.
    Line { start: Point, end: Point },
    /// A curve pre-sampled into a point list at generation time.
    ArcCurve { points: Vec<Point> },
    /// A text label with explicit height, rotation in degrees and anchor.
    Text {
        position: Point,
        content: String,
        height: f64,
        rotation: f64,
        anchor: TextAnchor,
    },
    /// A filled region bounded by a closed point loop.
    HatchRegion {
        boundary: Vec<Point>,
        pattern: HatchPattern,
    },
}

impl Primitive {
    /// Convenience constructor for an axis-aligned rectangle.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::Rectangle {
            x,
            y,
            width,
            height,
        }
    }

    /// Convenience constructor for a line segment.
    pub fn line(start: Point, end: Point) -> Self {
        Self::Line { start, end }
    }

    /// Returns the bounding extents of this primitive.
    ///
    /// Text contributes only its insertion point; measuring rendered glyph
    /// extents is a backend concern.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::empty();
        match self {
            Self::Rectangle {
                x,
                y,
                width,
                height,
            } => {
                bounds.include(Point::new(*x, *y));
                bounds.include(Point::new(x + width, y + height));
            }
            Self::Polyline { points, .. } | Self::ArcCurve { points } => {
                for point in points {
                    bounds.include(*point);
                }
            }
            Self::Line { start, end } => {
                bounds.include(*start);
                bounds.include(*end);
            }
            Self::Text { position, .. } => bounds.include(*position),
            Self::HatchRegion { boundary, .. } => {
                for point in boundary {
                    bounds.include(*point);
                }
            }
        }
        bounds
    }
}

/// An ordered, layered collection of primitives representing one view.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    layers: IndexMap<LayerId, Vec<Primitive>>,
}

impl Drawing {
    /// Creates an empty drawing with every registry layer present, in
    /// canonical order.
    pub fn new() -> Self {
        let mut layers = IndexMap::with_capacity(LayerId::ALL.len());
        for layer in LayerId::ALL {
            layers.insert(layer, Vec::new());
        }
        Self { layers }
    }

    /// Appends a primitive to the given layer.
    pub fn push(&mut self, layer: LayerId, primitive: Primitive) {
        self.layers.entry(layer).or_default().push(primitive);
    }

    /// Appends all primitives from an iterator to the given layer.
    pub fn extend(&mut self, layer: LayerId, primitives: impl IntoIterator<Item = Primitive>) {
        self.layers.entry(layer).or_default().extend(primitives);
    }

    /// Returns the primitives on a layer, in insertion order.
    pub fn layer(&self, layer: LayerId) -> &[Primitive] {
        self.layers.get(&layer).map_or(&[], Vec::as_slice)
    }

    /// Iterates layers in canonical order together with their primitives.
    pub fn iter(&self) -> impl Iterator<Item = (LayerId, &[Primitive])> {
        self.layers
            .iter()
            .map(|(layer, primitives)| (*layer, primitives.as_slice()))
    }

    /// Returns the total number of primitives across all layers.
    pub fn primitive_count(&self) -> usize {
        self.layers.values().map(Vec::len).sum()
    }

    /// Returns true if no layer holds any primitive.
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }

    /// Computes the bounding extents over every primitive in the drawing.
    pub fn bounds(&self) -> Bounds {
        self.layers
            .values()
            .flatten()
            .map(Primitive::bounds)
            .fold(Bounds::empty(), Bounds::union)
    }
}

/// The elevation and plan views produced for one generation request.
#[derive(Debug, Clone)]
pub struct DrawingSet {
    pub elevation: Drawing,
    pub plan: Drawing,
}

impl DrawingSet {
    pub fn new(elevation: Drawing, plan: Drawing) -> Self {
        Self { elevation, plan }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_new_drawing_has_all_layers_in_order() {
        let drawing = Drawing::new();
        let order: Vec<LayerId> = drawing.iter().map(|(layer, _)| layer).collect();
        assert_eq!(order, LayerId::ALL);
        assert!(drawing.is_empty());
    }

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut drawing = Drawing::new();
        drawing.push(LayerId::Deck, Primitive::rect(0.0, 0.0, 10.0, 1.0));
        drawing.push(
            LayerId::Deck,
            Primitive::line(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
        );

        let deck = drawing.layer(LayerId::Deck);
        assert_eq!(deck.len(), 2);
        assert!(matches!(deck[0], Primitive::Rectangle { .. }));
        assert!(matches!(deck[1], Primitive::Line { .. }));
    }

    #[test]
    fn test_rectangle_bounds() {
        let rect = Primitive::rect(1.0, 2.0, 4.0, 3.0);
        let bounds = rect.bounds();
        assert_approx_eq!(f64, bounds.min_x(), 1.0);
        assert_approx_eq!(f64, bounds.max_x(), 5.0);
        assert_approx_eq!(f64, bounds.max_y(), 5.0);
    }

    #[test]
    fn test_drawing_bounds_union_over_layers() {
        let mut drawing = Drawing::new();
        drawing.push(LayerId::Deck, Primitive::rect(0.0, 0.0, 40.0, 1.0));
        drawing.push(
            LayerId::Supports,
            Primitive::line(Point::new(20.0, -5.0), Point::new(20.0, 7.0)),
        );

        let bounds = drawing.bounds();
        assert_approx_eq!(f64, bounds.min_y(), -5.0);
        assert_approx_eq!(f64, bounds.max_x(), 40.0);
        assert_approx_eq!(f64, bounds.max_y(), 7.0);
    }

    #[test]
    fn test_primitive_count() {
        let mut drawing = Drawing::new();
        assert_eq!(drawing.primitive_count(), 0);
        drawing.push(LayerId::Text, Primitive::Text {
            position: Point::default(),
            content: "Beam Bridge".into(),
            height: 3.0,
            rotation: 0.0,
            anchor: TextAnchor::Middle,
        });
        drawing.push(LayerId::Hatching, Primitive::HatchRegion {
            boundary: vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
            ],
            pattern: HatchPattern::Ansi31,
        });
        assert_eq!(drawing.primitive_count(), 2);
    }
}
