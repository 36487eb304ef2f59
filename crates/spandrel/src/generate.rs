//! Typology-dispatched geometry generation.
//!
//! One module per [`BridgeTypology`], all sharing the element vocabulary in
//! [`elements`]. Dispatch is an exhaustive `match`, so a new typology is a
//! compile-time checked addition. Generation is pure: a validated
//! [`ParameterSet`] never fails, and there is no randomness anywhere.

pub(crate) mod elements;

mod arch;
mod beam;
mod cable_stayed;
mod slab;
mod suspension;
mod t_beam;
mod truss;

use log::debug;

use spandrel_core::{
    draw::{Drawing, DrawingSet, Primitive},
    geometry::Point,
    mapper::{Frame, rotate_about},
};

use crate::{
    config::{AppConfig, Proportions},
    params::{BridgeTypology, ParameterSet},
};

/// Read-only inputs threaded through one generation request.
pub(crate) struct Ctx<'a> {
    pub(crate) params: &'a ParameterSet,
    pub(crate) props: &'a Proportions,
    pub(crate) frame: Frame,
}

/// Generates the elevation and plan views for one bridge.
///
/// The configured skew is applied to the plan view about the drawing origin;
/// the elevation is never skewed.
pub fn generate(
    typology: BridgeTypology,
    params: &ParameterSet,
    config: &AppConfig,
) -> DrawingSet {
    let ctx = Ctx {
        params,
        props: config.proportions(),
        frame: Frame::new(0.0, 0.0, config.drawing().scale),
    };

    debug!(typology = typology.tag(), span = params.span_length(); "Generating geometry");

    let mut set = match typology {
        BridgeTypology::Beam => beam::generate(&ctx),
        BridgeTypology::Truss => truss::generate(&ctx),
        BridgeTypology::Arch => arch::generate(&ctx),
        BridgeTypology::Suspension => suspension::generate(&ctx),
        BridgeTypology::CableStayed => cable_stayed::generate(&ctx),
        BridgeTypology::TBeam => t_beam::generate(&ctx),
        BridgeTypology::Slab => slab::generate(&ctx),
    };

    let skew = config.drawing().skew_radians();
    if skew != 0.0 {
        set.plan = skewed(&set.plan, skew);
    }

    set
}

/// Returns a copy of the drawing rotated by `angle` radians about the
/// drawing origin.
///
/// Axis-aligned rectangles stop being axis-aligned under rotation, so they
/// are converted into closed polylines; every other primitive keeps its
/// variant with rotated points. Text picks up the rotation in its own angle.
fn skewed(drawing: &Drawing, angle: f64) -> Drawing {
    let origin = Point::default();
    let rot = |p: Point| rotate_about(p, origin, angle);

    let mut out = Drawing::new();
    for (layer, primitives) in drawing.iter() {
        for primitive in primitives {
            let rotated = match primitive {
                Primitive::Rectangle {
                    x,
                    y,
                    width,
                    height,
                } => Primitive::Polyline {
                    points: vec![
                        rot(Point::new(*x, *y)),
                        rot(Point::new(x + width, *y)),
                        rot(Point::new(x + width, y + height)),
                        rot(Point::new(*x, y + height)),
                    ],
                    closed: true,
                },
                Primitive::Polyline { points, closed } => Primitive::Polyline {
                    points: points.iter().copied().map(rot).collect(),
                    closed: *closed,
                },
                Primitive::Line { start, end } => Primitive::line(rot(*start), rot(*end)),
                Primitive::ArcCurve { points } => Primitive::ArcCurve {
                    points: points.iter().copied().map(rot).collect(),
                },
                Primitive::Text {
                    position,
                    content,
                    height,
                    rotation,
                    anchor,
                } => Primitive::Text {
                    position: rot(*position),
                    content: content.clone(),
                    height: *height,
                    rotation: rotation + angle.to_degrees(),
                    anchor: *anchor,
                },
                Primitive::HatchRegion { boundary, pattern } => Primitive::HatchRegion {
                    boundary: boundary.iter().copied().map(rot).collect(),
                    pattern: *pattern,
                },
            };
            out.push(layer, rotated);
        }
    }
    out
}

/// Counts the closed shapes (rectangles and closed polylines) on a layer.
///
/// Piers, towers and abutments are all closed outlines on the supports
/// layer, which makes this the natural unit for the structural count checks.
#[cfg(test)]
pub(crate) fn closed_shape_count(drawing: &Drawing, layer: spandrel_core::layer::LayerId) -> usize {
    drawing
        .layer(layer)
        .iter()
        .filter(|primitive| {
            matches!(
                primitive,
                Primitive::Rectangle { .. } | Primitive::Polyline { closed: true, .. }
            )
        })
        .count()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn params() -> ParameterSet {
        ParameterSet::new(40.0, 12.0, 8.0, 1, 50.0, "concrete").unwrap()
    }

    #[test]
    fn test_every_typology_generates_both_views() {
        let params = params();
        let config = AppConfig::default();
        for typology in BridgeTypology::ALL {
            let set = generate(typology, &params, &config);
            assert!(
                !set.elevation.is_empty(),
                "empty elevation for {typology}"
            );
            assert!(!set.plan.is_empty(), "empty plan for {typology}");
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let params = params();
        let config = AppConfig::default();
        let a = generate(BridgeTypology::Truss, &params, &config);
        let b = generate(BridgeTypology::Truss, &params, &config);

        for (layer, primitives) in a.elevation.iter() {
            assert_eq!(primitives, b.elevation.layer(layer));
        }
        for (layer, primitives) in a.plan.iter() {
            assert_eq!(primitives, b.plan.layer(layer));
        }
    }

    #[test]
    fn test_skew_rotates_plan_only() {
        let params = params();
        let mut config = AppConfig::default();
        let straight = generate(BridgeTypology::Beam, &params, &config);

        config = AppConfig::new(
            crate::config::DrawingConfig {
                skew_degrees: 90.0,
                ..Default::default()
            },
            Default::default(),
        );
        let skewed_set = generate(BridgeTypology::Beam, &params, &config);

        // Elevation untouched.
        for (layer, primitives) in straight.elevation.iter() {
            assert_eq!(primitives, skewed_set.elevation.layer(layer));
        }

        // A quarter turn maps (x, y) to (-y, x), so the plan's extents swap.
        let straight_bounds = straight.plan.bounds();
        let bounds = skewed_set.plan.bounds();
        assert_approx_eq!(f64, bounds.max_y(), straight_bounds.max_x(), epsilon = 1e-9);
        assert_approx_eq!(f64, bounds.min_x(), -straight_bounds.max_y(), epsilon = 1e-9);
    }

    #[test]
    fn test_skew_preserves_primitive_counts() {
        let drawing = generate(BridgeTypology::Beam, &params(), &AppConfig::default()).plan;
        let rotated = skewed(&drawing, 0.3);
        assert_eq!(drawing.primitive_count(), rotated.primitive_count());
    }
}
