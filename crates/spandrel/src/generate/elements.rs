//! Shared structural-element constructors.
//!
//! Every typology is assembled from the same small vocabulary: deck strips,
//! tapered piers, towers, abutments, foundation blocks, rail assemblies,
//! sampled curves and radiating cable fans. The constructors take model-space
//! chainage/level values and a [`Frame`], so each generator stays a thin
//! layout algorithm parameterized by its typology-specific coefficients.

use spandrel_core::{
    draw::{Drawing, HatchPattern, Primitive},
    geometry::Point,
    layer::LayerId,
    mapper::Frame,
};

/// A deck strip between two chainages, anchored at its soffit level.
pub(crate) fn deck_strip(
    frame: Frame,
    start_ch: f64,
    end_ch: f64,
    soffit_level: f64,
    thickness: f64,
) -> Primitive {
    Primitive::rect(
        frame.x(start_ch),
        frame.y(soffit_level),
        frame.x(end_ch) - frame.x(start_ch),
        thickness * frame.scale(),
    )
}

/// A rectangular support (abutment, tower shaft, anchorage) centered on a
/// chainage.
pub(crate) fn support_block(
    frame: Frame,
    center_ch: f64,
    base_level: f64,
    top_level: f64,
    width: f64,
) -> Primitive {
    Primitive::rect(
        frame.x(center_ch - width / 2.0),
        frame.y(base_level),
        width * frame.scale(),
        (top_level - base_level) * frame.scale(),
    )
}

/// A pier shaft whose half-width widens linearly with depth at the given
/// batter (vertical run per unit of horizontal taper).
///
/// The result is a closed four-point polyline: `top_width` at `top_level`,
/// `top_width + 2·(height/batter)` at `base_level`.
pub(crate) fn tapered_pier(
    frame: Frame,
    center_ch: f64,
    base_level: f64,
    top_level: f64,
    top_width: f64,
    batter: f64,
) -> Primitive {
    let height = top_level - base_level;
    let taper = if batter > 0.0 { height / batter } else { 0.0 };
    let top_half = top_width / 2.0;
    let base_half = top_half + taper;

    Primitive::Polyline {
        points: vec![
            frame.point(center_ch - base_half, base_level),
            frame.point(center_ch + base_half, base_level),
            frame.point(center_ch + top_half, top_level),
            frame.point(center_ch - top_half, top_level),
        ],
        closed: true,
    }
}

/// A footing block centered on a chainage, rising `depth` above `base_level`.
pub(crate) fn footing(
    frame: Frame,
    center_ch: f64,
    width: f64,
    base_level: f64,
    depth: f64,
) -> Primitive {
    Primitive::rect(
        frame.x(center_ch - width / 2.0),
        frame.y(base_level),
        width * frame.scale(),
        depth * frame.scale(),
    )
}

/// The closed boundary of an axis-aligned rectangle, for hatching.
pub(crate) fn rect_boundary(frame: Frame, x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point> {
    vec![
        frame.point(x0, y0),
        frame.point(x1, y0),
        frame.point(x1, y1),
        frame.point(x0, y1),
    ]
}

/// Adds the foundation blocks every typology shares at both bridge ends:
/// one block per abutment, hatched as concrete.
pub(crate) fn add_end_foundations(
    drawing: &mut Drawing,
    frame: Frame,
    span_length: f64,
    foundation_depth: f64,
    width: f64,
) {
    for (x0, x1) in [(0.0, width), (span_length - width, span_length)] {
        drawing.push(
            LayerId::Foundation,
            Primitive::rect(
                frame.x(x0),
                frame.y(-foundation_depth),
                (x1 - x0) * frame.scale(),
                foundation_depth * frame.scale(),
            ),
        );
        drawing.push(
            LayerId::Hatching,
            Primitive::HatchRegion {
                boundary: rect_boundary(frame, x0, -foundation_depth, x1, 0.0),
                pattern: HatchPattern::Ansi31,
            },
        );
    }
}

/// Rail posts at both ends plus the top rail line.
pub(crate) fn rail_assembly(
    frame: Frame,
    start_ch: f64,
    end_ch: f64,
    deck_top: f64,
    rail_height: f64,
) -> Vec<Primitive> {
    let rail_top = deck_top + rail_height;
    vec![
        Primitive::line(
            frame.point(start_ch, deck_top),
            frame.point(start_ch, rail_top),
        ),
        Primitive::line(frame.point(end_ch, deck_top), frame.point(end_ch, rail_top)),
        Primitive::line(
            frame.point(start_ch, rail_top),
            frame.point(end_ch, rail_top),
        ),
    ]
}

/// Samples a parametric curve into an [`Primitive::ArcCurve`].
///
/// `f(t)` maps `t ∈ [0, 1]` to a model-space `(chainage, level)` pair and is
/// evaluated at `samples + 1` evenly spaced parameters.
pub(crate) fn sampled_curve<F>(frame: Frame, samples: usize, f: F) -> Primitive
where
    F: Fn(f64) -> (f64, f64),
{
    let points = (0..=samples)
        .map(|i| {
            let t = i as f64 / samples as f64;
            let (ch, level) = f(t);
            frame.point(ch, level)
        })
        .collect();
    Primitive::ArcCurve { points }
}

/// Straight stay cables radiating from an apex to a set of deck chainages.
pub(crate) fn cable_fan(
    frame: Frame,
    apex_ch: f64,
    apex_level: f64,
    deck_level: f64,
    deck_chainages: &[f64],
) -> Vec<Primitive> {
    let apex = frame.point(apex_ch, apex_level);
    deck_chainages
        .iter()
        .map(|&ch| Primitive::line(apex, frame.point(ch, deck_level)))
        .collect()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_tapered_pier_widens_with_depth() {
        let pier = tapered_pier(Frame::default(), 20.0, 0.0, 6.0, 2.0, 6.0);
        let Primitive::Polyline { points, closed } = pier else {
            panic!("expected polyline");
        };
        assert!(closed);
        assert_eq!(points.len(), 4);
        // Base half-width = 1.0 + 6.0/6.0 = 2.0.
        assert_approx_eq!(f64, points[0].x(), 18.0);
        assert_approx_eq!(f64, points[1].x(), 22.0);
        // Top keeps the nominal width.
        assert_approx_eq!(f64, points[2].x(), 21.0);
        assert_approx_eq!(f64, points[3].x(), 19.0);
    }

    #[test]
    fn test_zero_batter_means_no_taper() {
        let pier = tapered_pier(Frame::default(), 10.0, -5.0, 5.0, 2.0, 0.0);
        let Primitive::Polyline { points, .. } = pier else {
            panic!("expected polyline");
        };
        assert_approx_eq!(f64, points[0].x(), 9.0);
        assert_approx_eq!(f64, points[1].x(), 11.0);
    }

    #[test]
    fn test_sampled_curve_endpoint_count() {
        let curve = sampled_curve(Frame::default(), 100, |t| (t * 40.0, t * (1.0 - t)));
        let Primitive::ArcCurve { points } = curve else {
            panic!("expected curve");
        };
        assert_eq!(points.len(), 101);
        assert_approx_eq!(f64, points[0].x(), 0.0);
        assert_approx_eq!(f64, points[100].x(), 40.0);
    }

    #[test]
    fn test_cable_fan_counts_targets() {
        let fan = cable_fan(Frame::default(), 50.0, 40.0, 10.0, &[20.0, 30.0, 70.0, 80.0]);
        assert_eq!(fan.len(), 4);
        for cable in &fan {
            let Primitive::Line { start, .. } = cable else {
                panic!("expected line");
            };
            assert_approx_eq!(f64, start.x(), 50.0);
            assert_approx_eq!(f64, start.y(), 40.0);
        }
    }

    #[test]
    fn test_deck_strip_applies_scale() {
        let frame = Frame::new(0.0, 0.0, 2.0);
        let deck = deck_strip(frame, 0.0, 40.0, 6.0, 2.0);
        let Primitive::Rectangle {
            x,
            y,
            width,
            height,
        } = deck
        else {
            panic!("expected rectangle");
        };
        assert_approx_eq!(f64, x, 0.0);
        assert_approx_eq!(f64, y, 12.0);
        assert_approx_eq!(f64, width, 80.0);
        assert_approx_eq!(f64, height, 4.0);
    }
}
