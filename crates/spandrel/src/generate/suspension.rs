//! Suspension bridge layout.
//!
//! Two towers stand at 20 % and 80 % of the span. The main cable is a
//! parabola between the tower chainages, the side-span cables are parabolas
//! from tower to anchorage, and hangers drop from the main cable to the deck
//! at fixed intervals. Wide anchorage blocks close both ends.

use spandrel_core::{
    draw::{Drawing, DrawingSet, Primitive},
    layer::LayerId,
};

use super::{Ctx, elements};

pub(crate) fn generate(ctx: &Ctx) -> DrawingSet {
    DrawingSet::new(elevation(ctx), plan(ctx))
}

/// Main-cable level at chainage `ch` between the tower chainages.
fn main_cable_level(ch: f64, span: f64, deck_level: f64, sag: f64, t1: f64, t2: f64) -> f64 {
    let offset = ch - span / 2.0;
    deck_level + sag * (1.0 - 4.0 * offset * offset / ((t2 - t1) * (t2 - t1)))
}

fn elevation(ctx: &Ctx) -> Drawing {
    let (p, props, frame) = (ctx.params, ctx.props, ctx.frame);
    let mut drawing = Drawing::new();

    let span = p.span_length();
    let height = p.height();
    let deck_level = height * props.suspension_deck_level_ratio;
    let sag = height * props.cable_sag_ratio;
    let t1 = span * props.tower_position_ratio;
    let t2 = span * (1.0 - props.tower_position_ratio);

    for tower_ch in [t1, t2] {
        drawing.push(
            LayerId::Supports,
            elements::support_block(
                frame,
                tower_ch,
                -p.foundation_depth(),
                height,
                props.tower_width,
            ),
        );
        // Saddle cross-beam at the tower top.
        drawing.push(
            LayerId::Structure,
            Primitive::rect(
                frame.x(tower_ch - props.tower_width),
                frame.y(height - 2.0),
                props.tower_width * 2.0 * frame.scale(),
                1.0 * frame.scale(),
            ),
        );
    }

    // Main-span cable.
    drawing.push(
        LayerId::Structure,
        elements::sampled_curve(frame, 100, |t| {
            let ch = t1 + t * (t2 - t1);
            (ch, main_cable_level(ch, span, deck_level, sag, t1, t2))
        }),
    );

    // Side-span cables, tower to anchorage.
    drawing.push(
        LayerId::Structure,
        elements::sampled_curve(frame, 50, |t| {
            let ch = t * t1;
            (ch, height - (height - deck_level) * (ch / t1).powi(2))
        }),
    );
    drawing.push(
        LayerId::Structure,
        elements::sampled_curve(frame, 50, |t| {
            let ch = t2 + t * (span - t2);
            let rel = (ch - span) / (t2 - span);
            (ch, height - (height - deck_level) * rel * rel)
        }),
    );

    drawing.push(
        LayerId::Deck,
        elements::deck_strip(frame, 0.0, span, deck_level, props.deck_thickness),
    );

    // Hangers between deck top and the main cable.
    let intervals = props.hanger_intervals;
    let hanger_spacing = span / f64::from(intervals);
    for i in 1..intervals {
        let ch = f64::from(i) * hanger_spacing;
        if (t1..=t2).contains(&ch) {
            let cable = main_cable_level(ch, span, deck_level, sag, t1, t2);
            drawing.push(
                LayerId::Structure,
                Primitive::line(
                    frame.point(ch, deck_level + props.deck_thickness),
                    frame.point(ch, cable),
                ),
            );
        }
    }

    // Anchorage blocks.
    for ch in [0.0, span] {
        drawing.push(
            LayerId::Foundation,
            elements::support_block(
                frame,
                ch,
                -p.foundation_depth(),
                deck_level,
                props.anchorage_width,
            ),
        );
    }
    elements::add_end_foundations(
        &mut drawing,
        frame,
        span,
        p.foundation_depth(),
        props.end_foundation_width,
    );

    drawing
}

fn plan(ctx: &Ctx) -> Drawing {
    let (p, props, frame) = (ctx.params, ctx.props, ctx.frame);
    let mut drawing = Drawing::new();

    let span = p.span_length();
    let width = p.deck_width();

    drawing.push(
        LayerId::Deck,
        Primitive::rect(
            frame.x(0.0),
            frame.y(0.0),
            span * frame.scale(),
            width * frame.scale(),
        ),
    );

    // Two main cables near the deck edges.
    let cable_width = 0.5;
    for offset in [width * 0.1, width * 0.9] {
        drawing.push(
            LayerId::Structure,
            Primitive::rect(
                frame.x(0.0),
                frame.y(offset - cable_width / 2.0),
                span * frame.scale(),
                cable_width * frame.scale(),
            ),
        );
    }

    // Stiffening girders.
    let girder_width = 0.8;
    for offset in [width * 0.25, width * 0.75] {
        drawing.push(
            LayerId::Structure,
            Primitive::rect(
                frame.x(0.0),
                frame.y(offset - girder_width / 2.0),
                span * frame.scale(),
                girder_width * frame.scale(),
            ),
        );
    }

    let tower_depth = 2.0;
    for ratio in [props.tower_position_ratio, 1.0 - props.tower_position_ratio] {
        drawing.push(
            LayerId::Supports,
            elements::support_block(
                frame,
                span * ratio,
                (width - tower_depth) / 2.0,
                (width + tower_depth) / 2.0,
                props.tower_width,
            ),
        );
    }

    for ch in [0.0, span] {
        drawing.push(
            LayerId::Foundation,
            elements::support_block(
                frame,
                ch,
                (width - props.anchorage_width) / 2.0,
                (width + props.anchorage_width) / 2.0,
                props.anchorage_width,
            ),
        );
    }

    drawing
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use spandrel_core::mapper::Frame;

    use crate::{config::Proportions, generate::closed_shape_count, params::ParameterSet};

    use super::*;

    fn reference_set() -> DrawingSet {
        let params = ParameterSet::new(200.0, 20.0, 80.0, 0, 120.0, "steel").unwrap();
        let props = Proportions::default();
        generate(&Ctx {
            params: &params,
            props: &props,
            frame: Frame::default(),
        })
    }

    #[test]
    fn test_two_towers_at_fifth_points() {
        let set = reference_set();
        let towers = set.elevation.layer(LayerId::Supports);
        assert_eq!(towers.len(), 2);

        let centers: Vec<f64> = towers
            .iter()
            .map(|t| {
                let b = t.bounds();
                (b.min_x() + b.max_x()) / 2.0
            })
            .collect();
        assert_approx_eq!(f64, centers[0], 40.0);
        assert_approx_eq!(f64, centers[1], 160.0);
    }

    #[test]
    fn test_main_cable_peak_at_midspan() {
        let set = reference_set();
        // First structure curve is the main cable.
        let cable = set
            .elevation
            .layer(LayerId::Structure)
            .iter()
            .find_map(|s| match s {
                Primitive::ArcCurve { points } => Some(points),
                _ => None,
            })
            .expect("main cable curve");

        let peak = cable
            .iter()
            .copied()
            .max_by(|a, b| a.y().total_cmp(&b.y()))
            .unwrap();
        // Maximum level is deck level + 0.3 × height, reached at midspan.
        assert_approx_eq!(f64, peak.x(), 100.0, epsilon = 1e-9);
        assert_approx_eq!(f64, peak.y(), 32.0 + 0.3 * 80.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cable_meets_deck_at_towers() {
        let deck_level = 32.0;
        for ch in [40.0, 160.0] {
            let level = main_cable_level(ch, 200.0, deck_level, 24.0, 40.0, 160.0);
            assert_approx_eq!(f64, level, deck_level, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_hangers_only_between_towers() {
        let set = reference_set();
        let hangers: Vec<f64> = set
            .elevation
            .layer(LayerId::Structure)
            .iter()
            .filter_map(|s| match s {
                Primitive::Line { start, end } if start.x() == end.x() => Some(start.x()),
                _ => None,
            })
            .collect();
        // 20 intervals over 200 m: hangers at 40..=160 in 10 m steps.
        assert_eq!(hangers.len(), 13);
        assert!(hangers.iter().all(|&x| (40.0..=160.0).contains(&x)));
    }

    #[test]
    fn test_anchorages_and_plan_counts() {
        let set = reference_set();
        // Two anchorages plus two shared end-foundation blocks.
        assert_eq!(set.elevation.layer(LayerId::Foundation).len(), 4);
        assert_eq!(closed_shape_count(&set.plan, LayerId::Supports), 2);
    }
}
