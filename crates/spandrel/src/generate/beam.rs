//! Beam bridge layout.
//!
//! Elevation: one deck strip over the full span, tapered piers at even
//! spacing, end abutments and a rail assembly along the deck top. Plan: the
//! deck outline with longitudinal girders, cross-beams and pier footprints.

use spandrel_core::{
    draw::{Drawing, DrawingSet, Primitive},
    layer::LayerId,
};

use super::{Ctx, elements};

pub(crate) fn generate(ctx: &Ctx) -> DrawingSet {
    DrawingSet::new(elevation(ctx), plan(ctx))
}

fn elevation(ctx: &Ctx) -> Drawing {
    let (p, props, frame) = (ctx.params, ctx.props, ctx.frame);
    let mut drawing = Drawing::new();

    let span = p.span_length();
    let deck_soffit = p.height() - p.girder_depth();

    drawing.push(
        LayerId::Deck,
        elements::deck_strip(frame, 0.0, span, deck_soffit, p.girder_depth()),
    );

    // Piers at i·span/(supports+1), footing under each shaft.
    let spacing = span / f64::from(p.support_count() + 1);
    for i in 1..=p.support_count() {
        let ch = spacing * f64::from(i);
        drawing.push(
            LayerId::Supports,
            elements::tapered_pier(
                frame,
                ch,
                -p.foundation_depth(),
                deck_soffit,
                props.pier_top_width,
                props.batter,
            ),
        );
        drawing.push(
            LayerId::Foundation,
            elements::footing(
                frame,
                ch,
                props.pier_top_width * 2.0,
                -p.foundation_depth(),
                p.foundation_depth() * 0.6,
            ),
        );
    }

    for ch in [0.0, span] {
        drawing.push(
            LayerId::Supports,
            elements::support_block(
                frame,
                ch,
                -p.foundation_depth(),
                deck_soffit,
                props.abutment_width,
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

    drawing.extend(
        LayerId::Railings,
        elements::rail_assembly(frame, 0.0, span, p.height(), p.rail_height()),
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

    // Two longitudinal girders at 20 % and 80 % of the deck width.
    let girder_width = 0.6;
    for offset in [width * 0.2, width * 0.8] {
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

    // Cross-beams every ~15 m, never fewer than five.
    let cross_beams = ((span / 15.0) as u32).max(5);
    let cross_spacing = span / f64::from(cross_beams - 1);
    let cross_width = 0.3;
    for i in 0..cross_beams {
        let ch = f64::from(i) * cross_spacing;
        drawing.push(
            LayerId::Structure,
            Primitive::rect(
                frame.x(ch - cross_width / 2.0),
                frame.y(0.0),
                cross_width * frame.scale(),
                width * frame.scale(),
            ),
        );
    }

    let spacing = span / f64::from(p.support_count() + 1);
    let pier_depth = 1.5;
    for i in 1..=p.support_count() {
        let ch = spacing * f64::from(i);
        drawing.push(
            LayerId::Supports,
            elements::support_block(
                frame,
                ch,
                (width - pier_depth) / 2.0,
                (width + pier_depth) / 2.0,
                props.pier_top_width,
            ),
        );
    }

    // Centerline and deck edges.
    drawing.push(
        LayerId::Annotations,
        Primitive::line(frame.point(0.0, width / 2.0), frame.point(span, width / 2.0)),
    );
    for edge in [0.0, width] {
        drawing.push(
            LayerId::Structure,
            Primitive::line(frame.point(0.0, edge), frame.point(span, edge)),
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

    fn context(params: &ParameterSet, props: &Proportions) -> DrawingSet {
        generate(&Ctx {
            params,
            props,
            frame: Frame::default(),
        })
    }

    #[test]
    fn test_reference_beam_elevation() {
        // Span 40, width 12, height 8, one support.
        let params = ParameterSet::new(40.0, 12.0, 8.0, 1, 50.0, "concrete").unwrap();
        let props = Proportions::default();
        let set = context(&params, &props);

        // Exactly one pier (closed tapered polyline) and two abutments
        // (rectangles) on the supports layer.
        let supports = set.elevation.layer(LayerId::Supports);
        let piers = supports
            .iter()
            .filter(|s| matches!(s, Primitive::Polyline { closed: true, .. }))
            .count();
        let abutments = supports
            .iter()
            .filter(|s| matches!(s, Primitive::Rectangle { .. }))
            .count();
        assert_eq!(piers, 1);
        assert_eq!(abutments, 2);

        // One deck rectangle spanning x ∈ [0, 40].
        let deck = set.elevation.layer(LayerId::Deck);
        assert_eq!(deck.len(), 1);
        let Primitive::Rectangle { x, width, .. } = deck[0] else {
            panic!("expected deck rectangle");
        };
        assert_approx_eq!(f64, x, 0.0);
        assert_approx_eq!(f64, width, 40.0);
    }

    #[test]
    fn test_plan_deck_area_is_span_times_width() {
        let params = ParameterSet::new(40.0, 12.0, 8.0, 1, 50.0, "concrete").unwrap();
        let set = context(&params, &Proportions::default());

        let Primitive::Rectangle { width, height, .. } = set.plan.layer(LayerId::Deck)[0] else {
            panic!("expected deck rectangle");
        };
        assert_approx_eq!(f64, width * height, 40.0 * 12.0);
    }

    #[test]
    fn test_pier_count_follows_support_count() {
        let props = Proportions::default();
        for supports in [0u32, 1, 3, 5] {
            let params = ParameterSet::new(100.0, 12.0, 10.0, supports, 50.0, "steel").unwrap();
            let set = context(&params, &props);
            // supports piers + 2 abutments, all closed shapes.
            assert_eq!(
                closed_shape_count(&set.elevation, LayerId::Supports),
                supports as usize + 2
            );
        }
    }

    #[test]
    fn test_rail_assembly_sits_above_deck() {
        let params = ParameterSet::new(40.0, 12.0, 8.0, 1, 50.0, "concrete").unwrap();
        let set = context(&params, &Proportions::default());

        let rails = set.elevation.layer(LayerId::Railings);
        assert_eq!(rails.len(), 3);
        let top = rails
            .iter()
            .map(|r| r.bounds().max_y())
            .fold(f64::NEG_INFINITY, f64::max);
        assert_approx_eq!(f64, top, 8.0 + 1.2);
    }
}
