//! Arch bridge layout.
//!
//! Each sub-span carries a half-sine arch ring: an outer profile sampled at
//! 100 intervals, an inner profile offset by the ring thickness and clipped
//! at the springing line, and a hatched fill between the two. Spandrel posts
//! stand on the outer curve and carry a continuous deck above the crown.

use spandrel_core::{
    draw::{Drawing, DrawingSet, HatchPattern, Primitive},
    layer::LayerId,
};

use super::{Ctx, elements};

const ARCH_SAMPLES: usize = 100;

pub(crate) fn generate(ctx: &Ctx) -> DrawingSet {
    DrawingSet::new(elevation(ctx), plan(ctx))
}

/// Arch profile level at parameter `t ∈ [0, 1]` across one sub-span.
fn profile(rise: f64, t: f64) -> f64 {
    rise * (std::f64::consts::PI * t).sin()
}

fn elevation(ctx: &Ctx) -> Drawing {
    let (p, props, frame) = (ctx.params, ctx.props, ctx.frame);
    let mut drawing = Drawing::new();

    let (num_spans, sub_span) = props.sub_spans(p.span_length(), p.support_count());
    let rise = p.height() * props.arch_rise_ratio;
    let inner_rise = (rise - props.arch_thickness).max(0.0);
    let deck_soffit = rise + props.arch_clearance;

    for span_idx in 0..num_spans {
        let start = f64::from(span_idx) * sub_span;

        let outer = elements::sampled_curve(frame, ARCH_SAMPLES, |t| {
            (start + t * sub_span, profile(rise, t))
        });
        let inner = elements::sampled_curve(frame, ARCH_SAMPLES, |t| {
            (start + t * sub_span, profile(inner_rise, t))
        });

        // Hollow ring: outer boundary forward, inner boundary reversed.
        if let (Primitive::ArcCurve { points: outer_pts }, Primitive::ArcCurve { points: inner_pts }) =
            (&outer, &inner)
        {
            let mut boundary = outer_pts.clone();
            boundary.extend(inner_pts.iter().rev().copied());
            drawing.push(
                LayerId::Hatching,
                Primitive::HatchRegion {
                    boundary,
                    pattern: HatchPattern::Ansi31,
                },
            );
        }
        drawing.push(LayerId::Structure, outer);
        drawing.push(LayerId::Structure, inner);

        // Spandrel posts from the outer curve up to the deck soffit.
        let posts = ((sub_span / props.spandrel_post_spacing) as u32).max(3);
        let post_spacing = sub_span / f64::from(posts + 1);
        for i in 1..=posts {
            let ch = start + f64::from(i) * post_spacing;
            let local = profile(rise, (ch - start) / sub_span);
            drawing.push(
                LayerId::Supports,
                Primitive::rect(
                    frame.x(ch - 0.3),
                    frame.y(local),
                    0.6 * frame.scale(),
                    (deck_soffit - local) * frame.scale(),
                ),
            );
        }
    }

    drawing.push(
        LayerId::Deck,
        elements::deck_strip(
            frame,
            0.0,
            p.span_length(),
            deck_soffit,
            props.deck_thickness,
        ),
    );

    // End abutments, wider than the intermediate piers.
    let abutment_width = 4.0;
    for ch in [0.0, p.span_length()] {
        drawing.push(
            LayerId::Supports,
            elements::support_block(frame, ch, -p.foundation_depth(), deck_soffit, abutment_width),
        );
    }
    for i in 1..num_spans {
        let ch = f64::from(i) * sub_span;
        drawing.push(
            LayerId::Supports,
            elements::support_block(
                frame,
                ch,
                -p.foundation_depth(),
                deck_soffit,
                abutment_width * 2.0 / 3.0,
            ),
        );
    }
    elements::add_end_foundations(
        &mut drawing,
        frame,
        p.span_length(),
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

    // Three parallel arch ribs.
    let ribs = 3u32;
    let rib_width = 1.0;
    let rib_spacing = width / f64::from(ribs + 1);
    for i in 1..=ribs {
        drawing.push(
            LayerId::Structure,
            Primitive::rect(
                frame.x(0.0),
                frame.y(f64::from(i) * rib_spacing - rib_width / 2.0),
                span * frame.scale(),
                rib_width * frame.scale(),
            ),
        );
    }

    // Spandrel cross-walls mirror the elevation post positions.
    let (num_spans, sub_span) = props.sub_spans(span, p.support_count());
    for span_idx in 0..num_spans {
        let start = f64::from(span_idx) * sub_span;
        let posts = ((sub_span / props.spandrel_post_spacing) as u32).max(3);
        let post_spacing = sub_span / f64::from(posts + 1);
        for i in 1..=posts {
            let ch = start + f64::from(i) * post_spacing;
            drawing.push(
                LayerId::Structure,
                Primitive::rect(
                    frame.x(ch - 0.3),
                    frame.y(0.0),
                    0.6 * frame.scale(),
                    width * frame.scale(),
                ),
            );
        }
    }

    let abutment_width = 4.0;
    for ch in [0.0, span] {
        drawing.push(
            LayerId::Supports,
            elements::support_block(
                frame,
                ch,
                (width - abutment_width) / 2.0,
                (width + abutment_width) / 2.0,
                abutment_width,
            ),
        );
    }
    let pier_width = abutment_width * 2.0 / 3.0;
    for i in 1..num_spans {
        let ch = f64::from(i) * sub_span;
        drawing.push(
            LayerId::Supports,
            elements::support_block(
                frame,
                ch,
                (width - pier_width) / 2.0,
                (width + pier_width) / 2.0,
                pier_width,
            ),
        );
    }

    drawing
}
