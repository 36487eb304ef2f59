//! Slab bridge layout.
//!
//! A single thick slab whose thickness scales with the span, an illustrative
//! reinforcement grid at fixed spacing, expansion joints at each
//! intermediate support, and construction joints in plan once the span
//! exceeds the configured threshold.

use spandrel_core::{
    draw::{Drawing, DrawingSet, Primitive},
    layer::LayerId,
};

use super::{Ctx, elements};

pub(crate) fn generate(ctx: &Ctx) -> DrawingSet {
    DrawingSet::new(elevation(ctx), plan(ctx))
}

/// Slab thickness scales with span but never drops below the minimum.
fn slab_thickness(span: f64, min: f64, divisor: f64) -> f64 {
    (span / divisor).max(min)
}

fn elevation(ctx: &Ctx) -> Drawing {
    let (p, props, frame) = (ctx.params, ctx.props, ctx.frame);
    let mut drawing = Drawing::new();

    let span = p.span_length();
    let thickness = slab_thickness(span, props.slab_min_thickness, props.slab_span_divisor);
    let soffit = p.height() - thickness;

    drawing.push(
        LayerId::Deck,
        elements::deck_strip(frame, 0.0, span, soffit, thickness),
    );

    // Reinforcement pattern: bottom longitudinal bars with a transverse bar
    // at each station midpoint.
    let steps = (span / props.rebar_spacing) as u32;
    for i in 0..steps {
        let ch = f64::from(i) * props.rebar_spacing;
        drawing.push(
            LayerId::Structure,
            Primitive::line(
                frame.point(ch, soffit + 0.1),
                frame.point(ch + props.rebar_spacing, soffit + 0.1),
            ),
        );
        drawing.push(
            LayerId::Structure,
            Primitive::line(
                frame.point(ch + props.rebar_spacing / 2.0, soffit + 0.1),
                frame.point(ch + props.rebar_spacing / 2.0, soffit + thickness - 0.1),
            ),
        );
    }

    let (num_spans, sub_span) = props.sub_spans(span, p.support_count());
    let pier_width = 2.5;
    for i in 1..num_spans {
        let ch = f64::from(i) * sub_span;
        drawing.push(
            LayerId::Supports,
            elements::support_block(frame, ch, -p.foundation_depth(), soffit, pier_width),
        );
        // Expansion joint through the slab over the pier.
        drawing.push(
            LayerId::Annotations,
            Primitive::rect(
                frame.x(ch - 0.05),
                frame.y(soffit),
                0.1 * frame.scale(),
                thickness * frame.scale(),
            ),
        );
    }

    let abutment_width = 4.0;
    for ch in [0.0, span] {
        drawing.push(
            LayerId::Supports,
            elements::support_block(frame, ch, -p.foundation_depth(), soffit, abutment_width),
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

    // Reinforcement grid, longitudinal and transverse.
    let transverse_spacing = 2.5;
    let longitudinal_spacing = 3.0;
    let rows = (width / transverse_spacing) as u32;
    for i in 0..=rows {
        let offset = f64::from(i) * transverse_spacing;
        if offset <= width {
            drawing.push(
                LayerId::Annotations,
                Primitive::line(frame.point(0.0, offset), frame.point(span, offset)),
            );
        }
    }
    let columns = (span / longitudinal_spacing) as u32;
    for i in 0..=columns {
        let ch = f64::from(i) * longitudinal_spacing;
        if ch <= span {
            drawing.push(
                LayerId::Annotations,
                Primitive::line(frame.point(ch, 0.0), frame.point(ch, width)),
            );
        }
    }

    // Construction joints for long slabs.
    if span > props.construction_joint_spacing {
        let joints = (span / props.construction_joint_spacing) as u32;
        let joint_spacing = span / f64::from(joints + 1);
        for i in 1..=joints {
            let ch = f64::from(i) * joint_spacing;
            drawing.push(
                LayerId::Annotations,
                Primitive::line(frame.point(ch, 0.0), frame.point(ch, width)),
            );
        }
    }

    let (num_spans, sub_span) = props.sub_spans(span, p.support_count());
    let pier_width = 2.5;
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

    // Edge tick marks along both slab edges.
    let tick_spacing = 10.0;
    let ticks = (span / tick_spacing) as u32;
    for i in 0..=ticks {
        let ch = f64::from(i) * tick_spacing;
        if ch <= span {
            for edge in [0.0, width] {
                drawing.push(
                    LayerId::Structure,
                    Primitive::line(frame.point(ch, edge), frame.point(ch + 2.0, edge)),
                );
            }
        }
    }

    drawing
}
