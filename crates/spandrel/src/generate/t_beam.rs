//! T-beam bridge layout.
//!
//! The deck slab rides on girders with a T cross-section: a vertical web and
//! a bottom flange. Elevation shows the T-shapes at a fixed visual spacing
//! along the span (illustrative, not structurally exhaustive); plan derives
//! the girder count from the deck width.

use spandrel_core::{
    draw::{Drawing, DrawingSet, Primitive},
    layer::LayerId,
};

use super::{Ctx, elements};

pub(crate) fn generate(ctx: &Ctx) -> DrawingSet {
    DrawingSet::new(elevation(ctx), plan(ctx))
}

/// Longitudinal girders: one per ~3 m of deck width, never fewer than three.
fn girder_count(deck_width: f64, per_width: f64) -> u32 {
    ((deck_width / per_width) as u32).max(3)
}

fn elevation(ctx: &Ctx) -> Drawing {
    let (p, props, frame) = (ctx.params, ctx.props, ctx.frame);
    let mut drawing = Drawing::new();

    let span = p.span_length();
    let slab_soffit = p.height() - p.girder_depth();

    drawing.push(
        LayerId::Deck,
        elements::deck_strip(frame, 0.0, span, slab_soffit, props.tbeam_deck_thickness),
    );

    // T-girders at a fixed visual spacing: vertical web plus bottom flange.
    let girder_height = p.girder_depth() - props.tbeam_deck_thickness;
    let girder_soffit = slab_soffit - girder_height;
    let web_width = 0.4;
    let flange_width = 1.2;
    let flange_height = 0.3;

    let beam_spacing = span / props.tbeam_spacing_divisor;
    let beams = (span / beam_spacing) as u32;
    for i in 0..=beams {
        let ch = f64::from(i) * beam_spacing;
        drawing.push(
            LayerId::Structure,
            Primitive::rect(
                frame.x(ch - web_width / 2.0),
                frame.y(girder_soffit),
                web_width * frame.scale(),
                girder_height * frame.scale(),
            ),
        );
        drawing.push(
            LayerId::Structure,
            Primitive::rect(
                frame.x(ch - flange_width / 2.0),
                frame.y(girder_soffit - flange_height),
                flange_width * frame.scale(),
                flange_height * frame.scale(),
            ),
        );
    }

    let (num_spans, sub_span) = props.sub_spans(span, p.support_count());
    for i in 1..num_spans {
        let ch = f64::from(i) * sub_span;
        drawing.push(
            LayerId::Supports,
            elements::tapered_pier(
                frame,
                ch,
                -p.foundation_depth(),
                slab_soffit,
                props.pier_top_width,
                props.batter,
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
                slab_soffit,
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

    let beams = girder_count(width, props.girder_per_width);
    let beam_spacing = width / f64::from(beams + 1);
    let web_width = 0.4;
    for i in 1..=beams {
        drawing.push(
            LayerId::Structure,
            Primitive::rect(
                frame.x(0.0),
                frame.y(f64::from(i) * beam_spacing - web_width / 2.0),
                span * frame.scale(),
                web_width * frame.scale(),
            ),
        );
    }

    // Diaphragms every ~20 m, never fewer than five.
    let diaphragms = ((span / 20.0) as u32).max(5);
    let diaphragm_spacing = span / f64::from(diaphragms - 1);
    let diaphragm_width = 0.3;
    for i in 0..diaphragms {
        let ch = f64::from(i) * diaphragm_spacing;
        drawing.push(
            LayerId::Structure,
            Primitive::rect(
                frame.x(ch - diaphragm_width / 2.0),
                frame.y(0.0),
                diaphragm_width * frame.scale(),
                width * frame.scale(),
            ),
        );
    }

    let (num_spans, sub_span) = props.sub_spans(span, p.support_count());
    for i in 1..num_spans {
        let ch = f64::from(i) * sub_span;
        drawing.push(
            LayerId::Supports,
            elements::support_block(
                frame,
                ch,
                (width - props.pier_top_width) / 2.0,
                (width + props.pier_top_width) / 2.0,
                props.pier_top_width,
            ),
        );
    }
    for ch in [0.0, span] {
        drawing.push(
            LayerId::Supports,
            elements::support_block(
                frame,
                ch,
                (width - props.abutment_width) / 2.0,
                (width + props.abutment_width) / 2.0,
                props.abutment_width,
            ),
        );
    }

    drawing
}
