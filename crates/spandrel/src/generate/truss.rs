//! Truss bridge layout.
//!
//! The span is divided into sub-spans (one per support interval, capped at
//! 30), each carrying a panelized Pratt/Warren web: straight top and bottom
//! chords, verticals at every panel point, and diagonals alternating
//! direction by panel parity — even panel index ascending, odd descending.

use spandrel_core::{
    draw::{Drawing, DrawingSet, Primitive},
    layer::LayerId,
};

use super::{Ctx, elements};

pub(crate) fn generate(ctx: &Ctx) -> DrawingSet {
    DrawingSet::new(elevation(ctx), plan(ctx))
}

/// Panels per sub-span: one per ~10 m, never fewer than four.
fn panel_count(sub_span: f64, panel_length: f64) -> u32 {
    ((sub_span / panel_length) as u32).max(4)
}

fn elevation(ctx: &Ctx) -> Drawing {
    let (p, props, frame) = (ctx.params, ctx.props, ctx.frame);
    let mut drawing = Drawing::new();

    let (num_spans, sub_span) = props.sub_spans(p.span_length(), p.support_count());
    let deck_level = p.height() * props.truss_deck_level_ratio;
    let top_level = p.height() - 1.0;

    for span_idx in 0..num_spans {
        let start = f64::from(span_idx) * sub_span;
        let end = start + sub_span;

        drawing.push(
            LayerId::Deck,
            elements::deck_strip(frame, start, end, deck_level, 0.5),
        );

        // Chords.
        for level in [top_level, deck_level] {
            drawing.push(
                LayerId::Structure,
                Primitive::line(frame.point(start, level), frame.point(end, level)),
            );
        }

        let panels = panel_count(sub_span, props.truss_panel_length);
        let panel_width = sub_span / f64::from(panels);
        for i in 0..=panels {
            let ch = start + f64::from(i) * panel_width;
            drawing.push(
                LayerId::Structure,
                Primitive::line(frame.point(ch, deck_level), frame.point(ch, top_level)),
            );

            if i < panels {
                let ch_next = start + f64::from(i + 1) * panel_width;
                // Even panel: ascending diagonal; odd panel: descending.
                let (from, to) = if i % 2 == 0 {
                    ((ch, deck_level), (ch_next, top_level))
                } else {
                    ((ch, top_level), (ch_next, deck_level))
                };
                drawing.push(
                    LayerId::Structure,
                    Primitive::line(frame.point(from.0, from.1), frame.point(to.0, to.1)),
                );
            }
        }
    }

    // Supports at every sub-span boundary, abutments included.
    let support_width = 2.5;
    for i in 0..=num_spans {
        let ch = f64::from(i) * sub_span;
        drawing.push(
            LayerId::Supports,
            elements::support_block(frame, ch, -p.foundation_depth(), deck_level, support_width),
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

    // Two parallel truss planes at 15 % and 85 % of the deck width.
    let truss_width = 1.0;
    let truss_offsets = [width * 0.15, width * 0.85];
    for offset in truss_offsets {
        drawing.push(
            LayerId::Structure,
            Primitive::rect(
                frame.x(0.0),
                frame.y(offset - truss_width / 2.0),
                span * frame.scale(),
                truss_width * frame.scale(),
            ),
        );
    }

    // Cross-frames between the truss planes.
    let frames = ((span / 10.0) as u32).max(8);
    let frame_spacing = span / f64::from(frames - 1);
    for i in 0..frames {
        let ch = f64::from(i) * frame_spacing;
        drawing.push(
            LayerId::Structure,
            Primitive::line(
                frame.point(ch, truss_offsets[0]),
                frame.point(ch, truss_offsets[1]),
            ),
        );
    }

    let (num_spans, sub_span) = props.sub_spans(span, p.support_count());
    let support_width = 2.5;
    for i in 0..=num_spans {
        let ch = f64::from(i) * sub_span;
        drawing.push(
            LayerId::Supports,
            elements::support_block(
                frame,
                ch,
                (width - support_width) / 2.0,
                (width + support_width) / 2.0,
                support_width,
            ),
        );
    }

    drawing
}

#[cfg(test)]
mod tests {
    use spandrel_core::mapper::Frame;

    use crate::{config::Proportions, generate::closed_shape_count, params::ParameterSet};

    use super::*;

    #[test]
    fn test_panel_count_floor() {
        assert_eq!(panel_count(80.0, 10.0), 8);
        assert_eq!(panel_count(25.0, 10.0), 4);
        assert_eq!(panel_count(9.0, 10.0), 4);
    }

    #[test]
    fn test_single_span_member_counts() {
        let params = ParameterSet::new(80.0, 15.0, 20.0, 0, 75.0, "steel").unwrap();
        let props = Proportions::default();
        let set = generate(&Ctx {
            params: &params,
            props: &props,
            frame: Frame::default(),
        });

        // 8 panels: 2 chords + 9 verticals + 8 diagonals.
        let lines = set
            .elevation
            .layer(LayerId::Structure)
            .iter()
            .filter(|s| matches!(s, Primitive::Line { .. }))
            .count();
        assert_eq!(lines, 2 + 9 + 8);

        // Two supports for a single span.
        assert_eq!(closed_shape_count(&set.elevation, LayerId::Supports), 2);
    }

    #[test]
    fn test_diagonals_alternate_direction() {
        let params = ParameterSet::new(40.0, 10.0, 12.0, 0, 50.0, "steel").unwrap();
        let props = Proportions::default();
        let set = generate(&Ctx {
            params: &params,
            props: &props,
            frame: Frame::default(),
        });

        // Diagonals are the non-axis-aligned lines.
        let diagonals: Vec<(f64, f64)> = set
            .elevation
            .layer(LayerId::Structure)
            .iter()
            .filter_map(|s| match s {
                Primitive::Line { start, end }
                    if start.x() != end.x() && start.y() != end.y() =>
                {
                    Some((start.y(), end.y()))
                }
                _ => None,
            })
            .collect();
        assert_eq!(diagonals.len(), 4);
        // Even panels ascend, odd panels descend.
        assert!(diagonals[0].0 < diagonals[0].1);
        assert!(diagonals[1].0 > diagonals[1].1);
        assert!(diagonals[2].0 < diagonals[2].1);
        assert!(diagonals[3].0 > diagonals[3].1);
    }

    #[test]
    fn test_multi_span_supports() {
        let params = ParameterSet::new(120.0, 15.0, 20.0, 2, 75.0, "steel").unwrap();
        let props = Proportions::default();
        let set = generate(&Ctx {
            params: &params,
            props: &props,
            frame: Frame::default(),
        });
        // Three sub-spans mean four support lines.
        assert_eq!(closed_shape_count(&set.elevation, LayerId::Supports), 4);
    }
}
