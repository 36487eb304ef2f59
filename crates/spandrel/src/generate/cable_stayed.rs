//! Cable-stayed bridge layout.
//!
//! One tower rises at each intermediate support. Stay cables radiate from an
//! upper attachment point to deck anchorages spaced evenly on both sides of
//! the tower, the count scaling with the sub-span length; anchorage
//! chainages never leave the bridge.

use spandrel_core::{
    draw::{Drawing, DrawingSet, Primitive},
    layer::LayerId,
};

use super::{Ctx, elements};

pub(crate) fn generate(ctx: &Ctx) -> DrawingSet {
    DrawingSet::new(elevation(ctx), plan(ctx))
}

/// Stay count per tower side: one per ~15 m of sub-span, never fewer than 4.
fn stay_count(sub_span: f64, divisor: f64) -> u32 {
    ((sub_span / divisor) as u32).max(4)
}

/// Deck anchorage chainages for one side of a tower, guarded to `[0, span]`.
fn anchor_chainages(
    tower_ch: f64,
    sub_span: f64,
    span: f64,
    stays: u32,
    left: bool,
) -> Vec<f64> {
    let reach = if left {
        tower_ch.min(sub_span)
    } else {
        (span - tower_ch).min(sub_span)
    };
    (1..=stays)
        .map(|i| {
            let offset = f64::from(i) * reach / f64::from(stays + 1);
            if left {
                tower_ch - offset
            } else {
                tower_ch + offset
            }
        })
        .filter(|&ch| (0.0..=span).contains(&ch))
        .collect()
}

fn elevation(ctx: &Ctx) -> Drawing {
    let (p, props, frame) = (ctx.params, ctx.props, ctx.frame);
    let mut drawing = Drawing::new();

    let span = p.span_length();
    let height = p.height();
    let (_, sub_span) = props.sub_spans(span, p.support_count());
    let deck_level = height * props.cable_deck_level_ratio;
    let attach_level = height * props.stay_anchor_ratio;
    let deck_top = deck_level + props.deck_thickness;

    let tower_chainages: Vec<f64> = (1..=p.support_count())
        .map(|i| f64::from(i) * sub_span)
        .collect();

    for &tower_ch in &tower_chainages {
        drawing.push(
            LayerId::Supports,
            elements::support_block(
                frame,
                tower_ch,
                -p.foundation_depth(),
                height,
                props.cable_tower_width,
            ),
        );
    }

    drawing.push(
        LayerId::Deck,
        elements::deck_strip(frame, 0.0, span, deck_level, props.deck_thickness),
    );

    let stays = stay_count(sub_span, props.stay_spacing_divisor);
    for &tower_ch in &tower_chainages {
        for left in [true, false] {
            let anchors = anchor_chainages(tower_ch, sub_span, span, stays, left);
            drawing.extend(
                LayerId::Structure,
                elements::cable_fan(frame, tower_ch, attach_level, deck_top, &anchors),
            );
        }
    }

    let abutment_width = 5.0;
    for ch in [0.0, span] {
        drawing.push(
            LayerId::Supports,
            elements::support_block(frame, ch, -p.foundation_depth(), deck_level, abutment_width),
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
    let (_, sub_span) = props.sub_spans(span, p.support_count());

    drawing.push(
        LayerId::Deck,
        Primitive::rect(
            frame.x(0.0),
            frame.y(0.0),
            span * frame.scale(),
            width * frame.scale(),
        ),
    );

    let tower_chainages: Vec<f64> = (1..=p.support_count())
        .map(|i| f64::from(i) * sub_span)
        .collect();
    let tower_depth = 3.0;
    for &tower_ch in &tower_chainages {
        drawing.push(
            LayerId::Supports,
            elements::support_block(
                frame,
                tower_ch,
                (width - tower_depth) / 2.0,
                (width + tower_depth) / 2.0,
                props.cable_tower_width,
            ),
        );
    }

    // Stays fan out from the tower centerline to the two cable planes.
    let stays = stay_count(sub_span, props.stay_spacing_divisor);
    for &tower_ch in &tower_chainages {
        for plane in [width * 0.15, width * 0.85] {
            for left in [true, false] {
                for ch in anchor_chainages(tower_ch, sub_span, span, stays, left) {
                    drawing.push(
                        LayerId::Structure,
                        Primitive::line(
                            frame.point(tower_ch, width / 2.0),
                            frame.point(ch, plane),
                        ),
                    );
                }
            }
        }
    }

    let girder_width = 0.8;
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

    let abutment_width = 5.0;
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

    drawing
}

#[cfg(test)]
mod tests {
    use spandrel_core::mapper::Frame;

    use crate::{config::Proportions, params::ParameterSet};

    use super::*;

    fn build(span: f64, supports: u32) -> DrawingSet {
        let params = ParameterSet::new(span, 18.0, 60.0, supports, 100.0, "steel").unwrap();
        let props = Proportions::default();
        generate(&Ctx {
            params: &params,
            props: &props,
            frame: Frame::default(),
        })
    }

    fn elevation_cables(set: &DrawingSet) -> Vec<(f64, f64)> {
        set.elevation
            .layer(LayerId::Structure)
            .iter()
            .filter_map(|s| match s {
                Primitive::Line { start, end } => Some((start.x(), end.x())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_tower_count_matches_supports() {
        for supports in [0u32, 1, 3] {
            let set = build(150.0, supports);
            let towers = set
                .elevation
                .layer(LayerId::Supports)
                .iter()
                .filter(|s| s.bounds().max_y() == 60.0)
                .count();
            assert_eq!(towers, supports as usize);
        }
    }

    #[test]
    fn test_stay_fan_counts() {
        // One tower at 75 m, sub-span 75 m: max(4, 75/15) = 5 stays per side.
        let set = build(150.0, 1);
        assert_eq!(elevation_cables(&set).len(), 10);
    }

    #[test]
    fn test_no_supports_means_no_cables() {
        let set = build(150.0, 0);
        assert!(elevation_cables(&set).is_empty());
    }

    #[test]
    fn test_cable_ends_stay_on_bridge() {
        let set = build(90.0, 2);
        for (from, to) in elevation_cables(&set) {
            assert!((0.0..=90.0).contains(&from));
            assert!((0.0..=90.0).contains(&to));
        }
    }
}
