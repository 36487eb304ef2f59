//! Dimension lines and annotation text.
//!
//! Dimensions are derived from a drawing's bounding extents and emitted as
//! explicit line + text pairs — a tick-terminated dimension line with a
//! centered label — rather than native parametric dimension entities, which
//! the exchange format compatibility contract requires. Each call appends a
//! complete dimension set; callers invoke it exactly once per view.

use spandrel_core::{
    draw::{Drawing, Primitive, TextAnchor},
    geometry::Point,
    layer::LayerId,
};

use crate::{
    config::{DrawingConfig, Proportions},
    params::{BridgeTypology, ParameterSet},
};

/// Half-length of the terminator ticks at dimension line ends.
const TICK: f64 = 1.0;

/// Appends a span dimension above the drawing and a rise dimension to its
/// right, labelled with the given strings.
pub fn add_dimensions(
    drawing: &mut Drawing,
    config: &DrawingConfig,
    horizontal_label: &str,
    vertical_label: &str,
) {
    let bounds = drawing.bounds();
    if bounds.is_empty() {
        return;
    }
    let offset = config.dimension_offset;

    // Horizontal dimension over the full width of the geometry.
    let dim_y = bounds.max_y() + offset;
    drawing.push(
        LayerId::Dimensions,
        Primitive::line(
            Point::new(bounds.min_x(), dim_y),
            Point::new(bounds.max_x(), dim_y),
        ),
    );
    for x in [bounds.min_x(), bounds.max_x()] {
        drawing.push(
            LayerId::Dimensions,
            Primitive::line(Point::new(x, dim_y - TICK), Point::new(x, dim_y + TICK)),
        );
    }
    drawing.push(
        LayerId::Dimensions,
        Primitive::Text {
            position: Point::new((bounds.min_x() + bounds.max_x()) / 2.0, dim_y + TICK),
            content: horizontal_label.to_string(),
            height: config.dimension_text_height,
            rotation: 0.0,
            anchor: TextAnchor::Middle,
        },
    );

    // Vertical dimension over the full height of the geometry.
    let dim_x = bounds.max_x() + offset;
    drawing.push(
        LayerId::Dimensions,
        Primitive::line(
            Point::new(dim_x, bounds.min_y()),
            Point::new(dim_x, bounds.max_y()),
        ),
    );
    for y in [bounds.min_y(), bounds.max_y()] {
        drawing.push(
            LayerId::Dimensions,
            Primitive::line(Point::new(dim_x - TICK, y), Point::new(dim_x + TICK, y)),
        );
    }
    drawing.push(
        LayerId::Dimensions,
        Primitive::Text {
            position: Point::new(dim_x + TICK, (bounds.min_y() + bounds.max_y()) / 2.0),
            content: vertical_label.to_string(),
            height: config.dimension_text_height,
            rotation: 90.0,
            anchor: TextAnchor::Middle,
        },
    );
}

/// Appends the drawing title and the specification block below the geometry.
pub fn add_title_block(
    drawing: &mut Drawing,
    config: &DrawingConfig,
    typology: BridgeTypology,
    params: &ParameterSet,
    props: &Proportions,
) {
    let bounds = drawing.bounds();
    if bounds.is_empty() {
        return;
    }

    let center = (bounds.min_x() + bounds.max_x()) / 2.0;
    let title_y = bounds.min_y() - 2.0 * config.dimension_offset;
    drawing.push(
        LayerId::Text,
        Primitive::Text {
            position: Point::new(center, title_y),
            content: typology.title().to_string(),
            height: config.title_text_height,
            rotation: 0.0,
            anchor: TextAnchor::Middle,
        },
    );

    let (num_spans, sub_span) = props.sub_spans(params.span_length(), params.support_count());
    let specs = [
        format!("Span: {:.0} m", params.span_length()),
        format!("Spans: {num_spans} x {sub_span:.1} m"),
        format!("Width: {:.1} m", params.deck_width()),
        format!("Height: {:.0} m", params.height()),
        format!("Material: {}", params.material()),
        format!("Load: {:.0} kN/m", params.load_capacity()),
    ];

    let line_step = config.note_text_height * 2.0;
    for (i, spec) in specs.into_iter().enumerate() {
        drawing.push(
            LayerId::Text,
            Primitive::Text {
                position: Point::new(
                    bounds.min_x(),
                    title_y - config.title_text_height - line_step * (i as f64 + 1.0),
                ),
                content: spec,
                height: config.note_text_height,
                rotation: 0.0,
                anchor: TextAnchor::Start,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn base_drawing() -> Drawing {
        let mut drawing = Drawing::new();
        drawing.push(LayerId::Deck, Primitive::rect(0.0, 0.0, 40.0, 8.0));
        drawing
    }

    #[test]
    fn test_dimension_set_shape() {
        let mut drawing = base_drawing();
        add_dimensions(&mut drawing, &DrawingConfig::default(), "40 m", "8 m");

        let dims = drawing.layer(LayerId::Dimensions);
        // Two dimension lines, four ticks, two labels.
        assert_eq!(dims.len(), 8);

        let texts: Vec<&str> = dims
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["40 m", "8 m"]);
    }

    #[test]
    fn test_span_dimension_sits_outside_geometry() {
        let mut drawing = base_drawing();
        let config = DrawingConfig::default();
        add_dimensions(&mut drawing, &config, "40 m", "8 m");

        let Primitive::Line { start, end } = &drawing.layer(LayerId::Dimensions)[0] else {
            panic!("expected dimension line first");
        };
        assert_approx_eq!(f64, start.y(), 8.0 + config.dimension_offset);
        assert_approx_eq!(f64, start.x(), 0.0);
        assert_approx_eq!(f64, end.x(), 40.0);
    }

    #[test]
    fn test_each_call_appends_a_full_set() {
        let mut drawing = base_drawing();
        let config = DrawingConfig::default();
        add_dimensions(&mut drawing, &config, "40 m", "8 m");
        let first = drawing.layer(LayerId::Dimensions).len();
        add_dimensions(&mut drawing, &config, "40 m", "8 m");
        assert_eq!(drawing.layer(LayerId::Dimensions).len(), 2 * first);
    }

    #[test]
    fn test_empty_drawing_gets_no_dimensions() {
        let mut drawing = Drawing::new();
        add_dimensions(&mut drawing, &DrawingConfig::default(), "x", "y");
        assert!(drawing.is_empty());
    }

    #[test]
    fn test_title_block_content() {
        let mut drawing = base_drawing();
        let params = ParameterSet::new(40.0, 12.0, 8.0, 1, 50.0, "concrete").unwrap();
        add_title_block(
            &mut drawing,
            &DrawingConfig::default(),
            BridgeTypology::Beam,
            &params,
            &Proportions::default(),
        );

        let texts: Vec<&str> = drawing
            .layer(LayerId::Text)
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 7);
        assert_eq!(texts[0], "Beam Bridge");
        assert!(texts.iter().any(|t| t.contains("Span: 40 m")));
        assert!(texts.iter().any(|t| t.contains("concrete")));
        assert!(texts.iter().any(|t| t.contains("2 x 20.0 m")));
    }
}
