//! SVG vector export.
//!
//! Renders the elevation above the plan in a single document. Each view
//! becomes one `<g>` element per registry layer (tagged with `data-layer`),
//! carrying the layer's stroke color and dash pattern; primitive order
//! within a layer is preserved. Model space is y-up, so levels are flipped
//! into SVG's y-down space during rendering.

use svg::Document;
use svg::node::element as svg_element;

use spandrel_core::{
    draw::{Drawing, DrawingSet, Primitive, TextAnchor},
    geometry::{Bounds, Point},
    layer::LayerId,
};

use super::{Error, Exporter, OutputDocument, OutputFormat};

/// Sheet margin around and between the two views, in drawing units.
const MARGIN: f64 = 10.0;
const STROKE_WIDTH: f64 = 0.3;
const HATCH_OPACITY: f64 = 0.35;

/// SVG serializer for drawing sets.
#[derive(Debug, Default)]
pub struct SvgExporter;

impl Exporter for SvgExporter {
    fn export(&self, set: &DrawingSet) -> Result<OutputDocument, Error> {
        let document = render_document(set);
        Ok(OutputDocument::new(
            OutputFormat::Svg,
            document.to_string().into_bytes(),
        ))
    }
}

/// Maps model-space points into the sheet space of one view.
struct ViewTransform {
    min_x: f64,
    max_y: f64,
    dx: f64,
    dy: f64,
}

impl ViewTransform {
    fn x(&self, x: f64) -> f64 {
        x - self.min_x + self.dx
    }

    fn y(&self, y: f64) -> f64 {
        self.max_y - y + self.dy
    }

    fn point(&self, p: Point) -> (f64, f64) {
        (self.x(p.x()), self.y(p.y()))
    }
}

fn padded_bounds(drawing: &Drawing) -> Bounds {
    let bounds = drawing.bounds();
    if bounds.is_empty() {
        Bounds::new(0.0, 0.0, 1.0, 1.0)
    } else {
        bounds
    }
}

pub(crate) fn render_document(set: &DrawingSet) -> Document {
    let elevation_bounds = padded_bounds(&set.elevation);
    let plan_bounds = padded_bounds(&set.plan);

    let width = elevation_bounds.width().max(plan_bounds.width()) + 2.0 * MARGIN;
    let height = elevation_bounds.height() + plan_bounds.height() + 3.0 * MARGIN;

    let elevation_transform = ViewTransform {
        min_x: elevation_bounds.min_x(),
        max_y: elevation_bounds.max_y(),
        dx: MARGIN,
        dy: MARGIN,
    };
    let plan_transform = ViewTransform {
        min_x: plan_bounds.min_x(),
        max_y: plan_bounds.max_y(),
        dx: MARGIN,
        dy: elevation_bounds.height() + 2.0 * MARGIN,
    };

    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, width, height))
        .set("width", width)
        .set("height", height);

    document = document.add(
        svg_element::Rectangle::new()
            .set("x", 0.0)
            .set("y", 0.0)
            .set("width", width)
            .set("height", height)
            .set("fill", "white"),
    );

    for (view, name, transform) in [
        (&set.elevation, "elevation", &elevation_transform),
        (&set.plan, "plan", &plan_transform),
    ] {
        let mut view_group = svg_element::Group::new().set("data-view", name);
        for (layer, primitives) in view.iter() {
            if primitives.is_empty() {
                continue;
            }
            view_group = view_group.add(render_layer(layer, primitives, transform));
        }
        document = document.add(view_group);
    }

    document
}

fn render_layer(layer: LayerId, primitives: &[Primitive], t: &ViewTransform) -> svg_element::Group {
    let style = layer.style();
    let mut group = svg_element::Group::new()
        .set("data-layer", layer.name())
        .set("stroke", style.color.css())
        .set("stroke-width", STROKE_WIDTH)
        .set("fill", "none");
    if let Some(dasharray) = style.pattern.dasharray() {
        group = group.set("stroke-dasharray", dasharray);
    }

    for primitive in primitives {
        group = match primitive {
            Primitive::Rectangle {
                x,
                y,
                width,
                height,
            } => group.add(
                svg_element::Rectangle::new()
                    .set("x", t.x(*x))
                    .set("y", t.y(y + height))
                    .set("width", *width)
                    .set("height", *height),
            ),
            Primitive::Polyline { points, closed } => {
                let data = points_attribute(points, t);
                if *closed {
                    group.add(svg_element::Polygon::new().set("points", data))
                } else {
                    group.add(svg_element::Polyline::new().set("points", data))
                }
            }
            Primitive::Line { start, end } => {
                let (x1, y1) = t.point(*start);
                let (x2, y2) = t.point(*end);
                group.add(
                    svg_element::Line::new()
                        .set("x1", x1)
                        .set("y1", y1)
                        .set("x2", x2)
                        .set("y2", y2),
                )
            }
            Primitive::ArcCurve { points } => {
                group.add(svg_element::Polyline::new().set("points", points_attribute(points, t)))
            }
            Primitive::Text {
                position,
                content,
                height,
                rotation,
                anchor,
            } => {
                let (x, y) = t.point(*position);
                let mut text = svg_element::Text::new(content.clone())
                    .set("x", x)
                    .set("y", y)
                    .set("font-size", *height)
                    .set("font-family", "sans-serif")
                    .set("fill", style.color.css())
                    .set("stroke", "none")
                    .set("text-anchor", anchor_value(*anchor));
                if *rotation != 0.0 {
                    // Model rotation is counter-clockwise; SVG rotates
                    // clockwise in its y-down space.
                    text = text.set("transform", format!("rotate({} {x} {y})", -rotation));
                }
                group.add(text)
            }
            Primitive::HatchRegion { boundary, .. } => group.add(
                svg_element::Polygon::new()
                    .set("points", points_attribute(boundary, t))
                    .set("fill", style.color.css())
                    .set("fill-opacity", HATCH_OPACITY)
                    .set("stroke", "none"),
            ),
        };
    }

    group
}

fn anchor_value(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn points_attribute(points: &[Point], t: &ViewTransform) -> String {
    points
        .iter()
        .map(|p| {
            let (x, y) = t.point(*p);
            format!("{x},{y}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use spandrel_core::draw::HatchPattern;

    use super::*;

    fn sample_set() -> DrawingSet {
        let mut elevation = Drawing::new();
        elevation.push(LayerId::Deck, Primitive::rect(0.0, 6.0, 40.0, 2.0));
        elevation.push(
            LayerId::Hatching,
            Primitive::HatchRegion {
                boundary: vec![
                    Point::new(0.0, 0.0),
                    Point::new(8.0, 0.0),
                    Point::new(8.0, -5.0),
                    Point::new(0.0, -5.0),
                ],
                pattern: HatchPattern::Ansi31,
            },
        );

        let mut plan = Drawing::new();
        plan.push(LayerId::Deck, Primitive::rect(0.0, 0.0, 40.0, 12.0));
        plan.push(
            LayerId::Annotations,
            Primitive::line(Point::new(0.0, 6.0), Point::new(40.0, 6.0)),
        );
        DrawingSet::new(elevation, plan)
    }

    fn render_string(set: &DrawingSet) -> String {
        let doc = SvgExporter.export(set).unwrap();
        String::from_utf8(doc.into_bytes()).unwrap()
    }

    #[test]
    fn test_views_and_layers_are_grouped() {
        let rendered = render_string(&sample_set());
        assert!(rendered.contains("data-view=\"elevation\""));
        assert!(rendered.contains("data-view=\"plan\""));
        assert!(rendered.contains("data-layer=\"DECK\""));
        assert!(rendered.contains("data-layer=\"HATCHING\""));
        // Empty layers are skipped entirely.
        assert!(!rendered.contains("data-layer=\"RAILINGS\""));
    }

    #[test]
    fn test_annotations_are_dashed() {
        let rendered = render_string(&sample_set());
        assert!(rendered.contains("stroke-dasharray"));
    }

    #[test]
    fn test_model_y_is_flipped() {
        // Deck rectangle top (y = 8 in model space) must come out above its
        // soffit in SVG space, i.e. with the smaller y value.
        let set = sample_set();
        let rendered = render_string(&set);
        // Elevation spans y ∈ [-5, 8], margin 10: the deck top maps to
        // 10 + (8 - 8) = 10.
        assert!(rendered.contains("y=\"10\""));
    }

    #[test]
    fn test_hatch_is_filled_not_stroked() {
        let rendered = render_string(&sample_set());
        assert!(rendered.contains("fill-opacity"));
    }
}
