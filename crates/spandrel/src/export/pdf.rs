//! Print-ready PDF export.
//!
//! Produces an A3 landscape document with one page per view, each view
//! fitted to the page inside a fixed margin. Geometry is drawn as stroked
//! paths in the layer registry's colors; labels use the built-in Helvetica.

use std::io::BufWriter;

use printpdf::path::PaintMode;
use printpdf::{BuiltinFont, IndirectFontRef, Line, LineDashPattern, Mm, PdfLayerReference, Polygon};

use spandrel_core::{
    draw::{Drawing, DrawingSet, Primitive, TextAnchor},
    geometry::{Bounds, Point},
    layer::{LayerId, LinePattern},
};

use super::{Error, Exporter, OutputDocument, OutputFormat};

const PAGE_WIDTH_MM: f64 = 420.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 15.0;
const MM_PER_PT: f64 = 25.4 / 72.0;

/// PDF serializer for drawing sets.
#[derive(Debug, Default)]
pub struct PdfExporter;

impl Exporter for PdfExporter {
    fn export(&self, set: &DrawingSet) -> Result<OutputDocument, Error> {
        let (doc, elevation_page, elevation_layer) = printpdf::PdfDocument::new(
            "Bridge General Arrangement",
            Mm(PAGE_WIDTH_MM as f32),
            Mm(PAGE_HEIGHT_MM as f32),
            "ELEVATION",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|err| Error::Render(format!("failed to load builtin font: {err}")))?;

        let layer = doc.get_page(elevation_page).get_layer(elevation_layer);
        render_view(&layer, &font, &set.elevation);

        let (plan_page, plan_layer) =
            doc.add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "PLAN");
        let layer = doc.get_page(plan_page).get_layer(plan_layer);
        render_view(&layer, &font, &set.plan);

        let mut bytes = Vec::new();
        doc.save(&mut BufWriter::new(&mut bytes))
            .map_err(|err| Error::Render(format!("failed to serialize PDF: {err}")))?;
        Ok(OutputDocument::new(OutputFormat::Pdf, bytes))
    }
}

/// Maps model-space coordinates onto one page.
struct PageFit {
    min_x: f64,
    min_y: f64,
    scale: f64,
}

impl PageFit {
    fn new(bounds: Bounds) -> Self {
        let bounds = if bounds.is_empty() {
            Bounds::new(0.0, 0.0, 1.0, 1.0)
        } else {
            bounds
        };
        let scale_x = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / bounds.width().max(1e-9);
        let scale_y = (PAGE_HEIGHT_MM - 2.0 * MARGIN_MM) / bounds.height().max(1e-9);
        Self {
            min_x: bounds.min_x(),
            min_y: bounds.min_y(),
            scale: scale_x.min(scale_y),
        }
    }

    fn x(&self, x: f64) -> f64 {
        MARGIN_MM + (x - self.min_x) * self.scale
    }

    fn y(&self, y: f64) -> f64 {
        MARGIN_MM + (y - self.min_y) * self.scale
    }

    fn point(&self, p: Point) -> printpdf::Point {
        printpdf::Point::new(Mm(self.x(p.x()) as f32), Mm(self.y(p.y()) as f32))
    }
}

fn render_view(layer_ref: &PdfLayerReference, font: &IndirectFontRef, drawing: &Drawing) {
    let fit = PageFit::new(drawing.bounds());

    for (layer, primitives) in drawing.iter() {
        if primitives.is_empty() {
            continue;
        }
        let style = layer.style();
        let (r, g, b) = style.color.rgb();
        layer_ref.set_outline_color(printpdf::Color::Rgb(printpdf::Rgb::new(r as f32, g as f32, b as f32, None)));
        layer_ref.set_outline_thickness(0.6);
        layer_ref.set_line_dash_pattern(dash_pattern(style.pattern));

        for primitive in primitives {
            render_primitive(layer_ref, font, &fit, layer, primitive);
        }
    }
    // Leave the graphics state solid for whoever draws next.
    layer_ref.set_line_dash_pattern(LineDashPattern::default());
}

fn dash_pattern(pattern: LinePattern) -> LineDashPattern {
    match pattern {
        LinePattern::Continuous => LineDashPattern::default(),
        LinePattern::Dashed => LineDashPattern {
            dash_1: Some(3),
            ..LineDashPattern::default()
        },
    }
}

fn render_primitive(
    layer_ref: &PdfLayerReference,
    font: &IndirectFontRef,
    fit: &PageFit,
    layer: LayerId,
    primitive: &Primitive,
) {
    match primitive {
        Primitive::Rectangle {
            x,
            y,
            width,
            height,
        } => {
            let corners = [
                Point::new(*x, *y),
                Point::new(x + width, *y),
                Point::new(x + width, y + height),
                Point::new(*x, y + height),
            ];
            stroke_path(layer_ref, fit, &corners, true);
        }
        Primitive::Polyline { points, closed } => stroke_path(layer_ref, fit, points, *closed),
        Primitive::ArcCurve { points } => stroke_path(layer_ref, fit, points, false),
        Primitive::Line { start, end } => stroke_path(layer_ref, fit, &[*start, *end], false),
        Primitive::Text {
            position,
            content,
            height,
            anchor,
            ..
        } => {
            // Labels are drawn horizontally; the page fit already keeps them
            // clear of the geometry.
            let height_mm = height * fit.scale;
            let font_size = height_mm / MM_PER_PT;
            let estimated_width = 0.55 * height_mm * content.chars().count() as f64;
            let shift = match anchor {
                TextAnchor::Start => 0.0,
                TextAnchor::Middle => estimated_width / 2.0,
                TextAnchor::End => estimated_width,
            };
            layer_ref.use_text(
                content.clone(),
                font_size as f32,
                Mm((fit.x(position.x()) - shift) as f32),
                Mm(fit.y(position.y()) as f32),
                font,
            );
        }
        Primitive::HatchRegion { boundary, .. } => {
            let style = layer.style();
            let (r, g, b) = style.color.rgb();
            // Lighten toward white for the fill.
            layer_ref.set_fill_color(printpdf::Color::Rgb(printpdf::Rgb::new(
                (0.65 + 0.35 * r) as f32,
                (0.65 + 0.35 * g) as f32,
                (0.65 + 0.35 * b) as f32,
                None,
            )));
            let points = boundary
                .iter()
                .map(|p| (fit.point(*p), false))
                .collect::<Vec<_>>();
            layer_ref.add_polygon(Polygon {
                rings: vec![points],
                mode: PaintMode::Fill,
                ..Default::default()
            });
        }
    }
}

fn stroke_path(
    layer_ref: &PdfLayerReference,
    fit: &PageFit,
    points: &[Point],
    closed: bool,
) {
    let points = points
        .iter()
        .map(|p| (fit.point(*p), false))
        .collect::<Vec<_>>();
    layer_ref.add_line(Line {
        points,
        is_closed: closed,
    });
}
