//! CAD exchange (DXF) export.
//!
//! Writes an ASCII group-code document the way drafting tools expect it:
//! a HEADER section, a TABLES section declaring linetypes, the fixed layer
//! table, one text style and one dimension style, and an ENTITIES section
//! with one entity per primitive. Entities reference layers by name, closed
//! shapes become closed LWPOLYLINEs, text carries explicit height and
//! alignment, and hatched regions become HATCH entities with a polyline
//! boundary path. The elevation sits at the model origin with the plan
//! offset below it.
//!
//! Dimensions arrive here as the line + text pairs the dimension builder
//! produced; no native dimension entities are emitted.

use std::fmt::Display;
use std::io::{self, Write};

use spandrel_core::{
    draw::{Drawing, DrawingSet, HatchPattern, Primitive, TextAnchor},
    geometry::Point,
    layer::{LayerId, LinePattern},
};

use super::{Error, Exporter, OutputDocument, OutputFormat};

/// Text style declared in the STYLE table and referenced by TEXT entities.
pub const TEXT_STYLE: &str = "GAD-TEXT";
/// Dimension style declared in the DIMSTYLE table.
pub const DIM_STYLE: &str = "GAD-DIM";

/// Vertical gap between the elevation and the plan in model units.
const VIEW_GAP: f64 = 20.0;

/// DXF serializer for drawing sets.
#[derive(Debug, Default)]
pub struct DxfExporter;

impl Exporter for DxfExporter {
    fn export(&self, set: &DrawingSet) -> Result<OutputDocument, Error> {
        let mut bytes = Vec::new();
        write_document(&mut bytes, set)?;
        Ok(OutputDocument::new(OutputFormat::Dxf, bytes))
    }
}

/// Writes one `code`/`value` group.
fn tag(w: &mut impl Write, code: i32, value: impl Display) -> io::Result<()> {
    writeln!(w, "{code}")?;
    writeln!(w, "{value}")
}

fn write_document(w: &mut impl Write, set: &DrawingSet) -> io::Result<()> {
    write_header(w)?;
    write_tables(w)?;
    write_entities(w, set)?;
    tag(w, 0, "EOF")
}

fn write_header(w: &mut impl Write) -> io::Result<()> {
    tag(w, 0, "SECTION")?;
    tag(w, 2, "HEADER")?;
    tag(w, 9, "$ACADVER")?;
    tag(w, 1, "AC1009")?;
    // Units = meters.
    tag(w, 9, "$INSUNITS")?;
    tag(w, 70, 6)?;
    tag(w, 0, "ENDSEC")
}

fn write_tables(w: &mut impl Write) -> io::Result<()> {
    tag(w, 0, "SECTION")?;
    tag(w, 2, "TABLES")?;

    write_ltype_table(w)?;
    write_layer_table(w)?;
    write_style_table(w)?;
    write_dimstyle_table(w)?;

    tag(w, 0, "ENDSEC")
}

fn write_ltype_table(w: &mut impl Write) -> io::Result<()> {
    tag(w, 0, "TABLE")?;
    tag(w, 2, "LTYPE")?;
    tag(w, 70, 2)?;

    tag(w, 0, "LTYPE")?;
    tag(w, 2, "CONTINUOUS")?;
    tag(w, 70, 0)?;
    tag(w, 3, "Solid line")?;
    tag(w, 72, 65)?;
    tag(w, 73, 0)?;
    tag(w, 40, "0.0")?;

    tag(w, 0, "LTYPE")?;
    tag(w, 2, "DASHED")?;
    tag(w, 70, 0)?;
    tag(w, 3, "Dashed line")?;
    tag(w, 72, 65)?;
    tag(w, 73, 2)?;
    tag(w, 40, "0.75")?;
    tag(w, 49, "0.5")?;
    tag(w, 49, "-0.25")?;

    tag(w, 0, "ENDTAB")
}

fn write_layer_table(w: &mut impl Write) -> io::Result<()> {
    tag(w, 0, "TABLE")?;
    tag(w, 2, "LAYER")?;
    tag(w, 70, LayerId::ALL.len())?;

    for layer in LayerId::ALL {
        let style = layer.style();
        // 999 comment groups carry the human-readable description.
        tag(w, 999, style.description)?;
        tag(w, 0, "LAYER")?;
        tag(w, 2, layer.name())?;
        tag(w, 70, 0)?;
        tag(w, 62, style.color.index())?;
        tag(w, 6, style.pattern.linetype())?;
    }

    tag(w, 0, "ENDTAB")
}

fn write_style_table(w: &mut impl Write) -> io::Result<()> {
    tag(w, 0, "TABLE")?;
    tag(w, 2, "STYLE")?;
    tag(w, 70, 1)?;

    tag(w, 0, "STYLE")?;
    tag(w, 2, TEXT_STYLE)?;
    tag(w, 70, 0)?;
    // Height 0 keeps per-entity heights authoritative.
    tag(w, 40, "0.0")?;
    tag(w, 41, "1.0")?;
    tag(w, 50, "0.0")?;
    tag(w, 71, 0)?;
    tag(w, 42, "2.5")?;
    tag(w, 3, "arial.ttf")?;
    tag(w, 4, "")?;

    tag(w, 0, "ENDTAB")
}

fn write_dimstyle_table(w: &mut impl Write) -> io::Result<()> {
    tag(w, 0, "TABLE")?;
    tag(w, 2, "DIMSTYLE")?;
    tag(w, 70, 1)?;

    tag(w, 0, "DIMSTYLE")?;
    tag(w, 2, DIM_STYLE)?;
    tag(w, 70, 0)?;
    // Arrow size, text height, gap.
    tag(w, 41, "2.5")?;
    tag(w, 140, "2.5")?;
    tag(w, 147, "0.625")?;

    tag(w, 0, "ENDTAB")
}

fn write_entities(w: &mut impl Write, set: &DrawingSet) -> io::Result<()> {
    tag(w, 0, "SECTION")?;
    tag(w, 2, "ENTITIES")?;

    write_view(w, &set.elevation, 0.0)?;
    write_view(w, &set.plan, plan_offset(set))?;

    tag(w, 0, "ENDSEC")
}

/// Vertical shift that places the plan below the elevation.
fn plan_offset(set: &DrawingSet) -> f64 {
    let elevation = set.elevation.bounds();
    let plan = set.plan.bounds();
    if elevation.is_empty() || plan.is_empty() {
        return 0.0;
    }
    elevation.min_y() - plan.max_y() - VIEW_GAP
}

fn write_view(w: &mut impl Write, drawing: &Drawing, dy: f64) -> io::Result<()> {
    for (layer, primitives) in drawing.iter() {
        for primitive in primitives {
            write_primitive(w, layer, primitive, dy)?;
        }
    }
    Ok(())
}

fn write_primitive(
    w: &mut impl Write,
    layer: LayerId,
    primitive: &Primitive,
    dy: f64,
) -> io::Result<()> {
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
            write_lwpolyline(w, layer, &corners, true, dy)
        }
        Primitive::Polyline { points, closed } => write_lwpolyline(w, layer, points, *closed, dy),
        Primitive::ArcCurve { points } => write_lwpolyline(w, layer, points, false, dy),
        Primitive::Line { start, end } => write_line(w, layer, *start, *end, dy),
        Primitive::Text {
            position,
            content,
            height,
            rotation,
            anchor,
        } => write_text(w, layer, *position, content, *height, *rotation, *anchor, dy),
        Primitive::HatchRegion { boundary, pattern } => {
            write_hatch(w, layer, boundary, *pattern, dy)
        }
    }
}

fn write_lwpolyline(
    w: &mut impl Write,
    layer: LayerId,
    points: &[Point],
    closed: bool,
    dy: f64,
) -> io::Result<()> {
    if points.is_empty() {
        return Ok(());
    }

    tag(w, 0, "LWPOLYLINE")?;
    tag(w, 8, layer.name())?;
    tag(w, 6, layer.style().pattern.linetype())?;
    tag(w, 90, points.len())?;
    tag(w, 70, i32::from(closed))?;
    for point in points {
        tag(w, 10, format_coord(point.x()))?;
        tag(w, 20, format_coord(point.y() + dy))?;
    }
    Ok(())
}

fn write_line(w: &mut impl Write, layer: LayerId, start: Point, end: Point, dy: f64) -> io::Result<()> {
    tag(w, 0, "LINE")?;
    tag(w, 8, layer.name())?;
    tag(w, 6, layer.style().pattern.linetype())?;
    tag(w, 10, format_coord(start.x()))?;
    tag(w, 20, format_coord(start.y() + dy))?;
    tag(w, 11, format_coord(end.x()))?;
    tag(w, 21, format_coord(end.y() + dy))?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn write_text(
    w: &mut impl Write,
    layer: LayerId,
    position: Point,
    content: &str,
    height: f64,
    rotation: f64,
    anchor: TextAnchor,
    dy: f64,
) -> io::Result<()> {
    tag(w, 0, "TEXT")?;
    tag(w, 8, layer.name())?;
    tag(w, 7, TEXT_STYLE)?;
    tag(w, 10, format_coord(position.x()))?;
    tag(w, 20, format_coord(position.y() + dy))?;
    tag(w, 40, format_coord(height))?;
    tag(w, 1, content)?;
    if rotation != 0.0 {
        tag(w, 50, format_coord(rotation))?;
    }

    let justification = match anchor {
        TextAnchor::Start => 0,
        TextAnchor::Middle => 1,
        TextAnchor::End => 2,
    };
    if justification != 0 {
        // Non-default justification needs the second alignment point.
        tag(w, 72, justification)?;
        tag(w, 11, format_coord(position.x()))?;
        tag(w, 21, format_coord(position.y() + dy))?;
    }
    Ok(())
}

fn write_hatch(
    w: &mut impl Write,
    layer: LayerId,
    boundary: &[Point],
    pattern: HatchPattern,
    dy: f64,
) -> io::Result<()> {
    if boundary.is_empty() {
        return Ok(());
    }
    let solid = pattern == HatchPattern::Solid;

    tag(w, 0, "HATCH")?;
    tag(w, 8, layer.name())?;
    tag(w, 2, pattern.name())?;
    tag(w, 70, i32::from(solid))?;
    tag(w, 71, 0)?;

    // One polyline boundary path.
    tag(w, 91, 1)?;
    tag(w, 92, 2)?;
    tag(w, 72, 0)?;
    tag(w, 73, 1)?;
    tag(w, 93, boundary.len())?;
    for point in boundary {
        tag(w, 10, format_coord(point.x()))?;
        tag(w, 20, format_coord(point.y() + dy))?;
    }
    tag(w, 97, 0)?;

    tag(w, 75, 0)?;
    tag(w, 76, 1)?;
    if !solid {
        tag(w, 52, "0.0")?;
        tag(w, 41, "1.0")?;
        tag(w, 77, 0)?;
        // Single 45-degree definition line.
        tag(w, 78, 1)?;
        tag(w, 53, "45.0")?;
        tag(w, 43, "0.0")?;
        tag(w, 44, "0.0")?;
        tag(w, 45, "-2.2475")?;
        tag(w, 46, "2.2475")?;
        tag(w, 79, 0)?;
    }
    tag(w, 98, 0)
}

fn format_coord(value: f64) -> String {
    format!("{value:.6}")
}
