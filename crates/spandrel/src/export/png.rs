//! PNG raster export.
//!
//! Rasterizes the SVG backend's output through `usvg`/`resvg` into a
//! `tiny-skia` pixmap. The drawing is scaled so its longer edge lands near a
//! fixed pixel target, keeping small bridges legible without exploding large
//! ones.

use log::debug;

use spandrel_core::draw::DrawingSet;

use super::{Error, Exporter, OutputDocument, OutputFormat, svg::SvgExporter};

/// Target pixel count for the longer image edge.
const TARGET_EDGE: f64 = 1600.0;

/// PNG serializer for drawing sets.
#[derive(Debug, Default)]
pub struct PngExporter;

impl Exporter for PngExporter {
    fn export(&self, set: &DrawingSet) -> Result<OutputDocument, Error> {
        let svg_doc = SvgExporter.export(set)?;
        let svg_text = String::from_utf8(svg_doc.into_bytes())
            .map_err(|err| Error::Render(format!("SVG output is not UTF-8: {err}")))?;

        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();

        let tree = usvg::Tree::from_str(&svg_text, &options)
            .map_err(|err| Error::Render(format!("failed to parse SVG: {err}")))?;

        let size = tree.size();
        let scale = (TARGET_EDGE / f64::from(size.width().max(size.height())))
            .clamp(1.0, 32.0) as f32;
        let pixel_width = (size.width() * scale).ceil() as u32;
        let pixel_height = (size.height() * scale).ceil() as u32;
        debug!(pixel_width, pixel_height; "Rasterizing drawing");

        let mut pixmap = resvg::tiny_skia::Pixmap::new(pixel_width, pixel_height)
            .ok_or_else(|| Error::Render("failed to allocate pixmap".to_string()))?;
        pixmap.fill(resvg::tiny_skia::Color::WHITE);

        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );

        let bytes = pixmap
            .encode_png()
            .map_err(|err| Error::Render(format!("failed to encode PNG: {err}")))?;
        Ok(OutputDocument::new(OutputFormat::Png, bytes))
    }
}
