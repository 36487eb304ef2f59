//! Spandrel - parametric bridge general-arrangement drawings.
//!
//! Given a bridge typology and a validated parameter set, Spandrel computes
//! the 2D primitives of the elevation and plan views, appends dimensions and
//! annotations, and serializes the result to SVG, PNG, PDF or a layered DXF
//! exchange document.

pub mod config;
pub mod dimension;
pub mod export;
pub mod generate;
pub mod params;

mod error;

pub use error::SpandrelError;

pub use spandrel_core::{color, draw, geometry, layer, mapper};

use log::info;

use config::AppConfig;
use draw::DrawingSet;
use export::{
    Exporter, OutputDocument, OutputFormat, dxf::DxfExporter, pdf::PdfExporter, png::PngExporter,
    svg::SvgExporter,
};
use params::{BridgeTypology, ParameterSet};

/// Generates and serializes bridge drawings.
///
/// This is the top-level pipeline: typology-dispatched geometry generation,
/// followed by the dimension and annotation builder, followed by the
/// requested output serializer. Every stage produces a new value from the
/// previous one; the generator itself holds only configuration.
///
/// # Examples
///
/// ```
/// use spandrel::{DrawingGenerator, config::AppConfig, export::OutputFormat,
///     params::{BridgeTypology, ParameterSet}};
///
/// let params = ParameterSet::new(40.0, 12.0, 8.0, 1, 50.0, "concrete")
///     .expect("valid parameters");
///
/// let generator = DrawingGenerator::new(AppConfig::default());
/// let set = generator.generate(BridgeTypology::Beam, &params);
///
/// let svg = generator.render(&set, OutputFormat::Svg)
///     .expect("SVG rendering is infallible for valid drawings");
/// assert!(!svg.bytes().is_empty());
/// ```
#[derive(Default)]
pub struct DrawingGenerator {
    config: AppConfig,
}

impl DrawingGenerator {
    /// Creates a generator with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Generates the annotated elevation and plan views for one bridge.
    ///
    /// Never fails for a validated [`ParameterSet`] and contains no
    /// randomness, so identical inputs reproduce identical drawings.
    pub fn generate(&self, typology: BridgeTypology, params: &ParameterSet) -> DrawingSet {
        info!(
            typology = typology.tag(),
            span = params.span_length(),
            supports = params.support_count();
            "Generating bridge drawing"
        );

        let mut set = generate::generate(typology, params, &self.config);

        let drawing_config = self.config.drawing();
        let span_label = format!("{:.0} m", params.span_length());
        dimension::add_dimensions(
            &mut set.elevation,
            drawing_config,
            &span_label,
            &format!("{:.0} m", params.height()),
        );
        dimension::add_title_block(
            &mut set.elevation,
            drawing_config,
            typology,
            params,
            self.config.proportions(),
        );
        dimension::add_dimensions(
            &mut set.plan,
            drawing_config,
            &span_label,
            &format!("{:.1} m", params.deck_width()),
        );

        set
    }

    /// Serializes a drawing set to the requested format.
    pub fn render(
        &self,
        set: &DrawingSet,
        format: OutputFormat,
    ) -> Result<OutputDocument, SpandrelError> {
        let document = match format {
            OutputFormat::Svg => SvgExporter.export(set)?,
            OutputFormat::Png => PngExporter.export(set)?,
            OutputFormat::Pdf => PdfExporter.export(set)?,
            OutputFormat::Dxf => DxfExporter.export(set)?,
        };
        Ok(document)
    }
}

/// The reference bridges used by the batch generator, one per major
/// structural family.
pub fn example_bridges() -> Vec<(BridgeTypology, ParameterSet, &'static str)> {
    let examples = [
        (
            BridgeTypology::Beam,
            (40.0, 12.0, 8.0, 1, 50.0, "concrete"),
            "beam_bridge_example",
        ),
        (
            BridgeTypology::Truss,
            (80.0, 15.0, 20.0, 0, 75.0, "steel"),
            "truss_bridge_example",
        ),
        (
            BridgeTypology::Arch,
            (60.0, 14.0, 25.0, 0, 100.0, "stone"),
            "arch_bridge_example",
        ),
        (
            BridgeTypology::Suspension,
            (200.0, 20.0, 80.0, 0, 120.0, "steel"),
            "suspension_bridge_example",
        ),
        (
            BridgeTypology::CableStayed,
            (150.0, 18.0, 60.0, 0, 100.0, "steel"),
            "cable_stayed_bridge_example",
        ),
    ];

    examples
        .into_iter()
        .map(|(typology, (span, width, height, supports, load, material), name)| {
            let params = ParameterSet::new(span, width, height, supports, load, material)
                .expect("example parameters are valid");
            (typology, params, name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use spandrel_core::layer::LayerId;

    use super::*;

    #[test]
    fn test_pipeline_appends_dimensions_once() {
        let params = ParameterSet::new(40.0, 12.0, 8.0, 1, 50.0, "concrete").unwrap();
        let generator = DrawingGenerator::default();
        let set = generator.generate(BridgeTypology::Beam, &params);

        // One dimension set per view: 2 lines + 4 ticks + 2 labels.
        assert_eq!(set.elevation.layer(LayerId::Dimensions).len(), 8);
        assert_eq!(set.plan.layer(LayerId::Dimensions).len(), 8);
        // Title plus six specification lines.
        assert_eq!(set.elevation.layer(LayerId::Text).len(), 7);
    }

    #[test]
    fn test_render_every_format() {
        let params = ParameterSet::new(40.0, 12.0, 8.0, 1, 50.0, "concrete").unwrap();
        let generator = DrawingGenerator::default();
        let set = generator.generate(BridgeTypology::Beam, &params);

        for format in OutputFormat::ALL {
            let document = generator.render(&set, format).unwrap();
            assert_eq!(document.format(), format);
            assert!(!document.bytes().is_empty(), "empty output for {format:?}");
        }
    }

    #[test]
    fn test_example_bridges_cover_five_families() {
        let examples = example_bridges();
        assert_eq!(examples.len(), 5);
        assert!(examples.iter().any(|(t, ..)| *t == BridgeTypology::Suspension));
    }
}
