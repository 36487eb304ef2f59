//! CLI logic for the Spandrel bridge drawing tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::path::PathBuf;

use log::info;

use spandrel::{
    DrawingGenerator, SpandrelError, example_bridges,
    export::OutputFormat,
    params::{BridgeTypology, ParameterSet},
};

/// Run the Spandrel CLI application
///
/// This builds a parameter set from the command line, generates the
/// elevation and plan views and writes the requested output files. With
/// `--examples`, the reference bridges of all families are generated in
/// every format instead.
///
/// # Errors
///
/// Returns `SpandrelError` for:
/// - Invalid structural parameters
/// - Unknown typology or output format
/// - Configuration loading errors
/// - Serialization and file I/O errors
pub fn run(args: &Args) -> Result<(), SpandrelError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let generator = DrawingGenerator::new(app_config);

    if args.examples {
        return run_examples(&generator);
    }

    let typology: BridgeTypology = args
        .typology
        .as_deref()
        .unwrap_or_default()
        .parse()?;
    let params = ParameterSet::new(
        args.span,
        args.width,
        args.height,
        args.supports,
        args.load,
        args.material.clone(),
    )?;

    let formats = parse_formats(&args.format)?;
    let set = generator.generate(typology, &params);
    write_outputs(&generator, &set, &args.output, &formats)?;

    info!(output = args.output, typology = typology.tag(); "Drawing generated");
    Ok(())
}

fn run_examples(generator: &DrawingGenerator) -> Result<(), SpandrelError> {
    for (typology, params, name) in example_bridges() {
        let set = generator.generate(typology, &params);
        write_outputs(generator, &set, name, &OutputFormat::ALL)?;
        info!(name; "Example generated");
    }
    Ok(())
}

fn parse_formats(format: &str) -> Result<Vec<OutputFormat>, SpandrelError> {
    if format == "all" {
        return Ok(OutputFormat::ALL.to_vec());
    }
    format
        .parse::<OutputFormat>()
        .map(|f| vec![f])
        .map_err(SpandrelError::Config)
}

fn write_outputs(
    generator: &DrawingGenerator,
    set: &spandrel::draw::DrawingSet,
    base_name: &str,
    formats: &[OutputFormat],
) -> Result<(), SpandrelError> {
    for &format in formats {
        let document = generator.render(set, format)?;
        let path = PathBuf::from(format!("{base_name}.{}", format.extension()));
        document.write_to(&path)?;
    }
    Ok(())
}
