//! Command-line argument definitions for the Spandrel CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the bridge typology and its structural
//! parameters, the output base name and formats, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Spandrel bridge drawing tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Bridge typology (beam, truss, arch, suspension, cable_stayed, t_beam, slab)
    #[arg(required_unless_present = "examples")]
    pub typology: Option<String>,

    /// Main span length in meters
    #[arg(long, default_value_t = 100.0)]
    pub span: f64,

    /// Deck width in meters
    #[arg(long, default_value_t = 12.0)]
    pub width: f64,

    /// Overall height in meters
    #[arg(long, default_value_t = 20.0)]
    pub height: f64,

    /// Number of intermediate supports
    #[arg(long, default_value_t = 0)]
    pub supports: u32,

    /// Design load in kN/m
    #[arg(long, default_value_t = 50.0)]
    pub load: f64,

    /// Primary material
    #[arg(long, default_value = "steel")]
    pub material: String,

    /// Output file name without extension
    #[arg(short, long, default_value = "bridge_drawing")]
    pub output: String,

    /// Output format (svg, png, pdf, dxf, all)
    #[arg(short, long, default_value = "png")]
    pub format: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Generate the example bridges of all families, in all formats
    #[arg(long)]
    pub examples: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
