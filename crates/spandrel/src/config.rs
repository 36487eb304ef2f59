//! Configuration types for drawing generation and styling.
//!
//! This module provides configuration structures controlling how drawings
//! are scaled, annotated and proportioned. All types implement
//! [`serde::Deserialize`] so they can be loaded from a TOML file; every
//! field falls back to its documented default when absent.
//!
//! The [`Proportions`] table deserves a note: several typologies size piers,
//! towers and cable counts from fixed empirical ratios with no documented
//! engineering basis. Those magic numbers are preserved here as overridable
//! constants rather than re-derived from load or material.

use serde::Deserialize;

/// Top-level configuration combining drawing and proportion settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Drawing frame and annotation settings.
    #[serde(default)]
    drawing: DrawingConfig,

    /// Empirical proportionality constants.
    #[serde(default)]
    proportions: Proportions,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its parts.
    pub fn new(drawing: DrawingConfig, proportions: Proportions) -> Self {
        Self {
            drawing,
            proportions,
        }
    }

    /// Returns the drawing configuration.
    pub fn drawing(&self) -> &DrawingConfig {
        &self.drawing
    }

    /// Returns the proportion table.
    pub fn proportions(&self) -> &Proportions {
        &self.proportions
    }
}

/// Frame and annotation settings for generated drawings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DrawingConfig {
    /// Scale factor applied by the coordinate mapper.
    pub scale: f64,
    /// Skew angle in degrees, applied to the plan view about the origin.
    pub skew_degrees: f64,
    /// Offset of dimension lines outside the geometry's bounding box.
    pub dimension_offset: f64,
    /// Text height of dimension labels.
    pub dimension_text_height: f64,
    /// Text height of the drawing title.
    pub title_text_height: f64,
    /// Text height of the specification block.
    pub note_text_height: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            skew_degrees: 0.0,
            dimension_offset: 5.0,
            dimension_text_height: 1.5,
            title_text_height: 3.0,
            note_text_height: 1.5,
        }
    }
}

impl DrawingConfig {
    /// Returns the skew angle in radians.
    pub fn skew_radians(&self) -> f64 {
        self.skew_degrees.to_radians()
    }
}

/// Empirical proportionality constants shared by the typology generators.
///
/// Widths are meters; `*_ratio` values
/// are fractions of the overall height or span; `*_divisor` values convert a
/// span length into an element count via `span / divisor`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Proportions {
    /// Pier batter: vertical run per unit of horizontal taper.
    pub batter: f64,
    /// Pier width at the top of the shaft.
    pub pier_top_width: f64,
    /// End abutment width.
    pub abutment_width: f64,
    /// Width of the foundation block under each end abutment.
    pub end_foundation_width: f64,
    /// Hard cap on the number of sub-spans.
    pub max_sub_spans: u32,
    /// Generic thin-deck thickness for arch/suspension/cable-stayed decks.
    pub deck_thickness: f64,

    /// Target truss panel length; panel count is `max(4, sub_span / this)`.
    pub truss_panel_length: f64,
    /// Truss deck level as a fraction of the overall height.
    pub truss_deck_level_ratio: f64,

    /// Arch rise as a fraction of the overall height (0.6–0.7 band).
    pub arch_rise_ratio: f64,
    /// Radial thickness of the arch ring.
    pub arch_thickness: f64,
    /// Clearance between arch crown and deck soffit.
    pub arch_clearance: f64,
    /// Target spandrel post spacing; count is `max(3, sub_span / this)`.
    pub spandrel_post_spacing: f64,

    /// Tower chainage as a fraction of the span (second tower mirrored).
    pub tower_position_ratio: f64,
    /// Main cable sag as a fraction of the overall height.
    pub cable_sag_ratio: f64,
    /// Number of hanger intervals along the span.
    pub hanger_intervals: u32,
    /// Suspension deck level as a fraction of the overall height.
    pub suspension_deck_level_ratio: f64,
    /// Suspension tower width.
    pub tower_width: f64,
    /// Anchorage block width.
    pub anchorage_width: f64,

    /// Stay cable count per side is `max(4, sub_span / this)`.
    pub stay_spacing_divisor: f64,
    /// Stay attachment height as a fraction of tower height.
    pub stay_anchor_ratio: f64,
    /// Cable-stayed deck level as a fraction of the overall height.
    pub cable_deck_level_ratio: f64,
    /// Cable-stayed tower width.
    pub cable_tower_width: f64,

    /// T-beam deck slab thickness.
    pub tbeam_deck_thickness: f64,
    /// T-beam elevation spacing is `span / this`.
    pub tbeam_spacing_divisor: f64,
    /// One longitudinal girder per this many meters of deck width.
    pub girder_per_width: f64,

    /// Minimum slab thickness.
    pub slab_min_thickness: f64,
    /// Slab thickness is `max(min, span / this)`.
    pub slab_span_divisor: f64,
    /// Reinforcement grid spacing in elevation.
    pub rebar_spacing: f64,
    /// Construction joints appear in plan when the span exceeds this.
    pub construction_joint_spacing: f64,
}

impl Default for Proportions {
    fn default() -> Self {
        Self {
            batter: 6.0,
            pier_top_width: 2.0,
            abutment_width: 3.0,
            end_foundation_width: 8.0,
            max_sub_spans: 30,
            deck_thickness: 0.8,

            truss_panel_length: 10.0,
            truss_deck_level_ratio: 0.3,

            arch_rise_ratio: 0.65,
            arch_thickness: 2.0,
            arch_clearance: 2.0,
            spandrel_post_spacing: 20.0,

            tower_position_ratio: 0.2,
            cable_sag_ratio: 0.3,
            hanger_intervals: 20,
            suspension_deck_level_ratio: 0.4,
            tower_width: 3.0,
            anchorage_width: 6.0,

            stay_spacing_divisor: 15.0,
            stay_anchor_ratio: 0.8,
            cable_deck_level_ratio: 0.3,
            cable_tower_width: 4.0,

            tbeam_deck_thickness: 0.6,
            tbeam_spacing_divisor: 20.0,
            girder_per_width: 3.0,

            slab_min_thickness: 0.8,
            slab_span_divisor: 100.0,
            rebar_spacing: 2.0,
            construction_joint_spacing: 30.0,
        }
    }
}

impl Proportions {
    /// Splits the overall span into sub-spans: one more than the number of
    /// intermediate supports, at least one, capped at
    /// [`Proportions::max_sub_spans`]. Returns `(count, sub_span_length)`.
    pub fn sub_spans(&self, span_length: f64, support_count: u32) -> (u32, f64) {
        let count = (support_count + 1).clamp(1, self.max_sub_spans);
        (count, span_length / f64::from(count))
    }
}
