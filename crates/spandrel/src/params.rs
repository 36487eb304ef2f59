//! The validated structural parameter model.
//!
//! A [`ParameterSet`] is constructed once per drawing request, validated at
//! construction, and never mutated afterwards. Generators consume it
//! read-only; no partially-built value ever escapes [`ParameterSet::new`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::SpandrelError;

/// Validation failure raised while constructing a [`ParameterSet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("span length must be positive")]
    NonPositiveSpan,
    #[error("deck width must be positive")]
    NonPositiveWidth,
    #[error("height must be positive")]
    NonPositiveHeight,
}

/// The structural form of a bridge.
///
/// The set is closed: each variant has exactly one generator, dispatched by
/// an exhaustive `match`, so adding a typology is a compile-time checked
/// change rather than a branch to remember.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeTypology {
    Beam,
    Truss,
    Arch,
    Suspension,
    CableStayed,
    TBeam,
    Slab,
}

impl BridgeTypology {
    /// All typologies, in the order the batch generator emits them.
    pub const ALL: [BridgeTypology; 7] = [
        BridgeTypology::Beam,
        BridgeTypology::Truss,
        BridgeTypology::Arch,
        BridgeTypology::Suspension,
        BridgeTypology::CableStayed,
        BridgeTypology::TBeam,
        BridgeTypology::Slab,
    ];

    /// Returns the lowercase tag used on the command line and in file names.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Beam => "beam",
            Self::Truss => "truss",
            Self::Arch => "arch",
            Self::Suspension => "suspension",
            Self::CableStayed => "cable_stayed",
            Self::TBeam => "t_beam",
            Self::Slab => "slab",
        }
    }

    /// Returns the human-readable name used in drawing titles.
    pub fn title(self) -> &'static str {
        match self {
            Self::Beam => "Beam Bridge",
            Self::Truss => "Truss Bridge",
            Self::Arch => "Arch Bridge",
            Self::Suspension => "Suspension Bridge",
            Self::CableStayed => "Cable Stayed Bridge",
            Self::TBeam => "T Beam Bridge",
            Self::Slab => "Slab Bridge",
        }
    }
}

impl fmt::Display for BridgeTypology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for BridgeTypology {
    type Err = SpandrelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beam" => Ok(Self::Beam),
            "truss" => Ok(Self::Truss),
            "arch" => Ok(Self::Arch),
            "suspension" => Ok(Self::Suspension),
            "cable_stayed" => Ok(Self::CableStayed),
            "t_beam" => Ok(Self::TBeam),
            "slab" => Ok(Self::Slab),
            other => Err(SpandrelError::UnsupportedTypology(other.to_string())),
        }
    }
}

/// Immutable record of the structural parameters defining one bridge.
///
/// Required fields are validated at construction; the optional fields carry
/// standard drafting defaults and are set through consuming `with_*`
/// builders.
///
/// # Examples
///
/// ```
/// use spandrel::params::ParameterSet;
///
/// let params = ParameterSet::new(40.0, 12.0, 8.0, 1, 50.0, "concrete")
///     .expect("valid parameters")
///     .with_girder_depth(1.8);
/// assert_eq!(params.span_length(), 40.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    span_length: f64,
    deck_width: f64,
    height: f64,
    support_count: u32,
    load_capacity: f64,
    material: String,
    approach_length: f64,
    foundation_depth: f64,
    girder_depth: f64,
    rail_height: f64,
}

impl ParameterSet {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] when `span_length`, `deck_width` or
    /// `height` is not strictly positive.
    pub fn new(
        span_length: f64,
        deck_width: f64,
        height: f64,
        support_count: u32,
        load_capacity: f64,
        material: impl Into<String>,
    ) -> Result<Self, ParameterError> {
        if !(span_length > 0.0) {
            return Err(ParameterError::NonPositiveSpan);
        }
        if !(deck_width > 0.0) {
            return Err(ParameterError::NonPositiveWidth);
        }
        if !(height > 0.0) {
            return Err(ParameterError::NonPositiveHeight);
        }

        Ok(Self {
            span_length,
            deck_width,
            height,
            support_count,
            load_capacity,
            material: material.into(),
            approach_length: 50.0,
            foundation_depth: 5.0,
            girder_depth: 2.0,
            rail_height: 1.2,
        })
    }

    /// Sets the approach length in meters.
    pub fn with_approach_length(mut self, approach_length: f64) -> Self {
        self.approach_length = approach_length;
        self
    }

    /// Sets the foundation depth in meters.
    pub fn with_foundation_depth(mut self, foundation_depth: f64) -> Self {
        self.foundation_depth = foundation_depth;
        self
    }

    /// Sets the girder depth in meters.
    pub fn with_girder_depth(mut self, girder_depth: f64) -> Self {
        self.girder_depth = girder_depth;
        self
    }

    /// Sets the rail height in meters.
    pub fn with_rail_height(mut self, rail_height: f64) -> Self {
        self.rail_height = rail_height;
        self
    }

    /// Main span length in meters.
    pub fn span_length(&self) -> f64 {
        self.span_length
    }

    /// Deck width in meters.
    pub fn deck_width(&self) -> f64 {
        self.deck_width
    }

    /// Overall height in meters.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Number of intermediate supports.
    pub fn support_count(&self) -> u32 {
        self.support_count
    }

    /// Design load in kN/m.
    pub fn load_capacity(&self) -> f64 {
        self.load_capacity
    }

    /// Primary material name.
    pub fn material(&self) -> &str {
        &self.material
    }

    /// Approach length in meters.
    pub fn approach_length(&self) -> f64 {
        self.approach_length
    }

    /// Foundation depth below datum in meters.
    pub fn foundation_depth(&self) -> f64 {
        self.foundation_depth
    }

    /// Girder depth in meters.
    pub fn girder_depth(&self) -> f64 {
        self.girder_depth
    }

    /// Rail height above the deck in meters.
    pub fn rail_height(&self) -> f64 {
        self.rail_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ParameterSet {
        ParameterSet::new(40.0, 12.0, 8.0, 1, 50.0, "concrete").unwrap()
    }

    #[test]
    fn test_valid_construction() {
        let params = valid();
        assert_eq!(params.span_length(), 40.0);
        assert_eq!(params.support_count(), 1);
        assert_eq!(params.material(), "concrete");
        // Defaults for the optional fields.
        assert_eq!(params.foundation_depth(), 5.0);
        assert_eq!(params.girder_depth(), 2.0);
        assert_eq!(params.rail_height(), 1.2);
        assert_eq!(params.approach_length(), 50.0);
    }

    #[test]
    fn test_zero_span_fails_construction() {
        let result = ParameterSet::new(0.0, 12.0, 8.0, 0, 50.0, "steel");
        assert_eq!(result.unwrap_err(), ParameterError::NonPositiveSpan);
    }

    #[test]
    fn test_negative_and_nan_dimensions_fail() {
        assert!(ParameterSet::new(40.0, -1.0, 8.0, 0, 50.0, "steel").is_err());
        assert!(ParameterSet::new(40.0, 12.0, 0.0, 0, 50.0, "steel").is_err());
        assert!(ParameterSet::new(f64::NAN, 12.0, 8.0, 0, 50.0, "steel").is_err());
    }

    #[test]
    fn test_builders_override_defaults() {
        let params = valid().with_foundation_depth(3.0).with_rail_height(1.0);
        assert_eq!(params.foundation_depth(), 3.0);
        assert_eq!(params.rail_height(), 1.0);
    }

    #[test]
    fn test_typology_round_trips_through_tag() {
        for typology in BridgeTypology::ALL {
            let parsed: BridgeTypology = typology.tag().parse().unwrap();
            assert_eq!(parsed, typology);
        }
    }

    #[test]
    fn test_unknown_typology_is_rejected() {
        let err = "pontoon".parse::<BridgeTypology>().unwrap_err();
        assert!(err.to_string().contains("pontoon"));
    }
}
