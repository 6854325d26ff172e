//! Pace/intensity reference table.
//!
//! A pace target is expressed as a percentage of a named baseline: either a
//! personal distance record (run-based blocks) or a measured load
//! (weight-room blocks).

use serde::{Deserialize, Serialize};

/// Lower bound of the pace percentage.
pub const PACE_PERCENT_MIN: u8 = 50;
/// Upper bound of the pace percentage.
pub const PACE_PERCENT_MAX: u8 = 100;
/// Pace percentage granularity.
pub const PACE_PERCENT_STEP: u8 = 5;

/// What a reference baseline measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceBasis {
    /// A personal record over a distance
    Distance,
    /// A measured load in kilograms
    Load,
}

/// A named pace/intensity baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaceReference {
    #[serde(rename = "50m")]
    M50,
    #[serde(rename = "100m")]
    M100,
    #[serde(rename = "150m")]
    M150,
    #[serde(rename = "200m")]
    M200,
    #[serde(rename = "300m")]
    M300,
    #[serde(rename = "400m")]
    M400,
    #[serde(rename = "800m")]
    M800,
    #[serde(rename = "1000m")]
    M1000,
    #[serde(rename = "bodyweight")]
    BodyWeight,
    #[serde(rename = "max_muscu")]
    MaxMuscu,
    #[serde(rename = "max_chariot")]
    MaxChariot,
}

impl PaceReference {
    /// Get the wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            PaceReference::M50 => "50m",
            PaceReference::M100 => "100m",
            PaceReference::M150 => "150m",
            PaceReference::M200 => "200m",
            PaceReference::M300 => "300m",
            PaceReference::M400 => "400m",
            PaceReference::M800 => "800m",
            PaceReference::M1000 => "1000m",
            PaceReference::BodyWeight => "bodyweight",
            PaceReference::MaxMuscu => "max_muscu",
            PaceReference::MaxChariot => "max_chariot",
        }
    }

    /// Get display label (coach-facing, French).
    pub fn label(&self) -> &'static str {
        match self {
            PaceReference::M50 => "Record 50 m",
            PaceReference::M100 => "Record 100 m",
            PaceReference::M150 => "Record 150 m",
            PaceReference::M200 => "Record 200 m",
            PaceReference::M300 => "Record 300 m",
            PaceReference::M400 => "Record 400 m",
            PaceReference::M800 => "Record 800 m",
            PaceReference::M1000 => "Record 1000 m",
            PaceReference::BodyWeight => "Poids de corps",
            PaceReference::MaxMuscu => "Max muscu",
            PaceReference::MaxChariot => "Max chariot",
        }
    }

    /// Get unit of measurement of the baseline.
    pub fn unit(&self) -> &'static str {
        match self.basis() {
            ReferenceBasis::Distance => "m",
            ReferenceBasis::Load => "kg",
        }
    }

    /// What this baseline measures.
    pub fn basis(&self) -> ReferenceBasis {
        match self {
            PaceReference::M50
            | PaceReference::M100
            | PaceReference::M150
            | PaceReference::M200
            | PaceReference::M300
            | PaceReference::M400
            | PaceReference::M800
            | PaceReference::M1000 => ReferenceBasis::Distance,
            PaceReference::BodyWeight | PaceReference::MaxMuscu | PaceReference::MaxChariot => {
                ReferenceBasis::Load
            }
        }
    }

    /// Whether this baseline is load-based.
    pub fn is_load(&self) -> bool {
        self.basis() == ReferenceBasis::Load
    }

    /// Distance-record catalog, in display order.
    pub fn distance_catalog() -> &'static [PaceReference] {
        &[
            PaceReference::M50,
            PaceReference::M100,
            PaceReference::M150,
            PaceReference::M200,
            PaceReference::M300,
            PaceReference::M400,
            PaceReference::M800,
            PaceReference::M1000,
        ]
    }

    /// Load catalog, in display order.
    pub fn load_catalog() -> &'static [PaceReference] {
        &[
            PaceReference::BodyWeight,
            PaceReference::MaxMuscu,
            PaceReference::MaxChariot,
        ]
    }

    /// Parse a stored identifier.
    pub fn from_id(id: &str) -> Option<PaceReference> {
        PaceReference::distance_catalog()
            .iter()
            .chain(PaceReference::load_catalog())
            .copied()
            .find(|r| r.id() == id)
    }
}

impl std::fmt::Display for PaceReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Clamp a pace percentage into bounds and snap it to the step grid.
pub fn snap_percent(percent: u8) -> u8 {
    let clamped = percent.clamp(PACE_PERCENT_MIN, PACE_PERCENT_MAX);
    let offset = clamped - PACE_PERCENT_MIN;
    let snapped = PACE_PERCENT_MIN + (offset + PACE_PERCENT_STEP / 2) / PACE_PERCENT_STEP * PACE_PERCENT_STEP;
    snapped.min(PACE_PERCENT_MAX)
}

/// Pace/intensity targeting configuration of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceConfig {
    /// Gate for intensity targeting
    pub enabled: bool,
    /// Target percentage of the baseline, in [50,100] step 5
    pub percent: u8,
    /// Selected baseline; must belong to the series' legal set
    pub reference: Option<PaceReference>,
    /// Athlete body weight, meaningful only for load-based references
    pub body_weight_kg: Option<f32>,
    /// One-rep max in the weight room, load-based only
    pub max_muscu_kg: Option<f32>,
    /// Max sled load, load-based only
    pub max_chariot_kg: Option<f32>,
}

impl Default for PaceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            percent: PACE_PERCENT_MAX,
            reference: None,
            body_weight_kg: None,
            max_muscu_kg: None,
            max_chariot_kg: None,
        }
    }
}

impl PaceConfig {
    /// Clear the three load-specific fields.
    pub fn clear_load_fields(&mut self) {
        self.body_weight_kg = None;
        self.max_muscu_kg = None;
        self.max_chariot_kg = None;
    }

    /// Disable targeting and drop every stored pace field.
    pub fn clear(&mut self) {
        *self = PaceConfig::default();
    }
}
