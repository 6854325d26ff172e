//! Training plan types and enums.
//!
//! A session template is an ordered list of series; a series is an ordered
//! list of segments repeated `repeat_count` times. Each segment carries a
//! [`BlockBody`] variant holding only the fields of its own block kind, so
//! a segment can never expose stale values from a previous kind.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pace::references::PaceConfig;

/// Block kind discriminant for a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Flat sprint repetitions over a set distance
    Vitesse,
    /// Hill repetitions, by distance or by duration
    Cotes,
    /// General physical preparation circuit
    Ppg,
    /// Weight room block
    Muscu,
    /// Recovery block
    Recup,
    /// Block starts practice
    Start,
    /// Free-form block with an optional metric
    Custom,
}

impl BlockKind {
    /// Get display label (coach-facing, French).
    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Vitesse => "Vitesse",
            BlockKind::Cotes => "Côtes",
            BlockKind::Ppg => "PPG",
            BlockKind::Muscu => "Musculation",
            BlockKind::Recup => "Récupération",
            BlockKind::Start => "Départs",
            BlockKind::Custom => "Personnalisé",
        }
    }

    /// Get the wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            BlockKind::Vitesse => "vitesse",
            BlockKind::Cotes => "cotes",
            BlockKind::Ppg => "ppg",
            BlockKind::Muscu => "muscu",
            BlockKind::Recup => "recup",
            BlockKind::Start => "start",
            BlockKind::Custom => "custom",
        }
    }

    /// All kinds, in catalog order.
    pub fn all() -> Vec<BlockKind> {
        vec![
            BlockKind::Vitesse,
            BlockKind::Cotes,
            BlockKind::Ppg,
            BlockKind::Muscu,
            BlockKind::Recup,
            BlockKind::Start,
            BlockKind::Custom,
        ]
    }

    /// Whether segments of this kind expose the generic rest field.
    ///
    /// `recup` and `ppg` carry their own rest/duration fields and `start`
    /// has none; this asymmetry is intentional domain behavior.
    pub fn has_generic_rest(&self) -> bool {
        matches!(
            self,
            BlockKind::Vitesse | BlockKind::Cotes | BlockKind::Muscu | BlockKind::Custom
        )
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Distance unit for segment distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Meters (default)
    #[default]
    M,
    /// Kilometers
    Km,
}

impl DistanceUnit {
    /// Convert a value in this unit to meters.
    pub fn to_meters(&self, value: f64) -> f64 {
        match self {
            DistanceUnit::M => value,
            DistanceUnit::Km => value * 1000.0,
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistanceUnit::M => write!(f, "m"),
            DistanceUnit::Km => write!(f, "km"),
        }
    }
}

/// Rest interval unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestUnit {
    /// Seconds (default, and the only unit on the wire)
    #[default]
    #[serde(rename = "s")]
    Seconds,
    /// Minutes
    #[serde(rename = "min")]
    Minutes,
}

impl RestUnit {
    /// Convert a value in this unit to seconds.
    pub fn to_seconds(&self, value: u32) -> u32 {
        match self {
            RestUnit::Seconds => value,
            RestUnit::Minutes => value * 60,
        }
    }
}

/// Recovery mode for `recup` blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryMode {
    /// Walking recovery (default)
    #[default]
    Marche,
    /// Easy jog
    Footing,
    /// Standing still
    Passive,
    /// Active drills
    Active,
}

impl RecoveryMode {
    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            RecoveryMode::Marche => "Marche",
            RecoveryMode::Footing => "Footing",
            RecoveryMode::Passive => "Passive",
            RecoveryMode::Active => "Active",
        }
    }
}

impl std::fmt::Display for RecoveryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Training discipline tag for a session template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    Sprint,
    Haies,
    DemiFond,
    Fond,
    Sauts,
    Lancers,
    Relais,
}

impl Discipline {
    /// Get the wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Discipline::Sprint => "sprint",
            Discipline::Haies => "haies",
            Discipline::DemiFond => "demi_fond",
            Discipline::Fond => "fond",
            Discipline::Sauts => "sauts",
            Discipline::Lancers => "lancers",
            Discipline::Relais => "relais",
        }
    }

    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            Discipline::Sprint => "Sprint",
            Discipline::Haies => "Haies",
            Discipline::DemiFond => "Demi-fond",
            Discipline::Fond => "Fond",
            Discipline::Sauts => "Sauts",
            Discipline::Lancers => "Lancers",
            Discipline::Relais => "Relais",
        }
    }

    /// Parse a stored identifier.
    pub fn from_id(id: &str) -> Option<Discipline> {
        match id {
            "sprint" => Some(Discipline::Sprint),
            "haies" => Some(Discipline::Haies),
            "demi_fond" => Some(Discipline::DemiFond),
            "fond" => Some(Discipline::Fond),
            "sauts" => Some(Discipline::Sauts),
            "lancers" => Some(Discipline::Lancers),
            "relais" => Some(Discipline::Relais),
            _ => None,
        }
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Template visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible to the author only (default)
    #[default]
    Private,
    /// Shared with the author's club
    Club,
    /// Publicly listed
    Public,
}

impl Visibility {
    /// Get the wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Club => "club",
            Visibility::Public => "public",
        }
    }

    /// Parse a stored identifier, defaulting to private.
    pub fn from_id(id: &str) -> Visibility {
        match id {
            "club" => Visibility::Club,
            "public" => Visibility::Public,
            _ => Visibility::Private,
        }
    }
}

/// Effort specification for a `cotes` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CotesEffort {
    /// Hill repetitions measured by distance
    Distance {
        distance: Option<f64>,
        unit: DistanceUnit,
    },
    /// Hill repetitions measured by duration
    Duration { seconds: Option<u32> },
}

impl Default for CotesEffort {
    fn default() -> Self {
        CotesEffort::Distance {
            distance: None,
            unit: DistanceUnit::M,
        }
    }
}

/// Dose specification for a PPG circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PpgDose {
    /// Each exercise held/performed for a duration
    Time { seconds: Option<u32> },
    /// Each exercise performed for a repetition count
    Reps { reps: Option<u32> },
}

impl Default for PpgDose {
    fn default() -> Self {
        PpgDose::Time { seconds: None }
    }
}

/// Metric attached to a custom block when the metric gate is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CustomMetric {
    Distance {
        distance: Option<f64>,
        unit: DistanceUnit,
        repetitions: Option<u32>,
    },
    Duration { seconds: Option<u32> },
    Reps { reps: Option<u32> },
    #[serde(rename = "exo")]
    Exercises { names: Vec<String> },
}

/// Kind-specific fields of a segment.
///
/// One variant per block kind; switching kinds builds a fresh variant (see
/// [`Segment::switched_to`]) so fields never leak across kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "block_type", rename_all = "snake_case")]
pub enum BlockBody {
    Vitesse {
        distance: Option<f64>,
        unit: DistanceUnit,
        repetitions: Option<u32>,
    },
    Cotes {
        effort: CotesEffort,
        repetitions: Option<u32>,
    },
    Ppg {
        exercises: Vec<String>,
        dose: PpgDose,
        /// Rest between exercises, distinct from the generic segment rest
        exercise_rest_seconds: Option<u32>,
    },
    Muscu {
        exercises: Vec<String>,
        repetitions: Option<u32>,
    },
    Recup {
        mode: RecoveryMode,
        duration_seconds: Option<u32>,
        repetitions: Option<u32>,
    },
    Start {
        count: Option<u32>,
        exit_distance_m: Option<f64>,
    },
    Custom {
        goal: Option<String>,
        notes: Option<String>,
        distance: Option<f64>,
        unit: DistanceUnit,
        metric: Option<CustomMetric>,
        repetitions: Option<u32>,
    },
}

impl BlockBody {
    /// Build the default body for a block kind.
    pub fn default_for(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Vitesse => BlockBody::Vitesse {
                distance: None,
                unit: DistanceUnit::M,
                repetitions: None,
            },
            BlockKind::Cotes => BlockBody::Cotes {
                effort: CotesEffort::default(),
                repetitions: None,
            },
            BlockKind::Ppg => BlockBody::Ppg {
                exercises: Vec::new(),
                dose: PpgDose::default(),
                exercise_rest_seconds: None,
            },
            BlockKind::Muscu => BlockBody::Muscu {
                exercises: Vec::new(),
                repetitions: None,
            },
            BlockKind::Recup => BlockBody::Recup {
                mode: RecoveryMode::default(),
                duration_seconds: None,
                repetitions: None,
            },
            BlockKind::Start => BlockBody::Start {
                count: None,
                exit_distance_m: None,
            },
            BlockKind::Custom => BlockBody::Custom {
                goal: None,
                notes: None,
                distance: None,
                unit: DistanceUnit::M,
                metric: None,
                repetitions: None,
            },
        }
    }

    /// Get the block kind of this body.
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockBody::Vitesse { .. } => BlockKind::Vitesse,
            BlockBody::Cotes { .. } => BlockKind::Cotes,
            BlockBody::Ppg { .. } => BlockKind::Ppg,
            BlockBody::Muscu { .. } => BlockKind::Muscu,
            BlockBody::Recup { .. } => BlockKind::Recup,
            BlockBody::Start { .. } => BlockKind::Start,
            BlockBody::Custom { .. } => BlockKind::Custom,
        }
    }

    /// Get the generic repetition count, for kinds that carry one.
    pub fn repetitions(&self) -> Option<u32> {
        match self {
            BlockBody::Vitesse { repetitions, .. }
            | BlockBody::Cotes { repetitions, .. }
            | BlockBody::Recup { repetitions, .. }
            | BlockBody::Custom { repetitions, .. } => *repetitions,
            BlockBody::Ppg { .. } | BlockBody::Muscu { .. } | BlockBody::Start { .. } => None,
        }
    }
}

/// Collapse duplicate exercise names case-insensitively, preserving order.
///
/// The first occurrence's casing wins; blank entries are dropped.
pub fn dedup_exercises(names: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            continue;
        }
        let key = trimmed.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        out.push(trimmed.to_string());
    }
    out
}

/// One trainable unit inside a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Unique identifier, stable across kind switches
    pub id: Uuid,
    /// Optional coach-facing label, stable across kind switches
    pub name: Option<String>,
    /// Generic rest after the segment, in seconds.
    /// Only meaningful for kinds where [`BlockKind::has_generic_rest`] holds.
    pub rest_seconds: Option<u32>,
    /// Kind-specific fields
    #[serde(flatten)]
    pub body: BlockBody,
}

impl Segment {
    /// Create a fresh segment of the given kind with default fields.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
            rest_seconds: None,
            body: BlockBody::default_for(kind),
        }
    }

    /// Get the block kind.
    pub fn kind(&self) -> BlockKind {
        self.body.kind()
    }

    /// Build a segment of a new kind, carrying over only `id` and `name`.
    ///
    /// Everything else (including generic rest) restarts from the new
    /// kind's defaults; switching back does not resurrect old fields.
    pub fn switched_to(&self, kind: BlockKind) -> Segment {
        Segment {
            id: self.id,
            name: self.name.clone(),
            rest_seconds: None,
            body: BlockBody::default_for(kind),
        }
    }
}

/// A repeatable group of segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Unique identifier
    pub id: Uuid,
    /// Number of back-to-back executions of the segment list (>= 1)
    pub repeat_count: u32,
    /// Ordered segments; order is significant and preserved
    pub segments: Vec<Segment>,
    /// Pace/intensity targeting configuration
    #[serde(default)]
    pub pace: PaceConfig,
}

impl Series {
    /// Create an empty series executed once.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            repeat_count: 1,
            segments: Vec::new(),
            pace: PaceConfig::default(),
        }
    }

    /// Set segments (builder style, used by seeds and tests).
    pub fn with_segments(mut self, segments: Vec<Segment>) -> Self {
        self.segments = segments;
        self
    }

    /// Set the repeat count, clamped to at least 1 (builder style).
    pub fn with_repeat_count(mut self, count: u32) -> Self {
        self.repeat_count = count.max(1);
        self
    }
}

impl Default for Series {
    fn default() -> Self {
        Self::new()
    }
}

/// A session template: the top-level editable object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTemplate {
    /// Unique identifier
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Training discipline tag
    pub discipline: Option<Discipline>,
    /// Free-text description
    pub description: String,
    /// Equipment notes
    pub equipment: String,
    /// Target intensity on a 1-10 scale
    pub target_intensity: Option<u8>,
    /// Ordered series; order is significant and preserved
    pub series: Vec<Series>,
    /// Rest between series
    pub series_rest: Option<u32>,
    /// Unit of the between-series rest
    pub series_rest_unit: Option<RestUnit>,
    /// Visibility of the template
    pub visibility: Visibility,
    /// Scheduled date, when the template is planned as a session
    pub scheduled_for: Option<NaiveDate>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl SessionTemplate {
    /// Create an empty template with the given title.
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            discipline: None,
            description: String::new(),
            equipment: String::new(),
            target_intensity: None,
            series: Vec::new(),
            series_rest: None,
            series_rest_unit: None,
            visibility: Visibility::Private,
            scheduled_for: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the between-series rest is relevant for display:
    /// more than one series, or any series repeated at least twice.
    pub fn series_rest_applicable(&self) -> bool {
        self.series.len() > 1 || self.series.iter().any(|s| s.repeat_count >= 2)
    }
}

impl Default for SessionTemplate {
    fn default() -> Self {
        Self::new(String::new())
    }
}
