//! Local session-template library.
//!
//! SQLite-backed store used to hydrate the form controller and to seed a
//! handful of built-in templates on first run. Series lists are stored as
//! a JSON column; rows that fail to parse degrade to defaults rather than
//! aborting a listing.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::plan::types::{
    BlockBody, BlockKind, CotesEffort, Discipline, DistanceUnit, PpgDose, RestUnit, Segment,
    Series, SessionTemplate, Visibility,
};

/// Store for session templates.
pub struct TemplateStore<'a> {
    conn: &'a Connection,
}

impl<'a> TemplateStore<'a> {
    /// Create a store over a database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a template.
    pub fn insert(&self, template: &SessionTemplate) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO session_templates
             (id, title, discipline, description, equipment, target_intensity,
              series_json, series_rest, series_rest_unit, visibility,
              scheduled_for, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            params![
                template.id.to_string(),
                template.title,
                template.discipline.map(|d| d.id()),
                template.description,
                template.equipment,
                template.target_intensity,
                serde_json::to_string(&template.series)?,
                template.series_rest,
                template.series_rest_unit.map(unit_id),
                template.visibility.id(),
                template.scheduled_for.map(|d| d.to_string()),
                template.created_at.to_rfc3339(),
                template.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Replace a stored template.
    pub fn update(&self, template: &SessionTemplate) -> Result<(), StoreError> {
        self.conn.execute(
            "UPDATE session_templates SET
             title = ?1, discipline = ?2, description = ?3, equipment = ?4,
             target_intensity = ?5, series_json = ?6, series_rest = ?7,
             series_rest_unit = ?8, visibility = ?9, scheduled_for = ?10,
             updated_at = ?11
             WHERE id = ?12",
            params![
                template.title,
                template.discipline.map(|d| d.id()),
                template.description,
                template.equipment,
                template.target_intensity,
                serde_json::to_string(&template.series)?,
                template.series_rest,
                template.series_rest_unit.map(unit_id),
                template.visibility.id(),
                template.scheduled_for.map(|d| d.to_string()),
                Utc::now().to_rfc3339(),
                template.id.to_string(),
            ],
        )?;
        Ok(())
    }

    /// Get a template by id.
    pub fn get(&self, id: Uuid) -> Result<Option<SessionTemplate>, StoreError> {
        self.conn
            .query_row(
                "SELECT id, title, discipline, description, equipment, target_intensity,
                        series_json, series_rest, series_rest_unit, visibility,
                        scheduled_for, created_at, updated_at
                 FROM session_templates WHERE id = ?1",
                params![id.to_string()],
                parse_template_row,
            )
            .optional()
            .map_err(StoreError::from)
    }

    /// Get all templates, most recently updated first.
    pub fn get_all(&self) -> Result<Vec<SessionTemplate>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, discipline, description, equipment, target_intensity,
                    series_json, series_rest, series_rest_unit, visibility,
                    scheduled_for, created_at, updated_at
             FROM session_templates ORDER BY updated_at DESC",
        )?;
        let rows = stmt.query_map([], parse_template_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }

    /// Get templates for a discipline.
    pub fn get_by_discipline(
        &self,
        discipline: Discipline,
    ) -> Result<Vec<SessionTemplate>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, discipline, description, equipment, target_intensity,
                    series_json, series_rest, series_rest_unit, visibility,
                    scheduled_for, created_at, updated_at
             FROM session_templates WHERE discipline = ?1 ORDER BY title",
        )?;
        let rows = stmt.query_map(params![discipline.id()], parse_template_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }

    /// Delete a template; returns whether it existed.
    pub fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let deleted = self.conn.execute(
            "DELETE FROM session_templates WHERE id = ?1",
            params![id.to_string()],
        )?;
        Ok(deleted > 0)
    }

    /// Get template count.
    pub fn count(&self) -> Result<usize, StoreError> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM session_templates", [], |row| {
                    row.get(0)
                })?;
        Ok(count as usize)
    }

    /// Seed the library with built-in templates if empty.
    pub fn seed_if_empty(&self) -> Result<usize, StoreError> {
        if self.count()? > 0 {
            return Ok(0);
        }

        let templates = builtin_templates();
        for template in &templates {
            self.insert(template)?;
        }
        tracing::info!(count = templates.len(), "template library seeded");
        Ok(templates.len())
    }
}

fn unit_id(unit: RestUnit) -> &'static str {
    match unit {
        RestUnit::Seconds => "s",
        RestUnit::Minutes => "min",
    }
}

fn parse_template_row(row: &rusqlite::Row) -> rusqlite::Result<SessionTemplate> {
    let id_str: String = row.get(0)?;
    let discipline_str: Option<String> = row.get(2)?;
    let series_json: String = row.get(6)?;
    let unit_str: Option<String> = row.get(8)?;
    let visibility_str: String = row.get(9)?;
    let scheduled_str: Option<String> = row.get(10)?;
    let created_at_str: String = row.get(11)?;
    let updated_at_str: String = row.get(12)?;

    let series: Vec<Series> = serde_json::from_str(&series_json).unwrap_or_default();

    Ok(SessionTemplate {
        id: Uuid::parse_str(&id_str).unwrap_or_default(),
        title: row.get(1)?,
        discipline: discipline_str.as_deref().and_then(Discipline::from_id),
        description: row.get(3)?,
        equipment: row.get(4)?,
        target_intensity: row.get(5)?,
        series,
        series_rest: row.get(7)?,
        series_rest_unit: unit_str.map(|s| match s.as_str() {
            "min" => RestUnit::Minutes,
            _ => RestUnit::Seconds,
        }),
        visibility: Visibility::from_id(&visibility_str),
        scheduled_for: scheduled_str.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
        updated_at: DateTime::parse_from_rfc3339(&updated_at_str)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}

fn vitesse_segment(name: &str, distance: f64, repetitions: u32, rest_seconds: u32) -> Segment {
    let mut segment = Segment::new(BlockKind::Vitesse);
    segment.name = Some(name.to_string());
    segment.rest_seconds = Some(rest_seconds);
    segment.body = BlockBody::Vitesse {
        distance: Some(distance),
        unit: DistanceUnit::M,
        repetitions: Some(repetitions),
    };
    segment
}

/// Built-in templates installed on first run.
fn builtin_templates() -> Vec<SessionTemplate> {
    let mut vma = SessionTemplate::new("VMA courte".to_string());
    vma.discipline = Some(Discipline::DemiFond);
    vma.description = "Répétitions courtes à allure VMA".to_string();
    vma.series_rest = Some(5);
    vma.series_rest_unit = Some(RestUnit::Minutes);
    vma.target_intensity = Some(8);
    vma.series = vec![Series::new()
        .with_segments(vec![vitesse_segment("200 à allure", 200.0, 8, 60)])
        .with_repeat_count(2)];

    let mut cotes = SessionTemplate::new("Pyramide de côtes".to_string());
    cotes.discipline = Some(Discipline::Sprint);
    cotes.description = "Montées en côte, durée croissante puis décroissante".to_string();
    cotes.series_rest = Some(8);
    cotes.series_rest_unit = Some(RestUnit::Minutes);
    cotes.target_intensity = Some(9);
    let mut hill = Segment::new(BlockKind::Cotes);
    hill.name = Some("Côte moyenne".to_string());
    hill.rest_seconds = Some(180);
    hill.body = BlockBody::Cotes {
        effort: CotesEffort::Distance {
            distance: Some(80.0),
            unit: DistanceUnit::M,
        },
        repetitions: Some(6),
    };
    cotes.series = vec![Series::new().with_segments(vec![hill]).with_repeat_count(3)];

    let mut ppg = SessionTemplate::new("Circuit PPG hivernal".to_string());
    ppg.discipline = Some(Discipline::Sprint);
    ppg.description = "Renforcement général en circuit".to_string();
    ppg.series_rest = Some(4);
    ppg.series_rest_unit = Some(RestUnit::Minutes);
    ppg.target_intensity = Some(5);
    let mut circuit = Segment::new(BlockKind::Ppg);
    circuit.name = Some("Circuit complet".to_string());
    circuit.body = BlockBody::Ppg {
        exercises: vec![
            "Gainage".to_string(),
            "Pompes".to_string(),
            "Squats sautés".to_string(),
            "Montées de genoux".to_string(),
        ],
        dose: PpgDose::Time { seconds: Some(40) },
        exercise_rest_seconds: Some(20),
    };
    ppg.series = vec![Series::new()
        .with_segments(vec![circuit])
        .with_repeat_count(4)];

    vec![vma, cotes, ppg]
}

/// Template store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
