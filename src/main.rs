//! TrackPlan - Training Session Planner
//!
//! CLI entry point: opens the local template library, seeds it on first
//! run, and prints a summary of stored sessions.

use rusqlite::Connection;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use trackplan::plan::summary::summarize;
use trackplan::storage::config::{get_database_path, load_config};
use trackplan::storage::schema::apply_schema;
use trackplan::storage::template_store::TemplateStore;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TrackPlan v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    std::fs::create_dir_all(&config.data_dir)?;

    let conn = Connection::open(get_database_path())?;
    apply_schema(&conn)?;

    let store = TemplateStore::new(&conn);
    store.seed_if_empty()?;

    let templates = store.get_all()?;
    println!("Modèles de séance ({})", templates.len());
    for template in &templates {
        let summary = summarize(template);
        let date = summary.date.as_deref().unwrap_or("—");
        match &summary.volume {
            Some(volume) => {
                println!("  {} | {} | {} | {}", date, summary.title, summary.counts, volume)
            }
            None => println!("  {} | {} | {}", date, summary.title, summary.counts),
        }
    }

    Ok(())
}
