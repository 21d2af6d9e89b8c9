use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gradimport_core::outcome::ImportOutcome;
use gradimport_db::PgRecordStore;
use gradimport_pipeline::run_import;
use gradimport_worker::FileArtifact;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gradimport_worker=debug,gradimport_pipeline=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let csv_path = std::env::args()
        .nth(1)
        .context("usage: gradimport-worker <path-to-csv>")?;

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = gradimport_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    gradimport_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    gradimport_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database ready");

    let artifact = FileArtifact::new(&csv_path);
    let store = PgRecordStore::new(pool);

    tracing::info!(path = %csv_path, "Starting import run");
    let outcome = run_import(&artifact, &store)
        .await
        .with_context(|| format!("Import run failed for {csv_path}"))?;

    match outcome {
        ImportOutcome::Completed(report) => {
            tracing::info!(
                updated = report.updated,
                failed = report.failed,
                "Import complete"
            );
            tracing::debug!(
                diagnostics = %serde_json::to_string(&report.rows)?,
                "Per-row diagnostics"
            );
        }
        ImportOutcome::EmptyInput => {
            tracing::info!("CSV held no data rows; nothing to do");
        }
    }

    Ok(())
}
