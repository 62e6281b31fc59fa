//! Apply database migrations and report table sizes.
//!
//! Requires `DATABASE_URL`; exits with status 1 when it is missing or when
//! any step fails.

use anyhow::Context;
use apexverse_api::telemetry::init_tracing;
use apexverse_db::repositories::{ContactRepo, PortfolioRepo, TestimonialRepo};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing("apexverse_migrate=info,apexverse_db=info,sqlx=warn");

    if let Err(e) = run().await {
        tracing::error!("Migration failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let database_url = std::env::var("DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .context("DATABASE_URL environment variable is required")?;

    let pool = apexverse_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    apexverse_db::run_migrations(&pool)
        .await
        .context("Failed to apply migrations")?;
    tracing::info!("Migrations applied");

    let testimonials = TestimonialRepo::count(&pool)
        .await
        .context("Failed to count testimonials")?;
    let portfolio_items = PortfolioRepo::count(&pool)
        .await
        .context("Failed to count portfolio items")?;
    let contact_submissions = ContactRepo::count(&pool)
        .await
        .context("Failed to count contact submissions")?;

    tracing::info!(
        testimonials,
        portfolio_items,
        contact_submissions,
        "Database ready",
    );
    Ok(())
}
