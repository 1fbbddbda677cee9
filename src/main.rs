use cfo_dashboard::config::{self, environment};
use cfo_dashboard::core::{
    dashboard::Dashboard,
    export::{DashboardExport, write_export},
    generator::Dataset,
};
use cfo_dashboard::errors::Result;
use chrono::{Local, Utc};
use dotenvy::dotenv;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the dashboard settings
    let config_path = environment::config_path();
    let app_config = config::load_config(&config_path)
        .inspect_err(|e| error!("Failed to load settings from {:?}: {}", config_path, e))?;
    info!("Successfully processed application configuration.");

    // 4. Seed the generator: env override, then settings, then the clock
    let seed = match environment::seed_override()
        .inspect_err(|e| error!("Invalid seed override: {}", e))?
    {
        Some(seed) => seed,
        None => app_config.generator.seed.unwrap_or_else(time_seed),
    };
    info!("Generating dashboard data with seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    // 5. Generate and derive
    let today = Local::now().date_naive();
    let dataset = Dataset::generate(&mut rng, today);
    let options = app_config.dashboard.options()?;
    let dashboard = Dashboard::build(&dataset, &options, None, &mut rng);

    // 6. Export
    let export = DashboardExport::from_dashboard(&dashboard);
    let path = write_export(&app_config.export.directory, &export, today)
        .inspect_err(|e| error!("Failed to write export: {}", e))?;
    info!("Export written to {}", path.display());

    Ok(())
}

/// Seed derived from the current time, for runs without a configured seed.
fn time_seed() -> u64 {
    let now = Utc::now();
    let micros = now.timestamp_micros();
    u64::try_from(micros).unwrap_or_else(|_| micros.unsigned_abs())
}
