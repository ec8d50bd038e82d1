//! Simulation binary for Kismet.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `kismet-config.yaml` (or `KISMET_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the world from the configuration
//! 4. Seed the RNG from `world.seed`
//! 5. Run every month, recording history
//! 6. Log the result and print the history as JSON on stdout

mod diary_callback;
mod error;

use std::io::Write;
use std::path::PathBuf;

use kismet_core::config::SimulationConfig;
use kismet_core::runner;
use kismet_core::world::World;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::diary_callback::DiaryCallback;
use crate::error::EngineError;

/// Environment variable naming the configuration file.
const CONFIG_ENV: &str = "KISMET_CONFIG";

/// Configuration file used when `KISMET_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "kismet-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, world construction, or output fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let (config, loaded_from) = load_config()?;

    // 2. Initialize structured logging. `RUST_LOG` wins over the config.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(
        world_name = config.world.name,
        seed = config.world.seed,
        total_months = config.world.total_months,
        destiny_strength = config.world.destiny_strength,
        source = loaded_from.as_ref().map(|p| p.display().to_string()),
        "Configuration loaded"
    );

    // 3. Build the world.
    let mut world = World::from_config(&config).map_err(EngineError::from)?;
    info!(agents = world.agents.len(), overrides = world.agent_overrides.len(), "World built");

    // 4-5. Run.
    let mut rng = StdRng::seed_from_u64(config.world.seed);
    let history = runner::run_full_simulation_with(&mut world, None, &mut rng, &mut DiaryCallback);

    // 6. Report.
    runner::log_simulation_end(&world, &history);
    let json = serde_json::to_string_pretty(&history).map_err(EngineError::from)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;

    Ok(())
}

/// Load and validate configuration.
///
/// Reads `KISMET_CONFIG` if set, else `kismet-config.yaml` in the working
/// directory. A missing default file falls back to built-in defaults; a
/// missing file named by `KISMET_CONFIG` is an error.
fn load_config() -> Result<(SimulationConfig, Option<PathBuf>), EngineError> {
    let (path, explicit) = std::env::var_os(CONFIG_ENV).map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        |value| (PathBuf::from(value), true),
    );

    if explicit || path.exists() {
        let config = SimulationConfig::from_file(&path)?;
        config.validate()?;
        Ok((config, Some(path)))
    } else {
        Ok((SimulationConfig::default(), None))
    }
}
