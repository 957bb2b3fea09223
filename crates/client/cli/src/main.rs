//! Line-based terminal client.
//!
//! Reads one command per line from stdin and prints the settled state after
//! every turn. Configuration comes from the environment (and an optional
//! `.env`) and is built once here.
mod app;
mod config;
mod input;
mod render;
mod state;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use game_content::{ContentFactory, ContentPack, GenerationSettings};
use runtime::{OracleManager, RuntimeConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use app::App;
use config::CliConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = setup_logging(&config)?;

    let (pack, settings) = load_content(&config)?;
    let oracles = OracleManager::from_pack(pack).context("content pack is inconsistent")?;

    let mut runtime = RuntimeConfig::default().with_settings(settings);
    if let Some(dir) = &config.save_dir {
        runtime.save_dir = dir.clone();
    }
    runtime.seed = config.seed;
    let repo = runtime
        .open_repository()
        .with_context(|| format!("cannot open save directory {}", runtime.save_dir.display()))?;
    tracing::info!(save = %runtime.save_path().display(), "starting");

    let stdin = io::stdin();
    App::new(config, runtime, oracles, Box::new(repo)).run(stdin.lock(), io::stdout().lock())
}

fn load_content(config: &CliConfig) -> Result<(ContentPack, GenerationSettings)> {
    let Some(dir) = &config.data_dir else {
        return Ok((ContentPack::standard(), GenerationSettings::default()));
    };
    let factory = ContentFactory::new(dir);
    let pack = factory.load_content()?;
    let settings = factory.load_settings()?;
    tracing::info!(data_dir = %dir.display(), "loaded content overrides");
    Ok((pack, settings))
}

/// Setup logging to a per-user log file; stdout belongs to the game.
fn setup_logging(config: &CliConfig) -> Result<WorkerGuard> {
    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("cannot create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "dungeon.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}/dungeon.log", log_dir.display());
    Ok(guard)
}

fn default_log_dir() -> PathBuf {
    ProjectDirs::from("", "", RuntimeConfig::APPLICATION)
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("dungeon").join("logs"))
}
