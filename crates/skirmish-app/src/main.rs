use anyhow::Context;
use tracing::info;

use skirmish_app::config::AppConfig;
use skirmish_app::{game_loop, logging};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    logging::init(&config.log_level, config.log_file.as_deref())?;
    info!(?config, "starting skirmish");

    let report = game_loop::run(&config)?;

    let json = serde_json::to_string(&report).context("failed to encode run report")?;
    info!(report = %json, "session finished");
    println!("{:.6} frames per second", report.average_fps);
    Ok(())
}
