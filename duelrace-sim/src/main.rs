use anyhow::Context;
use duelrace_core::GLOBAL_CONFIG;
use duelrace_sim::server::{spawn_stdin_reader, RaceServer};
use duelrace_sim::track::TrackSelector;
use glam::DVec2;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let selector =
        TrackSelector::from_setting(&GLOBAL_CONFIG.track).context("invalid track in config")?;
    let viewport = DVec2::new(GLOBAL_CONFIG.viewport_width, GLOBAL_CONFIG.viewport_height);

    // kick off the race loop
    RaceServer::new(selector, viewport, spawn_stdin_reader())
        .context("could not set up the race")?
        .start_loop()
}
