use anyhow::{anyhow, Context};
use eframe::egui;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use particle_field_app::app::FieldApp;
use particle_field_app::settings::Settings;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let settings = Settings::from_env().context("failed to load settings")?;
    let title = settings.window.title.clone();
    info!(
        policy = ?settings.sim.field.policy,
        particles = settings.sim.field.particle_count,
        "starting particle field"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window.width, settings.window.height])
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(FieldApp::new(settings)))),
    )
    .map_err(|e| anyhow!("failed to run window: {e}"))
}
