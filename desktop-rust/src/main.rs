mod app;
mod preview;

use anyhow::Context;
use app::DesktopApp;
use portfolio_media_common::{Config, FormController, ProjectLayout};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config unreadable, using defaults");
        Config::default()
    });
    let flag = std::env::args_os().nth(1).map(PathBuf::from);
    let layout = ProjectLayout::new(config.resolve_root(flag.as_deref()));

    let mut controller = match FormController::new(layout) {
        Ok(controller) => controller,
        Err(err) => {
            app::notify_error("Cannot open portfolio", &err.to_string());
            return Err(err).context("prepare project layout");
        }
    };
    if let Some(category) = config.default_category() {
        controller.form_mut().category = category;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([760.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Portfolio Manager",
        options,
        Box::new(|_cc| Box::new(DesktopApp::new(controller))),
    )
    .map_err(|err| anyhow::anyhow!("run desktop app: {err}"))
}

fn init_logging() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
        .context("build log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("initialize tracing subscriber: {err}"))
}
