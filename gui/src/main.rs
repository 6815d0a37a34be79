use anyhow::anyhow;
use clap::Parser;
use eframe::egui;
use eframe::run_native;

mod app;
mod args;

use app::LifeApp;
use args::Args;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Args::parse().settings()?;
    log::info!(
        "starting {}x{} board, {} px cells",
        settings.columns,
        settings.rows,
        settings.cell_size
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app::title(0, 0.0))
            .with_inner_size(settings.window_size)
            .with_resizable(false),
        vsync: true,
        ..Default::default()
    };

    run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(LifeApp::new(settings)))),
    )
    .map_err(|err| anyhow!("failed to run the Game of Life window: {err}"))
}
