mod app;
mod color;
mod model;
mod state;
mod ui;

use anyhow::Context;
use app::OncoLensApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Load the scaler and classifier once, before any interaction. A missing
    // or malformed artifact is fatal: there is nothing to serve without them.
    let artifacts = model::artifacts::load().context("loading prediction artifacts")?;
    log::info!(
        "loaded scaler ({} features) and classifier ({})",
        artifacts.scaler.n_features(),
        artifacts.classifier.shape()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Onco Lens – Breast Tumor Classifier",
        options,
        Box::new(move |_cc| Ok(Box::new(OncoLensApp::new(artifacts)))),
    )
    .map_err(|e| anyhow::anyhow!("ui error: {e}"))
}
