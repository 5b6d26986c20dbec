use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::color::{diagnosis_color, z_score_color};
use crate::model::features::CANONICAL_FEATURES;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Prediction result (central panel)
// ---------------------------------------------------------------------------

/// Render the central result panel.
pub fn result_panel(ui: &mut Ui, state: &AppState) {
    let prediction = match &state.prediction {
        Some(p) => p,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Enter tumor features and press Predict");
            });
            return;
        }
    };

    // ---- Result card ----
    ui.add_space(16.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Prediction result");
        ui.add_space(8.0);
        ui.label(
            RichText::new(prediction.diagnosis.to_string())
                .size(36.0)
                .strong()
                .color(diagnosis_color(prediction.diagnosis)),
        );
        ui.label(format!("Confidence score: {:.4}", prediction.score));
    });
    ui.add_space(16.0);
    ui.separator();

    // ---- Normalized input chart ----
    let Some(scaled) = &state.scaled else {
        return;
    };

    ui.label("Standardized inputs (distance from the fitted mean):");

    let bars: Vec<Bar> = scaled
        .iter()
        .enumerate()
        .map(|(i, &z)| {
            Bar::new(i as f64, z)
                .name(CANONICAL_FEATURES[i].0)
                .fill(z_score_color(z))
        })
        .collect();

    Plot::new("zscore_plot")
        .y_axis_label("z-score")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
