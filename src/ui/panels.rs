use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::model::features::CANONICAL_FEATURES;
use crate::state::AppState;

/// The thirty features group naturally by suffix: ten means, ten standard
/// errors, ten worst-case values, in that canonical order.
const GROUPS: [(&str, std::ops::Range<usize>); 3] = [
    ("Mean values", 0..10),
    ("Standard error", 10..20),
    ("Worst values", 20..30),
];

// ---------------------------------------------------------------------------
// Left side panel – tumor feature inputs
// ---------------------------------------------------------------------------

/// Render the feature input panel: thirty numeric widgets and the predict
/// trigger.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Tumor features");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (title, range) in GROUPS {
                egui::CollapsingHeader::new(RichText::new(title).strong())
                    .id_salt(title)
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        egui::Grid::new(title)
                            .num_columns(2)
                            .striped(true)
                            .show(ui, |ui: &mut Ui| {
                                for idx in range {
                                    let (name, default) = CANONICAL_FEATURES[idx];
                                    ui.label(name);
                                    ui.add(
                                        egui::DragValue::new(&mut state.inputs[idx])
                                            .speed((default.abs() * 0.01).max(0.001)),
                                    );
                                    ui.end_row();
                                }
                            });
                    });
            }

            ui.separator();

            ui.horizontal(|ui: &mut Ui| {
                if ui.button("Predict cancer type").clicked() {
                    state.run_prediction();
                }
                if ui.small_button("Reset defaults").clicked() {
                    state.reset_defaults();
                }
            });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Onco Lens");
        ui.separator();

        ui.label(format!(
            "scaler: {} features · classifier: {}",
            state.artifacts.scaler.n_features(),
            state.artifacts.classifier.shape()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
