use eframe::egui;

use crate::model::artifacts::Artifacts;
use crate::state::AppState;
use crate::ui::{panels, result};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct OncoLensApp {
    pub state: AppState,
}

impl OncoLensApp {
    pub fn new(artifacts: &'static Artifacts) -> Self {
        Self {
            state: AppState::new(artifacts),
        }
    }
}

impl eframe::App for OncoLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: tumor feature inputs ----
        egui::SidePanel::left("feature_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: prediction result ----
        egui::CentralPanel::default().show(ctx, |ui| {
            result::result_panel(ui, &self.state);
        });
    }
}
