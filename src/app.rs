use eframe::egui;

use crate::state::AppState;
use crate::ui::{grid, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct GradeLensApp {
    pub state: AppState,
}

impl eframe::App for GradeLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: statistics and chart settings ----
        egui::SidePanel::left("stats_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: data grid ----
        if self.state.upload.as_ref().is_some_and(|u| u.result.is_success()) {
            egui::TopBottomPanel::bottom("data_grid")
                .resizable(true)
                .default_height(260.0)
                .show(ctx, |ui| {
                    grid::data_grid(ui, &self.state);
                });
        }

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::grade_charts(ui, &self.state);
        });
    }
}
