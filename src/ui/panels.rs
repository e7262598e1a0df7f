use eframe::egui::{self, Color32, RichText, Ui};
use grade_lens::config::MAX_HISTOGRAM_BINS;
use grade_lens::data::{AnalysisResult, Statistics, loader};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – statistics and chart settings
// ---------------------------------------------------------------------------

/// Render the left panel: analysis outcome plus the histogram bin setting.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Grade Analysis");
    ui.separator();

    match state.upload.as_ref().map(|u| &u.result) {
        None => {
            ui.label("No file loaded.");
        }
        Some(AnalysisResult::Failure(err)) => {
            ui.label(RichText::new(err.kind().headline()).color(Color32::RED).strong());
            ui.label(RichText::new(err.to_string()).color(Color32::RED));
        }
        Some(AnalysisResult::Success { stats, .. }) => {
            statistics_block(ui, stats);
        }
    }

    ui.add_space(12.0);
    ui.strong("Histogram");
    let mut bins = state.bins_input;
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Bins");
        let drag = egui::DragValue::new(&mut bins)
            .speed(0.2)
            .range(1..=MAX_HISTOGRAM_BINS as i64);
        if ui.add(drag).changed() {
            state.set_bins(bins);
        }
    });
    if state.bins_input != state.chart.histogram_bins as i64 {
        ui.label(
            RichText::new(format!(
                "Bin count must be between 1 and {MAX_HISTOGRAM_BINS}; using {}.",
                state.chart.histogram_bins
            ))
            .weak(),
        );
    }
}

fn statistics_block(ui: &mut Ui, stats: &Statistics) {
    egui::Grid::new("statistics")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            let rows = [
                ("Count", stats.count.to_string()),
                ("Minimum Grade", stats.min.to_string()),
                ("Maximum Grade", stats.max.to_string()),
                ("Average Grade", format!("{:.2}", stats.mean)),
                ("Std. Deviation", format!("{:.2}", stats.stddev)),
            ];
            for (label, value) in rows {
                ui.label(label);
                ui.monospace(value);
                ui.end_row();
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(upload) = &state.upload {
            match &upload.result {
                AnalysisResult::Success { table, .. } => {
                    ui.label(format!(
                        "{}: {} rows, {} columns",
                        upload.file_name,
                        table.len(),
                        table.columns().len()
                    ));
                }
                AnalysisResult::Failure(_) => {
                    ui.label(&upload.file_name);
                }
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Select a CSV file")
        .add_filter("CSV", &["csv"])
        .pick_file();

    let Some(path) = file else {
        return;
    };

    match loader::load_upload(&path) {
        Ok(raw) => {
            log::info!("Loaded {} ({} bytes)", path.display(), raw.bytes.len());
            state.ingest(raw);
        }
        Err(e) => {
            log::error!("Failed to read file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
