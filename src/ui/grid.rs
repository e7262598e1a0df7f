use eframe::egui::{self, Ui};
use egui_extras::{Column as GridColumn, TableBuilder};
use grade_lens::data::{AnalysisResult, GRADE_COLUMN};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Data grid (bottom panel)
// ---------------------------------------------------------------------------

/// Render the full uploaded table as a scrollable grid.
pub fn data_grid(ui: &mut Ui, state: &AppState) {
    let Some(AnalysisResult::Success { table, .. }) = state.upload.as_ref().map(|u| &u.result)
    else {
        return;
    };

    ui.strong("Student Data");

    let columns = table.columns();
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(GridColumn::auto().at_least(40.0))
        .columns(GridColumn::initial(120.0).at_least(40.0).clip(true), columns.len())
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("#");
            });
            for column in columns {
                header.col(|ui: &mut Ui| {
                    let text = egui::RichText::new(&column.name).strong();
                    if column.name == GRADE_COLUMN {
                        ui.label(text.underline());
                    } else {
                        ui.label(text);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, table.len(), |mut row| {
                let idx = row.index();
                row.col(|ui: &mut Ui| {
                    ui.label(idx.to_string());
                });
                for column in columns {
                    row.col(|ui: &mut Ui| {
                        ui.label(column.data.display(idx).unwrap_or_default());
                    });
                }
            });
        });
}
