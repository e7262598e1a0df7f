use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Line, Plot, PlotPoints, Points};

use grade_lens::data::AnalysisResult;
use grade_lens::data::chart::{BoxSummary, HistogramBin};

use crate::color::{BOX_COLOR, KDE_COLOR, grade_gradient};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Grade charts (central panel)
// ---------------------------------------------------------------------------

/// Render the histogram and boxplot side by side.
pub fn grade_charts(ui: &mut Ui, state: &AppState) {
    let upload = match &state.upload {
        Some(upload) if upload.result.is_success() => upload,
        Some(upload) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                if let AnalysisResult::Failure(err) = &upload.result {
                    ui.heading(err.kind().headline());
                }
            });
            return;
        }
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Upload a CSV file containing student data  (File → Open…)");
            });
            return;
        }
    };

    ui.columns(2, |cols: &mut [Ui]| {
        cols[0].heading("Grade Distribution");
        histogram_plot(&mut cols[0], &upload.bins, &upload.kde);

        cols[1].heading("Grade Boxplot");
        if let Some(summary) = &upload.box_summary {
            box_plot(&mut cols[1], summary);
        }
    });
}

fn histogram_plot(ui: &mut Ui, bins: &[HistogramBin], kde: &[[f64; 2]]) {
    let colors = grade_gradient(bins.len());
    let bars: Vec<Bar> = bins
        .iter()
        .zip(colors)
        .map(|(bin, color)| {
            Bar::new(bin.center(), bin.count as f64)
                .width(bin.width())
                .fill(color)
                .name(format!("{:.2} – {:.2}", bin.lower, bin.upper))
        })
        .collect();

    Plot::new("grade_histogram")
        .x_axis_label("Grade")
        .y_axis_label("Frequency")
        .allow_drag(true)
        .allow_zoom(true)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Grades"));
            if !kde.is_empty() {
                let points: PlotPoints = kde.iter().copied().collect();
                plot_ui.line(
                    Line::new(points)
                        .name("Density")
                        .color(KDE_COLOR)
                        .width(2.0),
                );
            }
        });
}

fn box_plot(ui: &mut Ui, summary: &BoxSummary) {
    let spread = BoxSpread::new(
        summary.lower_whisker,
        summary.q1,
        summary.median,
        summary.q3,
        summary.upper_whisker,
    );
    let elem = BoxElem::new(0.0, spread)
        .name("Grade")
        .box_width(0.5)
        .whisker_width(0.3)
        .fill(BOX_COLOR.linear_multiply(0.3))
        .stroke(Stroke::new(1.5, BOX_COLOR));

    let outliers: Vec<[f64; 2]> = summary.outliers.iter().map(|&v| [0.0, v]).collect();

    Plot::new("grade_boxplot")
        .y_axis_label("Grade")
        .show_x(false)
        .allow_drag(true)
        .allow_zoom(true)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(vec![elem]).name("Grade"));
            if !outliers.is_empty() {
                plot_ui.points(
                    Points::new(outliers)
                        .radius(3.0)
                        .color(Color32::LIGHT_RED)
                        .name("Outliers"),
                );
            }
        });
}
