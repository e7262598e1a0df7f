use grade_lens::config::ChartConfig;
use grade_lens::data::chart::{BoxSummary, HistogramBin, box_summary, histogram, kde_curve};
use grade_lens::data::{AnalysisResult, RawInput, analyze};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The analysed upload currently on screen.
pub struct Upload {
    pub file_name: String,
    pub result: AnalysisResult,
    /// Chart inputs, rebuilt when the bin count changes.
    pub bins: Vec<HistogramBin>,
    /// Density curve over the bins, in counts; empty when there is no spread.
    pub kde: Vec<[f64; 2]>,
    pub box_summary: Option<BoxSummary>,
}

impl Upload {
    fn new(file_name: String, result: AnalysisResult, chart: &ChartConfig) -> Self {
        let mut upload = Upload {
            file_name,
            result,
            bins: Vec::new(),
            kde: Vec::new(),
            box_summary: None,
        };
        upload.rebuild_charts(chart);
        upload
    }

    fn rebuild_charts(&mut self, chart: &ChartConfig) {
        let grades = match &self.result {
            AnalysisResult::Success { table, .. } => table.grades().unwrap_or_default(),
            AnalysisResult::Failure(_) => &[],
        };
        self.bins = histogram(grades, chart.histogram_bins);
        let bin_width = self.bins.first().map(|b| b.width()).unwrap_or_default();
        self.kde = kde_curve(grades, bin_width, 0.0);
        self.box_summary = box_summary(grades);
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Latest upload (None until the user picks a file).
    pub upload: Option<Upload>,

    pub chart: ChartConfig,

    /// Bin count as typed in the side panel; may be invalid.
    pub bins_input: i64,

    /// Status / error message for problems reading the file itself.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let chart = ChartConfig::default();
        Self {
            upload: None,
            bins_input: chart.histogram_bins as i64,
            chart,
            status_message: None,
        }
    }
}

impl AppState {
    /// Analyse a freshly selected file, replacing the previous result.
    pub fn ingest(&mut self, raw: RawInput) {
        let file_name = raw.name.clone().unwrap_or_else(|| "upload.csv".to_string());
        let result = analyze(&raw);
        self.upload = Some(Upload::new(file_name, result, &self.chart));
        self.status_message = None;
    }

    /// Apply the bin count typed by the user.
    pub fn set_bins(&mut self, requested: i64) {
        self.bins_input = requested;
        let chart = ChartConfig::with_bins(requested);
        if chart == self.chart {
            return;
        }
        self.chart = chart;
        if let Some(upload) = &mut self.upload {
            upload.rebuild_charts(&self.chart);
        }
    }
}
