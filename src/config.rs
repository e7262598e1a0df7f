// ---------------------------------------------------------------------------
// Chart settings
// ---------------------------------------------------------------------------

/// Histogram bin count used when none (or an invalid one) is given.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// Largest accepted bin count; one bar is drawn per bin.
pub const MAX_HISTOGRAM_BINS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    /// Always in `1..=MAX_HISTOGRAM_BINS`.
    pub histogram_bins: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

impl ChartConfig {
    /// Bin count from user input; anything outside `1..=MAX_HISTOGRAM_BINS`
    /// falls back to the default.
    pub fn with_bins(requested: i64) -> Self {
        let histogram_bins = usize::try_from(requested)
            .ok()
            .filter(|n| (1..=MAX_HISTOGRAM_BINS).contains(n))
            .unwrap_or(DEFAULT_HISTOGRAM_BINS);
        Self { histogram_bins }
    }
}

// ---------------------------------------------------------------------------
// Window settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Student Grade Analyzer".to_string(),
            inner_size: [1200.0, 800.0],
            min_inner_size: [600.0, 400.0],
        }
    }
}
