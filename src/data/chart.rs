//! Chart inputs derived from the grade values: histogram bins, the density
//! curve drawn over them, and the boxplot five-number summary. All work on
//! an immutable snapshot.

use super::stats::Statistics;

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Split `values` into `bins` equal-width bins spanning `[min, max]`.
///
/// Every bin is half-open except the last, which also holds `max`. When
/// all values are equal the range is widened to `[v - 0.5, v + 0.5]`.
/// Returns no bins for empty input or `bins == 0`.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }

    let (mut lo, mut hi) = values
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: lo + width * i as f64,
            upper: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Kernel density curve
// ---------------------------------------------------------------------------

/// Grid positions the density curve is evaluated at.
pub const KDE_POINTS: usize = 200;

/// Gaussian kernel density estimate of `values`, scaled to histogram counts
/// (density × n × `bin_width`) so it overlays bars of that width.
///
/// The bandwidth follows Scott's rule: sample standard deviation times
/// n^(-1/5). The grid spans `[min - cut·bw, max + cut·bw]`; `cut = 0.0`
/// keeps the curve inside the data range. Fewer than two values, or values
/// with no spread, give no curve.
pub fn kde_curve(values: &[f64], bin_width: f64, cut: f64) -> Vec<[f64; 2]> {
    if values.len() < 2 || !(bin_width > 0.0) {
        return Vec::new();
    }
    let Some(stats) = Statistics::from_values(values) else {
        return Vec::new();
    };
    let n = values.len() as f64;
    let sample_sd = stats.stddev * (n / (n - 1.0)).sqrt();
    let bandwidth = sample_sd * n.powf(-0.2);
    if !(bandwidth > 0.0 && bandwidth.is_finite()) {
        return Vec::new();
    }

    let lo = stats.min - cut * bandwidth;
    let hi = stats.max + cut * bandwidth;
    let step = (hi - lo) / (KDE_POINTS - 1) as f64;
    let norm = bin_width / (bandwidth * (2.0 * std::f64::consts::PI).sqrt());

    (0..KDE_POINTS)
        .map(|i| {
            let x = if i + 1 == KDE_POINTS { hi } else { lo + step * i as f64 };
            let kernel_sum: f64 = values
                .iter()
                .map(|&v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum();
            [x, kernel_sum * norm]
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Boxplot
// ---------------------------------------------------------------------------

/// Quartiles, Tukey whiskers and outliers of a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    /// Points beyond the whiskers, in ascending order.
    pub outliers: Vec<f64>,
}

/// Whiskers reach the furthest data point within this many IQRs of the box.
const WHISKER_IQR: f64 = 1.5;

pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let low_fence = q1 - WHISKER_IQR * iqr;
    let high_fence = q3 + WHISKER_IQR * iqr;

    let inside = || sorted.iter().copied().filter(|&v| v >= low_fence && v <= high_fence);
    let lower_whisker = inside().next().unwrap_or(q1);
    let upper_whisker = inside().last().unwrap_or(q3);
    let outliers = sorted
        .iter()
        .copied()
        .filter(|&v| v < low_fence || v > high_fence)
        .collect();

    Some(BoxSummary {
        lower_whisker,
        q1,
        median,
        q3,
        upper_whisker,
        outliers,
    })
}

/// Quantile of sorted data with linear interpolation between ranks.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let below = pos.floor() as usize;
    let above = pos.ceil() as usize;
    let frac = pos - below as f64;
    sorted[below] + (sorted[above] - sorted[below]) * frac
}
