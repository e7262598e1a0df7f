use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Histogram bar colours
// ---------------------------------------------------------------------------

/// Hue of the lowest bin (red) and of the highest bin (green).
const LOW_HUE: f32 = 0.0;
const HIGH_HUE: f32 = 120.0;

/// Fill colour of the boxplot.
pub const BOX_COLOR: Color32 = Color32::from_rgb(90, 140, 220);

/// Density curve drawn over the histogram.
pub const KDE_COLOR: Color32 = Color32::from_rgb(60, 90, 170);

/// `n` colours running from red (low grades) to green (high grades).
pub fn grade_gradient(n: usize) -> Vec<Color32> {
    match n {
        0 => Vec::new(),
        1 => vec![hsl_to_color32(HIGH_HUE)],
        _ => (0..n)
            .map(|i| {
                let t = i as f32 / (n - 1) as f32;
                hsl_to_color32(LOW_HUE + t * (HIGH_HUE - LOW_HUE))
            })
            .collect(),
    }
}

fn hsl_to_color32(hue: f32) -> Color32 {
    let hsl = Hsl::new(hue, 0.65, 0.5);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_runs_red_to_green() {
        assert!(grade_gradient(0).is_empty());
        let colors = grade_gradient(5);
        assert_eq!(colors.len(), 5);
        let (first, last) = (colors[0], colors[4]);
        assert!(first.r() > first.g());
        assert!(last.g() > last.r());
    }
}
