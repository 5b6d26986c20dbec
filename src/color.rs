use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::model::predictor::Diagnosis;

// ---------------------------------------------------------------------------
// Diagnosis accent colors
// ---------------------------------------------------------------------------

/// Accent color for the rendered diagnosis label.
pub fn diagnosis_color(diagnosis: Diagnosis) -> Color32 {
    match diagnosis {
        Diagnosis::Benign => Color32::from_rgb(0x00, 0xcf, 0x8e),
        Diagnosis::Malignant => Color32::from_rgb(0xff, 0x4b, 0x2b),
    }
}

// ---------------------------------------------------------------------------
// Diverging z-score ramp
// ---------------------------------------------------------------------------

/// Map a z-score onto a diverging hue ramp: blue for values below the fitted
/// mean, red for values above, desaturating toward zero. Saturates at ±3.
pub fn z_score_color(z: f64) -> Color32 {
    let t = (z / 3.0).clamp(-1.0, 1.0) as f32;

    // 210° (blue) for negative, 10° (red) for positive.
    let hue = if t < 0.0 { 210.0 } else { 10.0 };
    let hsl = Hsl::new(hue, 0.25 + 0.55 * t.abs(), 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
