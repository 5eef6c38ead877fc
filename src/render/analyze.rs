//! First-frame content analysis behind the auto style/invert options.

use crate::foundation::core::DecodedFrame;
use crate::render::sampler::LumaPlane;

/// Fraction of the shorter frame edge treated as the border band when
/// comparing border and center brightness.
const BORDER_BAND: f32 = 0.1;

/// Border-band luminance above which a source counts as light-backed.
const LIGHT_BACKGROUND_THRESHOLD: f32 = 0.7;

/// Mean luminance below which a source counts as dark.
const DARK_CONTENT_THRESHOLD: f32 = 0.5;

/// Mean luminance of a frame, in `[0, 1]`.
pub fn mean_luminance(frame: &DecodedFrame) -> f32 {
    LumaPlane::from_frame(frame).mean()
}

/// Whether dark, high-contrast content should prefer the dense ramp.
pub fn prefers_dense_ramp(frame: &DecodedFrame) -> bool {
    mean_luminance(frame) < DARK_CONTENT_THRESHOLD
}

/// Whether the frame's dominant background is light, judged by the mean
/// luminance of a border band around the frame.
///
/// Sources too small to carve a border band out of are reported as dark.
pub fn background_is_light(frame: &DecodedFrame) -> bool {
    let plane = LumaPlane::from_frame(frame);
    let (w, h) = (plane.width(), plane.height());
    let band = ((w.min(h) as f32) * BORDER_BAND) as usize;
    if band == 0 {
        return false;
    }

    let mut total = 0.0;
    let mut count = 0usize;
    for y in 0..h {
        for x in 0..w {
            if x < band || x >= w - band || y < band || y >= h - band {
                total += plane.at(x, y);
                count += 1;
            }
        }
    }
    count > 0 && total / count as f32 > LIGHT_BACKGROUND_THRESHOLD
}

#[cfg(test)]
#[path = "../../tests/unit/render/analyze.rs"]
mod tests;
