use rayon::prelude::*;

use crate::{
    decode::gif::decode_gif,
    foundation::core::{ConversionResult, DecodedFrame},
    foundation::error::GlyphreelResult,
    render::analyze,
    render::glyphs::{self, RenderConfig},
    render::ramp::Ramp,
};

/// Default cap on converted frames per source.
pub const DEFAULT_MAX_FRAMES: usize = 200;

/// Whole-pipeline options: per-frame rendering plus source-level behavior.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Per-frame rendering options.
    pub render: RenderConfig,
    /// Let first-frame analysis switch to the dense ramp for dark sources.
    pub auto_style: bool,
    /// Let first-frame analysis flip `invert` for light-backed sources.
    pub auto_invert: bool,
    /// Upper bound on converted frames. Longer sources are sampled evenly
    /// across their duration rather than truncated at the front. Values
    /// below 1 are treated as 1.
    pub max_frames: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            auto_style: false,
            auto_invert: false,
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }
}

/// Run the full pipeline over one GIF byte stream.
///
/// Returns `Ok(None)` for a container that stores zero frames; callers treat
/// that the same as a missing source. Any decode or render failure aborts
/// the conversion; a partial sequence is never returned.
///
/// The result's `frame_delay_ms` is the mean of the converted frames'
/// delays, substituting the default for frames that declare none.
#[tracing::instrument(skip(bytes, options), fields(len = bytes.len()))]
pub fn convert_gif(
    bytes: &[u8],
    options: &ConvertOptions,
) -> GlyphreelResult<Option<ConversionResult>> {
    let decoded = decode_gif(bytes)?;
    if decoded.is_empty() {
        return Ok(None);
    }

    let selected = select_frames(&decoded, options.max_frames);
    let config = resolve_config(options, &selected[0]);

    let frames = selected
        .par_iter()
        .map(|frame| glyphs::render_frame(frame, &config))
        .collect::<GlyphreelResult<Vec<_>>>()?;

    let frame_delay_ms =
        selected.iter().map(DecodedFrame::delay_ms).sum::<f64>() / selected.len() as f64;

    tracing::debug!(frames = frames.len(), frame_delay_ms, "converted gif");
    Ok(Some(ConversionResult {
        frames,
        frame_delay_ms,
    }))
}

/// Apply the enabled auto options on top of the configured render settings.
fn resolve_config(options: &ConvertOptions, first: &DecodedFrame) -> RenderConfig {
    let mut config = options.render.clone();
    if options.auto_style && analyze::prefers_dense_ramp(first) {
        config.ramp = Ramp::dense();
    }
    if options.auto_invert && analyze::background_is_light(first) {
        config.invert = !config.invert;
    }
    config
}

/// Pick at most `max_frames` frames, sampling evenly when over the cap.
fn select_frames(decoded: &[DecodedFrame], max_frames: usize) -> Vec<DecodedFrame> {
    let cap = max_frames.max(1);
    if decoded.len() <= cap {
        return decoded.to_vec();
    }
    let step = decoded.len() as f64 / cap as f64;
    (0..cap)
        .map(|i| decoded[((i as f64 * step) as usize).min(decoded.len() - 1)].clone())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/convert.rs"]
mod tests;
