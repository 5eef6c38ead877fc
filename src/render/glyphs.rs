use crate::{
    foundation::core::{CHAR_CELL_ASPECT, DecodedFrame, GlyphFrame},
    foundation::error::{GlyphreelError, GlyphreelResult},
    render::ramp::Ramp,
    render::sampler::{self, LumaPlane},
};

/// Options for rendering one decoded frame onto a character grid.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in characters.
    pub target_columns: u32,
    /// Output height in characters. When `None`, derived from the frame's
    /// pixel aspect ratio and [`CHAR_CELL_ASPECT`].
    pub target_rows: Option<u32>,
    /// Brightness ramp, darkest glyph first.
    pub ramp: Ramp,
    /// Average a clamped 3x3 source neighborhood per cell instead of taking
    /// a single nearest sample.
    pub supersample: bool,
    /// Blend factor in `[0, 1]` mixing Sobel edge magnitude into brightness,
    /// to keep outlines that flat luminance would wash out.
    pub edge_weight: f32,
    /// Gamma applied to normalized brightness before quantization. Values
    /// above 1 push mid-tones toward the extremes.
    pub contrast_exponent: f32,
    /// Reverse the score for sources shown on a light background.
    pub invert: bool,
    /// Floyd-Steinberg dither the luminance plane before sampling.
    pub dither: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            target_columns: 100,
            target_rows: None,
            ramp: Ramp::default(),
            supersample: false,
            edge_weight: 0.0,
            contrast_exponent: 1.0,
            invert: false,
            dither: false,
        }
    }
}

impl RenderConfig {
    /// Check field ranges.
    pub fn validate(&self) -> GlyphreelResult<()> {
        if self.target_columns == 0 {
            return Err(GlyphreelError::validation("target_columns must be > 0"));
        }
        if self.target_rows == Some(0) {
            return Err(GlyphreelError::validation(
                "target_rows must be > 0 when set",
            ));
        }
        if self.ramp.is_empty() {
            return Err(GlyphreelError::validation("ramp must not be empty"));
        }
        if !(0.0..=1.0).contains(&self.edge_weight) {
            return Err(GlyphreelError::validation(
                "edge_weight must be within [0, 1]",
            ));
        }
        if !self.contrast_exponent.is_finite() || self.contrast_exponent <= 0.0 {
            return Err(GlyphreelError::validation(
                "contrast_exponent must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Resolve the output grid for a `width x height` source frame.
    pub fn grid_for(&self, width: u32, height: u32) -> (u32, u32) {
        let cols = self.target_columns;
        let rows = self.target_rows.unwrap_or_else(|| {
            let derived = cols as f32 * (height as f32 / width as f32) * CHAR_CELL_ASPECT;
            (derived.round() as u32).max(1)
        });
        (cols, rows)
    }
}

/// Render one composited frame onto a character grid.
///
/// Per output cell, in order: nearest (or supersampled) luminance, optional
/// edge blend, gamma, optional inversion, quantization onto the ramp. For
/// fixed input and config the output is bit-for-bit stable across calls.
///
/// Degenerate frames (`width == 0 || height == 0`, or a pixel buffer that
/// does not match the declared size) fail with
/// [`GlyphreelError::InvalidFrame`], which aborts the whole conversion for
/// that source.
pub fn render_frame(frame: &DecodedFrame, config: &RenderConfig) -> GlyphreelResult<GlyphFrame> {
    config.validate()?;
    if frame.width == 0 || frame.height == 0 {
        return Err(GlyphreelError::invalid_frame(format!(
            "cannot render {}x{} frame",
            frame.width, frame.height
        )));
    }
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.rgba8.len() != expected {
        return Err(GlyphreelError::invalid_frame(format!(
            "pixel buffer holds {} bytes, expected {expected}",
            frame.rgba8.len()
        )));
    }

    let (cols, rows) = config.grid_for(frame.width, frame.height);
    let width = frame.width as usize;
    let height = frame.height as usize;

    let mut plane = LumaPlane::from_frame(frame);
    if config.dither {
        plane.dither(config.ramp.len());
    }
    let edges = (config.edge_weight > 0.0).then(|| sampler::edge_magnitude(&plane));

    let x_step = frame.width as f32 / cols as f32;
    let y_step = frame.height as f32 / rows as f32;

    let mut lines = Vec::with_capacity(rows as usize);
    for row in 0..rows {
        let sy = ((row as f32 * y_step) as usize).min(height - 1);
        let mut line = String::with_capacity(cols as usize);
        for col in 0..cols {
            let sx = ((col as f32 * x_step) as usize).min(width - 1);
            let luma = if config.supersample {
                plane.mean3x3(sx, sy)
            } else {
                plane.at(sx, sy)
            };
            let mut score = match &edges {
                Some(edges) => {
                    let edge = edges[sy * width + sx];
                    luma * (1.0 - config.edge_weight) + edge * config.edge_weight
                }
                None => luma,
            };
            score = score.powf(config.contrast_exponent);
            if config.invert {
                score = 1.0 - score;
            }
            line.push(config.ramp.glyph(config.ramp.index_for(score)));
        }
        lines.push(line);
    }

    GlyphFrame::from_rows(lines)
}

#[cfg(test)]
#[path = "../../tests/unit/render/glyphs.rs"]
mod tests;
