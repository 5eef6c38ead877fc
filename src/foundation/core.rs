use std::sync::Arc;

use crate::foundation::error::{GlyphreelError, GlyphreelResult};

/// Playback delay in milliseconds substituted for frames that declare none.
pub const DEFAULT_FRAME_DELAY_MS: f64 = 100.0;

/// Vertical squash applied when deriving a character grid from pixel
/// dimensions. Monospace cells are roughly twice as tall as they are wide.
pub const CHAR_CELL_ASPECT: f32 = 0.5;

/// One fully composited animation frame in straight (non-premultiplied)
/// RGBA8.
///
/// The decoder resolves palettes, deltas, and disposal before frames reach
/// this type; `rgba8` is always a complete canvas-sized image.
#[derive(Clone, Debug)]
pub struct DecodedFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major straight RGBA8.
    pub rgba8: Arc<Vec<u8>>,
    /// Declared display duration in hundredths of a second. `0` means the
    /// source declared no delay.
    pub delay_cs: u32,
}

impl DecodedFrame {
    /// Construct a frame, validating the buffer against the declared size.
    pub fn new(width: u32, height: u32, rgba8: Vec<u8>, delay_cs: u32) -> GlyphreelResult<Self> {
        if width == 0 || height == 0 {
            return Err(GlyphreelError::invalid_frame(format!(
                "degenerate dimensions {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize * 4;
        if rgba8.len() != expected {
            return Err(GlyphreelError::invalid_frame(format!(
                "pixel buffer holds {} bytes, expected {expected} for {width}x{height}",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8: Arc::new(rgba8),
            delay_cs,
        })
    }

    /// Display duration in milliseconds, substituting
    /// [`DEFAULT_FRAME_DELAY_MS`] when the source declared no delay.
    pub fn delay_ms(&self) -> f64 {
        if self.delay_cs == 0 {
            DEFAULT_FRAME_DELAY_MS
        } else {
            f64::from(self.delay_cs) * 10.0
        }
    }
}

/// A single rendered text frame: equal-width character rows joined by `\n`.
///
/// All frames of one conversion share the same row and column counts, so
/// frames are directly comparable and diffable. Serializes transparently as
/// a plain string.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct GlyphFrame(String);

impl GlyphFrame {
    /// Join pre-rendered rows into a frame, validating equal character width.
    pub fn from_rows(rows: Vec<String>) -> GlyphreelResult<Self> {
        let Some(first) = rows.first() else {
            return Err(GlyphreelError::invalid_frame(
                "glyph frame must have at least one row",
            ));
        };
        let cols = first.chars().count();
        for row in &rows {
            if row.chars().count() != cols {
                return Err(GlyphreelError::invalid_frame(
                    "glyph frame rows must have equal width",
                ));
            }
        }
        Ok(Self(rows.join("\n")))
    }

    /// The frame text as a newline-joined block.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of character rows.
    pub fn rows(&self) -> usize {
        self.0.lines().count()
    }

    /// Characters per row.
    pub fn cols(&self) -> usize {
        self.0.lines().next().map_or(0, |l| l.chars().count())
    }
}

impl std::fmt::Display for GlyphFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The finished product of one conversion: every rendered frame plus one
/// playback interval.
///
/// A single averaged `frame_delay_ms` is carried instead of per-frame timing;
/// downstream playback consumes one interval, so genuine per-frame variation
/// in the source is intentionally collapsed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConversionResult {
    /// Rendered frames in source display order. Never empty.
    pub frames: Vec<GlyphFrame>,
    /// Mean playback interval in milliseconds.
    #[serde(rename = "frameDelay")]
    pub frame_delay_ms: f64,
}
