use crate::foundation::error::{GlyphreelError, GlyphreelResult};

/// An ordered brightness-to-glyph ramp, darkest glyph first.
///
/// Quantized scores map directly onto the ramp: score `0.0` emits the first
/// glyph, score `1.0` the last. [`RenderConfig::invert`] is the only thing
/// that reverses traversal; use it for output shown on a light background.
///
/// [`RenderConfig::invert`]: crate::RenderConfig
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ramp {
    glyphs: Vec<char>,
}

impl Ramp {
    /// Build a ramp from an ordered darkest-to-lightest glyph string.
    pub fn new(glyphs: &str) -> GlyphreelResult<Self> {
        if glyphs.is_empty() {
            return Err(GlyphreelError::validation(
                "ramp must contain at least one glyph",
            ));
        }
        Ok(Self::preset(glyphs))
    }

    /// The ten-step general-purpose ramp.
    pub fn classic() -> Self {
        Self::preset(" .:-=+*#%@")
    }

    /// Nine steps without the low-density dot, for dark high-contrast
    /// sources.
    pub fn dense() -> Self {
        Self::preset(" :-=+*#%@")
    }

    /// Unicode block elements, five steps.
    pub fn blocks() -> Self {
        Self::preset(" ░▒▓█")
    }

    /// A long ramp for large grids where fine tonal steps pay off.
    pub fn detailed() -> Self {
        Self::preset(r#" .`'^",:;Il!i><~+_-?][}{1)(|/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$"#)
    }

    fn preset(glyphs: &str) -> Self {
        Self {
            glyphs: glyphs.chars().collect(),
        }
    }

    /// Number of glyphs in the ramp.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the ramp holds no glyphs. Constructed ramps are never empty.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Quantize a score to a glyph index: `floor(score * (len - 1))` with the
    /// score clamped into `[0, 1]` first.
    pub fn index_for(&self, score: f32) -> usize {
        let last = self.glyphs.len() - 1;
        ((score.clamp(0.0, 1.0) * last as f32).floor() as usize).min(last)
    }

    /// Glyph at `index`, clamped to the ramp.
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index.min(self.glyphs.len() - 1)]
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self::classic()
    }
}

impl TryFrom<String> for Ramp {
    type Error = GlyphreelError;

    fn try_from(value: String) -> GlyphreelResult<Self> {
        Self::new(&value)
    }
}

impl From<Ramp> for String {
    fn from(ramp: Ramp) -> Self {
        ramp.glyphs.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/ramp.rs"]
mod tests;
