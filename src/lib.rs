//! Glyphreel converts animated GIFs into monospace text-art frame
//! sequences.
//!
//! The pipeline is three staged, pure transforms over in-memory buffers:
//!
//! 1. **Decode**: GIF bytes -> composited RGBA frames ([`decode_gif`])
//! 2. **Render**: frame x [`RenderConfig`] -> [`GlyphFrame`]
//!    ([`render_frame`])
//! 3. **Cache**: [`AnimationCache::get_or_convert`] memoizes finished
//!    [`ConversionResult`]s per source key with bounded LRU eviction
//!
//! [`convert_gif`] wraps steps (1) and (2) for a whole byte stream, adding
//! frame-count capping, first-frame auto analysis, and delay averaging.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: fixed bytes plus fixed config produce
//!   bit-identical frames on every call.
//! - **Failures never escape the cache boundary**: a conversion either
//!   produces a complete result or `None`; presentation code only ever
//!   observes presence or absence. Decorative content must never break
//!   page rendering.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cache;
mod decode;
mod foundation;
mod pipeline;
mod render;

pub use cache::fs::GifStore;
pub use cache::store::{AnimationCache, DEFAULT_CACHE_CAPACITY};
pub use decode::gif::decode_gif;
pub use foundation::core::{
    CHAR_CELL_ASPECT, ConversionResult, DEFAULT_FRAME_DELAY_MS, DecodedFrame, GlyphFrame,
};
pub use foundation::error::{GlyphreelError, GlyphreelResult};
pub use pipeline::convert::{ConvertOptions, DEFAULT_MAX_FRAMES, convert_gif};
pub use render::analyze::{background_is_light, mean_luminance, prefers_dense_ramp};
pub use render::glyphs::{RenderConfig, render_frame};
pub use render::ramp::Ramp;
