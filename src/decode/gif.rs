use std::io::Cursor;

use image::AnimationDecoder as _;
use image::codecs::gif::GifDecoder;

use crate::foundation::{
    core::DecodedFrame,
    error::{GlyphreelError, GlyphreelResult},
};

/// Decode an animated GIF byte stream into fully composited RGBA frames.
///
/// Palette resolution (global and local color tables), LZW decompression,
/// interlacing, and frame disposal are handled inside this layer; callers
/// only ever see canvas-sized straight-RGBA buffers in display order. A
/// container that stores zero frames yields an empty vector, which callers
/// treat as "not animated".
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_gif(bytes: &[u8]) -> GlyphreelResult<Vec<DecodedFrame>> {
    let decoder = GifDecoder::new(Cursor::new(bytes))
        .map_err(|e| GlyphreelError::decode(format!("read gif header: {e}")))?;

    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| GlyphreelError::decode(format!("decode gif frames: {e}")))?;

    let mut out = Vec::with_capacity(frames.len());
    for frame in frames {
        let delay_cs = delay_centis(frame.delay());
        let buf = frame.into_buffer();
        let (width, height) = buf.dimensions();
        out.push(DecodedFrame::new(width, height, buf.into_raw(), delay_cs)?);
    }

    tracing::debug!(frames = out.len(), "decoded gif");
    Ok(out)
}

/// Convert an `image` frame delay back into whole centiseconds, the GIF
/// container's native unit.
fn delay_centis(delay: image::Delay) -> u32 {
    let (numer, denom) = delay.numer_denom_ms();
    if denom == 0 {
        return 0;
    }
    numer / denom / 10
}

#[cfg(test)]
#[path = "../../tests/unit/decode/gif.rs"]
mod tests;
