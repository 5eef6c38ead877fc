//! Shared fixtures: hand-paletted GIF streams with exact colors and delays,
//! plus raw RGBA buffers for synthetic frames.

#![allow(dead_code)]

use gif::{Encoder, Frame};

/// One solid-fill source frame.
pub struct SolidFrame {
    pub rgb: [u8; 3],
    pub delay_cs: u16,
}

impl SolidFrame {
    pub fn new(rgb: [u8; 3], delay_cs: u16) -> Self {
        Self { rgb, delay_cs }
    }
}

/// Encode `frames` as a GIF where every frame carries its own exact local
/// palette, so decoded pixel values are bit-precise.
pub fn solid_gif(width: u16, height: u16, frames: &[SolidFrame]) -> Vec<u8> {
    let mut bytes = Vec::new();
    {
        let mut encoder = Encoder::new(&mut bytes, width, height, &[]).unwrap();
        for fill in frames {
            // Two palette entries; GIF color tables hold at least two.
            let mut palette = fill.rgb.to_vec();
            palette.extend_from_slice(&[0, 0, 0]);
            let frame = Frame {
                width,
                height,
                palette: Some(palette),
                buffer: vec![0u8; width as usize * height as usize].into(),
                delay: fill.delay_cs,
                ..Frame::default()
            };
            encoder.write_frame(&frame).unwrap();
        }
    }
    bytes
}

/// Row-major straight RGBA bytes for a solid fill.
pub fn solid_rgba(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let mut out = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..width * height {
        out.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
    }
    out
}

/// Left half `left`, right half `right`.
pub fn split_rgba(width: u32, height: u32, left: [u8; 3], right: [u8; 3]) -> Vec<u8> {
    let mut out = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..height {
        for x in 0..width {
            let rgb = if x < width / 2 { left } else { right };
            out.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
    }
    out
}

/// One-pixel checkerboard of `a` and `b`.
pub fn checker_rgba(width: u32, height: u32, a: [u8; 3], b: [u8; 3]) -> Vec<u8> {
    let mut out = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let rgb = if (x + y) % 2 == 0 { a } else { b };
            out.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
    }
    out
}
