use super::*;

#[path = "../support.rs"]
mod support;

use crate::foundation::core::DecodedFrame;

fn frame(width: u32, height: u32, rgba: Vec<u8>) -> DecodedFrame {
    DecodedFrame::new(width, height, rgba, 0).unwrap()
}

#[test]
fn mean_luminance_of_mid_gray() {
    let gray = frame(8, 8, support::solid_rgba(8, 8, [128; 3]));
    assert!((mean_luminance(&gray) - 128.0 / 255.0).abs() < 1e-3);
}

#[test]
fn dark_content_prefers_dense_ramp() {
    assert!(prefers_dense_ramp(&frame(
        8,
        8,
        support::solid_rgba(8, 8, [0; 3])
    )));
    assert!(!prefers_dense_ramp(&frame(
        8,
        8,
        support::solid_rgba(8, 8, [255; 3])
    )));
}

#[test]
fn light_border_flags_light_background() {
    // White ring, black 10x10 center.
    let mut rgba = support::solid_rgba(20, 20, [255; 3]);
    for y in 5..15 {
        for x in 5..15 {
            let idx = (y * 20 + x) * 4;
            rgba[idx] = 0;
            rgba[idx + 1] = 0;
            rgba[idx + 2] = 0;
        }
    }
    assert!(background_is_light(&frame(20, 20, rgba)));

    assert!(!background_is_light(&frame(
        20,
        20,
        support::solid_rgba(20, 20, [0; 3])
    )));
}

#[test]
fn tiny_frames_default_to_dark_background() {
    // Too small to carve a border band out of.
    assert!(!background_is_light(&frame(
        4,
        4,
        support::solid_rgba(4, 4, [255; 3])
    )));
}
