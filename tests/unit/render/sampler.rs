use super::*;

#[path = "../support.rs"]
mod support;

use crate::foundation::core::DecodedFrame;

fn frame(width: u32, height: u32, rgba: Vec<u8>) -> DecodedFrame {
    DecodedFrame::new(width, height, rgba, 0).unwrap()
}

#[test]
fn luma_weights_match_rec601() {
    let red = LumaPlane::from_frame(&frame(1, 1, vec![255, 0, 0, 255]));
    assert!((red.at(0, 0) - 0.299).abs() < 1e-4);

    let green = LumaPlane::from_frame(&frame(1, 1, vec![0, 255, 0, 255]));
    assert!((green.at(0, 0) - 0.587).abs() < 1e-4);

    let blue = LumaPlane::from_frame(&frame(1, 1, vec![0, 0, 255, 255]));
    assert!((blue.at(0, 0) - 0.114).abs() < 1e-4);
}

#[test]
fn white_lands_exactly_on_one() {
    let plane = LumaPlane::from_frame(&frame(1, 1, vec![255, 255, 255, 255]));
    assert_eq!(plane.at(0, 0), 1.0);
}

#[test]
fn mean3x3_clamps_at_corners() {
    // 2x2 plane, top-left black and the rest white. The clamped
    // neighborhood of (0, 0) samples the corner four times.
    let rgba = [[0u8; 3], [255; 3], [255; 3], [255; 3]]
        .iter()
        .flat_map(|c| [c[0], c[1], c[2], 255])
        .collect();
    let plane = LumaPlane::from_frame(&frame(2, 2, rgba));
    assert!((plane.mean3x3(0, 0) - 5.0 / 9.0).abs() < 1e-4);
}

#[test]
fn flat_frame_has_no_edges() {
    let plane = LumaPlane::from_frame(&frame(8, 8, support::solid_rgba(8, 8, [128; 3])));
    assert!(edge_magnitude(&plane).iter().all(|&e| e == 0.0));
}

#[test]
fn vertical_step_registers_edges_inside_only() {
    let plane = LumaPlane::from_frame(&frame(8, 8, support::split_rgba(8, 8, [0; 3], [255; 3])));
    let edges = edge_magnitude(&plane);

    // Border texels always stay zero.
    assert_eq!(edges[0], 0.0);
    // The step sits between columns 3 and 4.
    assert!(edges[2 * 8 + 3] > 0.5);
    assert_eq!(edges[2 * 8 + 1], 0.0);
}

#[test]
fn dithering_is_deterministic_and_bounded() {
    let rgba = support::checker_rgba(16, 16, [40; 3], [200; 3]);
    let mut a = LumaPlane::from_frame(&frame(16, 16, rgba.clone()));
    let mut b = LumaPlane::from_frame(&frame(16, 16, rgba));
    a.dither(10);
    b.dither(10);

    for y in 0..16 {
        for x in 0..16 {
            assert_eq!(a.at(x, y), b.at(x, y));
            assert!((0.0..=1.0).contains(&a.at(x, y)));
        }
    }
}

#[test]
fn dithering_preserves_overall_density() {
    let mut plane = LumaPlane::from_frame(&frame(16, 16, support::solid_rgba(16, 16, [128; 3])));
    plane.dither(2);
    assert!((plane.mean() - 0.5).abs() < 0.15);
}
