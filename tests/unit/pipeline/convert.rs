use super::*;

#[path = "../support.rs"]
mod support;

fn gray_frame(level: u8) -> DecodedFrame {
    // Large enough for the border-band analysis behind auto_invert.
    DecodedFrame::new(20, 20, support::solid_rgba(20, 20, [level; 3]), 10).unwrap()
}

#[test]
fn frame_selection_samples_evenly_over_the_cap() {
    let frames: Vec<DecodedFrame> = (0..9).map(|i| gray_frame(i * 20)).collect();

    let all = select_frames(&frames, 9);
    assert_eq!(all.len(), 9);

    let sampled = select_frames(&frames, 3);
    assert_eq!(sampled.len(), 3);
    // Step of 3 picks frames 0, 3, and 6.
    assert_eq!(sampled[0].rgba8[0], 0);
    assert_eq!(sampled[1].rgba8[0], 60);
    assert_eq!(sampled[2].rgba8[0], 120);
}

#[test]
fn frame_cap_below_one_still_converts_one_frame() {
    let frames: Vec<DecodedFrame> = (0..4).map(|i| gray_frame(i * 60)).collect();
    assert_eq!(select_frames(&frames, 0).len(), 1);
}

#[test]
fn auto_style_switches_to_dense_for_dark_sources() {
    let options = ConvertOptions {
        auto_style: true,
        ..ConvertOptions::default()
    };

    let dark = resolve_config(&options, &gray_frame(40));
    assert_eq!(dark.ramp, Ramp::dense());

    let light = resolve_config(&options, &gray_frame(220));
    assert_eq!(light.ramp, options.render.ramp);
}

#[test]
fn auto_invert_flips_for_light_backgrounds() {
    let options = ConvertOptions {
        auto_invert: true,
        ..ConvertOptions::default()
    };

    assert!(resolve_config(&options, &gray_frame(255)).invert);
    assert!(!resolve_config(&options, &gray_frame(0)).invert);
}

#[test]
fn disabled_auto_options_leave_config_untouched() {
    let options = ConvertOptions::default();
    let config = resolve_config(&options, &gray_frame(255));
    assert_eq!(config, options.render);
}
