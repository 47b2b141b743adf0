use super::*;

#[test]
fn opacity_ramps_in_and_out() {
    assert_eq!(opacity_at(0), 0.0);
    assert!((opacity_at(5) - 1.0 / 3.0).abs() < 1e-6);
    assert_eq!(opacity_at(15), 1.0);
    assert_eq!(opacity_at(30), 1.0);
    assert_eq!(opacity_at(45), 1.0);
    assert!((opacity_at(46) - 14.0 / 15.0).abs() < 1e-6);
    assert!((opacity_at(59) - 1.0 / 15.0).abs() < 1e-6);
    for f in 0..FRAMES_PER_IMAGE {
        let o = opacity_at(f);
        assert!((0.0..=1.0).contains(&o), "frame {f}: {o}");
    }
}

#[test]
fn breathing_scale_peaks_mid_block() {
    assert!((breathing_scale(0) - 0.8).abs() < 1e-12);
    assert!((breathing_scale(30) - 0.9).abs() < 1e-12);
    assert!(breathing_scale(15) > breathing_scale(0));
    assert!(breathing_scale(59) < breathing_scale(45));
}

#[test]
fn slide_offset_decays_to_zero() {
    assert_eq!(slide_offset(0), 750.0);
    assert_eq!(slide_offset(14), 50.0);
    assert_eq!(slide_offset(15), 0.0);
    assert_eq!(slide_offset(59), 0.0);
    for f in 1..=TRANSITION_FRAMES {
        assert!(slide_offset(f) < slide_offset(f - 1));
    }
}

#[test]
fn dynamic_hues_follow_global_frame() {
    assert_eq!(dynamic_hues(0), (0.0, 180.0));
    assert_eq!(dynamic_hues(60), (120.0, 300.0));
    assert_eq!(dynamic_hues(100), (200.0, 20.0));
    assert_eq!(dynamic_hues(180), (0.0, 180.0));
}

#[test]
fn progress_rounds_and_saturates() {
    assert_eq!(progress_percent(0, 180), 0);
    assert_eq!(progress_percent(1, 180), 1);
    assert_eq!(progress_percent(90, 180), 50);
    assert_eq!(progress_percent(180, 180), 100);
    assert_eq!(progress_percent(500, 180), 100);
    assert_eq!(progress_percent(3, 0), 0);
}
