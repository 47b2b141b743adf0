//! Frame-indexed animation curves for one image's frame block.

/// Notional frames drawn for every source image.
pub const FRAMES_PER_IMAGE: u32 = 60;
/// Length of the fade-in and fade-out windows.
pub const TRANSITION_FRAMES: u32 = 15;
/// Horizontal slide distance per remaining fade-in frame, in canvas units.
pub const SLIDE_STEP: f64 = 50.0;

/// Image opacity at intra-block frame `f`: ramps in over the first window, out over the last.
pub fn opacity_at(f: u32) -> f32 {
    let window = TRANSITION_FRAMES as f32;
    if f < TRANSITION_FRAMES {
        f as f32 / window
    } else if f > FRAMES_PER_IMAGE - TRANSITION_FRAMES {
        (FRAMES_PER_IMAGE.saturating_sub(f)) as f32 / window
    } else {
        1.0
    }
}

/// `0.8 + 0.1 * sin(pi * f / 60)`: one swell per image block.
pub fn breathing_scale(f: u32) -> f64 {
    let t = f64::from(f) / f64::from(FRAMES_PER_IMAGE);
    0.8 + 0.1 * (std::f64::consts::PI * t).sin()
}

/// Rightward slide offset; `SLIDE_STEP * 15` at frame 0, zero from the end of the fade-in on.
pub fn slide_offset(f: u32) -> f64 {
    f64::from(TRANSITION_FRAMES.saturating_sub(f)) * SLIDE_STEP
}

/// Hues (degrees) of the two dynamic-theme gradient stops at global frame `k`.
pub fn dynamic_hues(k: u64) -> (f64, f64) {
    let start = (k.wrapping_mul(2) % 360) as f64;
    let end = ((k.wrapping_mul(2) + 180) % 360) as f64;
    (start, end)
}

/// `round(100 * done / total)`, saturating at 100; zero when `total` is zero.
pub fn progress_percent(done: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let done = done.min(total);
    ((done as f64 * 100.0 / total as f64).round()) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/video/timing.rs"]
mod tests;
