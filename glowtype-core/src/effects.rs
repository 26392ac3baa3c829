//! Pure per-pixel shading effects.
//!
//! Every function here is a total, deterministic function of its explicit
//! arguments: a pixel coordinate, the animation [`Clock`], and sometimes a
//! base color. None of them clamp their output; colors are allowed to leave
//! `[0, 1]` mid-pipeline and are only clamped at the display boundary.

use crate::foundation::core::{Canvas, Clock, Rgb};

/// Fraction of black blended into a pixel under a drop shadow.
pub const SHADOW_STRENGTH: f32 = 0.7;

/// Fraction of the rainbow term mixed into a letter's base color.
const RAINBOW_MIX: f32 = 0.3;

/// Lower bound of the radial gradient inside a glyph block.
const GRADIENT_FLOOR: f32 = 0.7;

/// Per-channel amplitude of the background glow oscillation.
const GLOW_AMPLITUDE: f32 = 0.02;

/// Saturation multiplier applied in the post-process pass.
const SATURATION: f32 = 1.2;

/// Background color for column `x` at time `clock`.
///
/// A dark blue base with a time- and x-varying sinusoidal perturbation on
/// the blue channel only:
/// `(0.05, 0.05, 0.1) + (0, 0, 0.05)·sin(0.01·x + t)`.
pub fn background(x: i32, clock: Clock) -> Rgb {
    let wave = (0.01 * x as f32 + clock.0).sin();
    Rgb::new(0.05, 0.05, 0.1 + 0.05 * wave)
}

/// Blend a drop shadow into `current`: `current·(1-s) + black·s` with
/// `s = `[`SHADOW_STRENGTH`].
pub fn shadow_blend(current: Rgb) -> Rgb {
    current * (1.0 - SHADOW_STRENGTH) + Rgb::BLACK * SHADOW_STRENGTH
}

/// Euclidean distance from `(x, y)` to `(cx, cy)`.
pub fn distance_to_center(x: i32, y: i32, cx: i32, cy: i32) -> f32 {
    let dx = (x - cx) as f32;
    let dy = (y - cy) as f32;
    (dx * dx + dy * dy).sqrt()
}

/// Radial falloff inside a glyph block, floored so corners are never darker
/// than 70% of the block center: `max(0.7, 1 - dist/(pixel_size·0.7))`.
pub fn gradient_falloff(dist: f32, pixel_size: u32) -> f32 {
    (1.0 - dist / (pixel_size as f32 * 0.7)).max(GRADIENT_FLOOR)
}

/// Animate a letter's base color at pixel `(x, y)` and time `clock`.
///
/// Mixes a coordinate-phased rainbow into the base color, then modulates the
/// result by a global pulse. Pure; bit-identical for identical inputs.
pub fn animate_color(base: Rgb, x: i32, y: i32, clock: Clock) -> Rgb {
    let t = clock.0;
    let xf = x as f32;
    let yf = y as f32;

    let pulse = 0.2 * (t * 2.0 + 0.1 * xf + 0.1 * yf).sin() + 1.0;
    let rainbow = Rgb::new(
        0.5 * (t + 0.1 * xf).sin() + 0.5,
        0.5 * (t + 0.1 * yf + 2.0).sin() + 0.5,
        0.5 * (t + 0.1 * (xf + yf) + 4.0).sin() + 0.5,
    );

    (base * (1.0 - RAINBOW_MIX) + rainbow * RAINBOW_MIX) * pulse
}

/// Brighten `color` toward the glyph-block center at `(cx, cy)`.
///
/// `bloom = exp(-dist·0.01·intensity)`; the boost is monotonically
/// non-increasing in the distance from the center.
pub fn apply_bloom(x: i32, y: i32, cx: i32, cy: i32, color: Rgb, intensity: f32) -> Rgb {
    let dist = distance_to_center(x, y, cx, cy);
    let bloom = (-dist * 0.01 * intensity).exp();
    color * (1.0 + bloom * 0.5)
}

/// Additive background glow term for pixel `(x, y)` at time `clock`:
/// `0.02·sin(0.1x + 0.1y + 2t) + 0.02`, applied to all three channels.
pub fn glow(x: i32, y: i32, clock: Clock) -> f32 {
    GLOW_AMPLITUDE * (0.1 * x as f32 + 0.1 * y as f32 + clock.0 * 2.0).sin() + GLOW_AMPLITUDE
}

/// Push `color` away from its luma by the fixed saturation factor.
///
/// Gray inputs (all channels equal) are fixed points.
pub fn saturate(color: Rgb) -> Rgb {
    let lum = color.luminance();
    Rgb::new(
        lum + SATURATION * (color.r - lum),
        lum + SATURATION * (color.g - lum),
        lum + SATURATION * (color.b - lum),
    )
}

/// Radial darkening factor toward the canvas edges.
///
/// `dx = (x - W/2)/W`, `dy = (y - H/2)/H`, factor `1 - dist·0.5`.
pub fn vignette(x: i32, y: i32, canvas: Canvas) -> f32 {
    let dx = (x as f32 - canvas.width as f32 / 2.0) / canvas.width as f32;
    let dy = (y as f32 - canvas.height as f32 / 2.0) / canvas.height as f32;
    1.0 - (dx * dx + dy * dy).sqrt() * 0.5
}

/// The full post-process chain for one pixel: saturation boost, then the
/// vignette factor for its coordinate.
pub fn post_process(color: Rgb, x: i32, y: i32, canvas: Canvas) -> Rgb {
    saturate(color) * vignette(x, y, canvas)
}

#[cfg(test)]
#[path = "../tests/unit/effects.rs"]
mod tests;
