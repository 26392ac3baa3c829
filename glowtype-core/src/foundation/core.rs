use std::ops::{Add, AddAssign, Mul};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Return `true` when `(x, y)` lies inside `[0, width) × [0, height)`.
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height
    }

    /// Total pixel count.
    pub fn area(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Global animation time scalar, advanced once per frame by the caller.
///
/// The engine never advances the clock itself; the presentation loop owns it
/// and passes it by value into every render call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Clock(pub f32);

impl Clock {
    /// Time zero.
    pub const ZERO: Clock = Clock(0.0);

    /// Return a clock advanced by `step`.
    pub fn advanced_by(self, step: f32) -> Clock {
        Clock(self.0 + step)
    }

    /// Clock value for an absolute frame index under a fixed per-frame step.
    pub fn from_frame(frame: u64, step: f32) -> Clock {
        Clock(frame as f32 * step)
    }
}

/// An RGB triple of `f32` components, nominally in `[0, 1]`.
///
/// Values are deliberately not clamped between effects: bloom and glow may
/// push channels past 1.0 mid-pipeline, and only the display conversions
/// ([`Rgb::to_rgb8`], [`Rgb::to_0rgb_u32`]) clamp into displayable range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Construct from components.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Construct a gray value with all channels equal to `v`.
    pub const fn splat(v: f32) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Rec. 601 luma of this color.
    pub fn luminance(self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Convert to packed RGB8, clamping each channel into `[0, 1]` first.
    pub fn to_rgb8(self) -> [u8; 3] {
        [to_u8(self.r), to_u8(self.g), to_u8(self.b)]
    }

    /// Convert to a `0x00RRGGBB` word, clamping each channel into `[0, 1]` first.
    pub fn to_0rgb_u32(self) -> u32 {
        let [r, g, b] = self.to_rgb8();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Add for Rgb {
    type Output = Rgb;

    fn add(self, rhs: Rgb) -> Rgb {
        Rgb::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Rgb {
    fn add_assign(&mut self, rhs: Rgb) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for Rgb {
    type Output = Rgb;

    fn mul(self, rhs: f32) -> Rgb {
        Rgb::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
