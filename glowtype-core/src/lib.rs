//! Glowtype is a procedural pixel-glyph animation engine.
//!
//! Glowtype turns a static [`Scene`] (four bitmap letters on a fixed canvas)
//! and an animation [`Clock`] into pixels: every frame, each pixel of the
//! [`ColorField`] is computed by a fixed-order chain of pure shading passes
//! (background gradient, drop shadow, radial bloom, animated color mix,
//! background glow, saturation boost, vignette).
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `Scene -> Layout` (letter origins, computed once)
//! 2. **Compose**: `Clock -> ColorField` per frame via [`FrameCompositor`]
//! 3. **Read back**: `ColorField -> FrameRgb8` / `0x00RRGGBB` words for
//!    whatever presentation surface the host owns
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: every pass is a pure function of
//!   coordinates, clock, and scene; identical inputs give bit-identical
//!   fields, with or without parallelism.
//! - **No IO in the renderer**: the engine never blocks; the presentation
//!   loop owns the window, the clock, and any file output.
//! - **Clamp late**: colors may exceed `[0, 1]` mid-pipeline and are only
//!   clamped by the display conversions.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod field;
mod foundation;
mod glyph;
mod layout;
mod render;
mod scene;

/// Pure per-pixel shading effects.
pub mod effects;

pub use field::{ColorField, FrameRgb8};
pub use foundation::core::{Canvas, Clock, Rgb};
pub use foundation::error::{GlowtypeError, GlowtypeResult};
pub use glyph::{GLYPH_COLS, GLYPH_ROWS, Glyph, Letter};
pub use layout::{Layout, resolve_layout};
pub use render::compositor::{CompositorOpts, FrameCompositor};
pub use render::pipeline::{render_frame, render_frames};
pub use scene::Scene;
