//! One-shot rendering conveniences on top of [`FrameCompositor`].

use crate::field::ColorField;
use crate::foundation::core::Clock;
use crate::foundation::error::GlowtypeResult;
use crate::render::compositor::FrameCompositor;
use crate::scene::Scene;

/// Render a single frame of `scene` at `clock`.
///
/// This is the primary "one-shot" API for producing pixels. Callers that
/// render repeatedly should hold a [`FrameCompositor`] instead and reuse its
/// field allocation.
pub fn render_frame(scene: &Scene, clock: Clock) -> GlowtypeResult<ColorField> {
    let mut compositor = FrameCompositor::new(scene)?;
    compositor.render(clock);
    Ok(compositor.into_field())
}

/// Render a contiguous range of frame indices, deriving each frame's clock
/// from the scene's `clock_step`.
#[tracing::instrument(skip(scene))]
pub fn render_frames(
    scene: &Scene,
    frames: std::ops::Range<u64>,
) -> GlowtypeResult<Vec<ColorField>> {
    let mut compositor = FrameCompositor::new(scene)?;
    let mut out = Vec::with_capacity(frames.end.saturating_sub(frames.start) as usize);
    for frame in frames {
        compositor.render(Clock::from_frame(frame, scene.clock_step));
        out.push(compositor.field().clone());
    }
    Ok(out)
}
