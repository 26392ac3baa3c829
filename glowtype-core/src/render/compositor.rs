//! The frame compositor: fixed-order passes over the color field.

use rayon::prelude::*;

use crate::effects;
use crate::field::ColorField;
use crate::foundation::core::{Clock, Rgb};
use crate::foundation::error::GlowtypeResult;
use crate::glyph::Letter;
use crate::layout::{Layout, resolve_layout};
use crate::scene::Scene;

/// Bloom intensity used for glyph blocks.
const BLOOM_INTENSITY: f32 = 2.0;

/// Threading controls for the compositor.
#[derive(Clone, Copy, Debug)]
pub struct CompositorOpts {
    /// Run full-canvas passes with per-row data parallelism when `true`.
    ///
    /// Pixel results are independent within a pass, so both modes produce
    /// bit-identical fields.
    pub parallel: bool,
}

impl Default for CompositorOpts {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Renders complete frames into an owned [`ColorField`].
///
/// Letter origins are resolved once at construction. Each [`render`] call
/// executes the pass sequence in fixed order (background fill, per-letter
/// shadow-then-glyph stamping, background glow, post-process) with a full
/// barrier between passes: later passes read colors written by earlier ones.
///
/// [`render`]: FrameCompositor::render
#[derive(Debug)]
pub struct FrameCompositor {
    scene: Scene,
    layout: Layout,
    opts: CompositorOpts,
    field: ColorField,
}

impl FrameCompositor {
    /// Build a compositor for `scene` with default options.
    pub fn new(scene: &Scene) -> GlowtypeResult<Self> {
        Self::with_opts(scene, CompositorOpts::default())
    }

    /// Build a compositor for `scene` with explicit options.
    pub fn with_opts(scene: &Scene, opts: CompositorOpts) -> GlowtypeResult<Self> {
        scene.validate()?;
        Ok(Self {
            scene: scene.clone(),
            layout: resolve_layout(scene),
            opts,
            field: ColorField::new(scene.canvas),
        })
    }

    /// The scene this compositor renders.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Resolved letter origins.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The most recently rendered field.
    pub fn field(&self) -> &ColorField {
        &self.field
    }

    /// Consume the compositor and return the field.
    pub fn into_field(self) -> ColorField {
        self.field
    }

    /// Render one complete frame at `clock` and return the finished field.
    #[tracing::instrument(skip(self))]
    pub fn render(&mut self, clock: Clock) -> &ColorField {
        self.fill_background(clock);
        for (idx, (letter, base)) in self.scene.letters().into_iter().enumerate() {
            let origin = self.layout.origins[idx];
            self.stamp_shadow(letter, origin);
            self.stamp_glyph(letter, origin, base, clock);
        }
        self.add_glow(clock);
        self.post_process();
        &self.field
    }

    /// Overwrite every pixel with the background gradient. Runs first; no
    /// stale data from the previous frame survives this pass.
    fn fill_background(&mut self, clock: Clock) {
        let width = self.field.width() as usize;
        let parallel = self.opts.parallel;
        for_each_row(self.field.data_mut(), width, parallel, |_y, row| {
            for (x, px) in row.iter_mut().enumerate() {
                *px = effects::background(x as i32, clock);
            }
        });
    }

    /// Blend the drop shadow of every lit cell of `letter` into the field.
    ///
    /// Must complete before the letter's own glyph stamping so shadows never
    /// paint over finalized glyph pixels of the same letter.
    fn stamp_shadow(&mut self, letter: Letter, origin: (i32, i32)) {
        let ps = self.scene.pixel_size as i32;
        let off = self.scene.shadow_offset;

        for (row, col) in letter.glyph().lit_cells() {
            let block_x = origin.0 + col as i32 * ps;
            let block_y = origin.1 + row as i32 * ps;
            for py in 0..ps {
                for px in 0..ps {
                    let x = block_x + px;
                    let y = block_y + py;
                    if !self.field.contains(x, y) {
                        continue;
                    }
                    let sx = x + off;
                    let sy = y + off;
                    if let Some(current) = self.field.get(sx, sy) {
                        self.field
                            .set_pixel(sx as u32, sy as u32, effects::shadow_blend(current));
                    }
                }
            }
        }
    }

    /// Stamp the shaded pixels of every lit cell of `letter`, replacing
    /// whatever shadow or background value was there.
    fn stamp_glyph(&mut self, letter: Letter, origin: (i32, i32), base: Rgb, clock: Clock) {
        let ps = self.scene.pixel_size as i32;

        for (row, col) in letter.glyph().lit_cells() {
            let block_x = origin.0 + col as i32 * ps;
            let block_y = origin.1 + row as i32 * ps;
            // Integer-truncated half; for even pixel sizes the center sits
            // slightly toward the top-left of the block.
            let cx = block_x + ps / 2;
            let cy = block_y + ps / 2;

            for py in 0..ps {
                for px in 0..ps {
                    let x = block_x + px;
                    let y = block_y + py;
                    if !self.field.contains(x, y) {
                        continue;
                    }
                    let dist = effects::distance_to_center(x, y, cx, cy);
                    let gradient = effects::gradient_falloff(dist, self.scene.pixel_size);
                    let animated = effects::animate_color(base, x, y, clock);
                    let shaded =
                        effects::apply_bloom(x, y, cx, cy, animated * gradient, BLOOM_INTENSITY);
                    self.field.set_pixel(x as u32, y as u32, shaded);
                }
            }
        }
    }

    /// Add the background glow term to every pixel. Runs after all letters.
    fn add_glow(&mut self, clock: Clock) {
        let width = self.field.width() as usize;
        let parallel = self.opts.parallel;
        for_each_row(self.field.data_mut(), width, parallel, |y, row| {
            for (x, px) in row.iter_mut().enumerate() {
                *px += Rgb::splat(effects::glow(x as i32, y as i32, clock));
            }
        });
    }

    /// Saturation boost then vignette, per pixel. Runs last; the result is
    /// still unclamped and is converted for display by the readback calls.
    fn post_process(&mut self) {
        let width = self.field.width() as usize;
        let canvas = self.field.canvas();
        let parallel = self.opts.parallel;
        for_each_row(self.field.data_mut(), width, parallel, |y, row| {
            for (x, px) in row.iter_mut().enumerate() {
                *px = effects::post_process(*px, x as i32, y as i32, canvas);
            }
        });
    }
}

/// Apply `op` to every pixel row, optionally fanning rows out over the rayon
/// pool. Rows are disjoint, so both modes write identical results; each pass
/// call is a full barrier either way.
fn for_each_row<F>(data: &mut [Rgb], width: usize, parallel: bool, op: F)
where
    F: Fn(usize, &mut [Rgb]) + Send + Sync,
{
    if parallel {
        data.par_chunks_exact_mut(width)
            .enumerate()
            .for_each(|(y, row)| op(y, row));
    } else {
        data.chunks_exact_mut(width)
            .enumerate()
            .for_each(|(y, row)| op(y, row));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
