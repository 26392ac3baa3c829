use super::*;
use crate::foundation::core::Rgb;

fn scene() -> Scene {
    Scene::default()
}

/// What a pixel untouched by shadow or glyph stamping must contain:
/// background, then glow, then post-process.
fn expected_ambient(s: &Scene, x: i32, y: i32, clock: Clock) -> Rgb {
    let ambient = effects::background(x, clock) + Rgb::splat(effects::glow(x, y, clock));
    effects::post_process(ambient, x, y, s.canvas)
}

/// What a lit glyph pixel must contain: the full stamp chain, then glow,
/// then post-process; any earlier shadow write is replaced outright.
fn expected_glyph(s: &Scene, base: Rgb, x: i32, y: i32, cx: i32, cy: i32, clock: Clock) -> Rgb {
    let dist = effects::distance_to_center(x, y, cx, cy);
    let gradient = effects::gradient_falloff(dist, s.pixel_size);
    let animated = effects::animate_color(base, x, y, clock);
    let shaded = effects::apply_bloom(x, y, cx, cy, animated * gradient, 2.0);
    let glowed = shaded + Rgb::splat(effects::glow(x, y, clock));
    effects::post_process(glowed, x, y, s.canvas)
}

#[test]
fn render_is_deterministic_for_a_fixed_clock() {
    let s = scene();
    let clock = Clock(1.23);

    let mut a = FrameCompositor::new(&s).unwrap();
    let mut b = FrameCompositor::new(&s).unwrap();
    assert_eq!(a.render(clock).as_slice(), b.render(clock).as_slice());

    // Re-rendering the same clock over a dirty field also matches: the
    // background fill overwrites every pixel before stamping.
    let first = a.render(clock).clone();
    let second = a.render(clock);
    assert_eq!(first.as_slice(), second.as_slice());
}

#[test]
fn unlit_cells_receive_only_ambient_passes() {
    let s = scene();
    let clock = Clock(0.0);
    let mut compositor = FrameCompositor::new(&s).unwrap();
    let field = compositor.render(clock);

    // (35, 255) sits in the hollow top-left cell of the first letter, out of
    // reach of every shadow source.
    assert_eq!(field.pixel(35, 255), expected_ambient(&s, 35, 255, clock));
}

#[test]
fn shadow_lands_beside_the_letter() {
    let s = scene();
    let clock = Clock(0.4);
    let mut compositor = FrameCompositor::new(&s).unwrap();
    let field = compositor.render(clock);

    // (34, 351) is below the first letter's bottom-left block: shadow from
    // source (30, 347), never glyph-stamped.
    let shadowed = effects::shadow_blend(effects::background(34, clock));
    let glowed = shadowed + Rgb::splat(effects::glow(34, 351, clock));
    let expected = effects::post_process(glowed, 34, 351, s.canvas);
    assert_eq!(field.pixel(34, 351), expected);
}

#[test]
fn glyph_stamp_replaces_same_letter_shadow() {
    let s = scene();
    let clock = Clock(2.0);
    let base = s.letter_colors[0];
    let mut compositor = FrameCompositor::new(&s).unwrap();
    let field = compositor.render(clock);

    // (54, 254) receives a shadow from source (50, 250) and is itself a lit
    // pixel of the same letter; the glyph write must win.
    let expected = expected_glyph(&s, base, 54, 254, 60, 260, clock);
    assert_eq!(field.pixel(54, 254), expected);

    // A lit pixel with no incoming shadow matches the same chain.
    let expected = expected_glyph(&s, base, 50, 250, 60, 260, clock);
    assert_eq!(field.pixel(50, 250), expected);
}

#[test]
fn out_of_bounds_shadow_targets_are_skipped() {
    let s = Scene {
        shadow_offset: 1_000_000,
        ..scene()
    };
    let clock = Clock(0.4);
    let mut compositor = FrameCompositor::new(&s).unwrap();
    let field = compositor.render(clock);

    // Every shadow target is far outside the canvas; the pixel that caught a
    // shadow under the default offset now keeps its ambient value.
    assert_eq!(field.pixel(34, 351), expected_ambient(&s, 34, 351, clock));
}

#[test]
fn invalid_scene_is_rejected_at_construction() {
    let s = Scene {
        pixel_size: 0,
        ..scene()
    };
    assert!(FrameCompositor::new(&s).is_err());
}
