use super::*;

#[test]
fn canvas_contains_is_half_open() {
    let canvas = Canvas {
        width: 8,
        height: 6,
    };
    assert!(canvas.contains(0, 0));
    assert!(canvas.contains(7, 5));
    assert!(!canvas.contains(8, 5));
    assert!(!canvas.contains(7, 6));
    assert!(!canvas.contains(-1, 0));
    assert!(!canvas.contains(0, -1));
}

#[test]
fn clock_from_frame_matches_repeated_advance() {
    let step = 0.02;
    let mut clock = Clock::ZERO;
    for _ in 0..5 {
        clock = clock.advanced_by(step);
    }
    // Repeated f32 addition drifts; from_frame multiplies instead.
    assert!((clock.0 - Clock::from_frame(5, step).0).abs() < 1e-6);
}

#[test]
fn rgb_operators_are_componentwise() {
    let a = Rgb::new(0.1, 0.2, 0.3);
    let b = Rgb::new(0.4, 0.5, 0.6);
    assert_eq!(a + b, Rgb::new(0.1 + 0.4, 0.2 + 0.5, 0.3 + 0.6));
    assert_eq!(a * 2.0, Rgb::new(0.2, 0.4, 0.6));

    let mut c = a;
    c += b;
    assert_eq!(c, a + b);
}

#[test]
fn luminance_of_gray_is_the_gray_value() {
    let v = 0.25;
    assert!((Rgb::splat(v).luminance() - v).abs() < 1e-6);
}

#[test]
fn display_conversions_clamp() {
    assert_eq!(Rgb::new(2.0, -1.0, 1.0).to_rgb8(), [255, 0, 255]);
    assert_eq!(Rgb::new(1.0, 0.0, 0.0).to_0rgb_u32(), 0x00FF_0000);
    assert_eq!(Rgb::new(0.0, 1.0, 0.0).to_0rgb_u32(), 0x0000_FF00);
    assert_eq!(Rgb::new(0.0, 0.0, 1.0).to_0rgb_u32(), 0x0000_00FF);
}
