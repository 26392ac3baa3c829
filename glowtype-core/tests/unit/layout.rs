use super::*;
use crate::foundation::core::Canvas;

#[test]
fn default_scene_centers_the_letter_row() {
    let layout = resolve_layout(&Scene::default());
    // 4 letters of 4 cells at 20px plus 3 gaps of 7 cells: 740px total,
    // centered on an 800px canvas.
    assert_eq!(layout.origins[0], (30, 250));
}

#[test]
fn letters_are_spaced_by_cells_plus_gap() {
    let scene = Scene::default();
    let layout = resolve_layout(&scene);
    let stride = ((GLYPH_COLS as u32 + scene.spacing_cells) * scene.pixel_size) as i32;
    for pair in layout.origins.windows(2) {
        assert_eq!(pair[1].0 - pair[0].0, stride);
        assert_eq!(pair[1].1, pair[0].1);
    }
}

#[test]
fn oversized_letters_get_negative_origins() {
    let scene = Scene {
        canvas: Canvas {
            width: 100,
            height: 40,
        },
        ..Scene::default()
    };
    let layout = resolve_layout(&scene);
    assert!(layout.origins[0].0 < 0);
    assert!(layout.origins[0].1 < 0);
}
