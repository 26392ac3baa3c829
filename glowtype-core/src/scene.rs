//! The scene model: fixed-at-startup configuration for the display.

use std::path::Path;

use crate::foundation::core::{Canvas, Rgb};
use crate::foundation::error::{GlowtypeError, GlowtypeResult};
use crate::glyph::Letter;

/// A complete scene description.
///
/// A scene is a pure data model fixed for the process lifetime: canvas
/// dimensions, pixel-block geometry, and per-letter base colors. It can be
/// built in code ([`Scene::default`] is the stock 800×600 display) or
/// deserialized from JSON via Serde.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Side length in pixels of the square block one glyph cell expands to.
    #[serde(default = "default_pixel_size")]
    pub pixel_size: u32,
    /// Horizontal gap between letters, in glyph cells.
    #[serde(default = "default_spacing_cells")]
    pub spacing_cells: u32,
    /// Drop shadow offset in pixels, applied on both axes.
    #[serde(default = "default_shadow_offset")]
    pub shadow_offset: i32,
    /// Clock increment per frame.
    #[serde(default = "default_clock_step")]
    pub clock_step: f32,
    /// Base colors for the four letters, in display order.
    #[serde(default = "default_letter_colors")]
    pub letter_colors: [Rgb; 4],
}

fn default_pixel_size() -> u32 {
    20
}

fn default_spacing_cells() -> u32 {
    7
}

fn default_shadow_offset() -> i32 {
    4
}

fn default_clock_step() -> f32 {
    0.02
}

fn default_letter_colors() -> [Rgb; 4] {
    [
        Rgb::new(1.0, 0.2, 0.2),
        Rgb::new(0.2, 1.0, 0.2),
        Rgb::new(0.2, 0.2, 1.0),
        Rgb::new(1.0, 1.0, 0.2),
    ]
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 800,
                height: 600,
            },
            pixel_size: default_pixel_size(),
            spacing_cells: default_spacing_cells(),
            shadow_offset: default_shadow_offset(),
            clock_step: default_clock_step(),
            letter_colors: default_letter_colors(),
        }
    }
}

impl Scene {
    /// Validate scene invariants.
    pub fn validate(&self) -> GlowtypeResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(GlowtypeError::validation(
                "scene canvas dimensions must be non-zero",
            ));
        }
        if self.pixel_size == 0 {
            return Err(GlowtypeError::validation("scene pixel_size must be > 0"));
        }
        if !self.clock_step.is_finite() || self.clock_step <= 0.0 {
            return Err(GlowtypeError::validation(
                "scene clock_step must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// The four letters with their base colors, in display order.
    pub fn letters(&self) -> [(Letter, Rgb); 4] {
        [
            (Letter::ALL[0], self.letter_colors[0]),
            (Letter::ALL[1], self.letter_colors[1]),
            (Letter::ALL[2], self.letter_colors[2]),
            (Letter::ALL[3], self.letter_colors[3]),
        ]
    }

    /// Parse and validate a scene from JSON.
    pub fn from_reader(reader: impl std::io::Read) -> GlowtypeResult<Scene> {
        let scene: Scene = serde_json::from_reader(reader)
            .map_err(|e| GlowtypeError::serde(format!("scene json parse failed: {e}")))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Load a scene from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> GlowtypeResult<Scene> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            GlowtypeError::validation(format!("open scene '{}': {e}", path.display()))
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}
