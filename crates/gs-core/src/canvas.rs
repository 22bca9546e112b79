//! Canvas and grid configuration.
//!
//! The surface is a fixed square divided into a uniform reference grid.
//! `grid_step()` is the spacing between grid lines and also the
//! translation increment for the add/remove row/column commands.

use crate::model::Color;

/// Colors used by the render instruction stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Canvas background.
    pub background: Color,
    /// Reference grid lines.
    pub grid: Color,
    /// Primitive outlines.
    pub primitive: Color,
    /// Per-point markers.
    pub marker: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            grid: Color::GRAY,
            primitive: Color::WHITE,
            marker: Color::RED,
        }
    }
}

impl Palette {
    /// Build a palette from hex color strings.
    /// Returns `None` if any string fails to parse.
    pub fn from_hex(background: &str, grid: &str, primitive: &str, marker: &str) -> Option<Self> {
        Some(Self {
            background: Color::from_hex(background)?,
            grid: Color::from_hex(grid)?,
            primitive: Color::from_hex(primitive)?,
            marker: Color::from_hex(marker)?,
        })
    }
}

/// The canvas dimensions and grid density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSpec {
    /// Side length of the square canvas, in logical units.
    pub size: f32,
    /// Number of grid cells per axis.
    pub grid_cells: u32,
    /// Color contract for emitted draw ops.
    pub palette: Palette,
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            size: 500.0,
            grid_cells: 20,
            palette: Palette::default(),
        }
    }
}

impl CanvasSpec {
    /// Spacing between grid lines; also the row/column shift increment.
    pub fn grid_step(&self) -> f32 {
        self.size / self.grid_cells as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_grid_step_is_25() {
        assert_eq!(CanvasSpec::default().grid_step(), 25.0);
    }

    #[test]
    fn palette_from_hex() {
        let p = Palette::from_hex("#000", "#808080", "#FFFFFF", "#F00").unwrap();
        assert_eq!(p.background, Color::BLACK);
        assert_eq!(p.primitive, Color::WHITE);
        assert_eq!(p.marker, Color::RED);
        assert!(Palette::from_hex("#000", "#808080", "#FFFFFF", "nope").is_none());
    }
}
