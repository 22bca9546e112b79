//! The drawing session: an ordered point sequence plus the active
//! primitive kind.
//!
//! Every user interaction is one synchronous mutation on this struct
//! followed by a full re-render (`render.rs`). Sessions are constructed
//! explicitly and owned by the embedding layer; there is no global
//! state.

use crate::canvas::CanvasSpec;
use crate::model::{Point, PrimitiveKind};

/// Direction for the add/remove row/column commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridShift {
    /// Duplicate every point, translated one grid step along the axis.
    Add,
    /// Drop every point lying in the last grid band on the axis.
    Remove,
}

/// A single drawing session.
///
/// Owns the insertion-ordered point sequence (duplicates allowed;
/// order defines polygon vertex order and line chaining) and the
/// currently active primitive kind. Created empty with `Polygon`
/// active; discarded at program exit.
#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
    /// Accumulated click points, in append order.
    pub points: Vec<Point>,
    /// The primitive rendered over the sequence.
    pub primitive: PrimitiveKind,
    /// Canvas dimensions, grid density, and colors.
    pub canvas: CanvasSpec,
}

impl DrawingSession {
    /// Create an empty session over the default 500×500 / 20-cell canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session over a custom canvas.
    pub fn with_canvas(canvas: CanvasSpec) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    /// Append a point. Coordinates are unvalidated; off-canvas points
    /// are accepted and clip at the surface.
    pub fn add_point(&mut self, x: f32, y: f32) {
        self.points.push(Point::new(x, y));
        log::debug!("add point ({x}, {y}), {} total", self.points.len());
    }

    /// Set the active primitive kind directly.
    pub fn set_primitive(&mut self, kind: PrimitiveKind) {
        self.primitive = kind;
        log::debug!("primitive set to {}", kind.as_str());
    }

    /// Advance the active primitive kind one step in cycle order.
    pub fn cycle_primitive(&mut self) {
        self.primitive = self.primitive.next();
        log::debug!("primitive cycled to {}", self.primitive.as_str());
    }

    /// Empty the point sequence. The active primitive is unchanged.
    pub fn clear_points(&mut self) {
        self.points.clear();
        log::debug!("points cleared");
    }

    /// Add or remove a grid row (y axis).
    ///
    /// `Add` appends a +step-translated copy of every point (the
    /// sequence doubles; originals keep their order, copies follow in
    /// the same order). `Remove` drops points with y ≥ size − step and
    /// leaves the survivors untranslated.
    pub fn shift_row(&mut self, shift: GridShift) {
        let step = self.canvas.grid_step();
        match shift {
            GridShift::Add => self.extend_translated(0.0, step),
            GridShift::Remove => self.retain_below(|p| p.y, step),
        }
    }

    /// Add or remove a grid column (x axis). Symmetric to `shift_row`.
    pub fn shift_column(&mut self, shift: GridShift) {
        let step = self.canvas.grid_step();
        match shift {
            GridShift::Add => self.extend_translated(step, 0.0),
            GridShift::Remove => self.retain_below(|p| p.x, step),
        }
    }

    /// Append a (dx, dy)-translated copy of every current point.
    fn extend_translated(&mut self, dx: f32, dy: f32) {
        let copies: Vec<Point> = self.points.iter().map(|p| p.translated(dx, dy)).collect();
        self.points.extend(copies);
        log::debug!(
            "duplicated points translated by ({dx}, {dy}), {} total",
            self.points.len()
        );
    }

    /// Keep only points whose `axis` coordinate is strictly below
    /// `size − step` (i.e. outside the last grid band).
    fn retain_below(&mut self, axis: impl Fn(&Point) -> f32, step: f32) {
        let cutoff = self.canvas.size - step;
        let before = self.points.len();
        self.points.retain(|p| axis(p) < cutoff);
        log::debug!(
            "dropped {} point(s) past {cutoff}",
            before - self.points.len()
        );
    }
}
