//! Session state → draw instructions.
//!
//! `DrawingSession::render()` walks current state and emits an ordered,
//! renderer-agnostic instruction stream: grid lines first, then the
//! active primitive (if the point count allows it), then one marker per
//! point so markers always sit on top. A backend (see gs-render) turns
//! the stream into actual paint calls.

use crate::model::{Color, Point, PrimitiveKind};
use crate::session::DrawingSession;

/// Radius of the per-point marker dot, in canvas units.
pub const MARKER_RADIUS: f32 = 2.0;

/// A single renderer-agnostic draw instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Straight segment from `from` to `to`.
    Line { from: Point, to: Point, color: Color },
    /// Closed polygon outline over the points in order.
    Polygon { points: Vec<Point>, color: Color },
    /// Circle outline.
    Circle {
        center: Point,
        radius: f32,
        color: Color,
    },
    /// Axis-aligned ellipse whose bounding box has `corner_a` and
    /// `corner_b` as opposite corners.
    Ellipse {
        corner_a: Point,
        corner_b: Point,
        color: Color,
    },
    /// Small filled dot marking an accumulated point.
    Marker { at: Point, color: Color },
}

impl DrawingSession {
    /// Produce the full instruction stream for current state.
    ///
    /// The iterator is finite and idempotent for unchanged state; call
    /// it once per mutation and replay the ops onto the surface.
    pub fn render(&self) -> impl Iterator<Item = DrawOp> + '_ {
        log::trace!(
            "render: {} point(s), kind {}",
            self.points.len(),
            self.primitive.as_str()
        );
        self.grid_ops()
            .chain(self.primitive_ops())
            .chain(self.marker_ops())
    }

    /// Grid lines at every multiple of the grid step, 0 through size
    /// inclusive. Vertical lines first, then horizontal.
    fn grid_ops(&self) -> impl Iterator<Item = DrawOp> + '_ {
        let size = self.canvas.size;
        let step = self.canvas.grid_step();
        let color = self.canvas.palette.grid;

        let vertical = (0..=self.canvas.grid_cells).map(move |i| {
            let x = i as f32 * step;
            DrawOp::Line {
                from: Point::new(x, 0.0),
                to: Point::new(x, size),
                color,
            }
        });
        let horizontal = (0..=self.canvas.grid_cells).map(move |i| {
            let y = i as f32 * step;
            DrawOp::Line {
                from: Point::new(0.0, y),
                to: Point::new(size, y),
                color,
            }
        });
        vertical.chain(horizontal)
    }

    /// The active primitive's instructions, or nothing when the point
    /// count is below the kind's minimum. This gate is the only path to
    /// the per-kind constructors below, so an under-filled primitive op
    /// cannot be built from outside.
    fn primitive_ops(&self) -> Vec<DrawOp> {
        if self.points.len() < self.primitive.min_points() {
            return Vec::new();
        }
        let color = self.canvas.palette.primitive;
        match self.primitive {
            PrimitiveKind::Polygon => vec![DrawOp::Polygon {
                points: self.points.clone(),
                color,
            }],
            PrimitiveKind::Line => self
                .points
                .windows(2)
                .map(|pair| DrawOp::Line {
                    from: pair[0],
                    to: pair[1],
                    color,
                })
                .collect(),
            PrimitiveKind::Circle => vec![DrawOp::Circle {
                center: self.points[0],
                radius: self.points[0].distance_to(self.points[1]),
                color,
            }],
            PrimitiveKind::Ellipse => vec![DrawOp::Ellipse {
                corner_a: self.points[0],
                corner_b: self.points[1],
                color,
            }],
        }
    }

    /// One marker per point, in append order.
    fn marker_ops(&self) -> impl Iterator<Item = DrawOp> + '_ {
        let color = self.canvas.palette.marker;
        self.points.iter().map(move |&at| DrawOp::Marker { at, color })
    }
}
