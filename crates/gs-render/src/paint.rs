//! Draw instructions → Vello paint operations.
//!
//! Replays a `DrawOp` stream onto a `vello::Scene`: background fill
//! first, then each op in stream order. The caller clears the scene and
//! presents it; this module knows nothing about windows or surfaces.

use gs_core::{CanvasSpec, DrawOp, MARKER_RADIUS, Point};
use kurbo::{Affine, BezPath, Circle, Ellipse, Line, Rect, Stroke};
use peniko::Fill;
use vello::Scene;

/// Outline width for grid lines and primitives.
const STROKE_WIDTH: f64 = 1.0;

/// Replay a draw-op stream onto a freshly-cleared scene.
///
/// Call once per frame with the ops from `DrawingSession::render()`.
pub fn paint_ops(scene: &mut Scene, spec: &CanvasSpec, ops: impl IntoIterator<Item = DrawOp>) {
    paint_background(scene, spec);

    let mut count = 0usize;
    for op in ops {
        paint_op(scene, &op);
        count += 1;
    }
    log::trace!("painted {count} op(s)");
}

fn paint_background(scene: &mut Scene, spec: &CanvasSpec) {
    let rect = Rect::new(0.0, 0.0, spec.size as f64, spec.size as f64);
    let color = to_peniko(spec.palette.background);
    scene.fill(Fill::NonZero, Affine::IDENTITY, color, None, &rect);
}

fn paint_op(scene: &mut Scene, op: &DrawOp) {
    match op {
        DrawOp::Line { from, to, color } => {
            let shape = Line::new(to_kurbo(*from), to_kurbo(*to));
            stroke_shape(scene, &shape, *color);
        }

        DrawOp::Polygon { points, color } => {
            let mut bez = BezPath::new();
            if let Some((first, rest)) = points.split_first() {
                bez.move_to(to_kurbo(*first));
                for p in rest {
                    bez.line_to(to_kurbo(*p));
                }
                bez.close_path();
            }
            stroke_shape(scene, &bez, *color);
        }

        DrawOp::Circle {
            center,
            radius,
            color,
        } => {
            let shape = Circle::new(to_kurbo(*center), *radius as f64);
            stroke_shape(scene, &shape, *color);
        }

        DrawOp::Ellipse {
            corner_a,
            corner_b,
            color,
        } => {
            // .abs() normalizes corners given in any order
            let rect = Rect::new(
                corner_a.x as f64,
                corner_a.y as f64,
                corner_b.x as f64,
                corner_b.y as f64,
            )
            .abs();
            let shape = Ellipse::from_rect(rect);
            stroke_shape(scene, &shape, *color);
        }

        DrawOp::Marker { at, color } => {
            let shape = Circle::new(to_kurbo(*at), MARKER_RADIUS as f64);
            let fill = to_peniko(*color);
            scene.fill(Fill::NonZero, Affine::IDENTITY, fill, None, &shape);
        }
    }
}

fn stroke_shape<S: kurbo::Shape>(scene: &mut Scene, shape: &S, color: gs_core::Color) {
    let stroke = Stroke::new(STROKE_WIDTH);
    scene.stroke(&stroke, Affine::IDENTITY, to_peniko(color), None, shape);
}

// ─── Conversions ─────────────────────────────────────────────────────────

fn to_kurbo(p: Point) -> kurbo::Point {
    kurbo::Point::new(p.x as f64, p.y as f64)
}

fn to_peniko(c: gs_core::Color) -> peniko::Color {
    peniko::Color::from_rgba8(
        (c.r * 255.0).round() as u8,
        (c.g * 255.0).round() as u8,
        (c.b * 255.0).round() as u8,
        (c.a * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gs_core::{DrawingSession, PrimitiveKind};

    #[test]
    fn paints_full_session_stream() {
        let mut session = DrawingSession::new();
        session.add_point(100.0, 100.0);
        session.add_point(200.0, 100.0);
        session.add_point(150.0, 50.0);

        let mut scene = Scene::new();
        paint_ops(&mut scene, &session.canvas, session.render());
    }

    #[test]
    fn paints_every_primitive_kind() {
        let mut session = DrawingSession::new();
        session.add_point(10.0, 20.0);
        session.add_point(60.0, 80.0);
        session.add_point(30.0, 40.0);

        let mut scene = Scene::new();
        for kind in PrimitiveKind::CYCLE {
            session.set_primitive(kind);
            scene.reset();
            paint_ops(&mut scene, &session.canvas, session.render());
        }
    }
}
