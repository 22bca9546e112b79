//! Core value types for a drawing session.
//!
//! Everything here is plain data: points in canvas pixel space, the
//! four primitive kinds the tool can render, and RGBA colors. The
//! session and render logic live in `session.rs` and `render.rs`.

// ─── Points ──────────────────────────────────────────────────────────────

/// A point in canvas pixel space.
///
/// Coordinates are unconstrained; off-canvas points are valid and
/// simply clip at the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// This point translated by (dx, dy).
    pub fn translated(&self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

// ─── Primitive kinds ─────────────────────────────────────────────────────

/// The shape rendered over the accumulated point sequence.
///
/// Exactly one kind is active at a time; `CYCLE` fixes the order used
/// by the "change primitive" command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimitiveKind {
    #[default]
    Polygon,
    Line,
    Circle,
    Ellipse,
}

impl PrimitiveKind {
    /// Cycle order for the "change primitive" command.
    pub const CYCLE: [PrimitiveKind; 4] = [
        PrimitiveKind::Polygon,
        PrimitiveKind::Line,
        PrimitiveKind::Circle,
        PrimitiveKind::Ellipse,
    ];

    /// The next kind in cycle order, wrapping after `Ellipse`.
    #[must_use]
    pub fn next(self) -> PrimitiveKind {
        let pos = Self::CYCLE.iter().position(|&k| k == self).unwrap_or(0);
        Self::CYCLE[(pos + 1) % Self::CYCLE.len()]
    }

    /// Minimum number of points required before a primitive is drawn.
    pub fn min_points(self) -> usize {
        match self {
            PrimitiveKind::Polygon => 3,
            PrimitiveKind::Line | PrimitiveKind::Circle | PrimitiveKind::Ellipse => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::Polygon => "polygon",
            PrimitiveKind::Line => "line",
            PrimitiveKind::Circle => "circle",
            PrimitiveKind::Ellipse => "ellipse",
        }
    }
}

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const GRAY: Color = Color::rgba(0.5, 0.5, 0.5, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let bytes = hex.strip_prefix('#').unwrap_or(hex).as_bytes();

        let byte_at = |i: usize| Some(hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?);

        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::rgba(
                    (r * 17) as f32 / 255.0,
                    (g * 17) as f32 / 255.0,
                    (b * 17) as f32 / 255.0,
                    1.0,
                ))
            }
            4 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                let a = hex_val(bytes[3])?;
                Some(Self::rgba(
                    (r * 17) as f32 / 255.0,
                    (g * 17) as f32 / 255.0,
                    (b * 17) as f32 / 255.0,
                    (a * 17) as f32 / 255.0,
                ))
            }
            6 => Some(Self::rgba(
                byte_at(0)? as f32 / 255.0,
                byte_at(2)? as f32 / 255.0,
                byte_at(4)? as f32 / 255.0,
                1.0,
            )),
            8 => Some(Self::rgba(
                byte_at(0)? as f32 / 255.0,
                byte_at(2)? as f32 / 255.0,
                byte_at(4)? as f32 / 255.0,
                byte_at(6)? as f32 / 255.0,
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cycle_order_wraps() {
        assert_eq!(PrimitiveKind::Polygon.next(), PrimitiveKind::Line);
        assert_eq!(PrimitiveKind::Line.next(), PrimitiveKind::Circle);
        assert_eq!(PrimitiveKind::Circle.next(), PrimitiveKind::Ellipse);
        assert_eq!(PrimitiveKind::Ellipse.next(), PrimitiveKind::Polygon);
    }

    #[test]
    fn four_cycles_return_to_start() {
        for start in PrimitiveKind::CYCLE {
            let mut kind = start;
            for _ in 0..4 {
                kind = kind.next();
            }
            assert_eq!(kind, start, "cycling 4× from {} should wrap", start.as_str());
        }
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
    }

    #[test]
    fn color_from_hex_variants() {
        assert_eq!(Color::from_hex("#FFF"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("FF0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("#F00F"), Some(Color::RED));
        let short_alpha = Color::from_hex("#F00A").unwrap();
        assert_eq!(short_alpha.a, 170.0 / 255.0); // 0xA × 17
        let half = Color::from_hex("#00000080").unwrap();
        assert!((half.a - 128.0 / 255.0).abs() < 0.01);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#GG0000"), None);
    }
}
