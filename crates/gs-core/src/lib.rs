pub mod canvas;
pub mod model;
pub mod render;
pub mod session;

pub use canvas::{CanvasSpec, Palette};
pub use model::{Color, Point, PrimitiveKind};
pub use render::{DrawOp, MARKER_RADIUS};
pub use session::{DrawingSession, GridShift};
