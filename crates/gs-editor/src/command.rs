//! Session commands and the single dispatch entry point.
//!
//! Every user interaction (canvas click or menu selection) becomes
//! one `Command` applied through `Editor::apply`. The session itself
//! stays free of UI framework types; the embedder maps its events to
//! commands (see `input.rs`) and re-renders after each apply.

use gs_core::{DrawOp, DrawingSession, GridShift, PrimitiveKind};

/// One user-triggered mutation of the drawing session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Append a point at canvas coordinates (both click buttons).
    AddPoint { x: f32, y: f32 },
    /// Select a primitive kind directly (menu: Polygon/Line/Circle/Ellipse).
    SetPrimitive(PrimitiveKind),
    /// Advance to the next primitive kind in cycle order.
    CyclePrimitive,
    /// Empty the point sequence.
    ClearPoints,
    AddRow,
    RemoveRow,
    AddColumn,
    RemoveColumn,
}

impl Command {
    /// Short human-readable label, used for logging.
    pub fn describe(&self) -> &'static str {
        match self {
            Command::AddPoint { .. } => "add point",
            Command::SetPrimitive(_) => "set primitive",
            Command::CyclePrimitive => "cycle primitive",
            Command::ClearPoints => "clear points",
            Command::AddRow => "add row",
            Command::RemoveRow => "remove row",
            Command::AddColumn => "add column",
            Command::RemoveColumn => "remove column",
        }
    }
}

/// Owns a drawing session and applies commands to it.
#[derive(Debug, Default)]
pub struct Editor {
    pub session: DrawingSession,
}

impl Editor {
    /// Create an editor over an empty default session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor over a custom canvas.
    pub fn with_canvas(canvas: gs_core::CanvasSpec) -> Self {
        Self {
            session: DrawingSession::with_canvas(canvas),
        }
    }

    /// Apply one command. The embedder re-renders afterwards.
    pub fn apply(&mut self, command: Command) {
        log::debug!("apply: {}", command.describe());
        match command {
            Command::AddPoint { x, y } => self.session.add_point(x, y),
            Command::SetPrimitive(kind) => self.session.set_primitive(kind),
            Command::CyclePrimitive => self.session.cycle_primitive(),
            Command::ClearPoints => self.session.clear_points(),
            Command::AddRow => self.session.shift_row(GridShift::Add),
            Command::RemoveRow => self.session.shift_row(GridShift::Remove),
            Command::AddColumn => self.session.shift_column(GridShift::Add),
            Command::RemoveColumn => self.session.shift_column(GridShift::Remove),
        }
    }

    /// The current draw-instruction stream (see `gs_core::render`).
    pub fn render(&self) -> impl Iterator<Item = DrawOp> + '_ {
        self.session.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gs_core::Point;
    use pretty_assertions::assert_eq;

    #[test]
    fn apply_routes_to_session() {
        let mut editor = Editor::new();
        editor.apply(Command::AddPoint { x: 10.0, y: 20.0 });
        editor.apply(Command::SetPrimitive(PrimitiveKind::Circle));

        assert_eq!(editor.session.points, vec![Point::new(10.0, 20.0)]);
        assert_eq!(editor.session.primitive, PrimitiveKind::Circle);

        editor.apply(Command::ClearPoints);
        assert!(editor.session.points.is_empty());
        // Clearing leaves the primitive alone
        assert_eq!(editor.session.primitive, PrimitiveKind::Circle);
    }

    #[test]
    fn row_and_column_commands_shift() {
        let mut editor = Editor::new();
        editor.apply(Command::AddPoint { x: 100.0, y: 100.0 });
        editor.apply(Command::AddRow);
        assert_eq!(
            editor.session.points,
            vec![Point::new(100.0, 100.0), Point::new(100.0, 125.0)]
        );

        editor.apply(Command::AddColumn);
        assert_eq!(editor.session.points.len(), 4);

        editor.apply(Command::RemoveColumn);
        editor.apply(Command::RemoveRow);
        assert_eq!(editor.session.points.len(), 4); // nothing in the last bands
    }
}
