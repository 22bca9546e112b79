//! Input abstraction layer.
//!
//! Normalizes pointer and keyboard events from whatever windowing layer
//! embeds the editor into a unified `InputEvent`, then maps events to
//! session `Command`s. Primary and secondary clicks are deliberately
//! identical: both append a point.

use crate::command::Command;
use crate::shortcuts::ShortcutMap;

/// Which pointer button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Modifier key state accompanying a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A normalized input event from the embedding layer.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Pointer pressed on the canvas.
    PointerDown {
        x: f32,
        y: f32,
        button: PointerButton,
    },

    /// Keyboard press (menu accelerators).
    Key { key: String, modifiers: Modifiers },
}

impl InputEvent {
    pub fn from_pointer_down(x: f32, y: f32, button: PointerButton) -> Self {
        Self::PointerDown { x, y, button }
    }

    pub fn from_key(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self::Key {
            key: key.into(),
            modifiers,
        }
    }

    /// Extract position if this is a pointer event.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::PointerDown { x, y, .. } => Some((*x, *y)),
            _ => None,
        }
    }
}

/// Map an input event to a session command, if it has one.
///
/// Both pointer buttons append a point at the click position. Key
/// events go through the shortcut map.
pub fn command_for(event: &InputEvent) -> Option<Command> {
    match event {
        InputEvent::PointerDown { x, y, .. } => Some(Command::AddPoint { x: *x, y: *y }),
        InputEvent::Key { key, modifiers } => ShortcutMap::resolve(key, *modifiers),
    }
}
