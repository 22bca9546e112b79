//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to session `Command`s, the keyboard
//! equivalents of the menu entries:
//! - p / l / c / e select a primitive kind
//! - Tab cycles the primitive
//! - Delete / Backspace clears all points
//! - ctrl (or ⌘) + arrows add/remove grid rows and columns

use crate::command::Command;
use crate::input::Modifiers;
use gs_core::PrimitiveKind;

/// Resolves key events into commands.
///
/// Platform-aware: `meta` (⌘ on macOS) and `ctrl` are interchangeable.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to a command.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"p"`, `"Delete"`,
    /// `"ArrowDown"`). Returns `None` for unbound combos.
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<Command> {
        let cmd = modifiers.ctrl || modifiers.meta;

        // ── Modifier combos first (most specific) ──
        if cmd {
            return match key {
                "ArrowDown" => Some(Command::AddRow),
                "ArrowUp" => Some(Command::RemoveRow),
                "ArrowRight" => Some(Command::AddColumn),
                "ArrowLeft" => Some(Command::RemoveColumn),
                _ => None,
            };
        }

        // ── Unmodified keys ──
        match key {
            "p" | "P" => Some(Command::SetPrimitive(PrimitiveKind::Polygon)),
            "l" | "L" => Some(Command::SetPrimitive(PrimitiveKind::Line)),
            "c" | "C" => Some(Command::SetPrimitive(PrimitiveKind::Circle)),
            "e" | "E" => Some(Command::SetPrimitive(PrimitiveKind::Ellipse)),
            "Tab" => Some(Command::CyclePrimitive),
            "Delete" | "Backspace" => Some(Command::ClearPoints),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
        meta: false,
    };
    const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
        alt: false,
        meta: false,
    };
    const META: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
        meta: true,
    };

    #[test]
    fn primitive_selection_keys() {
        assert_eq!(
            ShortcutMap::resolve("p", NONE),
            Some(Command::SetPrimitive(PrimitiveKind::Polygon))
        );
        assert_eq!(
            ShortcutMap::resolve("E", NONE),
            Some(Command::SetPrimitive(PrimitiveKind::Ellipse))
        );
        assert_eq!(ShortcutMap::resolve("Tab", NONE), Some(Command::CyclePrimitive));
    }

    #[test]
    fn clear_keys() {
        assert_eq!(ShortcutMap::resolve("Delete", NONE), Some(Command::ClearPoints));
        assert_eq!(
            ShortcutMap::resolve("Backspace", NONE),
            Some(Command::ClearPoints)
        );
    }

    #[test]
    fn grid_shifts_need_a_command_modifier() {
        assert_eq!(ShortcutMap::resolve("ArrowDown", CTRL), Some(Command::AddRow));
        assert_eq!(ShortcutMap::resolve("ArrowUp", META), Some(Command::RemoveRow));
        assert_eq!(
            ShortcutMap::resolve("ArrowRight", CTRL),
            Some(Command::AddColumn)
        );
        assert_eq!(
            ShortcutMap::resolve("ArrowLeft", CTRL),
            Some(Command::RemoveColumn)
        );
        // Without ctrl/meta the arrows are unbound
        assert_eq!(ShortcutMap::resolve("ArrowDown", NONE), None);
        // ctrl steals the letter keys from primitive selection
        assert_eq!(ShortcutMap::resolve("p", CTRL), None);
    }
}
