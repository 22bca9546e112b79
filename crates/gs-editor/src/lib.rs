pub mod command;
pub mod input;
pub mod shortcuts;

pub use command::{Command, Editor};
pub use input::{InputEvent, Modifiers, PointerButton, command_for};
pub use shortcuts::ShortcutMap;
