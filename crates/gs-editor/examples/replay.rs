//! Headless replay: apply a scripted command sequence and print the
//! resulting draw-op stream. Run with RUST_LOG=debug to watch each
//! mutation.

use gs_core::PrimitiveKind;
use gs_editor::command::{Command, Editor};

fn main() {
    env_logger::init();

    let script = [
        Command::AddPoint { x: 100.0, y: 100.0 },
        Command::AddPoint { x: 200.0, y: 100.0 },
        Command::AddPoint { x: 150.0, y: 50.0 },
        Command::SetPrimitive(PrimitiveKind::Circle),
        Command::AddRow,
        Command::CyclePrimitive,
    ];

    let mut editor = Editor::new();
    for command in script {
        editor.apply(command);
    }

    println!(
        "session: {} point(s), primitive {}",
        editor.session.points.len(),
        editor.session.primitive.as_str()
    );
    for op in editor.render() {
        println!("{op:?}");
    }
}
