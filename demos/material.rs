use memento::{BoundedEditor, Editor, Material};
use tracing_subscriber::EnvFilter;

fn glass() -> Material {
    Material::new("Glass", 2.5, "Clear", true)
}

fn status(done: bool, success: &str, failure: &str) {
    println!("{}", if done { success } else { failure });
}

fn with_history() {
    let mut editor = Editor::new(glass());
    println!("{}", editor.target());
    editor.update_name("Tempered Glass");
    editor.update_density(2.8);
    editor.update_color("Slight blue tint");
    println!("{}", editor.target());

    println!("\nUndoing the last change:");
    status(editor.undo(), "Undo successful", "Nothing to undo");
    println!("{}", editor.target());

    println!("\nUndoing another change:");
    status(editor.undo(), "Undo successful", "Nothing to undo");
    println!("{}", editor.target());

    println!("\nRedoing a change:");
    status(editor.redo(), "Redo successful", "Nothing to redo");
    println!("{}", editor.target());

    println!("\nMaking a new change after undo:");
    editor.update_transparency(false);
    println!("{}", editor.target());

    println!("\nTrying to redo (should fail):");
    status(editor.redo(), "Redo successful", "Nothing to redo");

    println!("\nHistory:\n{}", editor.history().display());
}

fn with_bounded_stack() {
    let mut editor: BoundedEditor<Material> = BoundedEditor::new(glass());
    println!("Initial state:\n{}", editor.target());
    editor.update_name("Tempered Glass");
    editor.update_density(2.8);
    editor.update_color("Slight blue tint");
    println!("\nAfter changes:\n{}", editor.target());

    for change in ["color", "density", "name", "nothing"] {
        println!("\nUndoing the {change} change:");
        if editor.undo() {
            println!("Last change undone! Current state:\n{}", editor.target());
        } else {
            println!("Nothing to undo!");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("# Cursor history\n");
    with_history();
    println!("\n# Bounded stack\n");
    with_bounded_stack();
}
