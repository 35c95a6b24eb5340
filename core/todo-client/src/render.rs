use crate::view::TodoView;
use std::fmt::Write;

/// Renders the list as plain text, one item per line.
pub fn render(view: &TodoView) -> String {
    if view.items().is_empty() {
        return "No todos yet.\n".to_string();
    }

    let mut out = String::new();
    for item in view.items() {
        let mark = if item.completed { 'x' } else { ' ' };
        let _ = writeln!(out, "[{mark}] {}  ({})", item.title, item.id);
    }
    out
}
