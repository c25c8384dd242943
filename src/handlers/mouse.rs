//! Mouse Input Handler

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::App;

/// Handle mouse input
///
/// A left click goes to the single row under the cursor (or its pin
/// affordance); the wheel moves the selection.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click_at(mouse.column, mouse.row),
        MouseEventKind::ScrollUp => app.model.select_prev(),
        MouseEventKind::ScrollDown => app.model.select_next(),
        _ => {}
    }
}
