//! Keyboard Input Handler
//!
//! Typing always goes to the search box; navigation and actions use
//! non-printable keys or Ctrl chords so they never collide with a query.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;

/// Rows moved by PageUp / PageDown
const PAGE_SIZE: isize = 10;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // AltGr arrives as Ctrl+Alt on Windows and produces a printable char
    let chord = key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT);
    if chord {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => app.model.ui.should_quit = true,
            KeyCode::Char('u') => app.clear_query(),
            KeyCode::Char('p') => app.toggle_pin_selected(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            if app.model.ui.search_query.is_empty() {
                app.model.ui.should_quit = true;
            } else {
                app.clear_query();
            }
        }
        KeyCode::Enter => app.activate_selected(),
        KeyCode::Up => app.model.select_prev(),
        KeyCode::Down => app.model.select_next(),
        KeyCode::PageUp => app.model.select_page(-PAGE_SIZE),
        KeyCode::PageDown => app.model.select_page(PAGE_SIZE),
        KeyCode::Home => app.model.select_first(),
        KeyCode::End => app.model.select_last(),
        KeyCode::Right => app.expand_selected(),
        KeyCode::Left => app.collapse_selected(),
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Char(c) => app.push_query_char(c),
        _ => {}
    }
}
