use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use quickpick_core::selector::Key;

/// Reduces a terminal event to a selector key.
///
/// Releases, mouse, focus, paste and resize events all map to [`Key::Other`].
#[must_use]
pub fn key_from_event(event: &Event) -> Key {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            key_from_key_event(key_event)
        }
        _ => Key::Other,
    }
}

fn key_from_key_event(key_event: &KeyEvent) -> Key {
    let modifiers = key_event.modifiers;

    match key_event.code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Key::Char(c)
        }
        _ => Key::Other,
    }
}
