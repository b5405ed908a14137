//! Translation of terminal input into session events.

use crossterm::event::{
    Event as TerminalEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use pattern_picker_core::session::Event;

/// Maps a key press to a session event.
///
/// `accepts_text` is true while the search input has focus; printable keys are
/// then typed into the query instead of acting as shortcuts.
#[must_use]
pub fn map_key_event(key_event: KeyEvent, accepts_text: bool) -> Option<Event> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Event::Quit)
        }
        KeyCode::Up => Some(Event::Up),
        KeyCode::Down => Some(Event::Down),
        KeyCode::Enter => Some(Event::Confirm),
        KeyCode::Esc => Some(Event::Cancel),
        KeyCode::Backspace if accepts_text => Some(Event::Backspace),
        KeyCode::Char(c)
            if accepts_text
                && !key_event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Event::Input(c))
        }
        KeyCode::Char('/') if !accepts_text => Some(Event::OpenFilter),
        KeyCode::Char('q') if !accepts_text => Some(Event::Quit),
        KeyCode::Char('k') if !accepts_text => Some(Event::Up),
        KeyCode::Char('j') if !accepts_text => Some(Event::Down),
        _ => None,
    }
}

/// Maps any terminal event to a session event.
///
/// Mouse scrolling moves the cursor; other mouse, focus and paste events are
/// ignored.
#[must_use]
pub fn map_terminal_event(terminal_event: &TerminalEvent, accepts_text: bool) -> Option<Event> {
    match terminal_event {
        TerminalEvent::Key(key_event) => map_key_event(*key_event, accepts_text),
        TerminalEvent::Resize(width, height) => Some(Event::Resize {
            width: *width,
            height: *height,
        }),
        TerminalEvent::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(Event::Up),
            MouseEventKind::ScrollDown => Some(Event::Down),
            _ => None,
        },
        TerminalEvent::FocusGained | TerminalEvent::FocusLost | TerminalEvent::Paste(_) => None,
    }
}
