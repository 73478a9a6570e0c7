use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Global
    ForceQuit,    // Ctrl+C / Ctrl+Q
    SwitchScreen, // Ctrl+A: messenger ⇄ admin
    ToggleMenu,   // F2: hamburger menu
    NextTab,      // F3: Чаты → Контакты → Каналы
    FocusNext,
    FocusPrev,
    Resize,

    // Editing and navigation
    Submit,
    Escape,
    InputChar(char),
    Paste(String), // Bracketed paste
    Backspace,
    Delete,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Scrolling
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,

    // Mouse (column, row)
    MouseMove(u16, u16),
    MouseClick(u16, u16),
}

/// Poll for an event, waiting at most `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(ev) => translate(ev),
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Map a raw crossterm event onto a `TuiEvent`. Unknown input is dropped.
pub fn translate(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<TuiEvent> {
    // Keyboard enhancement reports releases too
    if key.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(TuiEvent::ForceQuit),
            KeyCode::Char('a') => Some(TuiEvent::SwitchScreen),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(TuiEvent::InputChar(c)),
        KeyCode::Backspace => Some(TuiEvent::Backspace),
        KeyCode::Delete => Some(TuiEvent::Delete),
        KeyCode::Enter => Some(TuiEvent::Submit),
        KeyCode::Esc => Some(TuiEvent::Escape),
        KeyCode::Tab => Some(TuiEvent::FocusNext),
        KeyCode::BackTab => Some(TuiEvent::FocusPrev),
        KeyCode::F(2) => Some(TuiEvent::ToggleMenu),
        KeyCode::F(3) => Some(TuiEvent::NextTab),
        KeyCode::Up => Some(TuiEvent::CursorUp),
        KeyCode::Down => Some(TuiEvent::CursorDown),
        KeyCode::Left => Some(TuiEvent::CursorLeft),
        KeyCode::Right => Some(TuiEvent::CursorRight),
        KeyCode::Home => Some(TuiEvent::CursorHome),
        KeyCode::End => Some(TuiEvent::CursorEnd),
        KeyCode::PageUp => Some(TuiEvent::ScrollPageUp),
        KeyCode::PageDown => Some(TuiEvent::ScrollPageDown),
        _ => None,
    }
}

fn translate_mouse(mouse: MouseEvent) -> Option<TuiEvent> {
    match mouse.kind {
        MouseEventKind::Moved => Some(TuiEvent::MouseMove(mouse.column, mouse.row)),
        MouseEventKind::Down(MouseButton::Left) => {
            Some(TuiEvent::MouseClick(mouse.column, mouse.row))
        }
        MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
        MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_ctrl_shortcuts() {
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            translate(key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            translate(key(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            Some(TuiEvent::SwitchScreen)
        );
        assert_eq!(translate(key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(
            translate(key(KeyCode::Char('ж'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('ж'))
        );
        assert_eq!(
            translate(key(KeyCode::Char('Ж'), KeyModifiers::SHIFT)),
            Some(TuiEvent::InputChar('Ж'))
        );
        assert_eq!(translate(key(KeyCode::Enter, KeyModifiers::NONE)), Some(TuiEvent::Submit));
        assert_eq!(translate(key(KeyCode::F(2), KeyModifiers::NONE)), Some(TuiEvent::ToggleMenu));
        assert_eq!(translate(key(KeyCode::BackTab, KeyModifiers::SHIFT)), Some(TuiEvent::FocusPrev));
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_mouse_events() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(translate(Event::Mouse(click)), Some(TuiEvent::MouseClick(4, 7)));

        let right = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..click
        };
        assert_eq!(translate(Event::Mouse(right)), None);
    }

    #[test]
    fn test_resize_and_paste() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
        assert_eq!(
            translate(Event::Paste("строка".to_string())),
            Some(TuiEvent::Paste("строка".to_string()))
        );
    }
}
