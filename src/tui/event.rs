use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// q or Esc
    Quit,
    /// Ctrl+C, quits regardless of what is on screen
    ForceQuit,
    Submit,
    CursorUp,
    CursorDown,
    Increment,
    Decrement,
    /// Any other printable key; header actions and shortcuts match on these
    Key(char),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
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
        Ok(Event::Key(key_event)) if key_event.kind != KeyEventKind::Release => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event.modifiers, key_event.code)
        }
        Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Esc) | (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Right) | (_, KeyCode::Char('+')) | (_, KeyCode::Char('=')) => {
            Some(TuiEvent::Increment)
        }
        (_, KeyCode::Left) | (_, KeyCode::Char('-')) => Some(TuiEvent::Decrement),
        (_, KeyCode::Char(c)) => Some(TuiEvent::Key(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_c_is_force_quit() {
        assert_eq!(
            map_key(KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(TuiEvent::ForceQuit)
        );
        // Plain 'c' is just a key
        assert_eq!(
            map_key(KeyModifiers::NONE, KeyCode::Char('c')),
            Some(TuiEvent::Key('c'))
        );
    }

    #[test]
    fn test_stepper_keys() {
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Right), Some(TuiEvent::Increment));
        assert_eq!(map_key(KeyModifiers::SHIFT, KeyCode::Char('+')), Some(TuiEvent::Increment));
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Char('-')), Some(TuiEvent::Decrement));
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Left), Some(TuiEvent::Decrement));
    }

    #[test]
    fn test_navigation_and_quit_keys() {
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Char('k')), Some(TuiEvent::CursorUp));
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Down), Some(TuiEvent::CursorDown));
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Esc), Some(TuiEvent::Quit));
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Enter), Some(TuiEvent::Submit));
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Tab), None);
    }
}
