#[cfg(test)]
mod tests {
    use crossterm::event::{
        Event as TerminalEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
    };
    use pattern_picker_cli::browser::{map_key_event, map_terminal_event};
    use pattern_picker_core::config::SessionConfig;
    use pattern_picker_core::pattern_definitions::PatternRecord;
    use pattern_picker_core::session::{Effect, Event, Session, SessionState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn char_key(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key_event(key(KeyCode::Up), false), Some(Event::Up));
        assert_eq!(map_key_event(key(KeyCode::Down), false), Some(Event::Down));
        assert_eq!(map_key_event(char_key('k'), false), Some(Event::Up));
        assert_eq!(map_key_event(char_key('j'), false), Some(Event::Down));
        assert_eq!(map_key_event(key(KeyCode::Enter), false), Some(Event::Confirm));
        assert_eq!(map_key_event(key(KeyCode::Esc), false), Some(Event::Cancel));
    }

    #[test]
    fn test_shortcuts_outside_text_entry() {
        assert_eq!(map_key_event(char_key('/'), false), Some(Event::OpenFilter));
        assert_eq!(map_key_event(char_key('q'), false), Some(Event::Quit));
        assert_eq!(map_key_event(char_key('x'), false), None);
        assert_eq!(map_key_event(key(KeyCode::Backspace), false), None);
    }

    #[test]
    fn test_text_entry_types_shortcut_characters() {
        for c in ['/', 'q', 'j', 'k', 'x', ' '] {
            assert_eq!(map_key_event(char_key(c), true), Some(Event::Input(c)));
        }
        assert_eq!(map_key_event(key(KeyCode::Backspace), true), Some(Event::Backspace));

        // Arrows still move the cursor while typing
        assert_eq!(map_key_event(key(KeyCode::Down), true), Some(Event::Down));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key_event(ctrl_c, false), Some(Event::Quit));
        assert_eq!(map_key_event(ctrl_c, true), Some(Event::Quit));
    }

    #[test]
    fn test_terminal_events() {
        assert_eq!(
            map_terminal_event(&TerminalEvent::Resize(100, 40), false),
            Some(Event::Resize {
                width: 100,
                height: 40
            })
        );

        let scroll = TerminalEvent::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_terminal_event(&scroll, false), Some(Event::Down));

        assert_eq!(map_terminal_event(&TerminalEvent::FocusLost, false), None);
    }

    /// Feed key presses through the mapper into a session, the way the
    /// browser loop does
    fn press(session: &mut Session, keys: &[KeyEvent]) -> Effect {
        let mut effect = Effect::None;
        for key_event in keys {
            if let Some(event) = map_key_event(*key_event, session.accepts_text()) {
                effect = session.handle(event);
            }
        }
        effect
    }

    #[test]
    fn test_typing_a_search_with_shortcut_letters() {
        let mut session = Session::new(
            vec![
                PatternRecord::new("quote", "Quote", "", &[], &[]),
                PatternRecord::new("jokes", "Jokes", "", &[], &[]),
            ],
            SessionConfig::default(),
        );

        press(
            &mut session,
            &[char_key('/'), key(KeyCode::Enter), char_key('q'), char_key('u')],
        );
        assert_eq!(session.query(), "qu");
        assert_eq!(session.visible_directory_names(), vec!["quote"]);

        let effect = press(
            &mut session,
            &[key(KeyCode::Enter), key(KeyCode::Enter), key(KeyCode::Enter)],
        );
        assert_eq!(effect, Effect::Execute("pbpaste | fabric --pattern quote".to_string()));
        assert!(matches!(session.state(), SessionState::Executing { .. }));
    }

    #[test]
    fn test_q_quits_from_the_list() {
        let mut session = Session::new(Vec::new(), SessionConfig::default());
        assert_eq!(press(&mut session, &[char_key('q')]), Effect::Quit);
        assert_eq!(*session.state(), SessionState::Aborted);
    }
}
