#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::interactive::ui::components::Component;
    use crate::interactive::ui::components::search_bar::SearchBar;
    use crate::interactive::ui::events::Message;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: crossterm::event::KeyEventKind::Press,
            state: crossterm::event::KeyEventState::empty(),
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: crossterm::event::KeyEventKind::Press,
            state: crossterm::event::KeyEventState::empty(),
        }
    }

    #[test]
    fn test_typing_emits_query_changed() {
        let mut bar = SearchBar::new();

        let msg = bar.handle_key(key(KeyCode::Char('c')));
        assert_eq!(msg, Some(Message::QueryChanged("c".to_string())));

        let msg = bar.handle_key(key(KeyCode::Char('a')));
        assert_eq!(msg, Some(Message::QueryChanged("ca".to_string())));

        let msg = bar.handle_key(key(KeyCode::Char('t')));
        assert_eq!(msg, Some(Message::QueryChanged("cat".to_string())));
    }

    #[test]
    fn test_backspace_shortens_query() {
        let mut bar = SearchBar::new();
        bar.set_query("cat".to_string());

        let msg = bar.handle_key(key(KeyCode::Backspace));
        assert_eq!(msg, Some(Message::QueryChanged("ca".to_string())));
    }

    #[test]
    fn test_backspace_on_empty_is_silent() {
        let mut bar = SearchBar::new();
        assert_eq!(bar.handle_key(key(KeyCode::Backspace)), None);
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut bar = SearchBar::new();
        bar.set_query("ct".to_string());
        bar.handle_key(key(KeyCode::Left));

        let msg = bar.handle_key(key(KeyCode::Char('a')));
        assert_eq!(msg, Some(Message::QueryChanged("cat".to_string())));
    }

    #[test]
    fn test_cursor_movement_emits_nothing() {
        let mut bar = SearchBar::new();
        bar.set_query("cat".to_string());

        assert_eq!(bar.handle_key(key(KeyCode::Left)), None);
        assert_eq!(bar.handle_key(key(KeyCode::Right)), None);
        assert_eq!(bar.handle_key(key(KeyCode::Home)), None);
        assert_eq!(bar.handle_key(key(KeyCode::End)), None);
        assert_eq!(bar.handle_key(ctrl('a')), None);
        assert_eq!(bar.handle_key(ctrl('e')), None);
    }

    #[test]
    fn test_ctrl_u_clears_to_start() {
        let mut bar = SearchBar::new();
        bar.set_query("cat dog".to_string());

        let msg = bar.handle_key(ctrl('u'));
        assert_eq!(msg, Some(Message::QueryChanged(String::new())));
    }

    #[test]
    fn test_ctrl_w_deletes_word() {
        let mut bar = SearchBar::new();
        bar.set_query("cat dog".to_string());

        let msg = bar.handle_key(ctrl('w'));
        assert_eq!(msg, Some(Message::QueryChanged("cat ".to_string())));
    }

    #[test]
    fn test_ctrl_k_deletes_to_end() {
        let mut bar = SearchBar::new();
        bar.set_query("cat dog".to_string());
        bar.handle_key(ctrl('a'));

        let msg = bar.handle_key(ctrl('k'));
        assert_eq!(msg, Some(Message::QueryChanged(String::new())));
    }

    #[test]
    fn test_multibyte_editing() {
        let mut bar = SearchBar::new();
        bar.set_query("caté".to_string());

        let msg = bar.handle_key(key(KeyCode::Backspace));
        assert_eq!(msg, Some(Message::QueryChanged("cat".to_string())));
    }

    #[test]
    fn test_set_query_preserves_cursor_when_unchanged() {
        let mut bar = SearchBar::new();
        bar.set_query("cat".to_string());
        bar.handle_key(key(KeyCode::Home));

        // Renderer pushes the same query every frame; the cursor must stay.
        bar.set_query("cat".to_string());
        let msg = bar.handle_key(key(KeyCode::Char('x')));
        assert_eq!(msg, Some(Message::QueryChanged("xcat".to_string())));
    }
}
