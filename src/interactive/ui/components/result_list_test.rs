#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::interactive::domain::snippet::Snippet;
    use crate::interactive::ui::components::Component;
    use crate::interactive::ui::components::result_list::ResultList;
    use crate::interactive::ui::events::Message;
    use crate::interactive::ui::row::ResultRow;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: crossterm::event::KeyEventKind::Press,
            state: crossterm::event::KeyEventState::empty(),
        }
    }

    fn rows(n: usize) -> Vec<ResultRow> {
        (0..n)
            .map(|i| ResultRow {
                destination: format!("Chapter Page:  {}", i + 1),
                snippet: Snippet::plain(format!("snippet {i}")),
            })
            .collect()
    }

    fn list_with(n: usize, selected: Option<usize>) -> ResultList {
        let mut list = ResultList::new();
        list.set_rows(rows(n));
        list.set_selected(selected);
        list
    }

    #[test]
    fn test_down_from_no_selection_proposes_first_row() {
        let mut list = list_with(3, None);
        assert_eq!(
            list.handle_key(key(KeyCode::Down)),
            Some(Message::SelectRow(0))
        );
    }

    #[test]
    fn test_down_and_up_step_by_one() {
        let mut list = list_with(3, Some(1));
        assert_eq!(
            list.handle_key(key(KeyCode::Down)),
            Some(Message::SelectRow(2))
        );

        let mut list = list_with(3, Some(1));
        assert_eq!(
            list.handle_key(key(KeyCode::Up)),
            Some(Message::SelectRow(0))
        );
    }

    #[test]
    fn test_down_stops_at_last_row() {
        let mut list = list_with(3, Some(2));
        assert_eq!(list.handle_key(key(KeyCode::Down)), None);
    }

    #[test]
    fn test_up_stops_at_first_row() {
        let mut list = list_with(3, Some(0));
        assert_eq!(list.handle_key(key(KeyCode::Up)), None);
    }

    #[test]
    fn test_page_navigation_clamps() {
        let mut list = list_with(25, Some(20));
        assert_eq!(
            list.handle_key(key(KeyCode::PageDown)),
            Some(Message::SelectRow(24))
        );

        let mut list = list_with(25, Some(3));
        assert_eq!(
            list.handle_key(key(KeyCode::PageUp)),
            Some(Message::SelectRow(0))
        );
    }

    #[test]
    fn test_home_and_end() {
        let mut list = list_with(5, Some(2));
        assert_eq!(
            list.handle_key(key(KeyCode::Home)),
            Some(Message::SelectRow(0))
        );

        let mut list = list_with(5, Some(2));
        assert_eq!(
            list.handle_key(key(KeyCode::End)),
            Some(Message::SelectRow(4))
        );
    }

    #[test]
    fn test_enter_activates_selected_row() {
        let mut list = list_with(2, Some(1));
        assert_eq!(
            list.handle_key(key(KeyCode::Enter)),
            Some(Message::RowActivated)
        );
    }

    #[test]
    fn test_enter_without_selection_is_silent() {
        let mut list = list_with(2, None);
        assert_eq!(list.handle_key(key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_empty_list_ignores_keys() {
        let mut list = list_with(0, None);
        assert_eq!(list.handle_key(key(KeyCode::Down)), None);
        assert_eq!(list.handle_key(key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_visible_rows_accounts_for_borders_and_row_height() {
        // 12 terminal lines: 2 borders, then 5 two-line rows.
        assert_eq!(ResultList::visible_rows(12), 5);
        assert_eq!(ResultList::visible_rows(2), 0);
        assert_eq!(ResultList::visible_rows(0), 0);
    }
}
