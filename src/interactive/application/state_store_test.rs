#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use crate::interactive::SearchDelegate;
    use crate::interactive::application::state_store::SearchStateStore;
    use crate::interactive::domain::models::DocMatch;

    fn match_at(page_index: usize) -> DocMatch {
        DocMatch {
            page_index,
            range: 0..3,
            text: "cat".to_string(),
        }
    }

    #[test]
    fn test_missing_state_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SearchStateStore::open_at(dir.path().join("state.json"), Path::new("a.pdf"));

        assert_eq!(store.memory().term, None);
        assert_eq!(store.memory().row, None);
    }

    #[test]
    fn test_term_and_row_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let state_path = dir.path().join("state.json");

        let mut store = SearchStateStore::open_at(state_path.clone(), Path::new("a.pdf"));
        store.save_search_term("cats");
        store.did_select_match(&match_at(2), 5);

        let reopened = SearchStateStore::open_at(state_path, Path::new("a.pdf"));
        assert_eq!(reopened.memory().term, Some("cats".to_string()));
        assert_eq!(reopened.memory().row, Some(5));
    }

    #[test]
    fn test_empty_term_forgets_term_and_row() {
        let dir = tempfile::tempdir().unwrap();
        let state_path = dir.path().join("state.json");

        let mut store = SearchStateStore::open_at(state_path.clone(), Path::new("a.pdf"));
        store.save_search_term("cats");
        store.did_select_match(&match_at(0), 1);
        store.save_search_term("");

        let reopened = SearchStateStore::open_at(state_path, Path::new("a.pdf"));
        assert_eq!(reopened.memory().term, None);
        assert_eq!(reopened.memory().row, None);
    }

    #[test]
    fn test_state_is_keyed_per_document() {
        let dir = tempfile::tempdir().unwrap();
        let state_path = dir.path().join("state.json");

        let mut store = SearchStateStore::open_at(state_path.clone(), Path::new("a.pdf"));
        store.save_search_term("cats");

        let other = SearchStateStore::open_at(state_path, Path::new("b.pdf"));
        assert_eq!(other.memory().term, None);
    }

    #[test]
    fn test_corrupt_state_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let state_path = dir.path().join("state.json");
        fs::write(&state_path, "{not json").unwrap();

        let store = SearchStateStore::open_at(state_path, Path::new("a.pdf"));
        assert_eq!(store.memory().term, None);
    }
}
