use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::interactive::constants::SEARCH_BAR_HEIGHT;
use crate::interactive::ui::app_state::AppState;
use crate::interactive::ui::components::{
    Component, result_list::ResultList, search_bar::SearchBar,
};
use crate::interactive::ui::row::ResultRow;

pub struct Renderer {
    search_bar: SearchBar,
    result_list: ResultList,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            result_list: ResultList::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState, rows: &[ResultRow]) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(SEARCH_BAR_HEIGHT), Constraint::Min(0)])
            .split(f.area());

        self.search_bar.set_query(state.search.query.clone());
        self.search_bar.set_searching(state.search.is_searching);
        self.search_bar.set_message(state.message.clone());

        self.result_list.set_rows(rows.to_vec());
        self.result_list.set_selected(state.search.selected);
        self.result_list.set_scroll_offset(state.search.scroll_offset);
        self.result_list.set_flash_row(state.restore.flash_row);
        self.result_list.set_searching(state.search.is_searching);

        self.search_bar.render(f, chunks[0]);
        self.result_list.render(f, chunks[1]);
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
