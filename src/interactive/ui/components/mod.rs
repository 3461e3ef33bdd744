pub mod result_list;
pub mod search_bar;

#[cfg(test)]
mod result_list_test;
#[cfg(test)]
mod search_bar_test;

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::interactive::ui::events::Message;

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}
