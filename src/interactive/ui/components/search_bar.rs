use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;

/// Single-line query input. Owns the cursor; the query itself is pushed in
/// from `AppState` every frame so external resets (remembered term on open)
/// show up without extra wiring.
#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor: usize,
    is_searching: bool,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: String) {
        if query != self.query {
            self.query = query;
            self.cursor = self.query.chars().count();
        }
    }

    pub fn set_searching(&mut self, is_searching: bool) {
        self.is_searching = is_searching;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    #[allow(dead_code)]
    pub fn query(&self) -> &str {
        &self.query
    }

    fn byte_at(&self, char_pos: usize) -> usize {
        self.query
            .chars()
            .take(char_pos)
            .map(char::len_utf8)
            .sum()
    }

    fn char_count(&self) -> usize {
        self.query.chars().count()
    }

    fn delete_chars(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.char_count() {
            return false;
        }
        let byte_start = self.byte_at(start);
        let byte_end = self.byte_at(end);
        self.query.drain(byte_start..byte_end);
        self.cursor = start;
        true
    }

    fn prev_word_boundary(&self) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = self.cursor;
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        pos
    }

    fn changed(&self) -> Option<Message> {
        Some(Message::QueryChanged(self.query.clone()))
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let cursor_byte = self.byte_at(self.cursor);
        let (before, after) = self.query.split_at(cursor_byte);
        let cursor_char = after.chars().next().unwrap_or(' ').to_string();
        let rest: String = after.chars().skip(1).collect();

        let input = vec![
            Span::raw(before.to_string()),
            Span::styled(cursor_char, Style::default().bg(Color::White).fg(Color::Black)),
            Span::raw(rest),
        ];

        let mut title = "Search".to_string();
        if self.is_searching {
            title.push_str(" [searching...]");
        }
        if let Some(message) = &self.message {
            title.push_str(&format!(" - {message}"));
        }

        let widget = Paragraph::new(Line::from(input))
            .block(Block::default().title(title).borders(Borders::ALL))
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(widget, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    return None;
                }
                KeyCode::Char('e') => {
                    self.cursor = self.char_count();
                    return None;
                }
                KeyCode::Char('u') => {
                    if self.delete_chars(0, self.cursor) {
                        return self.changed();
                    }
                    return None;
                }
                KeyCode::Char('k') => {
                    let len = self.char_count();
                    if self.delete_chars(self.cursor, len) {
                        return self.changed();
                    }
                    return None;
                }
                KeyCode::Char('w') => {
                    let start = self.prev_word_boundary();
                    if self.delete_chars(start, self.cursor) {
                        return self.changed();
                    }
                    return None;
                }
                _ => return None,
            }
        }

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                let byte_pos = self.byte_at(self.cursor);
                self.query.insert(byte_pos, c);
                self.cursor += 1;
                self.changed()
            }
            KeyCode::Backspace => {
                if self.cursor > 0 && self.delete_chars(self.cursor - 1, self.cursor) {
                    self.changed()
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                if self.delete_chars(self.cursor, self.cursor + 1) {
                    self.changed()
                } else {
                    None
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor < self.char_count() {
                    self.cursor += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                None
            }
            _ => None,
        }
    }
}
