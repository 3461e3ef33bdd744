use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::interactive::constants::PAGE_SIZE;
use crate::interactive::domain::snippet::Snippet;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crate::interactive::ui::row::ResultRow;

/// The result table. Each row renders as two lines: the destination label
/// (outline + page) and the snippet with its match highlighted. Rows,
/// selection, scroll and flash state are pushed in from `AppState` every
/// frame; key handling only proposes changes as messages.
#[derive(Default)]
pub struct ResultList {
    rows: Vec<ResultRow>,
    selected: Option<usize>,
    scroll_offset: usize,
    flash_row: Option<usize>,
    is_searching: bool,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rows(&mut self, rows: Vec<ResultRow>) {
        self.rows = rows;
    }

    pub fn set_selected(&mut self, selected: Option<usize>) {
        self.selected = selected;
    }

    pub fn set_scroll_offset(&mut self, scroll_offset: usize) {
        self.scroll_offset = scroll_offset;
    }

    pub fn set_flash_row(&mut self, flash_row: Option<usize>) {
        self.flash_row = flash_row;
    }

    pub fn set_searching(&mut self, is_searching: bool) {
        self.is_searching = is_searching;
    }

    /// How many two-line rows fit in a list area of this height.
    pub fn visible_rows(list_height: u16) -> usize {
        (list_height.saturating_sub(2) / 2) as usize
    }

    fn move_to(&self, target: usize) -> Option<Message> {
        if target < self.rows.len() && self.selected != Some(target) {
            Some(Message::SelectRow(target))
        } else {
            None
        }
    }

    fn row_style(&self, row_index: usize) -> Style {
        if self.flash_row == Some(row_index) {
            Style::default().add_modifier(Modifier::REVERSED)
        } else if self.selected == Some(row_index) {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }
}

fn snippet_line(snippet: &Snippet, base: Style) -> Line<'static> {
    // Same byte length, so the highlight range stays valid.
    let flat = snippet.text.replace('\n', " ");
    match &snippet.highlight {
        Some(range)
            if range.end <= flat.len()
                && flat.is_char_boundary(range.start)
                && flat.is_char_boundary(range.end) =>
        {
            let before = flat[..range.start].to_string();
            let matched = flat[range.clone()].to_string();
            let after = flat[range.end..].to_string();
            Line::from(vec![
                Span::styled(before, base),
                Span::styled(matched, base.bg(Color::Yellow).fg(Color::Black)),
                Span::styled(after, base),
            ])
        }
        _ => Line::from(Span::styled(flat, base)),
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let title = if self.is_searching {
            format!("Results ({}) [searching...]", self.rows.len())
        } else {
            format!("Results ({})", self.rows.len())
        };
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        if self.rows.is_empty() {
            let placeholder = Paragraph::new("No matches")
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(placeholder, inner);
            return;
        }

        let capacity = (inner.height / 2) as usize;
        let mut lines: Vec<Line> = Vec::new();
        for (row_index, row) in self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(capacity)
        {
            let style = self.row_style(row_index);
            lines.push(Line::from(Span::styled(
                row.destination.clone(),
                style.fg(Color::Cyan),
            )));
            lines.push(snippet_line(&row.snippet, style));
        }
        f.render_widget(Paragraph::new(lines), inner);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.rows.is_empty() {
            return None;
        }
        let last = self.rows.len() - 1;
        match key.code {
            KeyCode::Up => match self.selected {
                Some(row) if row > 0 => self.move_to(row - 1),
                Some(_) => None,
                None => self.move_to(0),
            },
            KeyCode::Down => match self.selected {
                Some(row) => self.move_to(row + 1),
                None => self.move_to(0),
            },
            KeyCode::PageUp => match self.selected {
                Some(row) => self.move_to(row.saturating_sub(PAGE_SIZE)),
                None => self.move_to(0),
            },
            KeyCode::PageDown => match self.selected {
                Some(row) => self.move_to((row + PAGE_SIZE).min(last)),
                None => self.move_to(0),
            },
            KeyCode::Home => self.move_to(0),
            KeyCode::End => self.move_to(last),
            KeyCode::Enter => self.selected.map(|_| Message::RowActivated),
            _ => None,
        }
    }
}
