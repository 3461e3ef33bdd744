use crate::interactive::constants::{MIN_QUERY_CHARS, PAGE_SIZE, RESTORE_STEP_DELAY_MS};
use crate::interactive::domain::models::{DocMatch, RestorePhase, SearchMemory};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;

pub struct AppState {
    pub search: SearchState,
    pub restore: RestoreState,
    pub message: Option<String>,
}

pub struct SearchState {
    pub query: String,
    /// Matches in arrival order. Cleared synchronously whenever the query
    /// changes, so a superseded find can never append to a live list even if
    /// one of its events slipped through.
    pub results: Vec<DocMatch>,
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    /// Rows currently on screen; refreshed by the event loop each frame.
    pub viewport_rows: usize,
    pub is_searching: bool,
    /// Generation token: events carrying any other id are dropped.
    pub current_find_id: u64,
}

pub struct RestoreState {
    pub phase: RestorePhase,
    /// Row currently drawn with the flash highlight, if any.
    pub flash_row: Option<usize>,
}

impl AppState {
    pub fn new(memory: SearchMemory) -> Self {
        let query = memory.term.clone().unwrap_or_default();
        // The restoration sequence only arms when the screen reopens with
        // both a runnable term and a remembered row.
        let phase = match (memory.term.as_deref(), memory.row) {
            (Some(term), Some(row)) if term.chars().count() >= MIN_QUERY_CHARS => {
                RestorePhase::Pending { row }
            }
            _ => RestorePhase::Idle,
        };
        Self {
            search: SearchState {
                query,
                results: Vec::new(),
                selected: None,
                scroll_offset: 0,
                viewport_rows: PAGE_SIZE,
                is_searching: false,
                current_find_id: 0,
            },
            restore: RestoreState {
                phase,
                flash_row: None,
            },
            message: None,
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(query) => {
                self.search.query = query;
                self.search.results.clear();
                self.search.selected = None;
                self.search.scroll_offset = 0;
                if self.search.query.chars().count() < MIN_QUERY_CHARS {
                    self.search.is_searching = false;
                    Command::ForgetTerm
                } else {
                    self.search.is_searching = true;
                    self.search.current_find_id += 1;
                    Command::BeginFind
                }
            }
            Message::MatchFound(id, result) => {
                if id != self.search.current_find_id {
                    return Command::None;
                }
                self.search.results.push(result);
                if let RestorePhase::Pending { row } = self.restore.phase {
                    self.restore.phase = RestorePhase::AwaitingScroll { row };
                    return Command::ScheduleRestoreStep(RESTORE_STEP_DELAY_MS);
                }
                Command::None
            }
            Message::FindFinished(id) => {
                if id == self.search.current_find_id {
                    self.search.is_searching = false;
                }
                Command::None
            }
            Message::SelectRow(row) => {
                if row < self.search.results.len() {
                    self.search.selected = Some(row);
                    self.ensure_row_visible(row);
                }
                Command::None
            }
            Message::RowActivated => match self.search.selected {
                Some(row) if row < self.search.results.len() => Command::FinishSelection(row),
                _ => Command::None,
            },
            Message::RestoreTick => self.advance_restore(),
            Message::CloseRequested => Command::Close,
        }
    }

    /// One timer-driven step of the scroll/flash restoration sequence. Each
    /// step re-validates its precondition; when it no longer holds the
    /// machine goes inert instead of acting on a vanished row.
    fn advance_restore(&mut self) -> Command {
        match self.restore.phase {
            RestorePhase::AwaitingScroll { row } => {
                if row < self.search.results.len() {
                    self.search.scroll_offset = row;
                    self.search.selected = Some(row);
                    self.restore.phase = RestorePhase::AwaitingFlash { row };
                    Command::ScheduleRestoreStep(RESTORE_STEP_DELAY_MS)
                } else {
                    self.restore.phase = RestorePhase::Done;
                    Command::None
                }
            }
            RestorePhase::AwaitingFlash { row } => {
                if self.is_row_visible(row) {
                    self.restore.flash_row = Some(row);
                    self.restore.phase = RestorePhase::AwaitingDeselect;
                    Command::ScheduleRestoreStep(RESTORE_STEP_DELAY_MS)
                } else {
                    self.restore.phase = RestorePhase::Done;
                    Command::None
                }
            }
            RestorePhase::AwaitingDeselect => {
                self.restore.flash_row = None;
                self.search.selected = None;
                self.restore.phase = RestorePhase::Done;
                Command::None
            }
            RestorePhase::Idle | RestorePhase::Pending { .. } | RestorePhase::Done => Command::None,
        }
    }

    pub fn is_row_visible(&self, row: usize) -> bool {
        row < self.search.results.len()
            && row >= self.search.scroll_offset
            && row < self.search.scroll_offset + self.search.viewport_rows.max(1)
    }

    fn ensure_row_visible(&mut self, row: usize) {
        let rows = self.search.viewport_rows.max(1);
        if row < self.search.scroll_offset {
            self.search.scroll_offset = row;
        } else if row >= self.search.scroll_offset + rows {
            self.search.scroll_offset = row + 1 - rows;
        }
    }
}
