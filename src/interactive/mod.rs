use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::find::FindService;
use self::constants::{
    DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, MIN_QUERY_CHARS, SEARCH_BAR_HEIGHT,
};
use self::domain::models::{DocMatch, FindEvent, FindRequest, SearchMemory};
use self::ui::{
    app_state::AppState,
    commands::Command,
    components::{Component, result_list::ResultList},
    events::Message,
    renderer::Renderer,
    row::{ResultRow, build_row},
};
use crate::document::SearchableDocument;

/// External collaborator of the search screen: receives every accepted (or
/// forgotten) search term for persistence, and the chosen match when the
/// user activates a row.
pub trait SearchDelegate {
    fn did_select_match(&mut self, result: &DocMatch, row: usize);
    fn save_search_term(&mut self, term: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectedMatch {
    pub result: DocMatch,
    pub row: usize,
}

pub struct InteractiveSearch<'a> {
    state: AppState,
    renderer: Renderer,
    rows: Vec<ResultRow>,
    document: Arc<dyn SearchableDocument>,
    find_service: Arc<FindService>,
    delegate: &'a mut dyn SearchDelegate,
    find_sender: Option<Sender<FindRequest>>,
    find_receiver: Option<Receiver<FindEvent>>,
    restore_timer: Option<Instant>,
    restore_delay: Option<u64>,
    last_ctrl_c_press: Option<Instant>,
    outcome: Option<SelectedMatch>,
    should_close: bool,
}

impl<'a> InteractiveSearch<'a> {
    pub fn new(
        document: Arc<dyn SearchableDocument>,
        memory: SearchMemory,
        delegate: &'a mut dyn SearchDelegate,
    ) -> Self {
        let find_service = Arc::new(FindService::new(document.clone()));
        Self {
            state: AppState::new(memory),
            renderer: Renderer::new(),
            rows: Vec::new(),
            document,
            find_service,
            delegate,
            find_sender: None,
            find_receiver: None,
            restore_timer: None,
            restore_delay: None,
            last_ctrl_c_press: None,
            outcome: None,
            should_close: false,
        }
    }

    pub fn run(&mut self) -> Result<Option<SelectedMatch>> {
        let mut terminal = self.setup_terminal()?;

        let (tx, rx) = self.start_find_worker();
        self.find_sender = Some(tx);
        self.find_receiver = Some(rx);

        // A remembered term re-runs its search immediately on open.
        let initial_query = self.state.search.query.clone();
        if initial_query.chars().count() >= MIN_QUERY_CHARS {
            self.handle_message(Message::QueryChanged(initial_query));
        }

        let result = self.run_loop(&mut terminal);

        // Closing the screen cancels whatever find is still in flight.
        self.find_service.cancel();
        self.cleanup_terminal(&mut terminal)?;
        result.map(|_| self.outcome.take())
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            let size = terminal.size()?;
            self.state.search.viewport_rows =
                ResultList::visible_rows(size.height.saturating_sub(SEARCH_BAR_HEIGHT));

            self.sync_rows();
            terminal.draw(|f| {
                self.renderer.render(f, &self.state, &self.rows);
            })?;

            // Drain whatever the scan worker produced since the last frame.
            let mut pending = Vec::new();
            if let Some(receiver) = &self.find_receiver {
                while let Ok(event) = receiver.try_recv() {
                    pending.push(event);
                }
            }
            for event in pending {
                let message = match event {
                    FindEvent::Match { id, result } => Message::MatchFound(id, result),
                    FindEvent::Finished { id } => Message::FindFinished(id),
                };
                self.handle_message(message);
            }

            // Scheduled restoration step.
            if let (Some(timer), Some(delay)) = (self.restore_timer, self.restore_delay) {
                if timer.elapsed() >= Duration::from_millis(delay) {
                    self.restore_timer = None;
                    self.restore_delay = None;
                    self.handle_message(Message::RestoreTick);
                }
            }

            if self.should_close {
                return Ok(());
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_input(key)? {
                        return Ok(());
                    }
                }
            }

            if self.should_close {
                return Ok(());
            }
        }
    }

    /// Keeps the rendered rows in step with the accumulated matches: new
    /// matches are resolved against the document as they arrive, and a
    /// cleared result list drops every row.
    fn sync_rows(&mut self) {
        let results = &self.state.search.results;
        if results.len() < self.rows.len() {
            self.rows.truncate(results.len());
        }
        for result in &results[self.rows.len()..] {
            self.rows.push(build_row(self.document.as_ref(), result));
        }
    }

    fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return Ok(true);
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.message = Some("Press Ctrl+C again to exit".to_string());
            return Ok(false);
        }

        let message = match key.code {
            KeyCode::Esc => Some(Message::CloseRequested),
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::Enter => self.renderer.get_result_list_mut().handle_key(key),
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        };

        if let Some(message) = message {
            self.handle_message(message);
        }
        Ok(false)
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::BeginFind => {
                let id = self.state.search.current_find_id;
                let term = self.state.search.query.clone();
                self.delegate.save_search_term(&term);
                self.find_service.begin(id);
                if let Some(sender) = &self.find_sender {
                    let _ = sender.send(FindRequest { id, term });
                }
            }
            Command::ForgetTerm => {
                self.find_service.cancel();
                self.delegate.save_search_term("");
            }
            Command::ScheduleRestoreStep(delay) => {
                self.restore_timer = Some(Instant::now());
                self.restore_delay = Some(delay);
            }
            Command::FinishSelection(row) => {
                if let Some(result) = self.state.search.results.get(row).cloned() {
                    self.delegate.did_select_match(&result, row);
                    self.outcome = Some(SelectedMatch { result, row });
                }
                self.should_close = true;
            }
            Command::Close => {
                self.should_close = true;
            }
        }
    }

    fn start_find_worker(&self) -> (Sender<FindRequest>, Receiver<FindEvent>) {
        let (request_tx, request_rx) = mpsc::channel::<FindRequest>();
        let (event_tx, event_rx) = mpsc::channel::<FindEvent>();
        let find_service = self.find_service.clone();

        thread::spawn(move || {
            while let Ok(mut request) = request_rx.recv() {
                // Collapse a backlog of requests down to the newest one.
                while let Ok(newer) = request_rx.try_recv() {
                    request = newer;
                }
                find_service.run(&request, &event_tx);
            }
        });

        (request_tx, event_rx)
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }
}
