use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;

use tracing::debug;

use crate::document::SearchableDocument;
use crate::interactive::domain::models::{DocMatch, FindEvent, FindRequest};
use crate::interactive::domain::snippet::find_ignore_case;

/// Case-insensitive substring find over a document, reporting matches one at
/// a time through a channel. Runs on the scan worker thread; `begin`/`cancel`
/// are called from the UI thread and take effect between matches.
pub struct FindService {
    document: Arc<dyn SearchableDocument>,
    latest_id: AtomicU64,
}

impl FindService {
    pub fn new(document: Arc<dyn SearchableDocument>) -> Self {
        Self {
            document,
            latest_id: AtomicU64::new(0),
        }
    }

    /// Marks `id` as the only find whose events are still wanted. Any scan
    /// carrying another id aborts at its next check.
    pub fn begin(&self, id: u64) {
        self.latest_id.store(id, Ordering::SeqCst);
    }

    /// Invalidates every outstanding find without starting a new one.
    pub fn cancel(&self) {
        self.latest_id.fetch_add(1, Ordering::SeqCst);
    }

    fn superseded(&self, id: u64) -> bool {
        self.latest_id.load(Ordering::SeqCst) != id
    }

    pub fn run(&self, request: &FindRequest, events: &Sender<FindEvent>) {
        let mut found = 0usize;
        for page_index in 0..self.document.page_count() {
            if self.superseded(request.id) {
                debug!(id = request.id, "find superseded, aborting scan");
                return;
            }
            let Some(text) = self.document.page_text(page_index) else {
                continue;
            };
            let mut from = 0;
            while let Some(range) = find_ignore_case(text, &request.term, from) {
                if self.superseded(request.id) {
                    debug!(id = request.id, "find superseded, aborting scan");
                    return;
                }
                from = range.end;
                let result = DocMatch {
                    page_index,
                    text: text[range.clone()].to_string(),
                    range,
                };
                found += 1;
                if events
                    .send(FindEvent::Match {
                        id: request.id,
                        result,
                    })
                    .is_err()
                {
                    return;
                }
            }
        }
        debug!(id = request.id, term = %request.term, found, "find finished");
        let _ = events.send(FindEvent::Finished { id: request.id });
    }
}
