use std::ops::Range;

use serde::{Deserialize, Serialize};

/// One engine-reported match location: a page plus the byte range of the
/// matched text inside that page's extracted text. Matches arrive one at a
/// time, in scan order, and are immutable once received.
#[derive(Clone, Debug, PartialEq)]
pub struct DocMatch {
    pub page_index: usize,
    pub range: Range<usize>,
    /// The exact matched substring, as it appears in the page text.
    pub text: String,
}

// Find request and events for async communication with the scan worker.
#[derive(Clone, Debug)]
pub struct FindRequest {
    pub id: u64,
    pub term: String,
}

#[derive(Debug)]
pub enum FindEvent {
    Match { id: u64, result: DocMatch },
    Finished { id: u64 },
}

/// Phases of the one-shot scroll/flash restoration sequence that runs when
/// the screen reopens with a remembered term and row. Once `Done`, the
/// machine is inert for the rest of the screen's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RestorePhase {
    /// Nothing to restore.
    Idle,
    /// Armed; waiting for the first match of the re-run search.
    Pending { row: usize },
    /// Scroll to the remembered row after the step delay.
    AwaitingScroll { row: usize },
    /// Flash the row after the step delay, if it is still visible.
    AwaitingFlash { row: usize },
    /// Clear whatever selection remains after the step delay.
    AwaitingDeselect,
    Done,
}

/// What the persistence collaborator remembers about a document between
/// openings of the search screen.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMemory {
    pub term: Option<String>,
    pub row: Option<usize>,
}
