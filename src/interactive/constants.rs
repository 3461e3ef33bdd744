//! Timing and layout constants for the interactive search screen.

/// Minimum query length (in characters) before a find is started.
pub const MIN_QUERY_CHARS: usize = 2;

/// Characters of context pulled in before a match when building its snippet.
pub const SNIPPET_CHARS_BEFORE: usize = 10;

/// Characters of context pulled in after a match when building its snippet.
pub const SNIPPET_CHARS_AFTER: usize = 90;

/// Delay between the steps of the scroll/flash restoration sequence.
pub const RESTORE_STEP_DELAY_MS: u64 = 500;

/// Event polling interval in milliseconds.
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Height of the search bar component.
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Rows jumped by PageUp/PageDown navigation.
pub const PAGE_SIZE: usize = 10;

/// Double Ctrl+C timeout in seconds.
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;
