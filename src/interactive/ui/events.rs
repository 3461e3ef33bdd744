use crate::interactive::domain::models::DocMatch;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Search events
    QueryChanged(String),
    /// The scan worker reported one match for the find with this id.
    MatchFound(u64, DocMatch),
    FindFinished(u64),

    // List events
    SelectRow(usize),
    RowActivated,

    // Restoration timer
    RestoreTick,

    // Screen lifecycle
    CloseRequested,
}
