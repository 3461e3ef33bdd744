#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    /// Cancel any outstanding find and start a new one for the current query.
    BeginFind,
    /// Cancel any outstanding find and persist an empty term ("forget").
    ForgetTerm,
    /// Run the next restoration step after this many milliseconds.
    ScheduleRestoreStep(u64),
    /// Report the match at this row to the delegate and close the screen.
    FinishSelection(usize),
    Close,
}
