/// What an update step did with a completed backend call.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Applied,
    Unchanged,
    Skipped,
    /// Result arrived after being superseded or after teardown; discarded.
    Stale,
}
