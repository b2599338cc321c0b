//! Browse result types

/// How a browse session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `q`
    Quit,
    /// Input ran out
    EndOfInput,
}

/// Summary of a finished browse session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseResult {
    /// Input lines read, including the final `q`
    pub commands: usize,
    /// Lines that were rejected as invalid input or an invalid number
    pub rejected: usize,
    /// Ranking lookups that returned a ranking
    pub searches: usize,
    /// Ranking lookups that failed
    pub failed_searches: usize,
    pub ended_by: SessionEnd,
}

impl BrowseResult {
    pub(super) fn new() -> Self {
        Self {
            commands: 0,
            rejected: 0,
            searches: 0,
            failed_searches: 0,
            ended_by: SessionEnd::EndOfInput,
        }
    }
}
