use std::time::Duration;

/// Queries shorter than this never reach the geocoding collaborator.
pub const MIN_QUERY_LEN: usize = 2;

/// Quiet period after the last keystroke before a lookup is issued.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Scheduler key for the pending-lookup timer; one timer outstanding at
/// most, superseded ones never fire.
pub const DEBOUNCE_KEY: &str = "suggest";

/// Issue-order bookkeeping for suggestion lookups.
///
/// Every lookup gets a fresh sequence number and only the completion
/// carrying the most recently issued number may touch state. A reply for
/// a superseded request is a stale response and is dropped, which also
/// means it cannot clear the loading flag a newer request set.
#[derive(Debug, Default)]
pub struct SuggestionFetcher {
    next_seq: u64,
    in_flight: Option<u64>,
}

impl SuggestionFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether `query` warrants a lookup. Short queries cancel any
    /// outstanding interest and short-circuit to "no lookup".
    pub fn begin(&mut self, query: &str) -> Option<u64> {
        if query.chars().count() < MIN_QUERY_LEN {
            self.cancel();
            return None;
        }
        self.next_seq += 1;
        self.in_flight = Some(self.next_seq);
        Some(self.next_seq)
    }

    /// Returns true when `seq` is the newest issued lookup; only then may
    /// the caller apply the completion's results.
    pub fn accept(&mut self, seq: u64) -> bool {
        if self.in_flight == Some(seq) {
            self.in_flight = None;
            return true;
        }
        false
    }

    /// Forget the outstanding lookup; its eventual completion will be
    /// rejected by `accept`.
    pub fn cancel(&mut self) {
        self.in_flight = None;
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }
}
