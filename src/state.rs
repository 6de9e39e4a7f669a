use crate::error::FetchError;
use crate::time_client::{FetchOutcome, TimeRecord};

/// What the screen should currently be showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the very first record
    Loading,
    /// The last completed fetch failed
    Error,
    /// A record is on screen
    Success,
}

/// Screen state: the current record, the in-flight flag and the last error.
///
/// Updated only through the reducer methods below. Outcomes are applied in
/// completion order, so the most recent completed fetch always wins.
#[derive(Debug, Clone, Default)]
pub struct TimeState {
    /// Last successfully fetched record, kept across later failures
    pub record: Option<TimeRecord>,
    /// A fetch is currently outstanding
    pub is_loading: bool,
    /// Error from the last completed fetch, cleared on the next start or success
    pub error: Option<FetchError>,
}

impl TimeState {
    /// A fetch has started.
    pub fn fetch_started(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// A fetch completed. Success replaces the record wholesale and clears
    /// any stale error; failure records the error and keeps the last-known
    /// record on screen.
    pub fn fetch_finished(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(record) => {
                self.record = Some(record);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e);
            }
        }
        self.is_loading = false;
    }

    /// Derives the phase the way the screen dispatches: loading only counts
    /// while there is nothing to show yet.
    pub fn phase(&self) -> Phase {
        if self.is_loading && self.record.is_none() {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.record.is_some() {
            Phase::Success
        } else {
            Phase::Loading
        }
    }
}
