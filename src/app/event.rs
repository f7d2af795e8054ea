use crate::dictionary::error::LookupError;
use crate::dictionary::model::DictionaryEntry;
use crossterm::event::Event as CrosstermEvent;

/// Identifies one submission. Allocated in increasing order by `AppState`.
pub type RequestId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A spawned lookup finished, successfully or not
    LookupFinished {
        request_id: RequestId,
        word: String,
        outcome: Result<Vec<DictionaryEntry>, LookupError>,
    },

    /// Tick for spinner animation
    Tick,
}
