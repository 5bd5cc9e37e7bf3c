use crate::auth::SubmissionOutcome;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// An account call finished (or timed out)
    AuthFinished(SubmissionOutcome),

    /// Tick for UI refresh and toast expiry
    Tick,
}
