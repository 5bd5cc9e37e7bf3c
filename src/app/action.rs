use crate::auth::{Role, SubmissionId, SubmitRequest};

/// Side effects requested by the handler and carried out by the main loop.
#[derive(Debug)]
pub enum Action {
    /// Start an account call and attach it to the auth screen.
    Submit { id: SubmissionId, request: SubmitRequest },
    /// Write the logged-in flag and role to the session store.
    PersistLogin { role: Role },
    /// Clear the session store.
    Logout,
    Quit,
}
