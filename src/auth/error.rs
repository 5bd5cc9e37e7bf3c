use super::form::CredentialField;
use thiserror::Error;

/// Local input problems. Shown to the user; the flow stays where it is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields ({} is missing)", .0.label())]
    MissingField(CredentialField),

    #[error("Please select an account type")]
    RoleNotSelected,
}

/// Failure of the account call itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("The request timed out")]
    Timeout,

    #[error("Account service unavailable: {0}")]
    Unavailable(String),
}
