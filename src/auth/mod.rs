//! Sign-in and sign-up flows.
//!
//! Both flows are plain state machines over form fields. The account call
//! itself goes through an injected [`AuthBackend`] and runs as a cancellable
//! [`Submission`] task; its result is fed back into the flow that started it.

pub mod backend;
pub mod error;
pub mod form;
pub mod sign_in;
pub mod submission;
pub mod wizard;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use backend::{AuthBackend, SimulatedBackend};
pub use error::ValidationError;
pub use form::{CredentialField, TextField};
pub use sign_in::{SignInForm, SignInStep};
pub use submission::{SubmitRequest, Submission, SubmissionId, SubmissionOutcome};
pub use wizard::{SignUpStep, SignUpWizard};

/// Account type chosen at sign-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Role {
    Advertiser,
    Developer,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Advertiser, Role::Developer];

    /// Persisted form.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Advertiser => "advertiser",
            Role::Developer => "developer",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Role::Advertiser => "Advertiser",
            Role::Developer => "Game Developer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Role::Advertiser => {
                "Showcase your products to game developers for in-game integration."
            }
            Role::Developer => "Find products to integrate into your games and monetize them.",
        }
    }

    pub fn other(self) -> Role {
        match self {
            Role::Advertiser => Role::Developer,
            Role::Developer => Role::Advertiser,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown account type: {0}")]
pub struct UnknownRole(String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "advertiser" => Ok(Role::Advertiser),
            "developer" => Ok(Role::Developer),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
