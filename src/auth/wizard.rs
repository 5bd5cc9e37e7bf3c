//! Two-step sign-up: credentials, then account type.
//!
//! ```text
//! Credentials --submit (all fields present)--> RoleSelection
//! RoleSelection --confirm (role chosen)-----> Submitting
//! RoleSelection --back----------------------> Credentials
//! Submitting --account call ok--------------> Complete
//! Submitting --account call failed/cancel---> RoleSelection
//! ```
//!
//! Validation failures leave the step unchanged.

use super::backend::Registration;
use super::error::{AuthError, ValidationError};
use super::form::{first_missing, CredentialField, TextField};
use super::Role;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpStep {
    Credentials,
    RoleSelection,
    Submitting,
    Complete,
}

const FIELDS: [CredentialField; 3] = [
    CredentialField::Name,
    CredentialField::Email,
    CredentialField::Password,
];

#[derive(Debug, Clone)]
pub struct SignUpWizard {
    step: SignUpStep,
    name: TextField,
    email: TextField,
    password: TextField,
    focus: CredentialField,
    role: Option<Role>,
}

impl Default for SignUpWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpWizard {
    pub fn new() -> Self {
        Self {
            step: SignUpStep::Credentials,
            name: TextField::new(),
            email: TextField::new(),
            password: TextField::new(),
            focus: CredentialField::Name,
            role: None,
        }
    }

    pub fn step(&self) -> SignUpStep {
        self.step
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn focus(&self) -> CredentialField {
        self.focus
    }

    pub fn fields(&self) -> [CredentialField; 3] {
        FIELDS
    }

    pub fn field(&self, which: CredentialField) -> &TextField {
        match which {
            CredentialField::Name => &self.name,
            CredentialField::Email => &self.email,
            CredentialField::Password => &self.password,
        }
    }

    /// The field receiving keystrokes, if the credentials step is showing.
    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        if self.step != SignUpStep::Credentials {
            return None;
        }
        Some(match self.focus {
            CredentialField::Name => &mut self.name,
            CredentialField::Email => &mut self.email,
            CredentialField::Password => &mut self.password,
        })
    }

    pub fn focus_next(&mut self) {
        let idx = FIELDS.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = FIELDS[(idx + 1) % FIELDS.len()];
    }

    pub fn focus_prev(&mut self) {
        let idx = FIELDS.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = FIELDS[(idx + FIELDS.len() - 1) % FIELDS.len()];
    }

    /// Leave step one. Ignored outside the credentials step.
    pub fn submit_credentials(&mut self) -> Result<(), ValidationError> {
        if self.step != SignUpStep::Credentials {
            return Ok(());
        }
        if let Some(missing) = first_missing(FIELDS.map(|f| (f, self.field(f)))) {
            self.focus = missing;
            return Err(ValidationError::MissingField(missing));
        }
        self.step = SignUpStep::RoleSelection;
        debug!("sign-up advanced to role selection");
        Ok(())
    }

    /// Pick an account type. Only meaningful on the role step.
    pub fn select_role(&mut self, role: Role) {
        if self.step == SignUpStep::RoleSelection {
            self.role = Some(role);
        }
    }

    /// Move the role choice to the other option (first choice is advertiser).
    pub fn toggle_role(&mut self) {
        let next = self.role.map(Role::other).unwrap_or(Role::Advertiser);
        self.select_role(next);
    }

    /// Confirm the role step. On success the wizard is `Submitting` and the
    /// returned payload should be handed to the account service. Returns
    /// `Ok(None)` outside the role step.
    pub fn confirm(&mut self) -> Result<Option<Registration>, ValidationError> {
        if self.step != SignUpStep::RoleSelection {
            return Ok(None);
        }
        let role = self.role.ok_or(ValidationError::RoleNotSelected)?;
        self.step = SignUpStep::Submitting;
        info!(role = %role, "sign-up submitting");
        Ok(Some(Registration {
            name: self.name.value().trim().to_string(),
            email: self.email.value().trim().to_string(),
            password: self.password.value().to_string(),
            role,
        }))
    }

    /// Enter on whichever step is showing.
    pub fn submit(&mut self) -> Result<Option<Registration>, ValidationError> {
        match self.step {
            SignUpStep::Credentials => self.submit_credentials().map(|_| None),
            SignUpStep::RoleSelection => self.confirm(),
            SignUpStep::Submitting | SignUpStep::Complete => Ok(None),
        }
    }

    /// Return to the credentials step. Field values and the role are kept.
    pub fn back(&mut self) {
        if self.step == SignUpStep::RoleSelection {
            self.step = SignUpStep::Credentials;
        }
    }

    /// Restart at the credentials step, e.g. when the sign-up tab is
    /// re-entered. Ignored while a submission is outstanding.
    pub fn restart(&mut self) {
        if self.step != SignUpStep::Submitting {
            self.step = SignUpStep::Credentials;
        }
    }

    /// Abandon the outstanding submission.
    pub fn cancel(&mut self) {
        if self.step == SignUpStep::Submitting {
            self.step = SignUpStep::RoleSelection;
            debug!("sign-up submission cancelled");
        }
    }

    /// Apply the account service's answer. `None` means the wizard was not
    /// waiting for one and nothing changed.
    pub fn finish(&mut self, result: Result<Role, AuthError>) -> Option<Result<Role, AuthError>> {
        if self.step != SignUpStep::Submitting {
            warn!(step = ?self.step, "ignoring sign-up result outside submission");
            return None;
        }
        // Submitting is only reachable through `confirm`, which requires a role.
        let role = self.role?;
        match result {
            Ok(_) => {
                self.step = SignUpStep::Complete;
                info!(role = %role, "sign-up complete");
                Some(Ok(role))
            }
            Err(e) => {
                self.step = SignUpStep::RoleSelection;
                warn!(error = %e, "sign-up failed");
                Some(Err(e))
            }
        }
    }
}
