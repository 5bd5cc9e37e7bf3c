//! Single-step sign-in: `Idle -> Submitting -> Complete`.

use super::backend::Credentials;
use super::error::{AuthError, ValidationError};
use super::form::{first_missing, CredentialField, TextField};
use super::Role;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInStep {
    Idle,
    Submitting,
    Complete,
}

const FIELDS: [CredentialField; 2] = [CredentialField::Email, CredentialField::Password];

#[derive(Debug, Clone)]
pub struct SignInForm {
    step: SignInStep,
    email: TextField,
    password: TextField,
    focus: CredentialField,
}

impl Default for SignInForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignInForm {
    pub fn new() -> Self {
        Self {
            step: SignInStep::Idle,
            email: TextField::new(),
            password: TextField::new(),
            focus: CredentialField::Email,
        }
    }

    pub fn step(&self) -> SignInStep {
        self.step
    }

    pub fn focus(&self) -> CredentialField {
        self.focus
    }

    pub fn fields(&self) -> [CredentialField; 2] {
        FIELDS
    }

    pub fn field(&self, which: CredentialField) -> &TextField {
        match which {
            CredentialField::Password => &self.password,
            _ => &self.email,
        }
    }

    /// Editable only while idle.
    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        if self.step != SignInStep::Idle {
            return None;
        }
        Some(match self.focus {
            CredentialField::Password => &mut self.password,
            _ => &mut self.email,
        })
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            CredentialField::Email => CredentialField::Password,
            _ => CredentialField::Email,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus_next();
    }

    /// Validate and start submitting. `Ok(None)` when not idle.
    pub fn submit(&mut self) -> Result<Option<Credentials>, ValidationError> {
        if self.step != SignInStep::Idle {
            return Ok(None);
        }
        if let Some(missing) = first_missing(FIELDS.map(|f| (f, self.field(f)))) {
            self.focus = missing;
            return Err(ValidationError::MissingField(missing));
        }
        self.step = SignInStep::Submitting;
        info!(email = %self.email.value().trim(), "sign-in submitting");
        Ok(Some(Credentials {
            email: self.email.value().trim().to_string(),
            password: self.password.value().to_string(),
        }))
    }

    pub fn cancel(&mut self) {
        if self.step == SignInStep::Submitting {
            self.step = SignInStep::Idle;
        }
    }

    /// Apply the account service's answer. `None` when no submission was
    /// outstanding.
    pub fn finish(&mut self, result: Result<Role, AuthError>) -> Option<Result<Role, AuthError>> {
        if self.step != SignInStep::Submitting {
            warn!(step = ?self.step, "ignoring sign-in result outside submission");
            return None;
        }
        match &result {
            Ok(role) => {
                self.step = SignInStep::Complete;
                info!(role = %role, "sign-in complete");
            }
            Err(e) => {
                self.step = SignInStep::Idle;
                warn!(error = %e, "sign-in failed");
            }
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> SignInForm {
        let mut form = SignInForm::new();
        for value in [email, password] {
            let field = form.focused_field_mut().unwrap();
            for c in value.chars() {
                field.insert_char(c);
            }
            form.focus_next();
        }
        form
    }

    #[test]
    fn test_missing_password_stays_idle() {
        let mut form = form("jane@x.com", "");
        assert_eq!(
            form.submit(),
            Err(ValidationError::MissingField(CredentialField::Password))
        );
        assert_eq!(form.step(), SignInStep::Idle);
        assert_eq!(form.focus(), CredentialField::Password);
    }

    #[test]
    fn test_sign_in_happy_path() {
        let mut form = form(" jane@x.com ", "pw");
        let creds = form.submit().unwrap().unwrap();
        assert_eq!(creds.email, "jane@x.com");
        assert_eq!(form.step(), SignInStep::Submitting);
        assert!(form.focused_field_mut().is_none());

        // A second Enter while waiting does nothing.
        assert_eq!(form.submit(), Ok(None));

        assert_eq!(form.finish(Ok(Role::Advertiser)), Some(Ok(Role::Advertiser)));
        assert_eq!(form.step(), SignInStep::Complete);
    }

    #[test]
    fn test_rejected_sign_in_returns_to_idle() {
        let mut form = form("jane@x.com", "pw");
        form.submit().unwrap();
        let result = form.finish(Err(AuthError::Unavailable("offline mode".into())));
        assert!(matches!(result, Some(Err(AuthError::Unavailable(_)))));
        assert_eq!(form.step(), SignInStep::Idle);
        assert_eq!(form.field(CredentialField::Email).value(), "jane@x.com");
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut form = form("jane@x.com", "pw");
        form.submit().unwrap();
        form.cancel();
        assert_eq!(form.step(), SignInStep::Idle);
        assert_eq!(form.finish(Ok(Role::Developer)), None);
    }
}
