use gobarber_core::profile::{FieldErrors, ProfileField, ProfileFormInput};
use gobarber_core::security::SecureCredential;
use gobarber_core::users::UserRecord;

/// Where the last submission got to
///
/// `Invalid`, `Succeeded` and `Failed` are terminal; the next submit starts
/// over from `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

/// Profile form as rendered
#[derive(Debug, Clone, Default)]
pub struct ProfileFormState {
    pub name: String,
    pub email: String,
    pub old_password: SecureCredential,
    pub password: SecureCredential,
    pub password_confirmation: SecureCredential,
    /// Inline messages under each input
    pub errors: FieldErrors,
    pub phase: SubmissionPhase,
}

impl ProfileFormState {
    /// Seed the form with the signed-in user's name and email
    pub fn from_user(user: &UserRecord) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            ..Self::default()
        }
    }

    /// Handle an input change. The field's inline error goes away once the
    /// user edits it.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::OldPassword => self.old_password = value.into(),
            ProfileField::Password => self.password = value.into(),
            ProfileField::PasswordConfirmation => {
                self.password_confirmation = value.into()
            }
        }
        self.errors.remove(field);
    }

    pub fn error(&self, field: ProfileField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Snapshot of the current values for one submission
    pub fn to_input(&self) -> ProfileFormInput {
        ProfileFormInput {
            name: self.name.clone(),
            email: self.email.clone(),
            old_password: self.old_password.clone(),
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
        }
    }

    pub fn clear_passwords(&mut self) {
        self.old_password = SecureCredential::empty();
        self.password = SecureCredential::empty();
        self.password_confirmation = SecureCredential::empty();
    }
}
