use std::fmt;

use serde::{Deserialize, Serialize};

/// Text input of the auth form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthField {
    Email,
    Password,
    ConfirmPassword,
}

impl AuthField {
    /// DOM id of the input element
    pub fn id(&self) -> &'static str {
        match self {
            AuthField::Email => "email",
            AuthField::Password => "password",
            AuthField::ConfirmPassword => "confirm-password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            AuthField::Email => "Email",
            AuthField::Password => "Password",
            AuthField::ConfirmPassword => "Confirm Password",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            AuthField::Email => "email",
            AuthField::Password | AuthField::ConfirmPassword => "password",
        }
    }

    /// Password-type inputs hide what is typed
    pub fn is_masked(&self) -> bool {
        matches!(self, AuthField::Password | AuthField::ConfirmPassword)
    }

    pub fn autocomplete(&self) -> &'static str {
        match self {
            AuthField::Email => "email",
            AuthField::Password => "current-password",
            AuthField::ConfirmPassword => "new-password",
        }
    }

    /// Emails are typed as-is; the on-screen keyboard must not capitalize them
    pub fn autocapitalize(&self) -> &'static str {
        match self {
            AuthField::Email => "none",
            AuthField::Password | AuthField::ConfirmPassword => "off",
        }
    }
}

impl fmt::Display for AuthField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.placeholder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_password_fields_are_masked() {
        assert!(!AuthField::Email.is_masked());
        assert!(AuthField::Password.is_masked());
        assert!(AuthField::ConfirmPassword.is_masked());
        assert_eq!(AuthField::ConfirmPassword.input_type(), "password");
    }
}
