use std::fmt;

use serde::{Deserialize, Serialize};

use super::action::{AuthAction, AuthLink};
use super::field::AuthField;

/// Вкладка экрана авторизации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
    Forgot,
}

impl AuthTab {
    /// Stable code, used in config files and CSS modifiers
    pub fn code(&self) -> &'static str {
        match self {
            AuthTab::Login => "login",
            AuthTab::Signup => "signup",
            AuthTab::Forgot => "forgot",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "login" => Some(AuthTab::Login),
            "signup" => Some(AuthTab::Signup),
            "forgot" => Some(AuthTab::Forgot),
            _ => None,
        }
    }

    pub fn all() -> [AuthTab; 3] {
        [AuthTab::Login, AuthTab::Signup, AuthTab::Forgot]
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthTab::Login => "Welcome Back!",
            AuthTab::Signup => "Create Account",
            AuthTab::Forgot => "Reset Password",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            AuthTab::Login => "Sign in to continue",
            AuthTab::Signup => "Sign up to get started",
            AuthTab::Forgot => {
                "Enter your email address and we'll send you a link to reset your password."
            }
        }
    }

    /// Text shown in front of the footer link
    pub fn footer_prompt(&self) -> Option<&'static str> {
        match self {
            AuthTab::Login => Some("Don't have an account? "),
            AuthTab::Signup => Some("Already have an account? "),
            AuthTab::Forgot => None,
        }
    }

    /// Input fields shown on this tab, in render order
    pub fn fields(&self) -> &'static [AuthField] {
        match self {
            AuthTab::Login => &[AuthField::Email, AuthField::Password],
            AuthTab::Signup => &[
                AuthField::Email,
                AuthField::Password,
                AuthField::ConfirmPassword,
            ],
            AuthTab::Forgot => &[AuthField::Email],
        }
    }

    /// Navigation links shown on this tab, in render order
    pub fn links(&self) -> &'static [AuthLink] {
        match self {
            AuthTab::Login => &[AuthLink::ForgotPassword, AuthLink::SignUp],
            AuthTab::Signup => &[AuthLink::SignIn],
            AuthTab::Forgot => &[AuthLink::BackToSignIn],
        }
    }

    /// Submit buttons shown on this tab, in render order
    pub fn actions(&self) -> &'static [AuthAction] {
        match self {
            AuthTab::Login => &[AuthAction::SignIn, AuthAction::ContinueWithGoogle],
            AuthTab::Signup => &[AuthAction::CreateAccount, AuthAction::ContinueWithGoogle],
            AuthTab::Forgot => &[AuthAction::SendResetLink],
        }
    }

    pub fn shows_field(&self, field: AuthField) -> bool {
        self.fields().contains(&field)
    }

    pub fn shows_link(&self, link: AuthLink) -> bool {
        self.links().contains(&link)
    }

    pub fn shows_action(&self, action: AuthAction) -> bool {
        self.actions().contains(&action)
    }
}

impl fmt::Display for AuthTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_login() {
        assert_eq!(AuthTab::default(), AuthTab::Login);
    }

    #[test]
    fn test_code_roundtrip() {
        for tab in AuthTab::all() {
            assert_eq!(AuthTab::from_code(tab.code()), Some(tab));
        }
        assert_eq!(AuthTab::from_code("register"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&AuthTab::Forgot).unwrap(), "\"forgot\"");
        let tab: AuthTab = serde_json::from_str("\"signup\"").unwrap();
        assert_eq!(tab, AuthTab::Signup);
    }

    #[test]
    fn test_fields_per_tab() {
        assert_eq!(
            AuthTab::Login.fields(),
            &[AuthField::Email, AuthField::Password]
        );
        assert_eq!(
            AuthTab::Signup.fields(),
            &[AuthField::Email, AuthField::Password, AuthField::ConfirmPassword]
        );
        assert_eq!(AuthTab::Forgot.fields(), &[AuthField::Email]);
    }

    #[test]
    fn test_every_link_starts_on_the_tab_that_shows_it() {
        for tab in AuthTab::all() {
            for link in tab.links() {
                assert_eq!(link.source(), tab, "{link} shown on {tab}");
            }
        }
    }

    #[test]
    fn test_footer_prompt_only_where_footer_link_exists() {
        for tab in AuthTab::all() {
            let has_footer_link = tab
                .links()
                .iter()
                .any(|l| l.placement() == crate::system::auth::LinkPlacement::Footer);
            assert_eq!(tab.footer_prompt().is_some(), has_footer_link);
        }
    }
}
