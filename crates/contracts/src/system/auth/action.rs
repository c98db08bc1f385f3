use std::fmt;

use serde::{Deserialize, Serialize};

use super::tab::AuthTab;

/// Where a navigation link sits in the form layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkPlacement {
    /// Right-aligned, between the inputs and the submit button
    Inline,
    /// Bottom row, after the footer prompt of the tab
    Footer,
    /// Centered, under the submit button
    Back,
}

/// Link that switches the active tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthLink {
    ForgotPassword,
    SignUp,
    SignIn,
    BackToSignIn,
}

impl AuthLink {
    pub fn label(&self) -> &'static str {
        match self {
            AuthLink::ForgotPassword => "Forgot Password?",
            AuthLink::SignUp => "Sign Up",
            AuthLink::SignIn => "Sign In",
            AuthLink::BackToSignIn => "Back to Sign In",
        }
    }

    /// The only tab on which this link is rendered
    pub fn source(&self) -> AuthTab {
        match self {
            AuthLink::ForgotPassword | AuthLink::SignUp => AuthTab::Login,
            AuthLink::SignIn => AuthTab::Signup,
            AuthLink::BackToSignIn => AuthTab::Forgot,
        }
    }

    pub fn target(&self) -> AuthTab {
        match self {
            AuthLink::ForgotPassword => AuthTab::Forgot,
            AuthLink::SignUp => AuthTab::Signup,
            AuthLink::SignIn | AuthLink::BackToSignIn => AuthTab::Login,
        }
    }

    pub fn placement(&self) -> LinkPlacement {
        match self {
            AuthLink::ForgotPassword => LinkPlacement::Inline,
            AuthLink::SignUp | AuthLink::SignIn => LinkPlacement::Footer,
            AuthLink::BackToSignIn => LinkPlacement::Back,
        }
    }
}

impl fmt::Display for AuthLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Visual style of a submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionVariant {
    #[default]
    Primary,
    /// Third-party sign-in, rendered after the "OR" divider
    Social,
}

/// Submit button of the form.
///
/// None of these has a handler: pressing one changes nothing and reports nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthAction {
    SignIn,
    CreateAccount,
    SendResetLink,
    ContinueWithGoogle,
}

impl AuthAction {
    pub fn label(&self) -> &'static str {
        match self {
            AuthAction::SignIn => "Sign In",
            AuthAction::CreateAccount => "Create Account",
            AuthAction::SendResetLink => "Send Reset Link",
            AuthAction::ContinueWithGoogle => "Continue with Google",
        }
    }

    pub fn variant(&self) -> ActionVariant {
        match self {
            AuthAction::ContinueWithGoogle => ActionVariant::Social,
            AuthAction::SignIn | AuthAction::CreateAccount | AuthAction::SendResetLink => {
                ActionVariant::Primary
            }
        }
    }
}

impl fmt::Display for AuthAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_transitions() {
        assert_eq!(AuthLink::ForgotPassword.source(), AuthTab::Login);
        assert_eq!(AuthLink::ForgotPassword.target(), AuthTab::Forgot);
        assert_eq!(AuthLink::SignUp.target(), AuthTab::Signup);
        assert_eq!(AuthLink::SignIn.source(), AuthTab::Signup);
        assert_eq!(AuthLink::SignIn.target(), AuthTab::Login);
        assert_eq!(AuthLink::BackToSignIn.source(), AuthTab::Forgot);
        assert_eq!(AuthLink::BackToSignIn.target(), AuthTab::Login);
    }

    #[test]
    fn test_no_link_points_to_its_own_tab() {
        for link in [
            AuthLink::ForgotPassword,
            AuthLink::SignUp,
            AuthLink::SignIn,
            AuthLink::BackToSignIn,
        ] {
            assert_ne!(link.source(), link.target());
        }
    }

    #[test]
    fn test_only_google_is_social() {
        assert_eq!(AuthAction::ContinueWithGoogle.variant(), ActionVariant::Social);
        assert_eq!(AuthAction::SendResetLink.variant(), ActionVariant::Primary);
    }
}
