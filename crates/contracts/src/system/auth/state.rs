use crate::shared::config::{AuthScreenConfig, FieldResetPolicy};

use super::{AuthAction, AuthError, AuthField, AuthLink, AuthTab};

/// Local state of the auth screen: active tab plus three text buffers.
///
/// Buffers hold whatever was typed; nothing is validated. Which buffers
/// are reachable depends only on the active tab (see [`AuthTab::fields`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFormState {
    tab: AuthTab,
    email: String,
    password: String,
    confirm_password: String,
    reset_policy: FieldResetPolicy,
}

impl AuthFormState {
    pub fn new(reset_policy: FieldResetPolicy) -> Self {
        Self {
            reset_policy,
            ..Self::default()
        }
    }

    pub fn from_config(config: &AuthScreenConfig) -> Self {
        Self {
            tab: config.form.initial_tab,
            reset_policy: config.form.reset_policy,
            ..Self::default()
        }
    }

    pub fn tab(&self) -> AuthTab {
        self.tab
    }

    pub fn reset_policy(&self) -> FieldResetPolicy {
        self.reset_policy
    }

    /// Current contents of a buffer, regardless of whether it is visible
    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn visible_fields(&self) -> &'static [AuthField] {
        self.tab.fields()
    }

    pub fn visible_links(&self) -> &'static [AuthLink] {
        self.tab.links()
    }

    pub fn visible_actions(&self) -> &'static [AuthAction] {
        self.tab.actions()
    }

    pub fn is_visible(&self, field: AuthField) -> bool {
        self.tab.shows_field(field)
    }

    /// Follow a navigation link and return the new active tab.
    ///
    /// Only links rendered on the current tab are accepted; a rejected
    /// link leaves the state untouched.
    pub fn follow(&mut self, link: AuthLink) -> Result<AuthTab, AuthError> {
        if !self.tab.shows_link(link) {
            return Err(AuthError::LinkUnavailable {
                link,
                tab: self.tab,
            });
        }

        let target = link.target();
        log::debug!("auth tab {} -> {} via '{}'", self.tab, target, link);
        self.tab = target;

        if self.reset_policy == FieldResetPolicy::ClearOnSwitch {
            self.clear_fields();
        }

        Ok(target)
    }

    /// Replace the contents of one buffer.
    ///
    /// The field must be rendered on the active tab, so the confirmation
    /// buffer can only change while signing up.
    pub fn edit(&mut self, field: AuthField, value: impl Into<String>) -> Result<(), AuthError> {
        if !self.is_visible(field) {
            return Err(AuthError::FieldUnavailable {
                field,
                tab: self.tab,
            });
        }

        let buffer = match field {
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::ConfirmPassword => &mut self.confirm_password,
        };
        *buffer = value.into();
        Ok(())
    }

    /// Press a submit button. No handler is attached to any of them.
    pub fn press(&self, action: AuthAction) -> Result<(), AuthError> {
        if !self.tab.shows_action(action) {
            return Err(AuthError::ActionUnavailable {
                action,
                tab: self.tab,
            });
        }

        log::debug!("'{}' pressed on {} tab: no handler attached", action, self.tab);
        Ok(())
    }

    fn clear_fields(&mut self) {
        self.email.clear();
        self.password.clear();
        self.confirm_password.clear();
    }
}
