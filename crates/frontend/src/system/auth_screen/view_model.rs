use contracts::shared::config::AuthScreenConfig;
use contracts::system::auth::{AuthAction, AuthField, AuthFormState, AuthLink, AuthTab};
use leptos::prelude::*;

/// ViewModel for the auth screen
///
/// Same MVVM shape as the other forms:
/// - Whole form state stored in one signal
/// - `tab` is memoized so typing does not rebuild the layout
/// - Commands for user actions (follow, edit, press)
#[derive(Clone, Copy)]
pub struct AuthScreenViewModel {
    pub form: RwSignal<AuthFormState>,
    pub tab: Memo<AuthTab>,
}

impl AuthScreenViewModel {
    pub fn new(config: &AuthScreenConfig) -> Self {
        let form = RwSignal::new(AuthFormState::from_config(config));
        let tab = Memo::new(move |_| form.with(|f| f.tab()));
        Self { form, tab }
    }

    pub fn value(&self, field: AuthField) -> String {
        self.form.with(|f| f.value(field).to_string())
    }

    /// Switch tab through a navigation link
    pub fn follow_command(&self, link: AuthLink) {
        self.form.maybe_update(|f| match f.follow(link) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        });
    }

    /// Store what the user typed into a field
    pub fn edit_command(&self, field: AuthField, value: String) {
        self.form.maybe_update(|f| match f.edit(field, value) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        });
    }

    /// Submit buttons are not wired to anything
    pub fn press_command(&self, action: AuthAction) {
        if let Err(e) = self.form.with_untracked(|f| f.press(action)) {
            log::warn!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::config::{FieldResetPolicy, FormConfig};
    use leptos::reactive::owner::Owner;

    fn with_vm(config: AuthScreenConfig, test: impl FnOnce(AuthScreenViewModel)) {
        let owner = Owner::new();
        owner.with(|| test(AuthScreenViewModel::new(&config)));
    }

    #[test]
    fn test_commands_drive_the_form() {
        with_vm(AuthScreenConfig::default(), |vm| {
            assert_eq!(vm.tab.get_untracked(), AuthTab::Login);

            vm.edit_command(AuthField::Email, "a@b.com".to_string());
            vm.follow_command(AuthLink::ForgotPassword);

            assert_eq!(vm.tab.get_untracked(), AuthTab::Forgot);
            assert_eq!(
                vm.form.with_untracked(|f| f.value(AuthField::Email).to_string()),
                "a@b.com"
            );
        });
    }

    #[test]
    fn test_rejected_commands_do_not_panic() {
        with_vm(AuthScreenConfig::default(), |vm| {
            let before = vm.form.get_untracked();

            vm.follow_command(AuthLink::BackToSignIn);
            vm.edit_command(AuthField::ConfirmPassword, "pw".to_string());
            vm.press_command(AuthAction::SendResetLink);

            assert_eq!(vm.form.get_untracked(), before);
        });
    }

    #[test]
    fn test_press_changes_nothing() {
        with_vm(AuthScreenConfig::default(), |vm| {
            vm.edit_command(AuthField::Password, "pw".to_string());
            let before = vm.form.get_untracked();
            vm.press_command(AuthAction::SignIn);
            assert_eq!(vm.form.get_untracked(), before);
        });
    }

    #[test]
    fn test_configured_policy_reaches_the_form() {
        let config = AuthScreenConfig {
            form: FormConfig {
                reset_policy: FieldResetPolicy::ClearOnSwitch,
                ..FormConfig::default()
            },
        };
        with_vm(config, |vm| {
            vm.edit_command(AuthField::Email, "a@b.com".to_string());
            vm.follow_command(AuthLink::SignUp);
            assert_eq!(vm.tab.get_untracked(), AuthTab::Signup);
            assert_eq!(
                vm.form.with_untracked(|f| f.value(AuthField::Email).to_string()),
                ""
            );
        });
    }
}
