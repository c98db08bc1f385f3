use serde::{Deserialize, Serialize};

use crate::system::auth::AuthTab;

/// What happens to typed values when the user switches tabs.
///
/// `Preserve` keeps the long-standing behavior (values survive a switch).
/// Whether `ClearOnSwitch` should become the default is awaiting a product decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldResetPolicy {
    #[default]
    Preserve,
    ClearOnSwitch,
}

/// Auth screen configuration, see `DEFAULT_CONFIG` in the frontend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthScreenConfig {
    pub form: FormConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub reset_policy: FieldResetPolicy,
    pub initial_tab: AuthTab,
}
