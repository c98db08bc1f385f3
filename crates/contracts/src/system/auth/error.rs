use thiserror::Error;

use super::{AuthAction, AuthField, AuthLink, AuthTab};

/// Command addressed to something the active tab does not render.
///
/// The UI never produces these; they guard programmatic callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("link '{link}' is not shown on the {tab} tab")]
    LinkUnavailable { link: AuthLink, tab: AuthTab },

    #[error("field '{field}' is not shown on the {tab} tab")]
    FieldUnavailable { field: AuthField, tab: AuthTab },

    #[error("button '{action}' is not shown on the {tab} tab")]
    ActionUnavailable { action: AuthAction, tab: AuthTab },
}
