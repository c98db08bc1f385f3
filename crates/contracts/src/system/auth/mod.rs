//! Auth screen: tabs, fields, affordances and the form state machine.
//!
//! Everything here is platform-independent; the frontend only renders
//! what these tables describe and forwards user events to [`AuthFormState`].

mod action;
mod error;
mod field;
mod state;
mod tab;

pub use action::{ActionVariant, AuthAction, AuthLink, LinkPlacement};
pub use error::AuthError;
pub use field::AuthField;
pub use state::AuthFormState;
pub use tab::AuthTab;
