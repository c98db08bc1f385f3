//! Auth screen page: login, signup and password reset on one screen

pub mod view;
pub mod view_model;

pub use view::AuthScreen;
pub use view_model::AuthScreenViewModel;
