pub mod button;
pub mod input;
pub mod link_button;

pub use button::Button;
pub use input::Input;
pub use link_button::LinkButton;
