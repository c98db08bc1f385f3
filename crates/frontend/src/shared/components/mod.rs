pub mod divider;
pub mod logo;
pub mod ui;

pub use divider::Divider;
pub use logo::Logo;
