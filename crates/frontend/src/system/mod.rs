pub mod auth_screen;
