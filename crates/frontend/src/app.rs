use crate::shared::config::load_config;
use crate::system::auth_screen::AuthScreen;
use contracts::shared::config::AuthScreenConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::warn!("Failed to load auth screen config, using defaults: {}", e);
        AuthScreenConfig::default()
    });

    // Provide the screen configuration to the whole app via context.
    provide_context(config);

    view! {
        <AuthScreen />
    }
}
