use contracts::shared::config::AuthScreenConfig;
use web_sys::window;

/// localStorage key holding an optional TOML override of the config
const CONFIG_STORAGE_KEY: &str = "auth-screen-config";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[form]
# "preserve" keeps typed values when switching tabs, "clear_on_switch" empties them
reset_policy = "preserve"
initial_tab = "login"
"#;

fn read_stored_config() -> Option<String> {
    window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
}

/// Parse a TOML document into the screen configuration.
/// Missing keys fall back to their defaults.
pub fn parse_config(contents: &str) -> anyhow::Result<AuthScreenConfig> {
    let config: AuthScreenConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Load the auth screen configuration
///
/// Search order:
/// 1. localStorage override (for testing the reset policy in a browser)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<AuthScreenConfig> {
    if let Some(contents) = read_stored_config() {
        match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loading config from localStorage key '{}'", CONFIG_STORAGE_KEY);
                return Ok(config);
            }
            Err(e) => {
                log::warn!("Ignoring invalid config in '{}': {}", CONFIG_STORAGE_KEY, e);
            }
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}
