use serde::{Deserialize, Serialize};

use crate::state::Theme;

/// Root of `config.toml`. Every field has a default so a partial or empty
/// file is valid.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RootConfig {
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Cosmetic delay before a login attempt resolves.
    pub login_delay_ms: u64,
    /// Seed the demo dataset when bootstrap finds no persisted session.
    pub seed_demo_data: bool,
    pub default_theme: Theme,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            login_delay_ms: 0,
            seed_demo_data: true,
            default_theme: Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: RootConfig = toml::from_str("login_delay_ms = 250").unwrap();
        assert_eq!(config.login_delay_ms, 250);
        assert_eq!(config.log_level, "info");
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_theme_from_toml() {
        let config: RootConfig =
            toml::from_str("default_theme = \"dark\"\nseed_demo_data = false").unwrap();
        assert_eq!(config.default_theme, Theme::Dark);
        assert!(!config.seed_demo_data);
    }
}
