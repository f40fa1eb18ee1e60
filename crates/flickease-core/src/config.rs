use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::easing::EasingSettings;
use crate::profile::{Profile, ProfileSet};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub easing: EasingConfig,
    #[serde(default)]
    pub profiles: ProfilesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Trace every easing step (overrides `log_level` with "debug")
    #[serde(default)]
    pub debug: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            debug: false,
        }
    }
}

impl GeneralConfig {
    /// Log filter directive to use when RUST_LOG is not set
    pub fn log_filter(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.log_level
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EasingConfig {
    /// Interval in milliseconds above which easing stops
    #[serde(default = "default_ceiling")]
    pub ceiling_ms: u64,
    /// Interval growth per step in percent (115 = 1.15x)
    #[serde(default = "default_growth_percent")]
    pub growth_percent: u64,
    /// Seed interval used when a flick does not supply one
    #[serde(default = "default_interval")]
    pub default_interval_ms: u64,
}

impl Default for EasingConfig {
    fn default() -> Self {
        Self {
            ceiling_ms: default_ceiling(),
            growth_percent: default_growth_percent(),
            default_interval_ms: default_interval(),
        }
    }
}

impl EasingConfig {
    pub fn settings(&self) -> EasingSettings {
        EasingSettings {
            ceiling_ms: self.ceiling_ms,
            growth_percent: self.growth_percent,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilesConfig {
    /// Fallback profile, also used by profiles with `scroll_inherit`
    #[serde(default)]
    pub default: Profile,
    /// Per-application profiles keyed by name
    #[serde(default)]
    pub named: BTreeMap<String, Profile>,
}

impl ProfilesConfig {
    pub fn profile_set(&self) -> ProfileSet {
        ProfileSet::new(self.default.clone(), self.named.clone())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_ceiling() -> u64 {
    500
}

fn default_growth_percent() -> u64 {
    115
}

fn default_interval() -> u64 {
    100
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings under which an easing sequence could never finish
    pub fn validate(&self) -> crate::Result<()> {
        if self.easing.growth_percent <= 100 {
            return Err(crate::Error::Config(format!(
                "easing.growth_percent must be greater than 100, got {}",
                self.easing.growth_percent
            )));
        }
        if self.easing.default_interval_ms == 0 {
            return Err(crate::Error::Config(
                "easing.default_interval_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/flickease/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("flickease")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.easing.ceiling_ms, 500);
        assert_eq!(config.easing.growth_percent, 115);
        assert_eq!(config.easing.default_interval_ms, 100);
        assert_eq!(config.general.log_filter(), "info");
        assert!(config.profiles.named.is_empty());
    }

    #[test]
    fn test_debug_overrides_log_level() {
        let config = AppConfig::from_toml(
            r#"
            [general]
            log_level = "warn"
            debug = true
            "#,
        )
        .unwrap();
        assert_eq!(config.general.log_filter(), "debug");
    }

    #[test]
    fn test_named_profiles() {
        let config = AppConfig::from_toml(
            r#"
            [easing]
            ceiling_ms = 800

            [profiles.default.scroll_down]
            type = "button"
            button = 5

            [profiles.named.xterm]
            scroll_inherit = true

            [profiles.named.evince.scroll_down]
            type = "keys"
            keys = "Page_Down"
            "#,
        )
        .unwrap();

        assert_eq!(config.easing.settings().ceiling_ms, 800);
        let set = config.profiles.profile_set();
        assert!(set.get("xterm").unwrap().scroll_inherit);
        assert_eq!(
            set.get("evince").unwrap().scroll_down,
            Action::Keys {
                keys: "Page_Down".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_non_growing_ratio() {
        let err = AppConfig::from_toml("[easing]\ngrowth_percent = 100\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_config_toml_is_reloadable() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        let reloaded = AppConfig::from_toml(&text).unwrap();
        assert_eq!(reloaded.easing.ceiling_ms, config.easing.ceiling_ms);
        assert_eq!(reloaded.profiles.default, config.profiles.default);
    }
}
