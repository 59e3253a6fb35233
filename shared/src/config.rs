//! Page-level switches embedded as JSON in the document.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Id of the optional `<script type="application/json">` carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "archive-enhance-config";

/// Runtime switches read from the page.
///
/// Missing fields fall back to their defaults, so an empty object `{}` is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceConfig {
    /// Mount the floating light/dark switch. Off unless a page opts in.
    pub theme_switcher: bool,
    /// Show the loading splash on card-heavy pages.
    pub loading_overlay: bool,
    /// `log` level name for the console logger.
    pub log_level: String,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            theme_switcher: false,
            loading_overlay: true,
            log_level: "info".to_string(),
        }
    }
}

impl EnhanceConfig {
    /// Parse a JSON blob. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Like [`EnhanceConfig::from_json`] but never fails; bad input is logged
    /// and replaced by the defaults.
    pub fn from_json_or_default(raw: &str) -> Self {
        Self::from_json(raw).unwrap_or_else(|err| {
            log::warn!("{err}; falling back to default config");
            Self::default()
        })
    }

    /// The configured level, or `Info` when the name is unknown.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_blob_uses_defaults() {
        let config = EnhanceConfig::from_json("  ").expect("blank is valid");
        assert_eq!(config, EnhanceConfig::default());
        assert!(!config.theme_switcher);
        assert!(config.loading_overlay);
    }

    #[test]
    fn partial_object_keeps_other_defaults() {
        let config = EnhanceConfig::from_json(r#"{"theme_switcher": true}"#).expect("valid json");
        assert!(config.theme_switcher);
        assert!(config.loading_overlay);
        assert_eq!(config.level(), log::Level::Info);
    }

    #[test]
    fn malformed_blob_is_an_error_but_can_fall_back() {
        assert!(EnhanceConfig::from_json("{theme_switcher").is_err());
        assert_eq!(EnhanceConfig::from_json_or_default("{oops"), EnhanceConfig::default());
    }

    #[test]
    fn unknown_level_name_means_info() {
        let config = EnhanceConfig {
            log_level: "chatty".into(),
            ..EnhanceConfig::default()
        };
        assert_eq!(config.level(), log::Level::Info);

        let config = EnhanceConfig {
            log_level: "debug".into(),
            ..EnhanceConfig::default()
        };
        assert_eq!(config.level(), log::Level::Debug);
    }
}
