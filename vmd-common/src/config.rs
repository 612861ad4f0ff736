//! Runtime configuration handed over by the host page

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Prefix under which static assets are served
    pub base_path: String,
    /// Attach tooltips to the chronodose label
    pub tooltips: bool,
    /// `tracing` filter directives, e.g. `info` or `vmd_common=debug`
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            tooltips: true,
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    /// Parse a JSON configuration; an empty string yields the defaults
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: UiConfig = serde_json::from_str(json).map_err(Error::InvalidConfig)?;
        Ok(config.normalized())
    }

    /// Base path with exactly one trailing slash
    pub fn normalized(mut self) -> Self {
        let trimmed = self.base_path.trim().trim_end_matches('/');
        self.base_path = format!("{}/", trimmed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UiConfig::from_json("").unwrap();
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.base_path, "/");
        assert!(config.tooltips);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_log_level_override() {
        let config = UiConfig::from_json(r#"{"log_level": "vmd_common=debug"}"#).unwrap();
        assert_eq!(config.log_level, "vmd_common=debug");
        assert_eq!(config.base_path, "/");
    }

    #[test]
    fn test_partial_config() {
        let config = UiConfig::from_json(r#"{"base_path": "/vitemadose"}"#).unwrap();
        assert_eq!(config.base_path, "/vitemadose/");
        assert!(config.tooltips);

        let config = UiConfig::from_json(r#"{"tooltips": false}"#).unwrap();
        assert_eq!(config.base_path, "/");
        assert!(!config.tooltips);
    }

    #[test]
    fn test_invalid_config() {
        let err = UiConfig::from_json(r#"{"tooltips": "yes"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
