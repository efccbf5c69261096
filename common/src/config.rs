use anyhow::Result;
use serde::{Deserialize, Serialize};
use toml;
use tracing::{Level, debug, instrument};

// navbar configuration
//
// the webapp embeds a toml document at compile time, but every field has a
// default so an empty [config] table (or no document at all) is usable
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavConfig {
    // text shown in the logo
    pub brand: String,

    // storage key holding the persisted theme
    pub theme_key: String,

    // viewport widths at or below this are treated as mobile layout,
    // where picking a link also closes the slide-down menu
    pub mobile_breakpoint: f64,

    pub search_placeholder: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            brand: String::from("Ricenow"),
            theme_key: String::from("theme"),
            mobile_breakpoint: 768.0,
            search_placeholder: String::from("Search..."),
        }
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: NavConfig,
}

impl NavConfig {
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> Result<Self> {
        debug!("parsing navbar config");

        let data: TomlConfigFile = toml::from_str(doc)?;
        let config = data.config;

        if !config.mobile_breakpoint.is_finite() || config.mobile_breakpoint <= 0.0 {
            return Err(anyhow::Error::msg(format!(
                "mobile_breakpoint must be a positive width, got {}",
                config.mobile_breakpoint
            )));
        }

        if config.theme_key.is_empty() {
            return Err(anyhow::Error::msg("theme_key must not be empty"));
        }

        debug!("successfully parsed navbar config");
        Ok(config)
    }

    pub fn is_mobile(&self, viewport_width: f64) -> bool {
        viewport_width <= self.mobile_breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(NavConfig::from_toml("").unwrap(), NavConfig::default());
        assert_eq!(NavConfig::from_toml("[config]\n").unwrap(), NavConfig::default());
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let config = NavConfig::from_toml(
            r#"
            [config]
            mobile_breakpoint = 640.0
            brand = "Ricenow Kitchen"
            "#,
        )
        .unwrap();

        assert_eq!(config.mobile_breakpoint, 640.0);
        assert_eq!(config.brand, "Ricenow Kitchen");
        assert_eq!(config.theme_key, "theme");
        assert_eq!(config.search_placeholder, "Search...");
    }

    #[test]
    fn rejects_bad_breakpoint_and_key() {
        assert!(NavConfig::from_toml("[config]\nmobile_breakpoint = 0.0").is_err());
        assert!(NavConfig::from_toml("[config]\nmobile_breakpoint = -5.0").is_err());
        assert!(NavConfig::from_toml("[config]\nmobile_breakpoint = nan").is_err());
        assert!(NavConfig::from_toml("[config]\ntheme_key = \"\"").is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(NavConfig::from_toml("[config\nbrand = 1").is_err());
        assert!(NavConfig::from_toml("[config]\nbrand = 1").is_err());
    }

    #[test]
    fn breakpoint_is_inclusive() {
        let config = NavConfig::default();
        assert!(config.is_mobile(500.0));
        assert!(config.is_mobile(768.0));
        assert!(!config.is_mobile(768.5));
        assert!(!config.is_mobile(1200.0));
    }
}
