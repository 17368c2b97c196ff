//! Configuration loader

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{A11yLensError, ConfigError};
use crate::rules::contrast::{
    ContrastPredicate, PlaceholderContrast, WcagContrast, WCAG_AAA_RATIO, WCAG_AA_RATIO,
};

use super::presets::Preset;
use super::{AltTextConfig, ContrastConfig, ContrastMode, HeadingsConfig, RuleConfig};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILENAME: &str = ".a11ylens.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Preset name (baseline, wcag-aa, wcag-aaa)
    #[serde(default = "default_preset")]
    pub preset: String,

    /// Per-rule overrides, keyed by rule name
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,

    /// Image alt text options
    #[serde(default)]
    pub alt_text: AltTextConfig,

    /// Heading structure options
    #[serde(default)]
    pub headings: HeadingsConfig,

    /// Color contrast options
    #[serde(default)]
    pub contrast: ContrastConfig,
}

fn default_preset() -> String {
    Preset::Baseline.name().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            rules: HashMap::new(),
            alt_text: AltTextConfig::default(),
            headings: HeadingsConfig::default(),
            contrast: ContrastConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the working directory or return default
    pub fn load_or_default() -> Result<Self, A11yLensError> {
        let config_path = Path::new(CONFIG_FILENAME);

        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, A11yLensError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        let config = toml::from_str(&content).map_err(ConfigError::from)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Create a new configuration from a preset
    pub fn from_preset(preset: Preset) -> Self {
        let mut config = Self {
            preset: preset.name().to_string(),
            ..Default::default()
        };

        match preset {
            Preset::Baseline => {}
            Preset::WcagAa => {
                config.alt_text.flag_empty_alt = false;
                config.contrast.mode = ContrastMode::Wcag;
                config.contrast.min_ratio = WCAG_AA_RATIO;
            }
            Preset::WcagAaa => {
                config.alt_text.flag_empty_alt = false;
                config.contrast.mode = ContrastMode::Wcag;
                config.contrast.min_ratio = WCAG_AAA_RATIO;
            }
        }

        config
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, A11yLensError> {
        toml::to_string_pretty(self)
            .map_err(ConfigError::from)
            .map_err(Into::into)
    }

    /// Check if a rule is enabled
    pub fn is_rule_enabled(&self, rule: &str) -> bool {
        self.rules.get(rule).map(|r| r.enabled).unwrap_or(true)
    }

    /// Contrast judgment selected by this configuration
    pub fn contrast_predicate(&self) -> Arc<dyn ContrastPredicate> {
        match self.contrast.mode {
            ContrastMode::Placeholder => Arc::new(PlaceholderContrast),
            ContrastMode::Wcag => Arc::new(WcagContrast::new(self.contrast.min_ratio)),
        }
    }
}
