//! Configuration module

pub mod loader;
pub mod presets;

pub use loader::{Config, CONFIG_FILENAME};
pub use presets::Preset;

use serde::{Deserialize, Serialize};

use crate::rules::contrast::WCAG_AA_RATIO;

/// Rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether the rule is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

/// Image alt text options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AltTextConfig {
    /// Report `alt=""` like a missing alt. Turn off to accept it as the
    /// marker of a decorative image.
    #[serde(default = "default_true")]
    pub flag_empty_alt: bool,
}

impl Default for AltTextConfig {
    fn default() -> Self {
        Self {
            flag_empty_alt: true,
        }
    }
}

/// Heading structure options
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HeadingsConfig {
    /// Compare the first heading against level 0, so a page that opens on
    /// an `h2` or deeper is reported
    #[serde(default)]
    pub flag_opening_level: bool,
}

/// How the contrast check judges a color pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContrastMode {
    /// Resolve colors but never report
    #[default]
    Placeholder,
    /// WCAG 2.x contrast ratio against `min_ratio`
    Wcag,
}

/// Color contrast options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContrastConfig {
    #[serde(default)]
    pub mode: ContrastMode,

    /// Minimum acceptable ratio in `wcag` mode
    #[serde(default = "default_min_ratio")]
    pub min_ratio: f64,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            mode: ContrastMode::Placeholder,
            min_ratio: WCAG_AA_RATIO,
        }
    }
}

fn default_min_ratio() -> f64 {
    WCAG_AA_RATIO
}
