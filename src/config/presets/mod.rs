//! Preset configurations for different conformance targets

/// Available presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Reference rule set: placeholder contrast, empty alt reported
    Baseline,
    /// WCAG AA contrast, decorative empty alt accepted
    WcagAa,
    /// WCAG AAA contrast, decorative empty alt accepted
    WcagAaa,
}

impl Preset {
    /// Get preset from name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "baseline" | "default" | "reference" => Some(Self::Baseline),
            "wcag-aa" | "aa" => Some(Self::WcagAa),
            "wcag-aaa" | "aaa" => Some(Self::WcagAaa),
            _ => None,
        }
    }

    /// Get the name of the preset
    pub fn name(&self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::WcagAa => "wcag-aa",
            Self::WcagAaa => "wcag-aaa",
        }
    }

    /// Get a description of the preset
    pub fn description(&self) -> &'static str {
        match self {
            Self::Baseline => "All six checks with the reference behavior",
            Self::WcagAa => "Real contrast ratios at the WCAG AA threshold (4.5:1)",
            Self::WcagAaa => "Real contrast ratios at the WCAG AAA threshold (7:1)",
        }
    }
}
